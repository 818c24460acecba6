//! Wire value types
//!
//! The Vitotrol service exchanges every attribute value as a plain string. A
//! [`ValueType`] knows how to turn such a string into a [`TypedValue`] and back,
//! and how to present it to a human.

use std::fmt;
use std::num::IntErrorKind;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::AttrError;
use crate::helpers::{format_wire_time, parse_wire_time};

const KIND_DOUBLE: &str = "double";
const KIND_STRING: &str = "string";
const KIND_DATE: &str = "date";
const KIND_ENUM: &str = "enum";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Double,
    String,
    Date,
    /// Labels indexed by their wire code
    Enum(Vec<String>),
}

/// Value decoded from the wire according to a [`ValueType`]
#[derive(Clone, Debug, PartialEq)]
pub enum TypedValue {
    Double(f64),
    String(String),
    Date(NaiveDateTime),
    Enum { code: usize, label: String },
}

impl ValueType {
    pub fn enumeration<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValueType::Enum(labels.into_iter().map(Into::into).collect())
    }

    /// Two-state enum, code 0 is "Aus" (off) and 1 is "Ein" (on)
    pub fn on_off() -> Self {
        Self::enumeration(["Aus", "Ein"])
    }

    /// Two-state enum, code 0 is "inaktiv" and 1 is "aktiv"
    pub fn active_inactive() -> Self {
        Self::enumeration(["inaktiv", "aktiv"])
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ValueType::Double => KIND_DOUBLE,
            ValueType::String => KIND_STRING,
            ValueType::Date => KIND_DATE,
            ValueType::Enum(_) => KIND_ENUM,
        }
    }

    pub fn labels(&self) -> Option<&[String]> {
        match self {
            ValueType::Enum(labels) => Some(labels),
            _ => None,
        }
    }

    /// Decode a raw wire string
    pub fn parse(&self, raw: &str) -> Result<TypedValue, AttrError> {
        match self {
            ValueType::Double => raw
                .parse::<f64>()
                .ok()
                .filter(|num| num.is_finite())
                .map(TypedValue::Double)
                .ok_or_else(|| self.parse_error(raw)),
            ValueType::String => Ok(TypedValue::String(raw.to_string())),
            ValueType::Date => parse_wire_time(raw)
                .map(TypedValue::Date)
                .ok_or_else(|| self.parse_error(raw)),
            ValueType::Enum(labels) => {
                let out_of_range = || AttrError::CodeOutOfRange {
                    code: raw.to_string(),
                    len: labels.len(),
                };
                // an integer too wide for i64 is still an integer
                let code = raw.parse::<i64>().map_err(|err| match err.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
                    _ => self.parse_error(raw),
                })?;
                usize::try_from(code)
                    .ok()
                    .and_then(|idx| labels.get(idx).map(|label| (idx, label)))
                    .map(|(code, label)| TypedValue::Enum {
                        code,
                        label: label.clone(),
                    })
                    .ok_or_else(out_of_range)
            }
        }
    }

    /// Encode a typed value into its wire string
    ///
    /// Enums are encoded from the label; a bare [`TypedValue::String`] is
    /// accepted as a label too.
    pub fn format(&self, value: &TypedValue) -> Result<String, AttrError> {
        match (self, value) {
            (ValueType::Double, TypedValue::Double(num)) => Ok(num.to_string()),
            (ValueType::String, TypedValue::String(s)) => Ok(s.clone()),
            (ValueType::Date, TypedValue::Date(time)) => Ok(format_wire_time(time)),
            (ValueType::Enum(labels), TypedValue::Enum { label, .. })
            | (ValueType::Enum(labels), TypedValue::String(label)) => labels
                .iter()
                .position(|l| l == label)
                .map(|code| code.to_string())
                .ok_or_else(|| AttrError::UnknownLabel(label.clone())),
            _ => Err(AttrError::TypeMismatch {
                expected: self.kind(),
                got: value.kind(),
            }),
        }
    }

    /// Wire string to the form shown to users (enum label, canonical number or date)
    pub fn wire_to_human(&self, raw: &str) -> Result<String, AttrError> {
        self.parse(raw).map(|v| v.to_string())
    }

    /// User-supplied string to wire string, validating it on the way
    pub fn human_to_wire(&self, human: &str) -> Result<String, AttrError> {
        match self {
            ValueType::Enum(_) => self.format(&TypedValue::String(human.to_string())),
            _ => self.format(&self.parse(human)?),
        }
    }

    fn parse_error(&self, raw: &str) -> AttrError {
        AttrError::Parse {
            kind: self.kind(),
            raw: raw.to_string(),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

impl TypedValue {
    pub fn kind(&self) -> &'static str {
        match self {
            TypedValue::Double(_) => KIND_DOUBLE,
            TypedValue::String(_) => KIND_STRING,
            TypedValue::Date(_) => KIND_DATE,
            TypedValue::Enum { .. } => KIND_ENUM,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            TypedValue::Enum { label, .. } => Some(label),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<usize> {
        match self {
            TypedValue::Enum { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Double(num) => write!(f, "{num}"),
            TypedValue::String(s) => f.write_str(s),
            TypedValue::Date(time) => f.write_str(&format_wire_time(time)),
            TypedValue::Enum { label, .. } => f.write_str(label),
        }
    }
}
