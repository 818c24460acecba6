use thiserror::Error;

use crate::attributes::{AttrAccess, AttrId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AttrError {
    #[error("cannot parse {raw:?} as {kind} value")]
    Parse { kind: &'static str, raw: String },
    #[error("enum code {code} out of range [0, {len})")]
    CodeOutOfRange { code: String, len: usize },
    #[error("{0:?} is not one of the enum labels")]
    UnknownLabel(String),
    #[error("no attribute with ID {0}")]
    UnknownId(AttrId),
    #[error("no attribute named {0:?}")]
    UnknownName(String),
    #[error("{expected} value expected, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
    #[error("attribute {name} is {access}")]
    Access { name: String, access: AttrAccess },
}

impl AttrError {
    /// Raw string does not match the lexical form of the value type.
    pub fn is_parse(&self) -> bool {
        matches!(self, AttrError::Parse { .. })
    }

    /// Enum code or label outside the label sequence.
    pub fn is_range(&self) -> bool {
        matches!(
            self,
            AttrError::CodeOutOfRange { .. } | AttrError::UnknownLabel(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AttrError::UnknownId(_) | AttrError::UnknownName(_))
    }
}
