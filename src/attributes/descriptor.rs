use std::fmt;

use serde::{Deserialize, Serialize};

use super::AttrAccess;
use crate::values::ValueType;

/// Reference description of an attribute: its type, access and name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttrRef {
    #[serde(rename = "type")]
    pub value_type: ValueType,
    pub access: AttrAccess,
    pub name: String,
    #[serde(default)]
    pub doc: String,
    /// Set on attributes added at runtime, never on the built-in ones
    #[serde(skip_deserializing)]
    pub custom: bool,
}

impl AttrRef {
    pub fn new(
        value_type: ValueType,
        access: AttrAccess,
        name: impl Into<String>,
        doc: impl Into<String>,
    ) -> Self {
        Self {
            value_type,
            access,
            name: name.into(),
            doc: doc.into(),
            custom: false,
        }
    }
}

impl fmt::Display for AttrRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({} - {})",
            self.name, self.doc, self.value_type, self.access
        )
    }
}
