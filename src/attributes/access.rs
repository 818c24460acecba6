use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Access rights of an attribute
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct AttrAccess: u8 {
        const READ_ONLY = 0b01;
        const WRITE_ONLY = 0b10;
        const READ_WRITE = Self::READ_ONLY.bits() | Self::WRITE_ONLY.bits();
    }
}

impl AttrAccess {
    pub fn is_readable(self) -> bool {
        self.contains(AttrAccess::READ_ONLY)
    }

    pub fn is_writable(self) -> bool {
        self.contains(AttrAccess::WRITE_ONLY)
    }

    /// "read-only", "write-only" or "read/write"
    pub fn as_str(self) -> &'static str {
        if self == AttrAccess::READ_WRITE {
            "read/write"
        } else if self == AttrAccess::READ_ONLY {
            "read-only"
        } else if self == AttrAccess::WRITE_ONLY {
            "write-only"
        } else {
            "no access"
        }
    }
}

impl fmt::Display for AttrAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttrAccess {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read-only" => Ok(AttrAccess::READ_ONLY),
            "write-only" => Ok(AttrAccess::WRITE_ONLY),
            "read/write" => Ok(AttrAccess::READ_WRITE),
            _ => Err(format!(
                "unknown access {s:?}, expected read-only, write-only or read/write"
            )),
        }
    }
}

impl Serialize for AttrAccess {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AttrAccess {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
