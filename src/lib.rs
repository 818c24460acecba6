//! Typed attribute catalogue for the Vitotrol heating controller service
//!
//! The service only exchanges timestamped strings per attribute ID. This crate
//! describes each attribute (type, access rights, name, documentation) in a
//! [`Registry`], and converts raw wire strings to typed values and back
//! through [`ValueType`].

pub mod attributes;
pub mod config;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod values;

pub use attributes::{AttrAccess, AttrId, AttrRef, Registry};
pub use error::AttrError;
pub use values::{TimestampedValue, TypedValue, ValueType};
