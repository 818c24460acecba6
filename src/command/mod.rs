mod catalogue;
mod convert;

use anyhow::Result;

use vitotrol_attrs::{AttrId, Registry};

pub use catalogue::{list, show};
pub use convert::{decode, encode};

/// Attribute given on the command line, either by numeric ID or by name
fn resolve_attr(registry: &Registry, attr: &str) -> Result<AttrId> {
    match attr.parse::<AttrId>() {
        Ok(id) => Ok(id),
        Err(_) => Ok(registry.attr_id_of(attr)?),
    }
}
