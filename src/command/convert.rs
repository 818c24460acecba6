use anyhow::Result;

use vitotrol_attrs::helpers::now_wire;
use vitotrol_attrs::{Registry, TimestampedValue};

use crate::argsets::{DecodeArgs, EncodeArgs};

use super::resolve_attr;

pub fn decode(registry: &Registry, args: DecodeArgs) -> Result<()> {
    let id = resolve_attr(registry, &args.attr)?;
    let value = TimestampedValue::new(args.raw, now_wire());
    let typed = registry.decode(id, &value)?;
    log::debug!("Decoded {} {:?} as {:?}", id, value.value, typed);
    println!("{typed}");
    Ok(())
}

pub fn encode(registry: &Registry, args: EncodeArgs) -> Result<()> {
    let id = resolve_attr(registry, &args.attr)?;
    let wire = registry.encode_human(id, &args.value)?;
    log::debug!("Encoded {} {:?} as {:?}", id, args.value, wire);
    println!("{wire}");
    Ok(())
}
