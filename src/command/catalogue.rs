use anyhow::Result;

use vitotrol_attrs::Registry;

use crate::argsets::ShowArgs;

use super::resolve_attr;

pub fn list(registry: &Registry) -> Result<()> {
    let snapshot = registry.snapshot();
    let mut attrs: Vec<_> = snapshot.descriptors().collect();
    attrs.sort_by_key(|(id, _)| *id);
    for (id, attr) in attrs {
        let marker = if attr.custom { " [custom]" } else { "" };
        println!("{id:>5} {attr}{marker}");
    }
    Ok(())
}

pub fn show(registry: &Registry, args: ShowArgs) -> Result<()> {
    let id = resolve_attr(registry, &args.attr)?;
    let attr = registry.descriptor_of(id)?;
    println!("{id} {attr}");
    if attr.custom {
        println!("custom attribute");
    }
    if let Some(labels) = attr.value_type.labels() {
        for (code, label) in labels.iter().enumerate() {
            println!("  {code}: {label}");
        }
    }
    Ok(())
}
