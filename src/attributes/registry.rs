//! Attribute registry
//!
//! Maps every known [`AttrId`] to its [`AttrRef`], together with two derived
//! indexes: attribute name to ID, and the list of all IDs. The three are kept
//! in an immutable [`Snapshot`]; changing the registry builds a new snapshot
//! and publishes it with a single atomic swap, so readers never observe a
//! descriptor map and indexes that disagree.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;

use super::{catalogue, AttrId, AttrRef};
use crate::error::AttrError;
use crate::values::{TimestampedValue, TypedValue};

static BUILTIN: Lazy<Arc<Snapshot>> = Lazy::new(|| {
    let refs = catalogue::builtin()
        .into_iter()
        .map(|(id, attr)| (id, Arc::new(attr)))
        .collect();
    Arc::new(Snapshot::build(refs, None))
});

/// Consistent view of the registry at one point in time
#[derive(Debug)]
pub struct Snapshot {
    refs: HashMap<AttrId, Arc<AttrRef>>,
    names: HashMap<String, AttrId>,
    ids: Vec<AttrId>,
}

impl Snapshot {
    /// Derive both indexes from the complete descriptor map.
    ///
    /// When several descriptors share a name, the one for `latest` wins,
    /// otherwise the one with the highest ID.
    fn build(refs: HashMap<AttrId, Arc<AttrRef>>, latest: Option<AttrId>) -> Self {
        let mut ids: Vec<AttrId> = refs.keys().copied().collect();
        ids.sort_unstable();

        let mut names = HashMap::with_capacity(refs.len());
        for id in ids.iter().chain(latest.iter()) {
            if let Some(attr) = refs.get(id) {
                names.insert(attr.name.clone(), *id);
            }
        }

        Snapshot { refs, names, ids }
    }

    pub fn descriptor_of(&self, id: AttrId) -> Result<&Arc<AttrRef>, AttrError> {
        self.refs.get(&id).ok_or(AttrError::UnknownId(id))
    }

    pub fn attr_id_of(&self, name: &str) -> Result<AttrId, AttrError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| AttrError::UnknownName(name.to_string()))
    }

    /// All known IDs. Callers must not rely on the order.
    pub fn attr_ids(&self) -> &[AttrId] {
        &self.ids
    }

    pub fn descriptors(&self) -> impl Iterator<Item = (AttrId, &AttrRef)> + '_ {
        self.refs.iter().map(|(id, attr)| (*id, attr.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

pub struct Registry {
    current: ArcSwap<Snapshot>,
}

impl Registry {
    /// Registry holding the built-in catalogue
    pub fn new() -> Self {
        Registry {
            current: ArcSwap::new(Arc::clone(&BUILTIN)),
        }
    }

    pub fn empty() -> Self {
        Registry {
            current: ArcSwap::from_pointee(Snapshot::build(HashMap::new(), None)),
        }
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    pub fn descriptor_of(&self, id: AttrId) -> Result<Arc<AttrRef>, AttrError> {
        self.current.load().descriptor_of(id).cloned()
    }

    pub fn attr_id_of(&self, name: &str) -> Result<AttrId, AttrError> {
        self.current.load().attr_id_of(name)
    }

    pub fn all_attr_ids(&self) -> Vec<AttrId> {
        self.current.load().attr_ids().to_vec()
    }

    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.load().is_empty()
    }

    /// Add a custom attribute, or replace the descriptor already registered
    /// under `id`.
    ///
    /// The stored descriptor always has `custom` set. No check is done
    /// against existing IDs or names: a name already used by another
    /// attribute now resolves to `id`.
    pub fn add_attribute_ref(&self, id: AttrId, mut attr: AttrRef) {
        attr.custom = true;
        let attr = Arc::new(attr);

        let previous = self.current.rcu(|current| {
            let mut refs = current.refs.clone();
            refs.insert(id, Arc::clone(&attr));
            Snapshot::build(refs, Some(id))
        });

        if let Some(old) = previous.refs.get(&id) {
            log::warn!("Attribute {} ({}) replaced by {}", id, old.name, attr.name);
        }
        if let Some(other) = previous.names.get(&attr.name).filter(|other| **other != id) {
            log::warn!(
                "Attribute name {} moved from {} to {}",
                attr.name,
                other,
                id
            );
        }
        log::debug!("Added custom attribute {}: {}", id, attr);
    }

    pub fn extend<I>(&self, attrs: I)
    where
        I: IntoIterator<Item = (AttrId, AttrRef)>,
    {
        for (id, attr) in attrs {
            self.add_attribute_ref(id, attr);
        }
    }

    fn readable(&self, id: AttrId) -> Result<Arc<AttrRef>, AttrError> {
        let attr = self.descriptor_of(id)?;
        if !attr.access.is_readable() {
            return Err(denied(&attr));
        }
        Ok(attr)
    }

    fn writable(&self, id: AttrId) -> Result<Arc<AttrRef>, AttrError> {
        let attr = self.descriptor_of(id)?;
        if !attr.access.is_writable() {
            return Err(denied(&attr));
        }
        Ok(attr)
    }

    /// Decode the raw value read for `id`. The attribute must be readable.
    pub fn decode(&self, id: AttrId, value: &TimestampedValue) -> Result<TypedValue, AttrError> {
        self.readable(id)?.value_type.parse(&value.value)
    }

    /// Encode `value` for writing to `id`. The attribute must be writable.
    pub fn encode(&self, id: AttrId, value: &TypedValue) -> Result<String, AttrError> {
        self.writable(id)?.value_type.format(value)
    }

    /// Like [`Registry::encode`], from the human form (enum label, date
    /// layout, decimal).
    pub fn encode_human(&self, id: AttrId, human: &str) -> Result<String, AttrError> {
        self.writable(id)?.value_type.human_to_wire(human)
    }
}

fn denied(attr: &AttrRef) -> AttrError {
    AttrError::Access {
        name: attr.name.clone(),
        access: attr.access,
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("attributes", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use super::*;
    use crate::attributes::{ids, AttrAccess};
    use crate::values::ValueType;

    fn burner_registry() -> Registry {
        let registry = Registry::empty();
        registry.add_attribute_ref(
            AttrId(600),
            AttrRef::new(
                ValueType::enumeration(["Off", "On"]),
                AttrAccess::READ_ONLY,
                "BurnerStatus",
                "Burner status",
            ),
        );
        registry
    }

    fn key_set(registry: &Registry) -> HashSet<AttrId> {
        registry.snapshot().descriptors().map(|(id, _)| id).collect()
    }

    #[test]
    fn test_builtin_lookups() {
        let registry = Registry::new();
        assert_eq!(registry.len(), catalogue::builtin().len());

        let attr = registry.descriptor_of(ids::AUSSEN_TEMP).unwrap();
        assert_eq!(attr.name, "AussenTemp");
        assert_eq!(attr.value_type, ValueType::Double);
        assert!(!attr.custom);

        assert_eq!(registry.attr_id_of("BrennerStatus").unwrap(), ids::BRENNER_STATUS);
        assert_eq!(registry.attr_id_of("konf_betriebsart_rw-0x005e").unwrap(), ids::BETRIEBSART_M2);
    }

    #[test]
    fn test_not_found() {
        let registry = Registry::new();
        assert_eq!(
            registry.descriptor_of(AttrId::NONE).unwrap_err(),
            AttrError::UnknownId(AttrId::NONE)
        );
        assert!(registry.attr_id_of("Nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_all_ids_match_descriptors() {
        let registry = Registry::new();
        let listed: HashSet<AttrId> = registry.all_attr_ids().into_iter().collect();
        assert_eq!(listed.len(), registry.len());
        assert_eq!(listed, key_set(&registry));
    }

    #[test]
    fn test_add_forces_custom() {
        let registry = Registry::new();
        let mut attr = AttrRef::new(ValueType::Double, AttrAccess::READ_ONLY, "SolarTemp", "");
        attr.custom = false;
        registry.add_attribute_ref(AttrId(5367), attr);

        assert!(registry.descriptor_of(AttrId(5367)).unwrap().custom);
        assert_eq!(registry.attr_id_of("SolarTemp").unwrap(), AttrId(5367));

        let listed: HashSet<AttrId> = registry.all_attr_ids().into_iter().collect();
        assert!(listed.contains(&AttrId(5367)));
        assert_eq!(listed, key_set(&registry));
    }

    #[test]
    fn test_add_overwrites_existing() {
        let registry = Registry::new();
        let before = registry.len();
        registry.add_attribute_ref(
            ids::AUSSEN_TEMP,
            AttrRef::new(ValueType::String, AttrAccess::READ_WRITE, "Outside", "replaced"),
        );

        assert_eq!(registry.len(), before);
        let attr = registry.descriptor_of(ids::AUSSEN_TEMP).unwrap();
        assert_eq!(attr.value_type, ValueType::String);
        assert!(attr.custom);
        assert_eq!(registry.attr_id_of("Outside").unwrap(), ids::AUSSEN_TEMP);
        // the old name is gone from the index
        assert!(registry.attr_id_of("AussenTemp").is_err());
    }

    #[test]
    fn test_name_collision_last_write_wins() {
        let registry = Registry::new();
        registry.add_attribute_ref(
            AttrId(1),
            AttrRef::new(ValueType::Double, AttrAccess::READ_ONLY, "BoilerTemp", ""),
        );
        assert_eq!(registry.attr_id_of("BoilerTemp").unwrap(), AttrId(1));
        // both descriptors remain
        assert_eq!(registry.descriptor_of(ids::BOILER_TEMP).unwrap().name, "BoilerTemp");
    }

    #[test]
    fn test_instances_are_isolated() {
        let a = Registry::new();
        let b = Registry::new();
        a.add_attribute_ref(
            AttrId(4000),
            AttrRef::new(ValueType::Double, AttrAccess::READ_ONLY, "Extra", ""),
        );
        assert!(a.descriptor_of(AttrId(4000)).is_ok());
        assert!(b.descriptor_of(AttrId(4000)).is_err());
        assert_eq!(b.len() + 1, a.len());
    }

    #[test]
    fn test_burner_scenario() {
        let registry = burner_registry();

        let on = TimestampedValue::from_wire("1", "2018-02-03 10:00:00").unwrap();
        let value = registry.decode(AttrId(600), &on).unwrap();
        assert_eq!(value.label(), Some("On"));

        let bad = TimestampedValue::from_wire("2", "2018-02-03 10:00:00").unwrap();
        let err = registry.decode(AttrId(600), &bad).unwrap_err();
        assert_eq!(err, AttrError::CodeOutOfRange {
                code: "2".into(),
                len: 2
            });
    }

    #[test]
    fn test_access_checks() {
        let registry = burner_registry();
        let err = registry
            .encode(AttrId(600), &TypedValue::String("On".into()))
            .unwrap_err();
        assert!(matches!(err, AttrError::Access { .. }));

        let registry = Registry::new();
        assert_eq!(
            registry
                .encode(ids::PARTY_MODUS_M1, &TypedValue::String("Ein".into()))
                .unwrap(),
            "1"
        );

        registry.add_attribute_ref(
            AttrId(4001),
            AttrRef::new(ValueType::Double, AttrAccess::WRITE_ONLY, "Setpoint", ""),
        );
        let now = TimestampedValue::from_wire("20", "2018-02-03 10:00:00").unwrap();
        assert!(matches!(
            registry.decode(AttrId(4001), &now).unwrap_err(),
            AttrError::Access { .. }
        ));
    }

    #[test]
    fn test_encode_human() {
        let registry = Registry::new();
        assert_eq!(
            registry.encode_human(ids::BETRIEBSART_M1, "Heizen + WW").unwrap(),
            "2"
        );
        assert_eq!(
            registry.encode_human(ids::HEIZ_NORMAL_TEMP_M1, "21.50").unwrap(),
            "21.5"
        );
        assert!(registry
            .encode_human(ids::BETRIEBSART_M1, "Urlaub")
            .unwrap_err()
            .is_range());

        let err = registry
            .encode_human(ids::BRENNER_STATUS, "Ein")
            .unwrap_err();
        assert_eq!(
            err,
            AttrError::Access {
                name: "BrennerStatus".into(),
                access: AttrAccess::READ_ONLY,
            }
        );
        assert_eq!(err.to_string(), "attribute BrennerStatus is read-only");
    }

    #[test]
    fn test_snapshot_is_stable() {
        let registry = Registry::new();
        let snapshot = registry.snapshot();
        registry.add_attribute_ref(
            AttrId(4002),
            AttrRef::new(ValueType::Date, AttrAccess::READ_WRITE, "Later", ""),
        );
        assert!(snapshot.descriptor_of(AttrId(4002)).is_err());
        assert_eq!(snapshot.attr_ids().len(), snapshot.len());
        assert!(registry.descriptor_of(AttrId(4002)).is_ok());
    }

    #[test]
    fn test_concurrent_adds() {
        let registry = Arc::new(Registry::empty());
        let handles: Vec<_> = (0..8u16)
            .map(|t| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for i in 0..50u16 {
                        let id = AttrId(t * 100 + i);
                        registry.add_attribute_ref(
                            id,
                            AttrRef::new(ValueType::Double, AttrAccess::READ_ONLY, format!("a{id}"), ""),
                        );
                        let snapshot = registry.snapshot();
                        assert_eq!(snapshot.attr_ids().len(), snapshot.len());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), 400);
        assert_eq!(registry.attr_id_of("a305").unwrap(), AttrId(305));
    }
}
