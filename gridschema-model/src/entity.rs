use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Descriptor for a single physical field on an entity type.
///
/// Resolution only consults field *presence*; the data type rides along for
/// consumers that want it (query builders, validators).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    /// Deployment data type name (e.g., "text", "entity", "status_list").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

impl FieldDef {
    /// Shorthand for a descriptor with a known data type.
    #[must_use]
    pub fn typed(data_type: &str) -> Self {
        Self {
            data_type: Some(data_type.to_string()),
        }
    }
}

/// One entity type: its physical fields and the symbolic names layered on
/// top of them.
///
/// `field_aliases` maps one symbolic name to one canonical field name;
/// `field_tags` maps a tag to an *ordered* group of field names. Alias and
/// tag targets are not validated against `fields` — resolution is lenient,
/// not eager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityType {
    /// Physical type name; also the key under which the type is stored in
    /// [`crate::SchemaStore`], so it is not serialized.
    #[serde(skip)]
    pub name: String,
    /// Physical field name → descriptor.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, FieldDef>,
    /// Alias → canonical field name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub field_aliases: BTreeMap<String, String>,
    /// Tag → ordered list of canonical field names.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub field_tags: BTreeMap<String, Vec<String>>,
}

impl EntityType {
    /// Creates an empty entity type with the given physical name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns true if `name` is a physical field of this type.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Registers a physical field, keeping any existing descriptor.
    pub fn field_mut(&mut self, name: &str) -> &mut FieldDef {
        self.fields.entry(name.to_string()).or_default()
    }
}
