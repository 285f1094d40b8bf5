use serde::Serialize;
use std::collections::BTreeMap;

use crate::EntityType;

/// All entity types of one deployment, plus the global entity alias and tag
/// tables.
///
/// A store is built once — through the upsert methods below — and then read
/// many times. The tables are private so every mutation goes through a named
/// method; the resolution engine borrows the store immutably and never
/// mutates it. The store holds no interior mutability, so a shared
/// `&SchemaStore` is safe to read from any number of threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaStore {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    entities: BTreeMap<String, EntityType>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    entity_aliases: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    entity_tags: BTreeMap<String, Vec<String>>,
}

impl SchemaStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no entity types, aliases, or tags are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.entity_aliases.is_empty() && self.entity_tags.is_empty()
    }

    // ── Read interface ───────────────────────────────────────────

    /// Looks up an entity type by its physical name.
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&EntityType> {
        self.entities.get(name)
    }

    /// Returns true if `name` is a known entity type.
    #[must_use]
    pub fn has_entity(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    /// Follows an entity alias to its canonical type name.
    #[must_use]
    pub fn entity_alias(&self, alias: &str) -> Option<&str> {
        self.entity_aliases.get(alias).map(String::as_str)
    }

    /// Returns an entity tag's ordered member list.
    #[must_use]
    pub fn entity_tag(&self, tag: &str) -> Option<&[String]> {
        self.entity_tags.get(tag).map(Vec::as_slice)
    }

    /// Iterates all entity types in name order.
    pub fn entity_types(&self) -> impl Iterator<Item = &EntityType> {
        self.entities.values()
    }

    // ── Build-time mutation ──────────────────────────────────────
    //
    // Loaders use these while assembling a store. Get-or-create is an
    // explicit upsert here, never an implicit side effect of a lookup.

    /// Returns the entity type named `name`, creating an empty one if it
    /// does not exist yet.
    pub fn entity_mut(&mut self, name: &str) -> &mut EntityType {
        self.entities
            .entry(name.to_string())
            .or_insert_with(|| EntityType::new(name))
    }

    /// Defines (or redefines) an entity alias.
    pub fn add_entity_alias(&mut self, alias: impl Into<String>, target: impl Into<String>) {
        self.entity_aliases.insert(alias.into(), target.into());
    }

    /// Defines (or replaces) an entity tag with its ordered member list.
    pub fn add_entity_tag(&mut self, tag: impl Into<String>, members: Vec<String>) {
        self.entity_tags.insert(tag.into(), members);
    }
}
