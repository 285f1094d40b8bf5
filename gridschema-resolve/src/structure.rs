//! Recursive structure rewriting.

use serde_json::{Map, Value};

use crate::error::ResolveResult;
use crate::options::ResolveOptions;
use crate::resolver::Resolver;

impl Resolver<'_> {
    /// Rewrites a nested record so symbolic field keys become physical
    /// field keys, preserving the shape of the value.
    ///
    /// An object is treated as an entity record when its `"type"` entry —
    /// or the explicit `entity_type` override — names a known entity type;
    /// its keys are then resolved as field specs, with the rewritten value
    /// inserted under every resolved name (later keys win on collision).
    /// Arrays rewrite element-wise, other objects rewrite value-wise with
    /// keys untouched, and scalars come back unchanged. Nested objects must
    /// declare their own `"type"` to be treated as entity records.
    ///
    /// The transform is pure: the result depends only on the input and the
    /// store snapshot, and resolving an already-physical record is a no-op.
    pub fn resolve_structure(
        &self,
        value: &Value,
        entity_type: Option<&str>,
        opts: &ResolveOptions,
    ) -> ResolveResult<Value> {
        match value {
            Value::Array(items) => {
                let mut resolved = Vec::with_capacity(items.len());
                for item in items {
                    resolved.push(self.resolve_structure(item, None, opts)?);
                }
                Ok(Value::Array(resolved))
            }
            Value::Object(entries) => {
                let entity_type =
                    entity_type.or_else(|| entries.get("type").and_then(Value::as_str));
                match entity_type {
                    Some(entity_type) if self.store().has_entity(entity_type) => {
                        let mut resolved = Map::new();
                        for (key, value) in entries {
                            let value = self.resolve_structure(value, None, opts)?;
                            for field in self.resolve_field(entity_type, key.as_str(), opts)? {
                                resolved.insert(field, value.clone());
                            }
                        }
                        Ok(Value::Object(resolved))
                    }
                    _ => {
                        let mut resolved = Map::new();
                        for (key, value) in entries {
                            resolved.insert(key.clone(), self.resolve_structure(value, None, opts)?);
                        }
                        Ok(Value::Object(resolved))
                    }
                }
            }
            scalar => Ok(scalar.clone()),
        }
    }
}
