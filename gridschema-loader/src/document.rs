//! Schema document parsing, validation, and dumping.
//!
//! The document contract: a JSON object with the optional top-level keys
//! `entities`, `entity_aliases`, and `entity_tags`. As a shorthand, a
//! document whose keys are all title-cased is treated as the `entities`
//! table itself; mixing the two forms is an error, as is any other key.
//!
//! Documents deep-merge into the target store: entity tables merge per
//! field/alias/tag key, while alias targets and tag member lists overwrite
//! wholesale. This lets a deployment layer site-specific overrides on top
//! of a vendored base document via [`load_directory`].

use std::fs;
use std::path::{Path, PathBuf};

use gridschema_model::{EntityType, SchemaStore};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{LoadError, LoadResult};

const DOCUMENT_KEYS: [&str; 3] = ["entities", "entity_aliases", "entity_tags"];

/// Validates `doc` and deep-merges its contents into `store`.
pub fn load_document(store: &mut SchemaStore, doc: &Value) -> LoadResult<()> {
    let Some(root) = doc.as_object() else {
        return Err(LoadError::MalformedDocument(
            "expected a JSON object at the top level".into(),
        ));
    };

    // A document of bare entity types: every key title-cased.
    let title_cased = root
        .keys()
        .filter(|key| key.chars().next().is_some_and(char::is_uppercase))
        .count();
    if title_cased > 0 {
        if title_cased != root.len() {
            return Err(LoadError::MalformedDocument(
                "mix of direct and indirect entity tables".into(),
            ));
        }
        return load_entities(store, root);
    }

    if let Some(unknown) = root
        .keys()
        .find(|key| !DOCUMENT_KEYS.contains(&key.as_str()))
    {
        return Err(LoadError::MalformedDocument(format!(
            "unknown document key {unknown:?}"
        )));
    }

    if let Some(entities) = root.get("entities") {
        let Some(entities) = entities.as_object() else {
            return Err(LoadError::MalformedDocument(
                "\"entities\" must be an object".into(),
            ));
        };
        load_entities(store, entities)?;
    }

    if let Some(aliases) = root.get("entity_aliases") {
        for (alias, target) in string_table(aliases, "entity_aliases")? {
            store.add_entity_alias(alias, target);
        }
    }

    if let Some(tags) = root.get("entity_tags") {
        for (tag, members) in string_list_table(tags, "entity_tags")? {
            store.add_entity_tag(tag, members);
        }
    }

    Ok(())
}

/// Reads, parses, and merges one schema document file.
pub fn load_file(store: &mut SchemaStore, path: &Path) -> LoadResult<()> {
    debug!(path = %path.display(), "Loading schema document");
    let text = fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&text)?;
    load_document(store, &doc)
}

/// Merges every non-hidden `.json` file in `dir`, in sorted name order.
pub fn load_directory(store: &mut SchemaStore, dir: &Path) -> LoadResult<()> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') || !name.ends_with(".json") {
            continue;
        }
        paths.push(path);
    }
    paths.sort();

    for path in &paths {
        load_file(store, path)?;
    }
    Ok(())
}

/// Serializes the store as a schema document, empty tables pruned.
pub fn dump_document(store: &SchemaStore) -> LoadResult<Value> {
    Ok(serde_json::to_value(store)?)
}

/// Writes the store as a pretty-printed schema document file.
pub fn dump_file(store: &SchemaStore, path: &Path) -> LoadResult<()> {
    let text = serde_json::to_string_pretty(store)?;
    fs::write(path, text)?;
    Ok(())
}

fn load_entities(store: &mut SchemaStore, table: &Map<String, Value>) -> LoadResult<()> {
    for (name, value) in table {
        let incoming: EntityType = serde_json::from_value(value.clone()).map_err(|err| {
            LoadError::MalformedDocument(format!("entity type {name:?}: {err}"))
        })?;

        let entity = store.entity_mut(name);
        entity.fields.extend(incoming.fields);
        entity.field_aliases.extend(incoming.field_aliases);
        entity.field_tags.extend(incoming.field_tags);
    }
    Ok(())
}

fn string_table(value: &Value, table: &str) -> LoadResult<Vec<(String, String)>> {
    let Some(entries) = value.as_object() else {
        return Err(LoadError::MalformedDocument(format!(
            "{table:?} must be an object"
        )));
    };
    entries
        .iter()
        .map(|(key, value)| {
            value
                .as_str()
                .map(|target| (key.clone(), target.to_string()))
                .ok_or_else(|| {
                    LoadError::MalformedDocument(format!("{table}[{key:?}] must be a string"))
                })
        })
        .collect()
}

fn string_list_table(value: &Value, table: &str) -> LoadResult<Vec<(String, Vec<String>)>> {
    let Some(entries) = value.as_object() else {
        return Err(LoadError::MalformedDocument(format!(
            "{table:?} must be an object"
        )));
    };
    entries
        .iter()
        .map(|(key, value)| {
            let members = value
                .as_array()
                .and_then(|items| {
                    items
                        .iter()
                        .map(|item| item.as_str().map(str::to_string))
                        .collect::<Option<Vec<String>>>()
                })
                .ok_or_else(|| {
                    LoadError::MalformedDocument(format!(
                        "{table}[{key:?}] must be a list of strings"
                    ))
                })?;
            Ok((key.clone(), members))
        })
        .collect()
}
