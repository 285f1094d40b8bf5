//! The provider registry: one loaded schema store per source identity.
//!
//! A registry owns an ordered list of providers and a cache. Embedders
//! construct one, register the providers that make sense for their site,
//! and scope the registry's lifetime themselves — there is no process-wide
//! store cache.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use gridschema_model::SchemaStore;
use serde_json::Value;
use tracing::{debug, info};

use crate::document::load_document;
use crate::error::{LoadError, LoadResult};

/// Produces schema documents for source identities (a service URL, a site
/// name). Providers are consulted in registration order; the first one to
/// return a document wins.
pub trait SchemaProvider: Send + Sync {
    /// Short provider name, used in logs.
    fn name(&self) -> &str;

    /// Returns the schema document for `source`, or `None` to decline.
    fn provide(&self, source: &str) -> LoadResult<Option<Value>>;
}

/// Serves documents from `<root>/<sanitized source>.json`, where every
/// non-alphanumeric character of the source identity becomes `_`.
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    root: PathBuf,
}

impl DirectoryProvider {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The file a source identity maps to.
    #[must_use]
    pub fn path_for(&self, source: &str) -> PathBuf {
        let mut name: String = source
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        name.push_str(".json");
        self.root.join(name)
    }
}

impl SchemaProvider for DirectoryProvider {
    fn name(&self) -> &str {
        "directory"
    }

    fn provide(&self, source: &str) -> LoadResult<Option<Value>> {
        let path = self.path_for(source);
        if !path.is_file() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&text)?))
    }
}

/// Loads and memoizes schema stores by source identity.
#[derive(Default)]
pub struct SchemaRegistry {
    providers: Vec<Box<dyn SchemaProvider>>,
    cache: HashMap<String, Arc<SchemaStore>>,
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a provider; earlier registrations are consulted first.
    pub fn register(&mut self, provider: Box<dyn SchemaProvider>) {
        self.providers.push(provider);
    }

    /// Returns the store for `source`, loading it through the providers on
    /// first use and from the cache afterwards.
    pub fn load(&mut self, source: &str) -> LoadResult<Arc<SchemaStore>> {
        if let Some(store) = self.cache.get(source) {
            debug!(source = %source, "Schema store served from cache");
            return Ok(Arc::clone(store));
        }

        for provider in &self.providers {
            let Some(doc) = provider.provide(source)? else {
                continue;
            };
            let mut store = SchemaStore::new();
            load_document(&mut store, &doc)?;
            info!(source = %source, provider = provider.name(), "Schema store loaded");

            let store = Arc::new(store);
            self.cache.insert(source.to_string(), Arc::clone(&store));
            return Ok(store);
        }

        Err(LoadError::NoProvider(source.to_string()))
    }
}
