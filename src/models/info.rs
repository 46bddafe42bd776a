//! Free-text metadata attached to works.

use crate::error::require;
use crate::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

/// Associative store for per-work tags. Keys are unique.
pub trait MetadataStore {
    fn get(&self, key: &str) -> Option<String>;
    fn has(&self, key: &str) -> bool;
    /// Insert or replace `key`, returning the previous value.
    fn insert(&mut self, key: &str, value: String) -> Option<String>;
    /// Remove `key`, returning the previous value.
    fn remove(&mut self, key: &str) -> Option<String>;
}

/// Default in-memory tag map.
#[derive(Debug, Clone, Default)]
pub struct InfoTags(HashMap<String, String>);

impl MetadataStore for InfoTags {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    fn insert(&mut self, key: &str, value: String) -> Option<String> {
        self.0.insert(key.to_string(), value)
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }
}

/// The tag slot owned by a work. Mutable through a shared reference since
/// works are shared between the registry, the catalog and watchlists.
pub struct Tags(RefCell<Box<dyn MetadataStore>>);

impl Tags {
    pub fn new() -> Self {
        Self::with_store(InfoTags::default())
    }

    pub fn with_store<S: MetadataStore + 'static>(store: S) -> Self {
        Self(RefCell::new(Box::new(store)))
    }

    /// Swap the backing store. Existing tags are dropped.
    pub fn replace_store<S: MetadataStore + 'static>(&self, store: S) {
        *self.0.borrow_mut() = Box::new(store);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.borrow().has(key)
    }

    /// Set `key` to `value`, or remove it when `value` is `None`.
    /// Returns the value previously associated with `key`.
    pub fn set(&self, key: &str, value: Option<&str>) -> Result<Option<String>> {
        require(!key.trim().is_empty(), || "info key must not be blank".into())?;
        let mut store = self.0.borrow_mut();
        Ok(match value {
            Some(v) => store.insert(key, v.to_string()),
            None => store.remove(key),
        })
    }
}

impl Default for Tags {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Tags { .. }")
    }
}
