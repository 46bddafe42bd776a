//! Flyweight identity cache: one shared instance per title.

use crate::error::require;
use crate::Result;
use std::collections::HashMap;
use std::rc::Rc;

/// Interning map from title to the canonical instance of one kind of work.
#[derive(Debug)]
pub struct IdentityRegistry<T> {
    kind: &'static str,
    entries: HashMap<String, Rc<T>>,
}

impl<T> IdentityRegistry<T> {
    /// Create an empty registry; `kind` only labels log output.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: HashMap::new(),
        }
    }

    /// Return the instance registered under `title`, building it with `create`
    /// on first request.
    ///
    /// On a hit `create` is never called, so arguments that differ from the
    /// first registration are silently ignored.
    pub fn get_or_create<F>(&mut self, title: &str, create: F) -> Result<Rc<T>>
    where
        F: FnOnce() -> Result<T>,
    {
        require(!title.trim().is_empty(), || {
            format!("{} title must not be empty", self.kind)
        })?;

        if let Some(existing) = self.entries.get(title) {
            tracing::debug!("Registry hit for {} \"{}\"", self.kind, title);
            return Ok(Rc::clone(existing));
        }

        let instance = Rc::new(create()?);
        tracing::debug!("Registered new {} \"{}\"", self.kind, title);
        self.entries.insert(title.to_string(), Rc::clone(&instance));
        Ok(instance)
    }

    pub fn get(&self, title: &str) -> Option<Rc<T>> {
        self.entries.get(title).cloned()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.entries.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
