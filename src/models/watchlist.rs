//! Named, ordered lists of watchable items.

use crate::core::binge::{BingeCursor, Bingeable};
use crate::error::require;
use crate::models::media::{WatchItem, Watchable};
use crate::Result;
use std::cell::{Ref, RefCell};

/// A named sequence of movies and episodes; insertion order is the list order.
///
/// Watchlists are shared between the catalog and their owner, so appends go
/// through a shared reference.
#[derive(Debug)]
pub struct Watchlist {
    name: RefCell<String>,
    items: RefCell<BingeCursor<WatchItem>>,
}

impl Watchlist {
    /// Create an empty watchlist. The name must not be blank.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        require_name(&name)?;
        Ok(Self {
            name: RefCell::new(name),
            items: RefCell::new(BingeCursor::new()),
        })
    }

    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    /// Rename the list. A blank name is rejected and the old one kept.
    pub fn set_name(&self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        require_name(&name)?;
        *self.name.borrow_mut() = name;
        Ok(())
    }

    /// Append an item at the end of the list.
    pub fn push(&self, item: impl Into<WatchItem>) {
        self.items.borrow_mut().push(item.into());
    }

    /// Remove the item at the 0-based `index`.
    pub fn remove(&self, index: usize) -> Result<WatchItem> {
        self.items.borrow_mut().remove(index)
    }

    /// Item at the 0-based `index`.
    pub fn get(&self, index: usize) -> Option<WatchItem> {
        self.items.borrow().as_slice().get(index).cloned()
    }

    pub fn items(&self) -> Ref<'_, [WatchItem]> {
        Ref::map(self.items.borrow(), |c| c.as_slice())
    }

    pub fn len(&self) -> usize {
        self.items.borrow().total_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of items that are currently playable.
    pub fn valid_count(&self) -> usize {
        self.items().iter().filter(|i| i.is_valid()).count()
    }

    /// Play every valid item in order.
    pub fn watch(&self) {
        for item in self.items().iter() {
            if item.is_valid() {
                item.watch();
            }
        }
    }
}

fn require_name(name: &str) -> Result<()> {
    require(!name.trim().is_empty(), || "watchlist name must not be blank".into())
}

impl Bingeable for Watchlist {
    type Item = WatchItem;

    fn total_count(&self) -> usize {
        self.items.borrow().total_count()
    }

    fn remaining_count(&self) -> usize {
        self.items.borrow().remaining_count()
    }

    fn next_item(&self) -> Result<WatchItem> {
        self.items.borrow_mut().advance()
    }

    fn reset(&self) {
        self.items.borrow_mut().reset()
    }
}
