//! Stateful wrap-around iteration over an ordered, growing sequence.

use crate::error::require;
use crate::Result;

/// Sequential consumption with wrap-around and reset.
pub trait Bingeable {
    type Item;

    /// Number of items in the sequence.
    fn total_count(&self) -> usize;

    /// Items left before the cursor wraps.
    fn remaining_count(&self) -> usize;

    /// Return the item under the cursor and advance it, wrapping to the
    /// first item after the last one.
    fn next_item(&self) -> Result<Self::Item>;

    /// Move the cursor back to the first item.
    fn reset(&self);
}

/// Ordered items plus the position of the next one to hand out.
///
/// `next_index` is always `< items.len()`, or `0` when empty; it never rests
/// at `items.len()`.
#[derive(Debug, Clone)]
pub struct BingeCursor<T> {
    items: Vec<T>,
    next_index: usize,
}

impl<T> Default for BingeCursor<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_index: 0,
        }
    }
}

impl<T: Clone> BingeCursor<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item; its 1-based number is the new total.
    pub fn push(&mut self, item: T) -> usize {
        self.items.push(item);
        self.items.len()
    }

    /// Remove the item at the 0-based `index`, keeping the cursor on the
    /// item it pointed at (or on the first item if that one was removed last).
    pub fn remove(&mut self, index: usize) -> Result<T> {
        require(index < self.items.len(), || {
            format!("index {} out of range for {} items", index, self.items.len())
        })?;
        let item = self.items.remove(index);
        if index < self.next_index {
            self.next_index -= 1;
        }
        if self.next_index >= self.items.len() {
            self.next_index = 0;
        }
        Ok(item)
    }

    /// Item by 1-based number.
    pub fn get(&self, number: usize) -> Result<&T> {
        require((1..=self.items.len()).contains(&number), || {
            format!("number {} outside 1..={}", number, self.items.len())
        })?;
        Ok(&self.items[number - 1])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.items.len() - self.next_index
    }

    /// 1-based number of the item the next call to [`advance`](Self::advance) returns.
    pub fn position(&self) -> usize {
        self.next_index + 1
    }

    pub fn advance(&mut self) -> Result<T> {
        require(self.remaining_count() > 0, || "nothing to binge: sequence is empty".into())?;
        let item = self.items[self.next_index].clone();
        self.next_index += 1;
        if self.next_index >= self.items.len() {
            tracing::debug!("Cursor wrapped after {} items", self.items.len());
            self.next_index = 0;
        }
        Ok(item)
    }

    pub fn reset(&mut self) {
        self.next_index = 0;
    }
}

impl<'a, T> IntoIterator for &'a BingeCursor<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
