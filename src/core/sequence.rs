//! Prequel/sequel chaining between works of the same kind.
//!
//! Links are non-owning: nodes live in the identity registry, the chain only
//! points at them, so a chain never keeps a work alive on its own.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::{Rc, Weak};

/// The previous/next slots of one node.
pub struct SequenceLink<T> {
    previous: RefCell<Weak<T>>,
    next: RefCell<Weak<T>>,
}

impl<T> SequenceLink<T> {
    pub fn new() -> Self {
        Self {
            previous: RefCell::new(Weak::new()),
            next: RefCell::new(Weak::new()),
        }
    }

    fn previous(&self) -> Option<Rc<T>> {
        self.previous.borrow().upgrade()
    }

    fn next(&self) -> Option<Rc<T>> {
        self.next.borrow().upgrade()
    }

    fn set_previous_to(&self, node: Option<&Rc<T>>) {
        *self.previous.borrow_mut() = node.map(Rc::downgrade).unwrap_or_default();
    }

    fn set_next_to(&self, node: Option<&Rc<T>>) {
        *self.next.borrow_mut() = node.map(Rc::downgrade).unwrap_or_default();
    }
}

impl<T> Default for SequenceLink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SequenceLink<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceLink")
            .field("has_previous", &(self.previous.borrow().strong_count() > 0))
            .field("has_next", &(self.next.borrow().strong_count() > 0))
            .finish()
    }
}

/// A work that can sit in a prequel/sequel chain.
pub trait Sequenceable: Sized {
    fn link(&self) -> &SequenceLink<Self>;

    fn has_previous(&self) -> bool {
        self.link().previous().is_some()
    }

    fn has_next(&self) -> bool {
        self.link().next().is_some()
    }

    fn previous(&self) -> Option<Rc<Self>> {
        self.link().previous()
    }

    fn next(&self) -> Option<Rc<Self>> {
        self.link().next()
    }

    /// Make `other` the prequel of `self`.
    ///
    /// Whatever `self` previously followed loses its sequel, and whatever
    /// previously followed `other` loses its prequel. Displaced nodes are not
    /// re-attached anywhere.
    fn set_previous(self: &Rc<Self>, other: &Rc<Self>) {
        if let Some(old_previous) = self.link().previous() {
            old_previous.link().set_next_to(None);
        }
        if let Some(old_next) = other.link().next() {
            old_next.link().set_previous_to(None);
        }
        self.link().set_previous_to(Some(other));
        other.link().set_next_to(Some(self));
    }
}

/// The whole chain `node` belongs to, earliest first.
///
/// A chain closed into a loop is returned once around, starting at `node`'s
/// earliest reachable predecessor.
pub fn series<T: Sequenceable>(node: &Rc<T>) -> Vec<Rc<T>> {
    let mut seen = HashSet::new();
    seen.insert(Rc::as_ptr(node));

    let mut first = Rc::clone(node);
    while let Some(prev) = first.previous() {
        if !seen.insert(Rc::as_ptr(&prev)) {
            break;
        }
        first = prev;
    }

    let mut chain = vec![Rc::clone(&first)];
    let mut visited = HashSet::new();
    visited.insert(Rc::as_ptr(&first));
    let mut cursor = first;
    while let Some(next) = cursor.next() {
        if !visited.insert(Rc::as_ptr(&next)) {
            break;
        }
        chain.push(Rc::clone(&next));
        cursor = next;
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Node {
        name: &'static str,
        link: SequenceLink<Node>,
    }

    impl Sequenceable for Node {
        fn link(&self) -> &SequenceLink<Self> {
            &self.link
        }
    }

    fn node(name: &'static str) -> Rc<Node> {
        Rc::new(Node {
            name,
            link: SequenceLink::new(),
        })
    }

    fn names(chain: &[Rc<Node>]) -> Vec<&'static str> {
        chain.iter().map(|n| n.name).collect()
    }

    #[test]
    fn test_set_previous_is_symmetric() {
        let a = node("a");
        let b = node("b");
        a.set_previous(&b);
        assert!(Rc::ptr_eq(&a.previous().unwrap(), &b));
        assert!(Rc::ptr_eq(&b.next().unwrap(), &a));
        assert!(!a.has_next());
        assert!(!b.has_previous());
    }

    #[test]
    fn test_relinking_clears_displaced_prequel() {
        let a = node("a");
        let b = node("b");
        let c = node("c");
        a.set_previous(&b);
        a.set_previous(&c);
        assert!(b.next().is_none());
        assert!(Rc::ptr_eq(&c.next().unwrap(), &a));
    }

    #[test]
    fn test_relinking_clears_displaced_sequel() {
        let a = node("a");
        let b = node("b");
        let c = node("c");
        a.set_previous(&b);
        c.set_previous(&b);
        assert!(a.previous().is_none());
        assert!(Rc::ptr_eq(&b.next().unwrap(), &c));
    }

    #[test]
    fn test_links_do_not_keep_nodes_alive() {
        let a = node("a");
        {
            let b = node("b");
            a.set_previous(&b);
            assert!(a.has_previous());
        }
        assert!(!a.has_previous());
    }

    #[test]
    fn test_series_walks_whole_chain() {
        let one = node("one");
        let two = node("two");
        let three = node("three");
        two.set_previous(&one);
        three.set_previous(&two);
        assert_eq!(names(&series(&two)), vec!["one", "two", "three"]);
        assert_eq!(names(&series(&one)), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_series_terminates_on_loop() {
        let a = node("a");
        let b = node("b");
        a.set_previous(&b);
        b.set_previous(&a);
        assert_eq!(series(&a).len(), 2);
    }
}
