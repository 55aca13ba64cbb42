use std::borrow::Borrow;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;

use ahash::{HashSet, HashSetExt, RandomState};
use indexmap::IndexSet;

/// A set that remembers the order in which items were first added.
#[derive(Clone)]
pub struct OrderedSet<T> {
    items: IndexSet<T, RandomState>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self {
            items: IndexSet::with_hasher(RandomState::new()),
        }
    }
}

impl<T: Hash + Eq> OrderedSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the item at the end of the set. Present items keep their position.
    pub fn add(&mut self, item: T) -> bool {
        self.items.insert(item)
    }

    /// Remove the item, preserving the order of the remaining ones.
    pub fn discard<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.shift_remove(item)
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order; use `.rev()` for the reverse order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    /// The last (or the first) item, `None` if the set is empty.
    pub fn peek(&self, last: bool) -> Option<&T> {
        if last {
            self.items.last()
        } else {
            self.items.first()
        }
    }

    /// Remove and return the last (or the first) item, `None` if the set is empty.
    pub fn pop(&mut self, last: bool) -> Option<T> {
        if last {
            self.items.pop()
        } else {
            self.items.shift_remove_index(0)
        }
    }

    pub fn update(&mut self, items: impl IntoIterator<Item = T>) {
        for item in items {
            self.add(item);
        }
    }

    /// Order-insensitive comparison with an arbitrary collection.
    pub fn same_items<'a>(&self, other: impl IntoIterator<Item = &'a T>) -> bool
    where
        T: 'a,
    {
        let mut seen = HashSet::with_capacity(self.len());
        for item in other {
            if !self.contains(item) {
                return false;
            }
            seen.insert(item);
        }
        seen.len() == self.len()
    }
}

impl<T: Hash + Eq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Hash + Eq> Eq for OrderedSet<T> {}

impl<T: Debug> Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.items.is_empty() {
            return write!(f, "OrderedSet()");
        }
        write!(f, "OrderedSet(")?;
        f.debug_list().entries(self.items.iter()).finish()?;
        write!(f, ")")
    }
}

impl<T: Hash + Eq> FromIterator<T> for OrderedSet<T> {
    fn from_iter<Iter: IntoIterator<Item = T>>(iter: Iter) -> Self {
        let mut set = Self::new();
        set.update(iter);
        set
    }
}

impl<T: Hash + Eq> Extend<T> for OrderedSet<T> {
    fn extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) {
        self.update(iter);
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = indexmap::set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
