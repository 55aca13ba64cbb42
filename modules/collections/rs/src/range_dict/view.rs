use std::borrow::Borrow;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

use itertools::Itertools;

use rangedict_core_rs::{Error, Result};

use super::dict::RangeDict;
use super::identical::Identical;
use super::runs::Run;
use super::selector::Selector;

/// Read/write lens over an ascending, duplicate-free subset of identifiers of a [`RangeDict`].
///
/// A view owns only its identifiers; every read and write goes straight to the root dictionary.
/// Writes made through one view are therefore visible to all other views of the same dictionary.
pub struct View<'a, K, V, I = fn(&V, &V) -> bool> {
    root: &'a RangeDict<K, V, I>,
    ids: Vec<usize>,
}

impl<'a, K, V, I> View<'a, K, V, I>
where
    K: Hash + Eq + Debug,
    V: Clone,
    I: Identical<V>,
{
    pub(crate) fn new(root: &'a RangeDict<K, V, I>, ids: Vec<usize>) -> Self {
        debug_assert!(ids.windows(2).all(|x| x[0] < x[1]));
        debug_assert!(ids.last().map_or(true, |&x| x < root.size()));
        Self { root, ids }
    }

    pub fn root(&self) -> &'a RangeDict<K, V, I> {
        self.root
    }

    /// Identifiers of the view in ascending order.
    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Sub-view of the given positions within this view.
    pub fn index(&self, selector: impl Into<Selector>) -> Result<View<'a, K, V, I>> {
        let ids = selector.into().select(&self.ids)?;
        Ok(View::new(self.root, ids))
    }

    /// Values of every identifier of the view, in identifier order.
    pub fn get<Q>(&self, key: &Q) -> Result<Vec<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.root.get_many(key, &self.ids)
    }

    /// Assign the value to every identifier of the view.
    pub fn set<Q>(&self, key: &Q, value: V) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.root.set(key, &self.ids, value)
    }

    /// The value shared by all identifiers of the view.
    pub fn get_value<Q>(&self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let values = self.get(key)?;
        let count = 1 + values
            .windows(2)
            .filter(|x| !self.root.identical(&x[0], &x[1]))
            .count();
        if count > 1 {
            return Err(Error::MultipleValues {
                key: format!("{key:?}"),
                count,
            });
        }
        values.into_iter().next().ok_or_else(|| Error::EmptyView {
            key: format!("{key:?}"),
        })
    }

    /// Maximal runs of consecutive identifiers within the view that hold identical values.
    pub fn iter_ranges<Q>(&self, key: &Q) -> Result<Vec<Run<V>>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let values = self.get(key)?;
        let runs = self
            .ids
            .iter()
            .zip(values)
            .map(|(&id, value)| Run::new(id, id + 1, value))
            .coalesce(|prev, next| {
                if prev.end() == next.start() && self.root.identical(prev.value(), next.value()) {
                    let (start, _, value) = prev.dissolve();
                    Ok(Run::new(start, next.end(), value))
                } else {
                    Err((prev, next))
                }
            })
            .collect();
        Ok(runs)
    }
}

impl<K, V, I> Clone for View<'_, K, V, I> {
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            ids: self.ids.clone(),
        }
    }
}

impl<K, V, I> Debug for View<'_, K, V, I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View").field("ids", &self.ids).finish()
    }
}

impl<K, V, I> Display for View<'_, K, V, I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "View({:?})", self.ids)
    }
}
