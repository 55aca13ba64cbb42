use std::borrow::Borrow;
use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;

use ahash::RandomState;
use indexmap::map::Entry;
use indexmap::IndexMap;

use rangedict_core_rs::{Config, Error, Result};

use super::identical::Identical;
use super::ranges;
use super::runs::{Run, Runs};
use super::selector::Selector;
use super::view::View;

/// Per-key attribute values over a fixed identifier space `[0, size)`, stored as runs.
///
/// Memory is proportional to the number of value boundaries, not to the number of identifiers.
/// The key set is fixed at construction, identifiers are never added or removed.
///
/// Run lists live behind `RefCell`s, which lets any number of [`View`]s share the dictionary and
/// write through it. Writes build a new run list and swap it in, so a failed call never leaves a
/// partially updated key behind. The dictionary is `!Sync`; mutations must be serialized.
pub struct RangeDict<K, V, I = fn(&V, &V) -> bool> {
    size: usize,
    runs: IndexMap<K, RefCell<Runs<V>>, RandomState>,
    identical: I,
}

impl<K, V> RangeDict<K, V>
where
    K: Hash + Eq + Debug,
    V: Clone + PartialEq,
{
    /// Dictionary where every identifier holds the default value of every key.
    pub fn new(size: usize, defaults: impl IntoIterator<Item = (K, V)>) -> Result<Self> {
        Self::with_identical(size, defaults, PartialEq::eq as fn(&V, &V) -> bool)
    }

    pub fn from_config(config: Config<K, V>) -> Result<Self> {
        config.validate()?;
        let (size, defaults) = config.dissolve();
        Self::new(size, defaults)
    }
}

impl<K, V, I> RangeDict<K, V, I>
where
    K: Hash + Eq + Debug,
    V: Clone,
    I: Identical<V>,
{
    /// Same as [`RangeDict::new`], but runs are merged according to a custom identity rule.
    ///
    /// Merged runs keep one representative value, see [`Identical`] for what reads return.
    pub fn with_identical(
        size: usize,
        defaults: impl IntoIterator<Item = (K, V)>,
        identical: I,
    ) -> Result<Self> {
        if size == 0 {
            return Err(Error::configuration("size must be positive"));
        }

        let mut runs = IndexMap::with_hasher(RandomState::new());
        for (key, value) in defaults {
            match runs.entry(key) {
                Entry::Occupied(mut entry) => {
                    log::warn!(
                        "Duplicate default for key {:?}, keeping the last one",
                        entry.key()
                    );
                    entry.insert(RefCell::new(Runs::uniform(size, value)));
                }
                Entry::Vacant(entry) => {
                    entry.insert(RefCell::new(Runs::uniform(size, value)));
                }
            }
        }
        if runs.is_empty() {
            return Err(Error::configuration(
                "at least one attribute key with a default value is required",
            ));
        }

        log::debug!(
            "Created range dictionary with {} identifiers and {} keys",
            size,
            runs.len()
        );
        Ok(Self {
            size,
            runs,
            identical,
        })
    }

    /// Number of identifiers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of identifiers; the dictionary behaves as the view of all of them.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Attribute keys in construction order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.runs.keys()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.runs.contains_key(key)
    }

    pub fn identical(&self, first: &V, second: &V) -> bool {
        self.identical.identical(first, second)
    }

    fn runs_of<Q>(&self, key: &Q) -> Result<&RefCell<Runs<V>>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.runs.get(key).ok_or_else(|| Error::key_not_found(key))
    }

    fn check_id(&self, id: usize) -> Result<()> {
        if id < self.size {
            Ok(())
        } else {
            Err(Error::out_of_range(id, self.size))
        }
    }

    pub fn get<Q>(&self, key: &Q, id: usize) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let runs = self.runs_of(key)?;
        self.check_id(id)?;

        let runs = runs.borrow();
        runs.value_at(id)
            .cloned()
            .ok_or_else(|| Error::invariant(format!("no run contains identifier {id}")))
    }

    /// Values of the identifiers, in the order of `ids`.
    pub fn get_many<Q>(&self, key: &Q, ids: &[usize]) -> Result<Vec<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let runs = self.runs_of(key)?;
        for &id in ids {
            self.check_id(id)?;
        }

        let runs = runs.borrow();
        if ids.is_sorted() {
            return Ok(runs.values_at_sorted(ids).cloned().collect());
        }

        ids.iter()
            .map(|&id| {
                runs.value_at(id)
                    .cloned()
                    .ok_or_else(|| Error::invariant(format!("no run contains identifier {id}")))
            })
            .collect()
    }

    /// Assign the value to every identifier in `ids`.
    ///
    /// Either all identifiers are updated or, on error, none of them.
    pub fn set<Q>(&self, key: &Q, ids: &[usize], value: V) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let runs = self.runs_of(key)?;
        for &id in ids {
            self.check_id(id)?;
        }
        if ids.is_empty() {
            return Ok(());
        }

        let ranges = if ids.is_sorted() {
            ranges::coalesce(ids.iter().copied())
        } else {
            let mut sorted = ids.to_vec();
            sorted.sort_unstable();
            ranges::coalesce(sorted)
        };

        let updated = runs.borrow().overwritten(&ranges, &value, &self.identical);
        if cfg!(debug_assertions) {
            updated.validate(self.size, &self.identical)?;
        }

        log::trace!(
            "Key {:?}: {} ranges written, {} -> {} runs",
            key,
            ranges.len(),
            runs.borrow().len(),
            updated.len()
        );
        *runs.borrow_mut() = updated;
        Ok(())
    }

    /// Current runs of the key.
    pub fn iter_ranges<Q>(&self, key: &Q) -> Result<Vec<Run<V>>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let runs = self.runs_of(key)?.borrow();
        Ok(runs.iter().map(|x| x.cloned()).collect())
    }

    /// Number of runs currently stored for the key.
    pub fn runs_count<Q>(&self, key: &Q) -> Result<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        Ok(self.runs_of(key)?.borrow().len())
    }

    /// Check the run invariants of every key.
    pub fn validate(&self) -> Result<()> {
        for (key, runs) in &self.runs {
            runs.borrow()
                .validate(self.size, &self.identical)
                .map_err(|err| Error::invariant(format!("key {key:?}: {err}")))?;
        }
        Ok(())
    }

    /// The view of all identifiers in ascending order.
    pub fn view(&self) -> View<'_, K, V, I> {
        View::new(self, (0..self.size).collect())
    }

    /// All identifiers in ascending order.
    pub fn ids(&self) -> Vec<usize> {
        (0..self.size).collect()
    }

    /// Sub-view of the given positions. At the root level positions coincide with identifiers.
    pub fn index(&self, selector: impl Into<Selector>) -> Result<View<'_, K, V, I>> {
        self.view().index(selector)
    }
}

impl<K: Debug, V: Debug, I> Debug for RangeDict<K, V, I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeDict")
            .field("size", &self.size)
            .field(
                "runs",
                &self
                    .runs
                    .iter()
                    .map(|(key, runs)| (key, runs.borrow()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
