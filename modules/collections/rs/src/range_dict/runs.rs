use std::fmt::{Display, Formatter};
use std::ops::Range;

use derive_getters::Dissolve;
use derive_more::Constructor;

use rangedict_core_rs::{Error, Result};

use super::identical::Identical;

/// A half-open identifier range `[start, end)` where every identifier holds the same value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Constructor, Dissolve)]
pub struct Run<V> {
    start: usize,
    end: usize,
    value: V,
}

impl<V> Run<V> {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn contains(&self, id: usize) -> bool {
        self.start <= id && id < self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl<V: Clone> Run<&V> {
    pub fn cloned(&self) -> Run<V> {
        Run::new(self.start, self.end, self.value.clone())
    }
}

impl<V: Display> Display for Run<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}: {}", self.start, self.end, self.value)
    }
}

pub struct RunsBuilder<'i, V, I: Identical<V>> {
    values: Vec<V>,
    ends: Vec<usize>,
    identical: &'i I,
}

impl<'i, V, I: Identical<V>> RunsBuilder<'i, V, I> {
    pub fn new(identical: &'i I) -> Self {
        Self {
            values: Vec::new(),
            ends: Vec::new(),
            identical,
        }
    }

    pub fn with_capacity(mut self, runs: usize) -> Self {
        self.values.reserve(runs);
        self.ends.reserve(runs);
        self
    }

    /// End of the last pushed run.
    pub fn end(&self) -> usize {
        self.ends.last().copied().unwrap_or(0)
    }

    /// Extend the runs up to `end` with the given value.
    ///
    /// The value is merged into the last run when the two are identical. Pushing an end that
    /// doesn't advance past the current one is a no-op.
    pub fn push(&mut self, end: usize, value: V) {
        if end <= self.end() {
            return;
        }

        if let (Some(last), Some(last_end)) = (self.values.last(), self.ends.last_mut()) {
            if self.identical.identical(last, &value) {
                *last_end = end;
                return;
            }
        }

        self.values.push(value);
        self.ends.push(end);
    }

    pub fn build(self) -> Runs<V> {
        Runs {
            values: self.values,
            ends: self.ends,
        }
    }
}

/// Runs of values over identifiers `[0, size)`, encoded by the end position of every run.
///
/// Storing ends instead of lengths makes runs contiguous by construction and lets lookups
/// binary-search the ends directly.
#[derive(Debug, Clone, PartialEq, Eq, Dissolve)]
pub struct Runs<V> {
    values: Vec<V>,
    ends: Vec<usize>,
}

impl<V> Runs<V> {
    pub fn builder<I: Identical<V>>(identical: &I) -> RunsBuilder<'_, V, I> {
        RunsBuilder::new(identical)
    }

    /// A single run covering `[0, size)`.
    pub fn uniform(size: usize, value: V) -> Self {
        Self {
            values: vec![value],
            ends: vec![size],
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(values: Vec<V>, ends: Vec<usize>) -> Self {
        Self { values, ends }
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Number of covered identifiers.
    pub fn size(&self) -> usize {
        self.ends.last().copied().unwrap_or(0)
    }

    /// Index of the run containing the identifier.
    pub fn locate(&self, id: usize) -> Option<usize> {
        let run = self.ends.partition_point(|&end| end <= id);
        (run < self.len()).then_some(run)
    }

    pub fn value_at(&self, id: usize) -> Option<&V> {
        self.locate(id).map(|run| &self.values[run])
    }

    /// Values of ascending identifiers in a single pass over the runs.
    ///
    /// Identifiers must be sorted and smaller than `size()`.
    pub(crate) fn values_at_sorted<'a>(
        &'a self,
        ids: &'a [usize],
    ) -> impl Iterator<Item = &'a V> + 'a {
        debug_assert!(ids.is_sorted());
        debug_assert!(ids.last().map_or(true, |&x| x < self.size()));

        let mut run = 0;
        ids.iter().map(move |&id| {
            while self.ends[run] <= id {
                run += 1;
            }
            &self.values[run]
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Run<&V>> {
        let mut start = 0;
        self.values.iter().zip(self.ends.iter()).map(move |(value, &end)| {
            let run = Run::new(start, end, value);
            start = end;
            run
        })
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.values.iter()
    }

    /// New runs where every identifier within `ranges` holds `value`.
    ///
    /// Ranges must be sorted by start and lie within `[0, size())`; they may touch or overlap.
    /// Runs that become adjacent with identical values are merged, so the result is as compact as
    /// the input.
    pub(crate) fn overwritten<I: Identical<V>>(
        &self,
        ranges: &[Range<usize>],
        value: &V,
        identical: &I,
    ) -> Self
    where
        V: Clone,
    {
        let mut builder =
            Self::builder(identical).with_capacity(self.len() + 2 * ranges.len());

        // Invariant: the run with index `run` contains `cursor` while cursor < size
        let mut cursor = 0;
        let mut run = 0;
        for range in ranges {
            while cursor < range.start {
                let end = self.ends[run].min(range.start);
                builder.push(end, self.values[run].clone());
                cursor = end;
                if end == self.ends[run] {
                    run += 1;
                }
            }

            builder.push(range.end, value.clone());
            cursor = cursor.max(range.end);
            while run < self.len() && self.ends[run] <= cursor {
                run += 1;
            }
        }

        while run < self.len() {
            builder.push(self.ends[run], self.values[run].clone());
            run += 1;
        }

        builder.build()
    }

    /// Check that the runs exactly cover `[0, size)` and that no two adjacent runs are identical.
    pub fn validate<I: Identical<V>>(&self, size: usize, identical: &I) -> Result<()> {
        if self.values.len() != self.ends.len() {
            return Err(Error::invariant(format!(
                "{} values for {} run ends",
                self.values.len(),
                self.ends.len()
            )));
        }

        let mut start = 0;
        for (ind, &end) in self.ends.iter().enumerate() {
            if end <= start {
                return Err(Error::invariant(format!(
                    "run {ind} spans {start}..{end}"
                )));
            }
            start = end;
        }
        if start != size {
            return Err(Error::invariant(format!(
                "runs cover 0..{start}, expected 0..{size}"
            )));
        }

        for (ind, pair) in self.values.windows(2).enumerate() {
            if identical.identical(&pair[0], &pair[1]) {
                return Err(Error::invariant(format!(
                    "runs {} and {} hold identical values",
                    ind,
                    ind + 1
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type EqFn = fn(&u8, &u8) -> bool;
    const EQ: EqFn = PartialEq::eq;

    fn dense(runs: &Runs<u8>) -> Vec<u8> {
        runs.iter()
            .flat_map(|run| std::iter::repeat(**run.value()).take(run.len()))
            .collect()
    }

    fn assert_runs_eq(runs: &Runs<u8>, expected: &[(usize, usize, u8)]) {
        assert_eq!(
            runs.iter()
                .map(|x| (x.start(), x.end(), **x.value()))
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_runs_builder_merges() {
        let mut builder = Runs::builder(&EQ);
        for (end, value) in [(2, 1), (3, 1), (3, 2), (5, 2), (6, 3), (4, 9), (9, 1)] {
            builder.push(end, value);
        }
        let runs = builder.build();

        // (3, 2) doesn't advance past 3, (4, 9) doesn't advance past 6
        assert_runs_eq(&runs, &[(0, 3, 1), (3, 5, 2), (5, 6, 3), (6, 9, 1)]);
        assert_eq!(runs.size(), 9);
        assert!(runs.validate(9, &EQ).is_ok());
    }

    #[test]
    fn test_runs_lookup() {
        let runs = Runs::from_parts(vec![1, 2, 3], vec![3, 4, 10]);
        for (id, expected) in [
            (0, Some(&1)),
            (2, Some(&1)),
            (3, Some(&2)),
            (4, Some(&3)),
            (9, Some(&3)),
            (10, None),
        ] {
            assert_eq!(runs.value_at(id), expected);
        }

        let ids = [0, 0, 2, 3, 5, 9];
        assert_eq!(
            runs.values_at_sorted(&ids).copied().collect::<Vec<_>>(),
            vec![1, 1, 1, 2, 3, 3]
        );
    }

    #[test]
    fn test_runs_overwritten() {
        let base = Runs::from_parts(vec![0, 1, 0], vec![4, 6, 10]);
        for (ranges, value, expected) in [
            // Split a single run
            (vec![1..2], 5, vec![(0, 1, 0), (1, 2, 5), (2, 4, 0), (4, 6, 1), (6, 10, 0)]),
            // Restore the default -> everything collapses into one run
            (vec![4..6], 0, vec![(0, 10, 0)]),
            // Extend a run to the left and to the right
            (vec![3..4, 6..7], 1, vec![(0, 3, 0), (3, 7, 1), (7, 10, 0)]),
            // Cover everything
            (vec![0..10], 7, vec![(0, 10, 7)]),
            // Touching and overlapping ranges
            (vec![0..2, 2..3, 2..5], 1, vec![(0, 6, 1), (6, 10, 0)]),
            // Same value as the covered run -> nothing changes
            (vec![4..5], 1, vec![(0, 4, 0), (4, 6, 1), (6, 10, 0)]),
            // Nothing to write
            (vec![], 9, vec![(0, 4, 0), (4, 6, 1), (6, 10, 0)]),
            // Sparse ranges at both borders
            (vec![0..1, 9..10], 2, vec![(0, 1, 2), (1, 4, 0), (4, 6, 1), (6, 9, 0), (9, 10, 2)]),
        ] {
            let runs = base.overwritten(&ranges, &value, &EQ);
            assert_runs_eq(&runs, &expected);
            assert!(runs.validate(10, &EQ).is_ok());

            let mut expected_dense = dense(&base);
            for range in &ranges {
                expected_dense[range.clone()].fill(value);
            }
            assert_eq!(dense(&runs), expected_dense);
        }
    }

    #[test]
    fn test_runs_validate() {
        for (values, ends) in [
            (vec![1, 2], vec![5]),
            (vec![1, 2], vec![5, 5]),
            (vec![1, 2], vec![6, 5]),
            (vec![1, 2], vec![4, 9]),
            (vec![1, 1], vec![5, 10]),
            (vec![], vec![]),
        ] {
            let runs = Runs::from_parts(values, ends);
            assert!(matches!(
                runs.validate(10, &EQ),
                Err(Error::InvariantViolation { .. })
            ));
        }
        assert!(Runs::uniform(10, 1).validate(10, &EQ).is_ok());
    }

    #[test]
    fn test_run_display() {
        let runs = Runs::from_parts(vec![1, 2], vec![3, 10]);
        let formatted = runs.iter().map(|x| x.to_string()).collect::<Vec<_>>();
        assert_eq!(formatted, vec!["0..3: 1", "3..10: 2"]);
        assert_eq!(runs.iter().next().map(|x| x.cloned()), Some(Run::new(0, 3, 1)));
    }
}
