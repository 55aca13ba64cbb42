use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use rangedict_core_rs::pos::{self, Slice};
use rangedict_core_rs::Result;

/// Positions to select from a view.
///
/// Positions always refer to the view's own identifier sequence, never to raw identifiers.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Selector {
    /// A single position; negative values count from the end.
    Index(isize),
    /// An extended slice; bounds are clamped and the step may be negative.
    Slice(Slice),
    /// An arbitrary collection of positions. The selection is sorted and deduplicated.
    Positions(Vec<isize>),
}

impl Selector {
    pub fn range(start: isize, stop: isize) -> Self {
        Self::Slice(Slice::range(start, stop))
    }

    pub fn stepped(start: isize, stop: isize, step: isize) -> Self {
        Self::Slice(Slice::range(start, stop).with_step(step))
    }

    pub fn positions(positions: impl IntoIterator<Item = isize>) -> Self {
        Self::Positions(positions.into_iter().collect())
    }

    /// Select identifiers from an ascending, duplicate-free sequence.
    ///
    /// The result is ascending and duplicate-free as well.
    pub fn select(&self, ids: &[usize]) -> Result<Vec<usize>> {
        match self {
            Selector::Index(position) => Ok(vec![ids[pos::resolve(*position, ids.len())?]]),
            Selector::Slice(slice) => {
                let mut selected: Vec<usize> = slice
                    .positions(ids.len())?
                    .into_iter()
                    .map(|x| ids[x])
                    .collect();
                if slice.step() < 0 {
                    selected.reverse();
                }
                Ok(selected)
            }
            Selector::Positions(positions) => {
                let mut selected: Vec<usize> = pos::resolve_all(positions, ids.len())?
                    .into_iter()
                    .map(|x| ids[x])
                    .collect();
                selected.sort_unstable();
                selected.dedup();
                Ok(selected)
            }
        }
    }
}

impl From<isize> for Selector {
    fn from(value: isize) -> Self {
        Self::Index(value)
    }
}

impl From<Slice> for Selector {
    fn from(value: Slice) -> Self {
        Self::Slice(value)
    }
}

impl From<Range<isize>> for Selector {
    fn from(value: Range<isize>) -> Self {
        Self::Slice(value.into())
    }
}

impl From<RangeFrom<isize>> for Selector {
    fn from(value: RangeFrom<isize>) -> Self {
        Self::Slice(value.into())
    }
}

impl From<RangeTo<isize>> for Selector {
    fn from(value: RangeTo<isize>) -> Self {
        Self::Slice(value.into())
    }
}

impl From<RangeFull> for Selector {
    fn from(value: RangeFull) -> Self {
        Self::Slice(value.into())
    }
}

impl From<Vec<isize>> for Selector {
    fn from(value: Vec<isize>) -> Self {
        Self::Positions(value)
    }
}

impl From<&[isize]> for Selector {
    fn from(value: &[isize]) -> Self {
        Self::Positions(value.to_vec())
    }
}

impl<const N: usize> From<[isize; N]> for Selector {
    fn from(value: [isize; N]) -> Self {
        Self::Positions(value.to_vec())
    }
}
