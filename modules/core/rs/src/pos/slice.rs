use std::fmt::{Display, Formatter};
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use derive_getters::Dissolve;

use crate::error::{Error, Result};

/// Extended slice `start:stop:step` over positions of a sequence.
///
/// Bounds are optional and may be negative (counted from the end). Out-of-bounds values are
/// clamped to the sequence, so resolving a slice never fails unless the step is zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Dissolve)]
pub struct Slice {
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
}

impl Default for Slice {
    fn default() -> Self {
        Self {
            start: None,
            stop: None,
            step: 1,
        }
    }
}

impl Slice {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: isize) -> Self {
        Self { start, stop, step }
    }

    /// Forward slice `start:stop` with a unit step.
    pub fn range(start: isize, stop: isize) -> Self {
        Self::new(Some(start), Some(stop), 1)
    }

    pub fn with_step(mut self, step: isize) -> Self {
        self.step = step;
        self
    }

    pub fn start(&self) -> Option<isize> {
        self.start
    }

    pub fn stop(&self) -> Option<isize> {
        self.stop
    }

    pub fn step(&self) -> isize {
        self.step
    }

    /// Concrete `(start, stop, step)` for a sequence of the given length.
    pub fn indices(&self, len: usize) -> Result<(isize, isize, isize)> {
        let step = self.step;
        if step == 0 {
            return Err(Error::invalid_selector("slice step cannot be zero"));
        }

        let len = isize::try_from(len)
            .map_err(|_| Error::invalid_selector(format!("length {len} can't fit in isize")))?;
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = self
            .start
            .map_or(if step < 0 { upper } else { lower }, clamp);
        let stop = self.stop.map_or(if step < 0 { lower } else { upper }, clamp);
        Ok((start, stop, step))
    }

    /// Positions selected by the slice in slice order.
    pub fn positions(&self, len: usize) -> Result<Vec<usize>> {
        let (start, stop, step) = self.indices(len)?;

        // After clamping every produced position is within [0, len)
        let positions = if step > 0 {
            (start..stop)
                .step_by(step.unsigned_abs())
                .map(|x| x as usize)
                .collect()
        } else {
            ((stop + 1)..=start)
                .rev()
                .step_by(step.unsigned_abs())
                .map(|x| x as usize)
                .collect()
        };
        Ok(positions)
    }
}

impl Display for Slice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        write!(f, ":")?;
        if let Some(stop) = self.stop {
            write!(f, "{stop}")?;
        }
        if self.step != 1 {
            write!(f, ":{}", self.step)?;
        }
        Ok(())
    }
}

impl From<Range<isize>> for Slice {
    fn from(value: Range<isize>) -> Self {
        Self::range(value.start, value.end)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(value: RangeFrom<isize>) -> Self {
        Self::new(Some(value.start), None, 1)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(value: RangeTo<isize>) -> Self {
        Self::new(None, Some(value.end), 1)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::default()
    }
}
