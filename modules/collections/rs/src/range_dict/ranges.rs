use std::ops::Range;

use itertools::Itertools;

/// Collapse ascending identifiers into the minimal list of half-open ranges.
///
/// Repeated identifiers are tolerated and end up in the same range.
pub fn coalesce(ids: impl IntoIterator<Item = usize>) -> Vec<Range<usize>> {
    ids.into_iter()
        .map(|id| id..id + 1)
        .coalesce(|prev, next| {
            if next.start <= prev.end {
                Ok(prev.start..prev.end.max(next.end))
            } else {
                Err((prev, next))
            }
        })
        .collect()
}
