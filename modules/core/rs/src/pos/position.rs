use crate::error::{Error, Result};

/// Resolve a possibly negative position against a sequence of the given length.
///
/// Negative positions are counted from the end of the sequence, i.e. valid positions lie
/// within `[-len, len)`.
pub fn resolve(position: isize, len: usize) -> Result<usize> {
    let resolved = if position < 0 {
        len.checked_sub(position.unsigned_abs())
    } else {
        Some(position as usize).filter(|&x| x < len)
    };
    resolved.ok_or_else(|| Error::out_of_range(position, len))
}

/// Resolve every position independently, failing on the first invalid one.
pub fn resolve_all(positions: &[isize], len: usize) -> Result<Vec<usize>> {
    positions.iter().map(|&x| resolve(x, len)).collect()
}
