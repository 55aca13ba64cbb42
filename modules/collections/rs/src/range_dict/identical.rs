/// Equivalence on attribute values used to merge neighbouring runs of a range dictionary.
///
/// A merged run stores a single representative, so values the rule calls identical become
/// interchangeable: a write whose value merges into a neighbouring run may read back as the
/// neighbour's value. Reads are only guaranteed to return a value identical to the written one.
/// Use `PartialEq::eq` (the default) when writes must read back exactly.
pub trait Identical<T> {
    fn identical(&self, first: &T, second: &T) -> bool;
}
impl<T, F> Identical<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn identical(&self, first: &T, second: &T) -> bool {
        self(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same_within(first: &f64, second: &f64) -> bool {
        (first - second).abs() < 1e-3
    }

    #[test]
    fn test_identical_rules() {
        let eq = PartialEq::eq as fn(&f64, &f64) -> bool;
        assert!(eq.identical(&1.0, &1.0));
        assert!(!eq.identical(&1.0, &1.0001));

        assert!(same_within.identical(&1.0, &1.0001));
        assert!(!same_within.identical(&1.0, &1.1));

        let parity = |a: &u8, b: &u8| a % 2 == b % 2;
        assert!(parity.identical(&1, &3));
        assert!(!parity.identical(&1, &2));
    }
}
