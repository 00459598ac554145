use crate::monoid::Monoid;

use super::Accumulator;

/// Accumulates items by lifting each of them into the monoid and combining it with the running
/// result.
#[derive(Debug, Clone, PartialEq)]
pub struct MonoidAccumulator<M: Monoid>(M);

impl<M: Monoid> MonoidAccumulator<M> {
    pub fn new() -> Self {
        MonoidAccumulator(M::neutral())
    }

    pub fn result(&self) -> &M {
        &self.0
    }

    pub fn into_result(self) -> M {
        self.0
    }
}

impl<M: Monoid> Default for MonoidAccumulator<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Monoid> Accumulator for MonoidAccumulator<M> {
    type Item = M::Item;

    fn observe(&mut self, item: M::Item) {
        self.0 = self.0.combine(&M::lift(&item));
    }

    fn merge(&mut self, other: &Self) {
        self.0 = self.0.combine(&other.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::monoid::{fingerprint::MultisetFingerprint, sum::SumMonoid, test::TestMonoid};

    #[test]
    fn accumulates_like_lift_all() {
        let items = [3u64, 1, 4, 1, 5, 9, 2, 6];
        let acc = MonoidAccumulator::<TestMonoid<u64>>::fold_from(items.iter().copied());

        assert_eq!(acc.result(), &TestMonoid::lift_all(&items));
        assert_eq!(acc.result().count(), 8);
        assert_eq!(acc.into_result().inner(), &SumMonoid(31));
    }

    #[test]
    fn merged_fingerprints_match_whole() {
        let mut left = MonoidAccumulator::<MultisetFingerprint<&str>>::new();
        left.observe("apple");
        left.observe("pear");

        let mut right = MonoidAccumulator::new();
        right.observe("apple");

        left.merge(&right);
        assert_eq!(
            left.into_result(),
            MultisetFingerprint::of(&["pear", "apple", "apple"])
        );
    }
}
