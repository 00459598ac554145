pub mod count;
pub mod fingerprint;
pub mod sum;

use core::fmt::Debug;

/// A value that summarizes a bag of items. `combine` has to be associative and `neutral` has to
/// be its identity, so a sequence can be cut into arbitrary pieces, each piece summarized on its
/// own, and the summaries combined afterwards without changing the result.
///
/// Most monoids in this crate are also commutative, which means the pieces can be combined in
/// any order.
pub trait Monoid: Clone + Debug + PartialEq {
    type Item;

    fn neutral() -> Self;
    fn lift(item: &Self::Item) -> Self;
    fn combine(&self, other: &Self) -> Self;

    /// Combines the lifted items in order, starting from the neutral element.
    fn lift_all<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self::Item: 'a,
    {
        items
            .into_iter()
            .fold(Self::neutral(), |acc, item| acc.combine(&Self::lift(item)))
    }
}
