use serde::{Deserialize, Serialize};

use crate::monoid::Monoid;

/// Wraps another monoid and attaches an item counter. The counter wraps on overflow, like the
/// integer sums do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountingMonoid<M: Monoid>(usize, M);

impl<M: Monoid> CountingMonoid<M> {
    pub fn new(count: usize, inner: M) -> Self {
        CountingMonoid(count, inner)
    }

    pub fn count(&self) -> usize {
        self.0
    }

    pub fn inner(&self) -> &M {
        &self.1
    }
}

impl<M: Monoid> Default for CountingMonoid<M> {
    fn default() -> Self {
        CountingMonoid(0, M::neutral())
    }
}

impl<M: Monoid> Monoid for CountingMonoid<M> {
    type Item = M::Item;

    fn neutral() -> Self {
        CountingMonoid(0, M::neutral())
    }

    fn lift(item: &Self::Item) -> Self {
        CountingMonoid(1, M::lift(item))
    }

    fn combine(&self, other: &Self) -> Self {
        CountingMonoid(self.0.wrapping_add(other.0), M::combine(&self.1, &other.1))
    }
}
