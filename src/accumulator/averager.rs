use serde::{Deserialize, Serialize};

use crate::monoid::{
    count::CountingMonoid,
    sum::{SumMonoid, Summable},
    Monoid,
};

use super::Accumulator;

/// Keeps a running count and total of numeric observations.
///
/// The averager never reaches a final state: it can be queried at any time and keeps accepting
/// observations and merges afterwards. `merge` is associative and commutative (exactly so for
/// integers, up to rounding for floats), so an input can be split into chunks, each chunk
/// averaged on its own thread, and the partial averagers merged at the end.
///
/// There is no internal locking. A single averager that is shared between threads needs external
/// synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Averager<V: Summable = i64>(CountingMonoid<SumMonoid<V>>);

impl<V: Summable> Averager<V> {
    pub fn new() -> Self {
        Averager(CountingMonoid::neutral())
    }

    /// Adds a single value. Integer totals wrap on overflow; float totals follow IEEE addition.
    pub fn observe(&mut self, value: V) {
        self.0 = self.0.combine(&CountingMonoid::lift(&value));
    }

    /// Adds the count and total of `other` to this averager.
    pub fn merge(&mut self, other: &Averager<V>) {
        self.0 = self.0.combine(&other.0);
    }

    pub fn count(&self) -> usize {
        self.0.count()
    }

    pub fn total(&self) -> V {
        self.0.inner().value()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns `total / count`, or `0.0` if nothing has been observed yet.
    ///
    /// A zero result is ambiguous; use [`Averager::is_empty`] to tell "no data" apart from an
    /// average that really is zero.
    pub fn average(&self) -> f64 {
        match self.count() {
            0 => 0.0,
            count => self.total().to_f64() / count as f64,
        }
    }
}

impl<V: Summable> Default for Averager<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Summable> Accumulator for Averager<V> {
    type Item = V;

    fn observe(&mut self, item: V) {
        Averager::observe(self, item)
    }

    fn merge(&mut self, other: &Self) {
        Averager::merge(self, other)
    }
}

impl<V: Summable> Extend<V> for Averager<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.observe(value);
        }
    }
}

impl<V: Summable> FromIterator<V> for Averager<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut averager = Self::new();
        averager.extend(iter);
        averager
    }
}
