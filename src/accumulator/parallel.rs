use rayon::prelude::*;

use super::Accumulator;

/// Reduces `items` on the rayon thread pool. Every worker folds its share into an accumulator of
/// its own, and the partial accumulators are merged pairwise afterwards. No accumulator is ever
/// touched by two threads at once.
pub fn par_reduce<A, T>(items: &[T]) -> A
where
    A: Accumulator<Item = T> + Send,
    T: Clone + Send + Sync,
{
    tracing::debug!(
        items = items.len(),
        threads = rayon::current_num_threads(),
        "starting parallel reduction"
    );

    items
        .par_iter()
        .fold(A::default, |mut acc, item| {
            acc.observe(item.clone());
            acc
        })
        .reduce(A::default, |mut left, right| {
            left.merge(&right);
            left
        })
}
