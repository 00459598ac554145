pub mod averager;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod simple;

pub use averager::Averager;
#[cfg(feature = "parallel")]
pub use parallel::par_reduce;
pub use simple::MonoidAccumulator;

/// A mutable reduction target. Items are fed in one at a time with `observe`, and two partial
/// accumulators can be folded into one with `merge`.
///
/// `merge` has to be associative and commutative, and `Default` has to be its identity. That way
/// an input can be partitioned any way we like, each partition reduced into its own accumulator,
/// and the partial results merged in any order.
///
/// Implementations don't synchronize. Give each thread its own accumulator and merge afterwards.
pub trait Accumulator: Default + core::fmt::Debug {
    type Item;

    fn observe(&mut self, item: Self::Item);
    fn merge(&mut self, other: &Self);

    /// Builds a fresh accumulator and feeds it every item in order.
    fn fold_from<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let mut acc = Self::default();
        for item in items {
            acc.observe(item);
        }
        acc
    }
}

/// Reduces every partition into its own accumulator and merges the partial results, left to
/// right. The outcome is the same as feeding the concatenated partitions into a single
/// accumulator.
pub fn reduce_partitioned<A, P, I>(partitions: P) -> A
where
    A: Accumulator,
    P: IntoIterator<Item = I>,
    I: IntoIterator<Item = A::Item>,
{
    let mut partition_count = 0usize;
    let result = partitions
        .into_iter()
        .map(|partition| {
            partition_count += 1;
            A::fold_from(partition)
        })
        .fold(A::default(), |mut acc, partial| {
            acc.merge(&partial);
            acc
        });

    tracing::debug!(partitions = partition_count, "merged partial accumulators");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::{prelude::prop, prop_assert_eq, proptest};

    #[test]
    fn no_partitions_gives_empty_accumulator() {
        let acc: Averager<i64> = reduce_partitioned(Vec::<Vec<i64>>::new());
        assert!(acc.is_empty());
        assert_eq!(acc.total(), 0);
    }

    #[test]
    fn empty_partitions_are_neutral() {
        let acc: Averager<i64> = reduce_partitioned(vec![vec![], vec![2, 3], vec![], vec![5, 7]]);
        assert_eq!(acc.count(), 4);
        assert_eq!(acc.total(), 17);
    }

    proptest! {
        #[test]
        fn partitioning_does_not_change_result(
            items in prop::collection::vec(-1000i64..1000, 0..200),
            cuts in prop::collection::vec(0usize..200, 0..8),
        ) {
            let mut cuts: Vec<usize> = cuts.into_iter().map(|c| c.min(items.len())).collect();
            cuts.sort();

            let mut partitions = vec![];
            let mut start = 0;
            for cut in cuts {
                partitions.push(items[start..cut].to_vec());
                start = cut;
            }
            partitions.push(items[start..].to_vec());

            let sequential = Averager::fold_from(items.iter().copied());
            let partitioned: Averager<i64> = reduce_partitioned(partitions);

            prop_assert_eq!(sequential, partitioned);
        }
    }
}
