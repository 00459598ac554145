//! Order-insensitive comparison of two sequences.
//!
//! Sequences are passed as `Option<&[T]>`. `None` means that no sequence was provided at all,
//! which is different from an empty sequence:
//!
//! - `None` and `None` are equivalent,
//! - `None` and `Some(_)` are never equivalent, not even if the slice is empty,
//! - two present slices are compared according to the policy.
//!
//! Neither policy mutates the caller's slices. The sort-based checks sort vectors of references
//! instead.

pub mod diff;
pub mod multiset;
pub mod unique;

pub use diff::{multiset_diff, MultisetDiff};
pub use multiset::{multiset_equal, multiset_equal_by};
pub use unique::{unique_set_equal, unique_set_equal_by};

/// The way two sequences are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equivalence {
    /// Same elements with the same multiplicities, in any order.
    Multiset,
    /// Same distinct elements, in any order. Duplicates are collapsed before comparing, but
    /// sequences of different length are still rejected.
    UniqueSet,
}

impl Equivalence {
    pub fn holds<T: Ord>(self, a: Option<&[T]>, b: Option<&[T]>) -> bool {
        match self {
            Equivalence::Multiset => multiset_equal(a, b),
            Equivalence::UniqueSet => unique_set_equal(a, b),
        }
    }
}

/// Outcome of the checks every policy runs before looking at the elements.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Precheck<'a, T> {
    /// Absence or a length mismatch already decides the comparison.
    Decided(bool),
    /// Both sequences are present and equally long.
    Compare(&'a [T], &'a [T]),
}

pub(crate) fn precheck<'a, T>(a: Option<&'a [T]>, b: Option<&'a [T]>) -> Precheck<'a, T> {
    match (a, b) {
        (None, None) => {
            tracing::trace!("both sequences absent");
            Precheck::Decided(true)
        }
        (None, Some(_)) | (Some(_), None) => {
            tracing::trace!("exactly one sequence absent");
            Precheck::Decided(false)
        }
        (Some(a), Some(b)) if a.len() != b.len() => {
            tracing::trace!(left = a.len(), right = b.len(), "length mismatch");
            Precheck::Decided(false)
        }
        (Some(a), Some(b)) => Precheck::Compare(a, b),
    }
}

/// Returns references to the items of `items`, sorted with `cmp`.
pub(crate) fn sorted_refs<'a, T, F>(items: &'a [T], cmp: &mut F) -> Vec<&'a T>
where
    F: FnMut(&T, &T) -> core::cmp::Ordering,
{
    let mut refs: Vec<&'a T> = items.iter().collect();
    refs.sort_by(|l, r| cmp(*l, *r));
    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policies_disagree_on_multiplicity() {
        let a = [1, 2, 3, 3];
        let b = [3, 1, 2, 2];

        assert!(!Equivalence::Multiset.holds(Some(&a[..]), Some(&b[..])));
        assert!(Equivalence::UniqueSet.holds(Some(&a[..]), Some(&b[..])));
    }

    #[test]
    fn absence_rules() {
        for policy in [Equivalence::Multiset, Equivalence::UniqueSet] {
            assert!(policy.holds::<u8>(None, None));
            assert!(!policy.holds::<u8>(None, Some(&[])));
            assert!(!policy.holds::<u8>(Some(&[]), None));
            assert!(policy.holds::<u8>(Some(&[]), Some(&[])));
        }
    }

    #[test]
    fn precheck_leaves_equal_lengths_open() {
        let (a, b) = ([1, 2], [3, 4]);
        assert_eq!(
            precheck(Some(&a[..]), Some(&b[..])),
            Precheck::Compare(&a[..], &b[..])
        );
        assert_eq!(
            precheck(Some(&[1][..]), Some(&[1, 1][..])),
            Precheck::Decided(false)
        );
    }

    #[test]
    fn sorted_refs_outlive_the_comparator() {
        let items = [3, 1, 2];
        let sorted = {
            let mut by_value = i32::cmp;
            sorted_refs(&items, &mut by_value)
        };
        assert_eq!(sorted, vec![&1, &2, &3]);
        assert_eq!(items, [3, 1, 2]);
    }
}
