use core::cmp::Ordering;

use super::{precheck, sorted_refs, Precheck};

/// Whether `a` is a permutation of `b`, i.e. both contain the same elements with the same
/// multiplicities.
///
/// Runs in O(n log n) time and allocates two vectors of references.
pub fn multiset_equal<T: Ord>(a: Option<&[T]>, b: Option<&[T]>) -> bool {
    multiset_equal_by(a, b, T::cmp)
}

/// Like [`multiset_equal`], but with a caller-supplied ordering. Two elements count as equal iff
/// `cmp` returns [`Ordering::Equal`] for them.
///
/// `cmp` has to be a total order. If it isn't, the result is unspecified.
pub fn multiset_equal_by<T, F>(a: Option<&[T]>, b: Option<&[T]>, mut cmp: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (a, b) = match precheck(a, b) {
        Precheck::Decided(result) => return result,
        Precheck::Compare(a, b) => (a, b),
    };

    let a = sorted_refs(a, &mut cmp);
    let b = sorted_refs(b, &mut cmp);

    a.iter()
        .zip(b.iter())
        .all(|(l, r)| cmp(*l, *r) == Ordering::Equal)
}
