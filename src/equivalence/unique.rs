use core::cmp::Ordering;
use std::collections::BTreeSet;

use super::{precheck, sorted_refs, Precheck};

/// Whether `a` and `b` contain the same distinct elements.
///
/// Duplicates are collapsed before comparing, so `[1, 1, 2]` and `[1, 2, 2]` are equal here,
/// unlike with [`super::multiset_equal`]. Sequences of different length are still rejected
/// before deduplication: `[1, 2]` and `[1, 1, 2]` are not equal.
pub fn unique_set_equal<T: Ord>(a: Option<&[T]>, b: Option<&[T]>) -> bool {
    let (a, b) = match precheck(a, b) {
        Precheck::Decided(result) => return result,
        Precheck::Compare(a, b) => (a, b),
    };

    let a: BTreeSet<&T> = a.iter().collect();
    let b: BTreeSet<&T> = b.iter().collect();

    a == b
}

/// Like [`unique_set_equal`], but with a caller-supplied ordering. Two elements count as equal
/// iff `cmp` returns [`Ordering::Equal`] for them.
///
/// `cmp` has to be a total order. If it isn't, the result is unspecified.
pub fn unique_set_equal_by<T, F>(a: Option<&[T]>, b: Option<&[T]>, mut cmp: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (a, b) = match precheck(a, b) {
        Precheck::Decided(result) => return result,
        Precheck::Compare(a, b) => (a, b),
    };

    let mut a = sorted_refs(a, &mut cmp);
    let mut b = sorted_refs(b, &mut cmp);
    a.dedup_by(|r, l| cmp(*l, *r) == Ordering::Equal);
    b.dedup_by(|r, l| cmp(*l, *r) == Ordering::Equal);

    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|(l, r)| cmp(*l, *r) == Ordering::Equal)
}
