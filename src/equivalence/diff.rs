use core::cmp::Ordering;

use super::sorted_refs;

/// The elements by which two sequences differ as multisets.
///
/// An element that occurs three times on the left and once on the right shows up twice in
/// `only_left`. Both lists are sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultisetDiff<'a, T> {
    only_left: Vec<&'a T>,
    only_right: Vec<&'a T>,
}

impl<'a, T> MultisetDiff<'a, T> {
    pub fn only_left(&self) -> &[&'a T] {
        &self.only_left
    }

    pub fn only_right(&self) -> &[&'a T] {
        &self.only_right
    }

    /// Whether the two sequences were permutations of each other.
    pub fn is_empty(&self) -> bool {
        self.only_left.is_empty() && self.only_right.is_empty()
    }
}

/// Computes what `a` has in excess of `b` and vice versa, counting multiplicities.
///
/// `multiset_diff(a, b).is_empty()` agrees with `multiset_equal(Some(a), Some(b))`.
pub fn multiset_diff<'a, T: Ord>(a: &'a [T], b: &'a [T]) -> MultisetDiff<'a, T> {
    let a = sorted_refs(a, &mut T::cmp);
    let b = sorted_refs(b, &mut T::cmp);

    let mut only_left = vec![];
    let mut only_right = vec![];

    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match T::cmp(a[i], b[j]) {
            Ordering::Less => {
                only_left.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                only_right.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    only_left.extend_from_slice(&a[i..]);
    only_right.extend_from_slice(&b[j..]);

    MultisetDiff {
        only_left,
        only_right,
    }
}
