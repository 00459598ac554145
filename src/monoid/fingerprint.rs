use core::fmt::Debug;
use core::marker::PhantomData;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::monoid::Monoid;

/// An order-insensitive digest of a multiset.
///
/// Each item is hashed by its `Debug` rendering and the digests are added as 256-bit little
/// endian integers. Addition (unlike xor) does not cancel out duplicates, so `[a, a]` and `[]`
/// get different fingerprints. Equal multisets always produce equal fingerprints; different ones
/// collide only with negligible probability, provided that `Debug` agrees with `Eq` for `T`.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MultisetFingerprint<T>(usize, [u8; 32], PhantomData<fn(&T)>);

// derives would require T: Clone + Eq, which the fingerprint never needs
impl<T> Clone for MultisetFingerprint<T> {
    fn clone(&self) -> Self {
        Self(self.0, self.1, PhantomData)
    }
}

impl<T> PartialEq for MultisetFingerprint<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl<T> Eq for MultisetFingerprint<T> {}

impl<T: Debug> MultisetFingerprint<T> {
    pub fn of(items: &[T]) -> Self {
        Self::lift_all(items)
    }

    pub fn count(&self) -> usize {
        self.0
    }

    pub fn digest(&self) -> &[u8; 32] {
        &self.1
    }
}

impl<T> Debug for MultisetFingerprint<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self(count, digest, _) = self;
        let hex_str = if f.alternate() {
            hex::encode(digest)
        } else {
            hex::encode(&digest[..4])
        };

        write!(f, "FP({count}, {hex_str})")
    }
}

impl<T: Debug> Default for MultisetFingerprint<T> {
    fn default() -> Self {
        Self::neutral()
    }
}

impl<T: Debug> Monoid for MultisetFingerprint<T> {
    type Item = T;

    fn neutral() -> Self {
        Self(0, [0; 32], PhantomData)
    }

    fn lift(item: &Self::Item) -> Self {
        let mut hasher = Sha256::default();
        hasher.update(format!("{item:?}"));
        Self(1, hasher.finalize().into(), PhantomData)
    }

    fn combine(&self, other: &Self) -> Self {
        let Self(left_count, left, _) = self;
        let Self(right_count, right, _) = other;

        let mut out = [0u8; 32];
        let mut carry = 0u16;
        for i in 0..32 {
            let sum = left[i] as u16 + right[i] as u16 + carry;
            out[i] = sum as u8;
            carry = sum >> 8;
        }

        Self(left_count.wrapping_add(*right_count), out, PhantomData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::{prelude::prop, prop_assert_eq, proptest};

    #[test]
    fn duplicates_do_not_cancel() {
        let twice = MultisetFingerprint::of(&[5u32, 5]);
        let none = MultisetFingerprint::<u32>::of(&[]);
        assert_ne!(twice.digest(), none.digest());
    }

    #[test]
    fn multiplicity_matters() {
        let left = MultisetFingerprint::of(&[1u32, 1, 2]);
        let right = MultisetFingerprint::of(&[1u32, 2, 2]);
        assert_eq!(left.count(), right.count());
        assert_ne!(left, right);
    }

    #[test]
    fn count_wraps_near_max() {
        let full = MultisetFingerprint::<u8>(usize::MAX, [0; 32], PhantomData);
        let one = MultisetFingerprint::lift(&7u8);

        let wrapped = full.combine(&one);
        assert_eq!(wrapped.count(), 0);
        assert_eq!(wrapped.digest(), one.digest());
    }

    #[test]
    fn lift_hashes_debug_rendering() {
        let expected: [u8; 32] = Sha256::digest(b"\"pear\"").into();
        assert_eq!(MultisetFingerprint::lift(&"pear").digest(), &expected);
    }

    #[test]
    fn debug_prints_short_prefix() {
        let fp = MultisetFingerprint::<u8>::neutral();
        assert_eq!(format!("{fp:?}"), "FP(0, 00000000)");
    }

    proptest! {
        #[test]
        fn order_does_not_matter(mut items in prop::collection::vec(0u16..64, 0..50), seed in 0usize..1000) {
            let before = MultisetFingerprint::of(&items);
            let len = items.len();
            if len > 0 {
                items.rotate_left(seed % len);
                items.reverse();
            }
            let after = MultisetFingerprint::of(&items);
            prop_assert_eq!(before, after);
        }

        #[test]
        fn split_and_combine(items in prop::collection::vec(0u16..64, 0..50), split in 0usize..50) {
            let split = split.min(items.len());
            let (head, tail) = items.split_at(split);
            let combined = MultisetFingerprint::of(head).combine(&MultisetFingerprint::of(tail));
            prop_assert_eq!(combined, MultisetFingerprint::of(&items));
        }
    }
}
