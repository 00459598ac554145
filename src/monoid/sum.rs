use core::fmt::Debug;

use serde::{Deserialize, Serialize};

use super::Monoid;

/// A numeric value that can be summed.
///
/// Integer addition wraps on overflow. Wrapping addition is still associative and commutative,
/// so splitting the input never changes the total. Float addition follows IEEE rules, so
/// infinities and NaN propagate like they would in a plain loop.
pub trait Summable: Copy + Debug + PartialEq {
    fn zero() -> Self;
    fn add(self, other: Self) -> Self;
    fn to_f64(self) -> f64;
}

macro_rules! impl_Summable_int {
    ($type:ty) => {
        impl $crate::monoid::sum::Summable for $type {
            fn zero() -> Self {
                0
            }

            fn add(self, other: Self) -> Self {
                self.wrapping_add(other)
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_Summable_int!(u8);
impl_Summable_int!(u16);
impl_Summable_int!(u32);
impl_Summable_int!(u64);
impl_Summable_int!(u128);
impl_Summable_int!(usize);
impl_Summable_int!(i8);
impl_Summable_int!(i16);
impl_Summable_int!(i32);
impl_Summable_int!(i64);
impl_Summable_int!(i128);
impl_Summable_int!(isize);

macro_rules! impl_Summable_float {
    ($type:ty) => {
        impl $crate::monoid::sum::Summable for $type {
            fn zero() -> Self {
                0.0
            }

            fn add(self, other: Self) -> Self {
                self + other
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_Summable_float!(f32);
impl_Summable_float!(f64);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SumMonoid<V: Summable>(pub V);

impl<V: Summable> SumMonoid<V> {
    pub fn value(&self) -> V {
        self.0
    }
}

impl<V: Summable> Default for SumMonoid<V> {
    fn default() -> Self {
        SumMonoid(V::zero())
    }
}

impl<V: Summable> Monoid for SumMonoid<V> {
    type Item = V;

    fn neutral() -> Self {
        SumMonoid(V::zero())
    }

    fn lift(item: &Self::Item) -> Self {
        SumMonoid(*item)
    }

    fn combine(&self, other: &Self) -> Self {
        let (SumMonoid(lhs), SumMonoid(rhs)) = (self, other);
        SumMonoid(lhs.add(*rhs))
    }
}
