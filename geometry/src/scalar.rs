use std::fmt::Debug;

use num_traits::{Float, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub, Zero};

/// The coordinate type of a [`Vector3`](crate::Vector3) and a
/// [`BoundingBox`](crate::BoundingBox).
///
/// All box arithmetic goes through `plus`, `minus` and `times`. Floating point scalars use
/// ordinary IEEE arithmetic. Integer scalars wrap on overflow: nothing traps and nothing is
/// promoted to a wider type, so results computed near the limits of the integer range are
/// meaningless.
pub trait Scalar: Copy + PartialOrd + Debug + Zero {
    fn plus(self, rhs: Self) -> Self;
    fn minus(self, rhs: Self) -> Self;
    fn times(self, rhs: Self) -> Self;
}

/// Scalars that can represent a negative result.
///
/// Floating point and signed integer types. Unsigned integers deliberately do not implement
/// this, so operations producing negative values are not available for them.
pub trait SignedScalar: Scalar {
    fn negated(self) -> Self;
}

/// Floating point scalars: everything that needs a square root or a division by two.
pub trait FloatScalar: SignedScalar + Float {
    fn halved(self) -> Self {
        self / (Self::one() + Self::one())
    }
}

macro_rules! float_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn plus(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn minus(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn times(self, rhs: Self) -> Self {
                self * rhs
            }
        }

        impl SignedScalar for $t {
            #[inline]
            fn negated(self) -> Self {
                -self
            }
        }

        impl FloatScalar for $t {}
    )*};
}

macro_rules! integer_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn plus(self, rhs: Self) -> Self {
                WrappingAdd::wrapping_add(&self, &rhs)
            }

            #[inline]
            fn minus(self, rhs: Self) -> Self {
                WrappingSub::wrapping_sub(&self, &rhs)
            }

            #[inline]
            fn times(self, rhs: Self) -> Self {
                WrappingMul::wrapping_mul(&self, &rhs)
            }
        }
    )*};
}

macro_rules! signed_integer_scalar {
    ($($t:ty),*) => {$(
        integer_scalar!($t);

        impl SignedScalar for $t {
            #[inline]
            fn negated(self) -> Self {
                WrappingNeg::wrapping_neg(&self)
            }
        }
    )*};
}

float_scalar!(f32, f64);
signed_integer_scalar!(i8, i16, i32, i64, i128, isize);
integer_scalar!(u8, u16, u32, u64, u128, usize);

// Comparisons that only need `PartialOrd`. With NaN involved the first argument wins.

pub(crate) fn min_of<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

pub(crate) fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

pub(crate) fn clamp_of<T: PartialOrd>(v: T, lower: T, upper: T) -> T {
    if v < lower {
        lower
    } else if v > upper {
        upper
    } else {
        v
    }
}
