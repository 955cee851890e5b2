//! Scalar capabilities required of coordinate vector components.
//!
//! World-space coordinates are [`Real`] (fractional) numbers, table-space coordinates are
//! [`Integral`] numbers. Both traits are implemented for the primitive types only.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Div, Mul, Sub};

/// A fractional scalar used for world-space positions and cell sizes.
pub trait Real:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// The additive identity.
    const ZERO: Self;

    /// Round towards negative infinity.
    fn floor(self) -> Self;

    /// Widen to `f64` without loss.
    fn to_f64(self) -> f64;
}

/// An integer scalar used for cell coordinates, field sizes and flat indices.
pub trait Integral:
    Copy
    + Debug
    + Ord
    + Hash
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + 'static
{
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// Convert an already floored real into this integer type.
    ///
    /// Values outside the representable range saturate at the type's bounds and NaN becomes zero.
    fn from_floored<R: Real>(value: R) -> Self;

    /// Addition that wraps at the type's boundary instead of overflowing.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Multiplication that wraps at the type's boundary instead of overflowing.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Addition returning `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Subtraction returning `None` on overflow.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Multiplication returning `None` on overflow.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Convert to a `usize`, or `None` if negative or too large.
    fn to_usize(self) -> Option<usize>;
}

macro_rules! impl_real {
    ($($ty:ty),*) => {
        $(
            impl Real for $ty {
                const ZERO: Self = 0.0;

                #[inline]
                fn floor(self) -> Self {
                    <$ty>::floor(self)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_integral {
    ($($ty:ty),*) => {
        $(
            impl Integral for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn from_floored<R: Real>(value: R) -> Self {
                    // `as` from f64 saturates and maps NaN to 0.
                    value.to_f64() as $ty
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$ty>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }

                #[inline]
                fn to_usize(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

impl_real!(f32, f64);
impl_integral!(i8, i16, i32, i64, isize);
