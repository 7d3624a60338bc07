use crate::{DomainError, DomainResult};
use core::{fmt::Debug, ops::*};

/// Defines an additive identity element for `Self`.
///
/// # Laws
///
/// ```text
/// a + 0 = a       ∀ a ∈ Self
/// 0 + a = a       ∀ a ∈ Self
/// ```
pub trait Zero: Sized + Add<Self, Output = Self> {
    /// Returns the additive identity element of `Self`, `0`.
    fn zero() -> Self;

    /// Returns `true` if `self` is equal to the additive identity.
    fn is_zero(&self) -> bool;
}

/// Defines a multiplicative identity element for `Self`.
///
/// # Laws
///
/// ```text
/// a * 1 = a       ∀ a ∈ Self
/// 1 * a = a       ∀ a ∈ Self
/// ```
pub trait One: Sized + Mul<Self, Output = Self> {
    /// Returns the multiplicative identity element of `Self`, `1`.
    fn one() -> Self;

    /// Returns `true` if `self` is equal to the multiplicative identity.
    fn is_one(&self) -> bool;
}

macro_rules! zero_one_impl {
    ($($t:ty),+; $z:expr, $o:expr) => {
        $(impl Zero for $t {
            #[inline(always)]
            fn zero() -> $t {
                $z
            }
            #[inline(always)]
            fn is_zero(&self) -> bool {
                *self == $z
            }
        }
        impl One for $t {
            #[inline(always)]
            fn one() -> $t {
                $o
            }
            #[inline(always)]
            fn is_one(&self) -> bool {
                *self == $o
            }
        })+
    };
}
zero_one_impl!(f32, f64; 0.0, 1.0);

/// General complex conjugate trait. Real types are their own conjugate.
pub trait Conjugate {
    /// complex conjugate of the value
    #[must_use]
    fn conj(&self) -> Self;
}
macro_rules! impl_conjugate_real {
    ($($type:ty),+) => {
        $(impl Conjugate for $type {
            #[inline(always)]
            fn conj(&self) -> Self {
                *self
            }
        })+
    };
}
impl_conjugate_real!(f32, f64);

/// Multiplicative inverse, which is undefined for zero.
pub trait Recip: Sized {
    /// Returns `1 / self` or [DomainError::DivisionByZero] if `self` is zero.
    fn checked_recip(&self) -> DomainResult<Self>;
}

/// A real floating point scalar, which can be used as the component type of a [Complex](crate::Complex).
pub trait Real:
    Copy
    + Debug
    + PartialOrd
    + Zero
    + One
    + Neg<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
{
    /// Archimedes' constant (π)
    const PI: Self;
    #[must_use]
    fn sqrt(&self) -> Self;
    #[must_use]
    fn abs(&self) -> Self;
    #[must_use]
    fn sin(&self) -> Self;
    #[must_use]
    fn cos(&self) -> Self;
    /// the four quadrant arctangent of `self` (y) and `x`, in `[-π, π]`.
    /// `sqrt(self² + y²)` without intermediate overflow or underflow.
    #[must_use]
    fn hypot(&self, y: &Self) -> Self;
    #[must_use]
    fn atan2(&self, x: &Self) -> Self;
    #[must_use]
    fn exp(&self) -> Self;
    /// natural logarithm
    #[must_use]
    fn ln(&self) -> Self;
    #[must_use]
    fn powf(&self, exp: &Self) -> Self;
}

macro_rules! forward_math_impl {
    ($type:ident, $f:ident, $libm:ident) => {
        #[inline(always)]
        fn $f(&self) -> Self {
            #[cfg(feature = "std")]
            {
                <$type>::$f(*self)
            }
            #[cfg(not(feature = "std"))]
            {
                libm::Libm::<$type>::$libm(*self)
            }
        }
    };
}
macro_rules! real_float_impl {
    ($($type:ident),+) => {
        $(impl Real for $type {
            const PI: Self = core::$type::consts::PI;
            forward_math_impl!($type, sqrt, sqrt);
            forward_math_impl!($type, abs, fabs);
            forward_math_impl!($type, sin, sin);
            forward_math_impl!($type, cos, cos);
            forward_math_impl!($type, exp, exp);
            forward_math_impl!($type, ln, log);
            #[inline(always)]
            fn hypot(&self, y: &Self) -> Self {
                #[cfg(feature = "std")]
                { <$type>::hypot(*self, *y) }
                #[cfg(not(feature = "std"))]
                { libm::Libm::<$type>::hypot(*self, *y) }
            }
            #[inline(always)]
            fn atan2(&self, x: &Self) -> Self {
                #[cfg(feature = "std")]
                { <$type>::atan2(*self, *x) }
                #[cfg(not(feature = "std"))]
                { libm::Libm::<$type>::atan2(*self, *x) }
            }
            #[inline(always)]
            fn powf(&self, exp: &Self) -> Self {
                #[cfg(feature = "std")]
                { <$type>::powf(*self, *exp) }
                #[cfg(not(feature = "std"))]
                { libm::Libm::<$type>::pow(*self, *exp) }
            }
        }
        impl Recip for $type {
            fn checked_recip(&self) -> DomainResult<Self> {
                if self.is_zero() {
                    return Err(DomainError::DivisionByZero.traced("recip"));
                }
                Ok(1.0 / *self)
            }
        })+
    };
}
real_float_impl!(f32, f64);
