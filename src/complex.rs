//! implements the `Complex<T>` value type, stored in rectangular form `(re, im)`
//! with the polar form `(rho, theta)` available as a computed view.

use crate::{Conjugate, DomainError, DomainResult, One, Real, Recip, Zero};
use core::fmt;
use core::iter::{Product, Sum};
use core::ops::*;
use take_mut::take;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

impl<T> Complex<T> {
    /// Create a complex number from its rectangular form. All other constructors are based on this one.
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: Zero> Complex<T> {
    pub fn real(re: T) -> Self {
        Self {
            re,
            im: Zero::zero(),
        }
    }
    pub fn imag(im: T) -> Self {
        Self {
            re: Zero::zero(),
            im,
        }
    }
}

impl<T: Zero + Clone> Complex<T> {
    /// Narrow to a real number. This only succeeds if the imaginary part is exactly zero.
    pub fn try_to_real(&self) -> Option<T> {
        if self.im.is_zero() {
            Some(self.re.clone())
        } else {
            None
        }
    }
}

impl<T: Zero> Zero for Complex<T> {
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
    fn zero() -> Self {
        Self {
            re: Zero::zero(),
            im: Zero::zero(),
        }
    }
}

impl<T: Clone + Zero + One + Sub<Output = T>> One for Complex<T> {
    fn is_one(&self) -> bool {
        self.re.is_one() && self.im.is_zero()
    }
    fn one() -> Self {
        Self {
            re: One::one(),
            im: Zero::zero(),
        }
    }
}

impl<T: Zero + One> Complex<T> {
    pub fn i() -> Self {
        Self {
            re: Zero::zero(),
            im: One::one(),
        }
    }
}

impl<T: Neg<Output = T>> Complex<T> {
    /// Multiply with i.
    pub fn mul_i(self) -> Self {
        Self {
            re: -self.im,
            im: self.re,
        }
    }
}

// Safety: `Complex<T>` is `repr(C)` and contains only instances of `T`, so there
// is no *added* padding. Thus, if `T: Zeroable`, `Complex<T>` is also `Zeroable`
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Complex<T> {}

// Safety: same layout argument as for `Zeroable`.
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Complex<T> {}

impl<T: Zero> From<T> for Complex<T> {
    fn from(value: T) -> Self {
        Self::real(value)
    }
}

impl<T: Neg<Output = T>> Neg for Complex<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

macro_rules! impl_add {
    ($Add:ident, $add:ident) => {
        impl<T: $Add<T, Output = T>> $Add<Complex<T>> for Complex<T> {
            type Output = Complex<T>;
            fn $add(self, rhs: Complex<T>) -> Self::Output {
                Self {
                    re: self.re.$add(rhs.re),
                    im: self.im.$add(rhs.im),
                }
            }
        }
        impl<'a, T: Clone + $Add<T, Output = T>> $Add<&'a Complex<T>> for &'a Complex<T> {
            type Output = Complex<T>;
            fn $add(self, rhs: &'a Complex<T>) -> Self::Output {
                Complex {
                    re: self.re.clone().$add(rhs.re.clone()),
                    im: self.im.clone().$add(rhs.im.clone()),
                }
            }
        }
    };
}
impl_add!(Add, add);
impl_add!(Sub, sub);

impl<T: Clone + Add<Output = T> + Sub<Output = T> + Mul<Output = T>> Mul<Complex<T>>
    for Complex<T>
{
    type Output = Complex<T>;
    fn mul(self, rhs: Complex<T>) -> Self::Output {
        &self * &rhs
    }
}
impl<'a, T: Clone + Add<Output = T> + Sub<Output = T> + Mul<Output = T>> Mul<&'a Complex<T>>
    for &'a Complex<T>
{
    type Output = Complex<T>;
    fn mul(self, rhs: &'a Complex<T>) -> Self::Output {
        Complex {
            re: self.re.clone() * rhs.re.clone() - self.im.clone() * rhs.im.clone(),
            im: self.im.clone() * rhs.re.clone() + self.re.clone() * rhs.im.clone(),
        }
    }
}

macro_rules! impl_op_real {
    ($Add:ident, $add:ident, $im:ident, $rhs:ident => $im_expr:expr) => {
        impl<T: Clone + $Add<T, Output = T>> $Add<T> for Complex<T> {
            type Output = Complex<T>;
            fn $add(self, $rhs: T) -> Self::Output {
                let $im = self.im;
                Self {
                    re: self.re.$add($rhs.clone()),
                    im: $im_expr,
                }
            }
        }
        impl<'a, T: Clone + $Add<T, Output = T>> $Add<&'a T> for &'a Complex<T> {
            type Output = Complex<T>;
            fn $add(self, $rhs: &'a T) -> Self::Output {
                let $im = self.im.clone();
                let $rhs = $rhs.clone();
                Complex {
                    re: self.re.clone().$add($rhs.clone()),
                    im: $im_expr,
                }
            }
        }
        // can't implement the reverse, because Rust doesn't allow it.
    };
}
impl_op_real!(Add, add, im, rhs => im);
impl_op_real!(Sub, sub, im, rhs => im);
impl_op_real!(Mul, mul, im, rhs => im * rhs);

impl<T: Real> Complex<T> {
    /// The quotient for a nonzero divisor, scaled by its larger component (Smith's algorithm),
    /// so `re² + im²` is never formed and can't overflow or underflow.
    fn div_by(&self, rhs: &Self) -> Self {
        if rhs.re.abs() >= rhs.im.abs() {
            let r = rhs.im / rhs.re;
            let den = rhs.re + rhs.im * r;
            Self {
                re: (self.re + self.im * r) / den,
                im: (self.im - self.re * r) / den,
            }
        } else {
            let r = rhs.re / rhs.im;
            let den = rhs.re * r + rhs.im;
            Self {
                re: (self.re * r + self.im) / den,
                im: (self.im * r - self.re) / den,
            }
        }
    }

    /// Divide by `rhs`, or return [DomainError::DivisionByZero] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> DomainResult<Self> {
        if rhs.is_zero() {
            return Err(DomainError::DivisionByZero.traced("div"));
        }
        Ok(self.div_by(rhs))
    }
}

/// # Panics
/// If the divisor is zero. Use [Complex::checked_div] to handle that case.
impl<T: Real> Div for Complex<T> {
    type Output = Complex<T>;
    fn div(self, rhs: Complex<T>) -> Self::Output {
        &self / &rhs
    }
}
impl<'a, T: Real> Div<&'a Complex<T>> for &'a Complex<T> {
    type Output = Complex<T>;
    fn div(self, rhs: &'a Complex<T>) -> Self::Output {
        assert!(!rhs.is_zero(), "attempt to divide by zero");
        self.div_by(rhs)
    }
}

impl<T: Real> Recip for Complex<T> {
    fn checked_recip(&self) -> DomainResult<Self> {
        if self.is_zero() {
            return Err(DomainError::DivisionByZero.traced("recip"));
        }
        Ok(Self::one().div_by(self))
    }
}

macro_rules! forward_assign_impl {
    ($($AddAssign:ident, ($($Add:ident),*), $add_assign:ident, $add:ident),+) => {
        $(impl<T: Clone $(+ $Add<Output = T>)+> $AddAssign for Complex<T> {
            fn $add_assign(&mut self, rhs: Complex<T>) {
                take(self, |x| x.$add(rhs));
            }
        }
        impl<T: Clone $(+ $Add<Output = T>)+> $AddAssign<T> for Complex<T> {
            fn $add_assign(&mut self, rhs: T) {
                take(self, |x| x.$add(rhs));
            }
        }
        impl<'a, T: Clone $(+ $Add<Output = T>)+> $AddAssign<&'a Complex<T>> for Complex<T> {
            fn $add_assign(&mut self, rhs: &'a Complex<T>) {
                take(self, |x| (&x).$add(rhs));
            }
        })+
    };
}
forward_assign_impl!(
    AddAssign,
    (Add),
    add_assign,
    add,
    SubAssign,
    (Sub),
    sub_assign,
    sub,
    MulAssign,
    (Add, Mul, Sub),
    mul_assign,
    mul
);

// not using `take` here, as it aborts if the closure panics on a zero divisor.
impl<T: Real> DivAssign for Complex<T> {
    fn div_assign(&mut self, rhs: Complex<T>) {
        *self = *self / rhs;
    }
}
impl<'a, T: Real> DivAssign<&'a Complex<T>> for Complex<T> {
    fn div_assign(&mut self, rhs: &'a Complex<T>) {
        *self = &*self / rhs;
    }
}

impl<T: Zero> Sum for Complex<T> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::zero(), |acc, c| acc + c)
    }
}
impl<'a, T: Clone + Zero> Sum<&'a Complex<T>> for Complex<T> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Complex<T>>,
    {
        iter.fold(Self::zero(), |acc, c| acc + c.clone())
    }
}

impl<T: Clone + Zero + One + Sub<Output = T>> Product for Complex<T> {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::one(), |acc, c| acc * c)
    }
}
impl<'a, T: Clone + Zero + One + Sub<Output = T>> Product<&'a Complex<T>> for Complex<T> {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Complex<T>>,
    {
        iter.fold(Self::one(), |acc, c| &acc * c)
    }
}

impl<T: Clone + Neg<Output = T>> Conjugate for Complex<T> {
    #[inline(always)]
    fn conj(&self) -> Self {
        Complex {
            re: self.re.clone(),
            im: -self.im.clone(),
        }
    }
}

impl<T: Real> Complex<T> {
    /// absolute value squared, `re² + im²`
    #[inline(always)]
    pub fn abs_sqr(&self) -> T {
        self.re * self.re + self.im * self.im
    }
    /// The modulus (rho) `sqrt(re² + im²)`, computed with `hypot` to stay finite for huge
    /// and nonzero for tiny components.
    #[inline(always)]
    pub fn abs(&self) -> T {
        self.re.hypot(&self.im)
    }
    /// The principal argument (theta) in `(-π, π]`. The argument of zero is zero.
    pub fn arg(&self) -> T {
        let theta = self.im.atan2(&self.re);
        // atan2 gives -π for a negative zero imaginary part
        if theta == -T::PI {
            T::PI
        } else {
            theta
        }
    }
    /// Convert to polar form (rho, theta), such that `self = rho * exp(i * theta)`.
    pub fn to_polar(&self) -> (T, T) {
        (self.abs(), self.arg())
    }
    /// Convert a polar representation `rho * exp(i * theta)` into a complex number.
    /// A negative `rho` reflects the result through the origin.
    pub fn from_polar(rho: T, theta: T) -> Self {
        Self::new(rho * theta.cos(), rho * theta.sin())
    }
    /// Compute `cis(phase) := exp(i * phase)`, which is the more efficient version of `from_polar(1, phase)`.
    pub fn cis(phase: T) -> Self {
        Self::new(phase.cos(), phase.sin())
    }

    /// Set the modulus while keeping the current argument.
    ///
    /// The argument is read before the components are overwritten, so
    /// `z.set_abs(r); z.set_abs(s)` keeps the argument of the original `z` (unless `r` is zero).
    pub fn set_abs(&mut self, rho: T) {
        let theta = self.arg();
        *self = Self::from_polar(rho, theta);
    }
    /// Set the argument while keeping the current modulus.
    pub fn set_arg(&mut self, theta: T) {
        let rho = self.abs();
        *self = Self::from_polar(rho, theta);
    }
    /// Copy of `self` with the modulus replaced by `rho`.
    #[must_use]
    pub fn with_abs(&self, rho: T) -> Self {
        Self::from_polar(rho, self.arg())
    }
    /// Copy of `self` with the argument replaced by `theta`.
    #[must_use]
    pub fn with_arg(&self, theta: T) -> Self {
        Self::from_polar(self.abs(), theta)
    }

    /// The square `self * self`, computed as `(re² - im², 2 re im)`.
    #[must_use]
    pub fn square(&self) -> Self {
        let p = self.re * self.im;
        Self {
            re: self.re * self.re - self.im * self.im,
            im: p + p,
        }
    }

    #[must_use]
    pub fn exp(&self) -> Self {
        let r = self.re.exp();
        if r.is_zero() {
            return Self::zero();
        }
        if self.im.is_zero() {
            return Self::real(r);
        }
        Self {
            re: r * self.im.cos(),
            im: r * self.im.sin(),
        }
    }

    /// Computes the principal value of natural logarithm of `self`.
    ///
    /// This function has one branch cut:
    ///
    /// * `(-∞, 0]`, continuous from above.
    ///
    /// The branch satisfies `-π < arg(ln(z)) ≤ π`.
    /// Fails with [DomainError::LogarithmOfZero] for zero.
    pub fn ln(&self) -> DomainResult<Self> {
        if self.is_zero() {
            return Err(DomainError::LogarithmOfZero.traced("ln"));
        }
        let (rho, theta) = self.to_polar();
        Ok(Self {
            re: rho.ln(),
            im: theta,
        })
    }

    /// the power `rho^p * exp(i theta p)` without the check at zero.
    #[inline(always)]
    fn pow_polar(&self, exp: T) -> Self {
        let (rho, theta) = self.to_polar();
        Self::from_polar(rho.powf(&exp), theta * exp)
    }

    /// Raises `self` to a real power on the principal branch, `rho^p * exp(i theta p)`.
    ///
    /// `0^0 = 1` and `0^p = 0` for `p > 0`. Negative powers of zero fail with [DomainError::DivisionByZero].
    pub fn powf(&self, exp: T) -> DomainResult<Self> {
        if exp < T::zero() && self.is_zero() {
            return Err(DomainError::DivisionByZero.traced("powf"));
        }
        Ok(self.pow_polar(exp))
    }

    /// Computes the principal square root `self^0.5` with modulus `sqrt(rho)` and argument `theta/2`.
    ///
    /// This function has one branch cut:
    ///
    /// * `(-∞, 0)`, continuous from above.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        let one = T::one();
        self.pow_polar(one / (one + one))
    }

    /// Raises `self` to a complex power, `exp(b ln(self))`.
    ///
    /// For a zero base, `0^0 = 1` and `0^b = 0` for `Re(b) > 0`.
    /// All other powers of zero fail with [DomainError::DivisionByZero].
    pub fn powc(&self, exp: &Self) -> DomainResult<Self> {
        if exp.is_zero() {
            return Ok(Self::one());
        }
        if self.is_zero() {
            return if exp.re > T::zero() {
                Ok(Self::zero())
            } else {
                Err(DomainError::DivisionByZero.traced("powc"))
            };
        }
        Ok((&self.ln()? * exp).exp())
    }
}

/// The modulus of `z`, see [Complex::abs].
pub fn modulus<T: Real>(z: Complex<T>) -> T {
    z.abs()
}

/// The complex conjugate of `z`, see [Conjugate::conj].
pub fn conjugate<T: Real>(z: Complex<T>) -> Complex<T> {
    z.conj()
}

/// The principal natural logarithm of `z`, see [Complex::ln].
pub fn log<T: Real>(z: Complex<T>) -> DomainResult<Complex<T>> {
    z.ln()
}

/// The principal square root of `z`, see [Complex::sqrt].
pub fn sqrt<T: Real>(z: Complex<T>) -> Complex<T> {
    z.sqrt()
}

#[cfg(any(test, feature = "approx"))]
mod approx_impl {
    use super::Complex;
    use approx::{AbsDiffEq, RelativeEq, UlpsEq};

    impl<T: AbsDiffEq> AbsDiffEq for Complex<T>
    where
        T::Epsilon: Clone,
    {
        type Epsilon = T::Epsilon;
        fn default_epsilon() -> Self::Epsilon {
            T::default_epsilon()
        }
        fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
            self.re.abs_diff_eq(&other.re, epsilon.clone()) && self.im.abs_diff_eq(&other.im, epsilon)
        }
    }

    impl<T: RelativeEq> RelativeEq for Complex<T>
    where
        T::Epsilon: Clone,
    {
        fn default_max_relative() -> Self::Epsilon {
            T::default_max_relative()
        }
        fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
            self.re.relative_eq(&other.re, epsilon.clone(), max_relative.clone())
                && self.im.relative_eq(&other.im, epsilon, max_relative)
        }
    }

    impl<T: UlpsEq> UlpsEq for Complex<T>
    where
        T::Epsilon: Clone,
    {
        fn default_max_ulps() -> u32 {
            T::default_max_ulps()
        }
        fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
            self.re.ulps_eq(&other.re, epsilon.clone(), max_ulps) && self.im.ulps_eq(&other.im, epsilon, max_ulps)
        }
    }
}

#[macro_export]
macro_rules! complex {
    ($x:literal + $y:literal i) => {
        $crate::Complex::new($x, $y)
    };
    ($x:literal - $y:literal i) => {
        $crate::Complex::new($x, -$y)
    };
    (($x:expr) + ($y:expr) i) => {
        $crate::Complex::new($x, $y)
    };
    (($x:expr) - ($y:expr) i) => {
        $crate::Complex::new($x, -$y)
    };
    ($x:literal i) => {
        $crate::Complex::new($crate::Zero::zero(), $x)
    };
    (($x:expr) i) => {
        $crate::Complex::new($crate::Zero::zero(), $x)
    };
    ($x:expr) => {
        $crate::Complex::from($x)
    };
}

#[cfg(feature = "std")]
#[inline(always)]
// Currently, we can only apply width using an intermediate `String` (and thus `std`)
pub(crate) fn fmt_complex(f: &mut fmt::Formatter<'_>, complex: fmt::Arguments<'_>) -> fmt::Result {
    use std::string::ToString;
    if let Some(width) = f.width() {
        let s = complex.to_string();
        match f.align() {
            None | Some(fmt::Alignment::Right) => write!(f, "{s:>0$}", width),
            Some(fmt::Alignment::Center) => write!(f, "{s:^0$}", width),
            Some(fmt::Alignment::Left) => write!(f, "{s:<0$}", width),
        }
    } else {
        write!(f, "{}", complex)
    }
}

#[cfg(not(feature = "std"))]
#[inline(always)]
pub(crate) fn fmt_complex(f: &mut fmt::Formatter<'_>, complex: fmt::Arguments<'_>) -> fmt::Result {
    write!(f, "{}", complex)
}

/// One component of the output, carrying the precision of the outer formatter.
struct Part<T> {
    value: T,
    precision: Option<usize>,
}

// Renders `0`, `re`, `imi`, `re + imi` or `re - |im|i`, depending on which parts are zero.
macro_rules! impl_display {
    ($Display: ident, $s: literal) => {
        impl<T: fmt::$Display> fmt::$Display for Part<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.precision {
                    Some(prec) => write!(f, concat!("{:.1$", $s, "}"), self.value, prec),
                    None => write!(f, concat!("{:", $s, "}"), self.value),
                }
            }
        }
        impl<T: Real + fmt::$Display> fmt::$Display for Complex<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let precision = f.precision();
                match (self.re.is_zero(), self.im.is_zero()) {
                    (true, true) => fmt_complex(f, format_args!("0")),
                    (false, true) => fmt_complex(
                        f,
                        format_args!(concat!("{:", $s, "}"), Part { value: self.re, precision }),
                    ),
                    (true, false) => fmt_complex(
                        f,
                        format_args!(concat!("{:", $s, "}i"), Part { value: self.im, precision }),
                    ),
                    (false, false) => {
                        let (sign, im) = if self.im < T::zero() {
                            ("-", -self.im)
                        } else {
                            ("+", self.im)
                        };
                        fmt_complex(
                            f,
                            format_args!(
                                concat!("{:", $s, "} {} {:", $s, "}i"),
                                Part { value: self.re, precision },
                                sign,
                                Part { value: im, precision },
                            ),
                        )
                    }
                }
            }
        }
    };
}
impl_display!(Display, "");
impl_display!(LowerExp, "e");
impl_display!(UpperExp, "E");
