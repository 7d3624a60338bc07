//! A complex number value type for embedding in numeric code.
//!
//! [Complex] stores the rectangular form `(re, im)` and offers the polar form `(rho, theta)` as a computed view.
//! Operations, which are not defined everywhere (division, logarithm, negative and complex powers),
//! don't return infinities or NaN at their singularities, but an explicit [DomainError].
//!
//! ```
//! use lzcomplex::*;
//!
//! let c = Complex::new(2.0, 4.0) + Complex::new(1.0, -1.0);
//! assert_eq!(c, Complex::new(3.0, 3.0));
//! assert_eq!(Complex::new(3.0, 4.0).abs(), 5.0);
//! assert_eq!(Complex::new(1.0, 0.0).checked_div(&Complex::zero()), Err(DomainError::DivisionByZero));
//! assert_eq!(format!("{}", Complex::new(2.0, -4.0)), "2 - 4i");
//! ```
//!
//! The postfix operators of the usual notation are named methods here:
//! - `c*` (conjugate) is [Conjugate::conj]
//! - `c**` (square) is [Complex::square]
//! - `c^n` is [PowerU::powu] / [PowerI::powi] for integers, [Complex::powf] for reals and [Complex::powc] for complex exponents.
//!
//! # Features
//! - `std` (default): use the float functions from `std`. Also enables width/alignment for the [Display](core::fmt::Display) output.
//! - `libm`: use the float functions from `libm` in `no_std` builds.
//! - `bytemuck`: `Zeroable` and `Pod` for `Complex<T>`.
//! - `rand`: random distributions in [random].
//! - `approx`: `AbsDiffEq`, `RelativeEq` and `UlpsEq` for `Complex<T>`.

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature has to be enabled for the float functions");

mod num;
pub mod complex;
mod error;
mod power;
#[cfg(any(test, feature = "rand"))]
pub mod random;

pub use num::*;
pub use error::*;
pub use power::*;
pub use complex::{conjugate, log, modulus, sqrt, Complex, Complex32, Complex64};
