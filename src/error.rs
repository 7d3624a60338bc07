//! Explicit error states of the partially defined operations.

use thiserror::Error;

/// Result of an operation, which is undefined on part of its domain.
pub type DomainResult<T> = Result<T, DomainError>;

/// The mathematical result of an operation is undefined for its arguments.
///
/// Narrowing a complex number to a real one is not an error, see [Complex::try_to_real](crate::Complex::try_to_real).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainError {
    /// The divisor (or the base of a negative power) has modulus zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The natural logarithm was taken of zero.
    #[error("logarithm of zero")]
    LogarithmOfZero,
}

impl DomainError {
    #[inline]
    pub(crate) fn traced(self, operation: &'static str) -> Self {
        log::trace!("{operation}: {self}");
        self
    }
}
