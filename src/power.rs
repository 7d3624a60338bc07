use crate::{DomainResult, One, Recip};
use core::ops::Mul;

pub trait PowerU {
    /// Compute the power with an unsigned integer exponent, where `x^0 = 1`.
    ///
    /// Runtime complexity: O(log n) calls of `mul`.
    fn powu(&self, n: u64) -> Self;
}

impl<T: Clone + One> PowerU for T
where
    for<'a> &'a Self: Mul<&'a Self, Output = Self>,
{
    fn powu(&self, n: u64) -> Self {
        if n == 0 {
            return Self::one();
        }
        // the highest set bit is accounted for by starting at `self`
        let mut p = self.clone();
        let mut mask = (1u64 << (63 - n.leading_zeros())) >> 1;
        while mask != 0 {
            p = &p * &p;
            if (n & mask) != 0 {
                p = &p * self;
            }
            mask >>= 1;
        }
        p
    }
}

pub trait PowerI: Sized {
    /// Compute the power with a signed integer exponent.
    /// Negative exponents are computed as the power of the reciprocal,
    /// which fails with [DomainError::DivisionByZero](crate::DomainError::DivisionByZero) for zero.
    ///
    /// Runtime complexity: O(log n) calls of `mul`.
    fn powi(&self, n: i64) -> DomainResult<Self>;
}

impl<T: Clone + One + Recip> PowerI for T
where
    for<'a> &'a Self: Mul<&'a Self, Output = Self>,
{
    fn powi(&self, n: i64) -> DomainResult<Self> {
        if n < 0 {
            Ok(self.checked_recip()?.powu(n.unsigned_abs()))
        } else {
            Ok(self.powu(n.unsigned_abs()))
        }
    }
}
