//! rand distributions for [Complex] numbers.

use crate::{Complex, Real};
use ::rand::{
    distr::{Distribution, StandardUniform},
    Rng,
};

/// Uniform distribution on the unit circle `|z| = 1`.
pub struct StandardUnitary;
/// Standard normal distribution in the complex plane, `re` and `im` are independent with variance 1.
pub struct StandardNormal;

/// Samples both parts independently from the real distribution, e.g. from the square `[0, 1)²` for floats.
impl<T> Distribution<Complex<T>> for StandardUniform
where
    StandardUniform: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex<T> {
        Complex::new(rng.sample(self), rng.sample(self))
    }
}

impl<T: Real> Distribution<Complex<T>> for StandardUnitary
where
    StandardUniform: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex<T> {
        // hit or retry on the disk inside [-1, 1)², which succeeds with a chance of 79%
        let one = T::one();
        let two = one + one;
        loop {
            let c = rng.sample::<Complex<T>, _>(StandardUniform);
            let a = Complex::new(c.re * two - one, c.im * two - one);
            let n = a.abs_sqr();
            if !n.is_zero() && n < one {
                return a * (one / n.sqrt());
            }
        }
    }
}

impl<T: Real> Distribution<Complex<T>> for StandardNormal
where
    StandardUniform: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex<T> {
        // Box–Muller transform, see https://en.wikipedia.org/wiki/Box%E2%80%93Muller_transform
        let two = T::one() + T::one();
        // random number in range (0, 1]
        let x = T::one() - rng.sample(StandardUniform);
        rng.sample::<Complex<T>, _>(StandardUnitary) * (-two * x.ln()).sqrt()
    }
}
