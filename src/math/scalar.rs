//! Scalar abstraction for the selectivity formulas.
//!
//! The embedding framework differentiates selectivity with respect to the
//! log-parameters, so the formula bodies must be generic over any numeric type
//! whose `exp` / `powf` / `sqrt` carry derivative information. We express that
//! as a blanket extension of [`num_traits::Float`]: `f32` and `f64` qualify,
//! and so does any operator-overloaded AD scalar that implements `Float`.
//!
//! The extension adds only the literal constants the formulas need. Keeping
//! them here (rather than `T::from(0.5).unwrap()` at each use site) keeps the
//! formula bodies free of conversion noise.

use num_traits::Float;

/// Floating-point scalar usable in selectivity formulas.
pub trait SelexScalar: Float {
    fn half() -> Self;
    fn two() -> Self;
    fn four() -> Self;

    /// Standard logistic `1 / (1 + exp(-x))`.
    ///
    /// Written in `recip` form so `x = 0` yields exactly `0.5` and large `|x|`
    /// saturates cleanly to 0 / 1 without overflow in the result.
    fn logistic(x: Self) -> Self {
        (Self::one() + (-x).exp()).recip()
    }
}

impl<T: Float> SelexScalar for T {
    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn four() -> Self {
        Self::two() * Self::two()
    }
}
