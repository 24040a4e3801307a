//! Selectivity evaluation for the four supported parameterizations.
//!
//! The estimation framework relies on one primitive operation: given an age, a
//! model, and the log-space parameter vector, produce the predicted selectivity
//! at that age. Everything here is pure and stateless, so calls are
//! order-independent and safe to run concurrently.
//!
//! Numerical notes:
//! - Parameters arrive in log space and are exponentiated on entry, so every
//!   natural-scale constant (slopes, inflection ages, shape exponents) is
//!   strictly positive by construction.
//! - The bodies use only arithmetic, `exp`, `powf`, and `sqrt`, all generic
//!   over [`SelexScalar`], so a gradient-tracking scalar flows through the
//!   same code path as `f64`. The only branches are the domain-failure guards
//!   (`p <= 0` in the gamma dome, `gamma ≈ 1` in the exponential logistic).
//! - Output is deliberately not clamped to `[0, 1]`: the dome and exponential
//!   logistic forms can exceed 1 under pathological parameters, matching the
//!   mathematical definitions. Callers needing strict bounds constrain the
//!   parameters upstream.

use crate::domain::SelexModel;
use crate::error::SelexError;
use crate::math::SelexScalar;

/// Evaluate selectivity at `age` under `model`.
///
/// `ln_pars` is the ordered log-space parameter vector; its length must equal
/// `model.param_len()` (2, 2, 4, or 3). Slot meaning is positional:
///
/// - `Logistic`: `[ln a50, ln k]`
/// - `Dome`: `[ln delta, ln amax]`
/// - `DoubleLogistic`: `[ln slope1, ln slope2, ln infl1, ln infl2]`
/// - `ExponentialLogistic`: `[ln gamma, ln alpha, ln beta]`
pub fn evaluate<T: SelexScalar>(
    model: SelexModel,
    age: T,
    ln_pars: &[T],
) -> Result<T, SelexError> {
    check_arity(model, ln_pars.len())?;
    match model {
        SelexModel::Logistic => Ok(logistic_selex(age, ln_pars)),
        SelexModel::Dome => dome_selex(age, ln_pars),
        SelexModel::DoubleLogistic => Ok(double_logistic_selex(age, ln_pars)),
        SelexModel::ExponentialLogistic => exponential_logistic_selex(age, ln_pars),
    }
}

/// Evaluate selectivity using the framework's integer model switch.
///
/// Tags map `0..=3` onto the [`SelexModel`] variants; any other tag is
/// [`SelexError::UnknownModel`], never a silent default.
pub fn evaluate_tag<T: SelexScalar>(tag: i64, age: T, ln_pars: &[T]) -> Result<T, SelexError> {
    evaluate(SelexModel::from_tag(tag)?, age, ln_pars)
}

fn check_arity(model: SelexModel, actual: usize) -> Result<(), SelexError> {
    let expected = model.param_len();
    if actual != expected {
        return Err(SelexError::ArityMismatch {
            model,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Ascending sigmoid; `a50` is the age at 50% selectivity, `k` the slope.
fn logistic_selex<T: SelexScalar>(age: T, ln_pars: &[T]) -> T {
    let a50 = ln_pars[0].exp();
    let k = ln_pars[1].exp();
    T::logistic((age - a50) / k)
}

/// Gamma dome with its maximum (selectivity 1) at `age = amax`.
///
/// The shape exponent is derived, not supplied:
/// `p = 0.5 * (sqrt(amax^2 + 4*delta^2) - amax)`.
/// Mathematically `p > 0` for any positive `delta`, but in floating point the
/// square root can round down to `amax` when `delta` is tiny relative to
/// `amax`, collapsing `p` to zero and leaving `amax/p` undefined. That is a
/// domain failure, not a NaN to propagate.
fn dome_selex<T: SelexScalar>(age: T, ln_pars: &[T]) -> Result<T, SelexError> {
    let delta = ln_pars[0].exp();
    let amax = ln_pars[1].exp();

    let p = T::half() * ((amax * amax + T::four() * delta * delta).sqrt() - amax);
    if p <= T::zero() {
        return Err(SelexError::DomainFailure {
            model: SelexModel::Dome,
            detail: "derived power parameter p collapsed to zero",
        });
    }

    Ok((age / amax).powf(amax / p) * ((amax - age) / p).exp())
}

/// Product of an ascending and a descending logistic.
///
/// No ordering is imposed between the two inflection ages; any relation is
/// valid and simply changes the shape (plateau, dome, or near-logistic).
fn double_logistic_selex<T: SelexScalar>(age: T, ln_pars: &[T]) -> T {
    let slope_1 = ln_pars[0].exp();
    let slope_2 = ln_pars[1].exp();
    let infl_1 = ln_pars[2].exp();
    let infl_2 = ln_pars[3].exp();

    let logist_1 = T::logistic(slope_1 * (age - infl_1));
    let logist_2 = T::logistic(slope_2 * (age - infl_2));
    logist_1 * (T::one() - logist_2)
}

/// Exponential logistic (Thompson 1994).
///
/// `gamma = 1` makes the leading `1/(1-gamma)` factor undefined. Since
/// `gamma = exp(ln_pars[0])` is always positive, this is the only reachable
/// singularity (`gamma -> 0` would also diverge but cannot occur), and it is
/// guarded to within machine epsilon.
fn exponential_logistic_selex<T: SelexScalar>(age: T, ln_pars: &[T]) -> Result<T, SelexError> {
    let gamma = ln_pars[0].exp();
    let alpha = ln_pars[1].exp();
    let beta = ln_pars[2].exp();

    if (gamma - T::one()).abs() <= T::epsilon() {
        return Err(SelexError::DomainFailure {
            model: SelexModel::ExponentialLogistic,
            detail: "gamma is within machine epsilon of 1",
        });
    }

    let first = (T::one() - gamma).recip();
    let second = ((T::one() - gamma) / gamma).powf(gamma);
    let third = (alpha * gamma * (beta - age)).exp();
    let fourth = T::one() + (alpha * (beta - age)).exp();
    Ok(first * second * (third / fourth))
}
