//! Curve sampling over an age grid.
//!
//! The estimation framework evaluates selectivity one age at a time inside its
//! likelihood loop; this module covers the other common need, materializing a
//! whole curve at once for reports and plots. Ages are independent, so the
//! sweep is a parallel map; the first error (bad arity, domain failure) wins.

use rayon::prelude::*;

use crate::domain::{SelexGrid, SelexModel};
use crate::error::SelexError;
use crate::models::evaluate;

/// Generate `steps` evenly spaced ages between `min` and `max` (inclusive).
pub fn age_span(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, SelexError> {
    if !(min.is_finite() && max.is_finite() && min >= 0.0 && max > min) || steps < 2 {
        return Err(SelexError::InvalidAgeSpan { min, max, steps });
    }

    let step = (max - min) / (steps as f64 - 1.0);
    let mut out = Vec::with_capacity(steps);
    for i in 0..steps {
        out.push(min + step * i as f64);
    }
    Ok(out)
}

/// Sample a selectivity curve over `ages`.
pub fn sample_curve(
    model: SelexModel,
    ln_pars: &[f64],
    ages: &[f64],
) -> Result<SelexGrid, SelexError> {
    let selex = ages
        .par_iter()
        .map(|&age| evaluate(model, age, ln_pars))
        .collect::<Result<Vec<f64>, SelexError>>()?;

    Ok(SelexGrid {
        model,
        ages: ages.to_vec(),
        selex,
    })
}
