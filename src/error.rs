//! Error type for selectivity evaluation.
//!
//! Every failure mode here is a precondition or parameter-domain violation:
//! nothing is transient, so there is no retry or recovery path. The calling
//! optimizer matches on the variant (typically to reject a parameter step),
//! which is why this is a structured enum rather than a message string.

use thiserror::Error;

use crate::domain::SelexModel;

/// Failures surfaced by selectivity evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelexError {
    /// Integer model tag outside the closed set `0..=3`.
    #[error("unknown selectivity model tag {tag} (expected 0..=3)")]
    UnknownModel { tag: i64 },

    /// Log-parameter vector length does not match the model's arity.
    #[error("{model} selectivity takes {expected} log-parameters, got {actual}")]
    ArityMismatch {
        model: SelexModel,
        expected: usize,
        actual: usize,
    },

    /// Derived natural-scale parameters landed on a formula singularity.
    #[error("{model} selectivity parameter singularity: {detail}")]
    DomainFailure {
        model: SelexModel,
        detail: &'static str,
    },

    /// Age grid request that cannot produce a usable span.
    #[error("invalid age span: min={min}, max={max}, steps={steps} (need finite, min >= 0, max > min, steps >= 2)")]
    InvalidAgeSpan { min: f64, max: f64, steps: usize },
}
