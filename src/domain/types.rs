//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - embedded in the estimation framework's model configuration
//! - exported alongside sampled curves for plotting or comparisons

use serde::{Deserialize, Serialize};

use crate::error::SelexError;

/// Selectivity parameterization.
///
/// A closed set: every variant owns its own arity contract and parameter
/// semantics, and evaluation dispatches with an exhaustive `match`. Parameters
/// are supplied in log space (see [`crate::models::evaluate`]); slot meaning is
/// positional only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelexModel {
    /// Ascending sigmoid: `a50`, `k`.
    Logistic,
    /// Gamma dome peaking at `amax`: `delta`, `amax`.
    Dome,
    /// Product of ascending and descending logistics:
    /// `slope1`, `slope2`, `infl1`, `infl2`.
    DoubleLogistic,
    /// Thompson (1994) exponential logistic: `gamma`, `alpha`, `beta`.
    ExponentialLogistic,
}

impl SelexModel {
    /// Human-readable label for messages and reports.
    pub fn display_name(self) -> &'static str {
        match self {
            SelexModel::Logistic => "logistic",
            SelexModel::Dome => "gamma dome",
            SelexModel::DoubleLogistic => "double logistic",
            SelexModel::ExponentialLogistic => "exponential logistic",
        }
    }

    /// Required length of the log-parameter vector.
    pub fn param_len(self) -> usize {
        match self {
            SelexModel::Logistic => 2,
            SelexModel::Dome => 2,
            SelexModel::DoubleLogistic => 4,
            SelexModel::ExponentialLogistic => 3,
        }
    }

    /// Integer tag used by the embedding framework's model switch.
    pub fn tag(self) -> i64 {
        match self {
            SelexModel::Logistic => 0,
            SelexModel::Dome => 1,
            SelexModel::DoubleLogistic => 2,
            SelexModel::ExponentialLogistic => 3,
        }
    }

    /// Resolve an integer tag to a model.
    ///
    /// Tags outside `0..=3` are an error; there is no default model.
    pub fn from_tag(tag: i64) -> Result<Self, SelexError> {
        match tag {
            0 => Ok(SelexModel::Logistic),
            1 => Ok(SelexModel::Dome),
            2 => Ok(SelexModel::DoubleLogistic),
            3 => Ok(SelexModel::ExponentialLogistic),
            _ => Err(SelexError::UnknownModel { tag }),
        }
    }
}

impl std::fmt::Display for SelexModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A selectivity curve sampled over an age grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelexGrid {
    pub model: SelexModel,
    pub ages: Vec<f64>,
    pub selex: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        for tag in 0..=3 {
            let model = SelexModel::from_tag(tag).unwrap();
            assert_eq!(model.tag(), tag);
        }
    }

    #[test]
    fn unknown_tags_rejected() {
        for tag in [-1, 4, 99] {
            assert_eq!(
                SelexModel::from_tag(tag),
                Err(SelexError::UnknownModel { tag })
            );
        }
    }

    #[test]
    fn model_serde_names() {
        let json = serde_json::to_string(&SelexModel::DoubleLogistic).unwrap();
        assert_eq!(json, "\"doublelogistic\"");
        let back: SelexModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SelexModel::DoubleLogistic);
    }
}
