//! `selex-curves` library crate.
//!
//! Age-based selectivity curves for population-dynamics models. The crate is a
//! thin, pure layer so that:
//!
//! - the estimation framework can call [`models::evaluate`] once per age/cohort
//!   inside its likelihood loop, with no setup or shared state
//! - the same formula bodies serve plain `f64` evaluation and gradient-tracked
//!   scalars (anything implementing [`math::SelexScalar`])
//! - parameter-domain failures surface as typed errors the optimizer can
//!   reject, never as silently propagated NaN

pub mod domain;
pub mod error;
pub mod grid;
pub mod math;
pub mod models;
