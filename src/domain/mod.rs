//! Domain types shared across the crate.
//!
//! This module defines:
//!
//! - the closed selectivity model enum (`SelexModel`) and its arity contract
//! - the sampled curve container (`SelexGrid`)

pub mod types;

pub use types::*;
