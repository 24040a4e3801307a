//! Selectivity model implementations.
//!
//! Models are implemented as small, pure functions so that likelihood/search
//! code can stay generic over the scalar type.

pub mod model;

pub use model::*;
