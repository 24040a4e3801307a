//! Mathematical utilities: the scalar abstraction shared by all formulas.

pub mod scalar;

pub use scalar::*;
