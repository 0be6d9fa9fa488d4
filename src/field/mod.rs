//! Finite field implementations
//!
//! This module provides field arithmetic for:
//! - F_p: prime fields in Montgomery form (`Fp`)
//! - quadratic and cubic extension levels (`QuadExt`, `CubicExt`)
//!
//! Towers are assembled by nesting levels: a curve family picks configs such
//! as `Fp2 = QuadExt<Fp2Config>` and `Fp6 = CubicExt<Fp6Config>` whose base
//! fields are the level below. Every level implements `Field`.

pub mod config;
pub mod cubic;
pub mod field_trait;
pub mod prime;
pub mod quadratic;

pub use config::{frobenius_coefficients, CubicExtConfig, FpConfig, QuadExtConfig};
pub use cubic::CubicExt;
pub use field_trait::{Field, PrimeField, SqrtField};
pub use prime::Fp;
pub use quadratic::QuadExt;
