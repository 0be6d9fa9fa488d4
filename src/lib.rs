//! Pairing-Friendly Elliptic Curve Library
//!
//! This library provides the algebra behind pairing-based proof systems:
//! prime fields and extension towers up to degree 24, short Weierstrass and
//! twisted Edwards group laws, and the optimal ate pairing for the BLS12-381
//! and BLS24-315 families.
//!
//! # Example
//! ```
//! use ecpair::curves::bls12_381::{pairing, Fr, G1Affine, G2Affine};
//!
//! let g1 = G1Affine::generator();
//! let g2 = G2Affine::generator();
//! let a = Fr::from(6u64);
//!
//! let lhs = pairing(&[(g1 * a).into_affine()], &[g2]).unwrap();
//! let rhs = pairing(&[g1], &[g2]).unwrap().pow([6u64]);
//! assert_eq!(lhs, rhs);
//! ```

/// Fixed-width big integer arithmetic
pub mod bigint;
/// Elliptic curve group laws (short Weierstrass, twisted Edwards)
pub mod curve;
/// Concrete curve families (BLS12-381, BLS24-315)
pub mod curves;
/// Error types
pub mod error;
/// Finite field implementations (F_p and extension towers)
pub mod field;
/// Generic BLS pairing engine
pub mod pairing;

pub use error::{DecodingError, Error, Result};
pub use field::field_trait;
