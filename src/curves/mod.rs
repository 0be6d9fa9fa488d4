//! Concrete pairing-friendly families
//!
//! Both modules expose the same names (`Fq`, `Fr`, `G1Affine`, `G2Affine`,
//! `Gt`, `pairing`, `miller_loop`, `final_exponentiation`, ...) so callers can
//! swap one family for the other by changing an import.

pub mod bls12_381;
pub mod bls24_315;
