//! BLS12-381
//!
//! Seed x = -0xd201000000010000, p = (x - 1)²(x⁴ - x² + 1)/3 + x (381 bits),
//! r = x⁴ - x² + 1 (255 bits). G2 is defined over Fq2 through an M-type
//! sextic twist and GT lives in Fq12.

pub mod fields;
pub mod g1;
pub mod g2;
pub mod pairing;

pub use self::fields::{Fq, Fq12, Fq2, Fq6, Fr};
pub use self::g1::{G1Affine, G1Projective};
pub use self::g2::{G2Affine, G2Projective};
pub use self::pairing::{final_exponentiation, miller_loop, pairing, Bls12_381, Gt};

pub type G2Prepared = crate::pairing::G2Prepared<Bls12_381>;
