//! BLS24-315
//!
//! Seed x = -0xbfcfffff, p = (x - 1)²(x⁸ - x⁴ + 1)/3 + x (315 bits),
//! r = x⁸ - x⁴ + 1 (253 bits). G1 is defined over Fq, G2 over Fq4 through a
//! D-type sextic twist, and GT lives in Fq24.

pub mod fields;
pub mod g1;
pub mod g2;
pub mod pairing;
pub mod twisted_edwards;

pub use self::fields::{Fq, Fq2, Fq24, Fq4, Fq8, Fr};
pub use self::g1::{G1Affine, G1Projective};
pub use self::g2::{G2Affine, G2Projective};
pub use self::pairing::{final_exponentiation, miller_loop, pairing, Bls24_315, Gt};

pub type G2Prepared = crate::pairing::G2Prepared<Bls24_315>;
