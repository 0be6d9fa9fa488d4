//! G1: y² = x³ + 1 over Fq

use super::fields::{Fq, Fr};
use crate::bigint::BigInt;
use crate::curve::short_weierstrass::{self, SWCurveConfig};
use crate::field::Field;
use once_cell::sync::Lazy;

pub type G1Affine = short_weierstrass::Affine<Config>;
pub type G1Projective = short_weierstrass::Projective<Config>;

static GENERATOR: Lazy<G1Affine> = Lazy::new(|| {
    G1Affine::new_unchecked(
        Fq::new(BigInt::from_hex(
            "0x41a0a424393988da1b2b117076ef6e4f54b344cc46dde3c983603a832cb638dbf4b721710866097",
        )),
        Fq::new(BigInt::from_hex(
            "0x1db41c65fa7d730b1787b9b0e50abc428eaa3907979126e6e51fcd4b43a054900bee02965e1b1a2",
        )),
    )
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config;

impl SWCurveConfig for Config {
    type BaseField = Fq;
    type ScalarField = Fr;

    /// (x - 1)² / 3
    const COFACTOR: &'static [u64] = &[0x2fe8030000000000];

    fn coeff_a() -> Fq {
        Fq::zero()
    }

    fn coeff_b() -> Fq {
        Fq::one()
    }

    fn generator() -> G1Affine {
        *GENERATOR
    }

    #[inline]
    fn mul_by_a(_: &Fq) -> Fq {
        Fq::zero()
    }
}
