//! G1: y² = x³ + 4 over Fq

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
            "0x17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb",
        )),
        Fq::new(BigInt::from_hex(
            "0x08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1",
        )),
    )
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config;

impl SWCurveConfig for Config {
    type BaseField = Fq;
    type ScalarField = Fr;

    /// (x - 1)² / 3
    const COFACTOR: &'static [u64] = &[0x8c00aaab0000aaab, 0x396c8c005555e156];

    fn coeff_a() -> Fq {
        Fq::zero()
    }

    fn coeff_b() -> Fq {
        Fq::from(4u64)
    }

    fn generator() -> G1Affine {
        *GENERATOR
    }

    #[inline]
    fn mul_by_a(_: &Fq) -> Fq {
        Fq::zero()
    }
}
