//! G2: the M-type sextic twist y² = x³ + 4(1 + u) over Fq2

use super::fields::{Fq, Fq2, Fr};
use crate::bigint::BigInt;
use crate::curve::short_weierstrass::{self, SWCurveConfig};
use crate::field::Field;
use once_cell::sync::Lazy;

pub type G2Affine = short_weierstrass::Affine<Config>;
pub type G2Projective = short_weierstrass::Projective<Config>;

fn fq(hex: &str) -> Fq {
    Fq::new(BigInt::from_hex(hex))
}

static GENERATOR: Lazy<G2Affine> = Lazy::new(|| {
    G2Affine::new_unchecked(
        Fq2::new(
            fq("0x024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8"),
            fq("0x13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e"),
        ),
        Fq2::new(
            fq("0x0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801"),
            fq("0x0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be"),
        ),
    )
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config;

impl SWCurveConfig for Config {
    type BaseField = Fq2;
    type ScalarField = Fr;

    const COFACTOR: &'static [u64] = &[
        0xcf1c38e31c7238e5,
        0x1616ec6e786f0c70,
        0x21537e293a6691ae,
        0xa628f1cb4d9e82ef,
        0xa68a205b2e5a7ddf,
        0xcd91de4547085aba,
        0x091d50792876a202,
        0x05d543a95414e7f1,
    ];

    fn coeff_a() -> Fq2 {
        Fq2::zero()
    }

    fn coeff_b() -> Fq2 {
        Fq2::new(Fq::from(4u64), Fq::from(4u64))
    }

    fn generator() -> G2Affine {
        *GENERATOR
    }

    #[inline]
    fn mul_by_a(_: &Fq2) -> Fq2 {
        Fq2::zero()
    }
}
