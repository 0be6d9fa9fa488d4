//! Twisted Edwards curve over the BLS24-315 scalar field
//!
//! 257732·x² + y² = 1 + 257728·x²·y², for circuits whose native field is Fr.
//! Cofactor 8; `a` is a square and `d` is not, so the addition law is complete.

use super::fields::Fr;
use crate::bigint::BigInt;
use crate::curve::twisted_edwards::{self, TECurveConfig};
use once_cell::sync::Lazy;

pub type EdwardsAffine = twisted_edwards::Affine<EdwardsConfig>;
pub type EdwardsProjective = twisted_edwards::Projective<EdwardsConfig>;
pub type CurveParams = twisted_edwards::CurveParams<EdwardsConfig>;

static BASE: Lazy<EdwardsAffine> = Lazy::new(|| {
    EdwardsAffine::new_unchecked(
        Fr::new(BigInt::from_hex(
            "0x67f88fdbe974bfbfa3780847fcc43518209617c7e8b9cb2a63f4c344230d164",
        )),
        Fr::new(BigInt::from_hex(
            "0x2ad4121ece82be99835869bfae6ff6e65f9bcba9ef9c71802b7a90d28800001",
        )),
    )
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EdwardsConfig;

impl TECurveConfig for EdwardsConfig {
    type BaseField = Fr;

    const COFACTOR: &'static [u64] = &[8];

    /// 1437753473921907580703509300571927811987591765799164617677716990775193563777
    const ORDER: &'static [u64] = &[
        0x5558abe965b8f281,
        0x138f389f67beda7e,
        0x64bf8fd939f24f53,
        0x032dbd584953b425,
    ];

    fn coeff_a() -> Fr {
        Fr::from(257732u64)
    }

    fn coeff_d() -> Fr {
        Fr::from(257728u64)
    }

    fn generator() -> EdwardsAffine {
        *BASE
    }
}

/// Constants of the curve, by value
pub fn curve_params() -> CurveParams {
    EdwardsAffine::curve_params()
}
