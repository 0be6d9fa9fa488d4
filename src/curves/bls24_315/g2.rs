//! G2: the D-type sextic twist y² = x³ + 1/v over Fq4

use super::fields::{Fq, Fq2, Fq4, Fr};
use crate::bigint::BigInt;
use crate::curve::short_weierstrass::{self, SWCurveConfig};
use crate::field::Field;
use once_cell::sync::Lazy;

pub type G2Affine = short_weierstrass::Affine<Config>;
pub type G2Projective = short_weierstrass::Projective<Config>;

fn fq(hex: &str) -> Fq {
    Fq::new(BigInt::from_hex(hex))
}

// 1/v = v * u / 13
static COEFF_B: Lazy<Fq4> = Lazy::new(|| {
    Fq4::new(
        Fq2::zero(),
        Fq2::new(
            Fq::zero(),
            fq("0xbb6b62e0d9aad15bafe3ee23ebbfcc49a7a9dcb688f071453fd497bdf5d476875ec56258a4ec4f"),
        ),
    )
});

static GENERATOR: Lazy<G2Affine> = Lazy::new(|| {
    let x = Fq4::new(
        Fq2::new(
            fq("0x2f339ada8942f92aefa14196bfee2552a7c5675f5e5e9da798458f72ff50f96f5c357cf13710f63"),
            fq("0x20b1a8dca4b18842b40079be727cbfd1a16ed134a080b759ae503618e92871697838dc4c689911c"),
        ),
        Fq2::new(
            fq("0x16eab1e76670eb9affa1bc77400be688d5cd69566f9325b329b40db85b47f236d5c34e8ffed7536"),
            fq("0x6e8c608261f21c41f2479ca4824deba561b9689a9c03a5b8b36a6cbbed0a7d9468e07e557d8569"),
        ),
    );
    let y = Fq4::new(
        Fq2::new(
            fq("0x3cdd8218baa5276421c9923cde33a45399a1d878d5202fae600a8502a29681f74ccdcc053b278b7"),
            fq("0x3a079c670190bb49b1bd21e10aac3191535e32ce99da592ddfa8bd09d57a7374ed63ad7f25e398d"),
        ),
        Fq2::new(
            fq("0x1b38dd0c5ec49a0883a950c631c688eb3b01f45b7c0d2990cd99052005ebf2fa9e7043bbd605ef5"),
            fq("0x495d6de2e4fed6be3e1d24dd724163e01d88643f7e83d31528ab0a80ced619175a1a104574ac83"),
        ),
    );
    G2Affine::new_unchecked(x, y)
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config;

impl SWCurveConfig for Config {
    type BaseField = Fq4;
    type ScalarField = Fr;

    const COFACTOR: &'static [u64] = &[
        0xdf101e0000000001,
        0xc6fe9ac0018b940a,
        0x15b52c02797e31a2,
        0xcd34eace3e7e7012,
        0x83eb09e6f58e9055,
        0x98dd4b373acdeee1,
        0xfe00fe2b41efdc36,
        0xbf73a8d2cc439fff,
        0x469c774cb87cd287,
        0x7a0dded7e599b628,
        0xb006921322861513,
        0x446602b3ec97c88d,
        0x9f9a3e8f21811c01,
        0xa3d20ecd4e893c62,
        0xcf9c5e2d1e9744e1,
        0x0000142a76791a4e,
    ];

    fn coeff_a() -> Fq4 {
        Fq4::zero()
    }

    fn coeff_b() -> Fq4 {
        *COEFF_B
    }

    fn generator() -> G2Affine {
        *GENERATOR
    }

    #[inline]
    fn mul_by_a(_: &Fq4) -> Fq4 {
        Fq4::zero()
    }
}
