//! Optimal ate pairing on BLS24-315, embedding degree 24

use super::fields::{Fq, Fq24, Fq4};
use super::g1::{self, G1Affine};
use super::g2::{self, G2Affine};
use crate::error::Result;
use crate::field::Field;
use crate::pairing::{self as engine, BlsConfig, MillerLoopOutput, PairingOutput, TwistType};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bls24_315;

/// Target group
pub type Gt = PairingOutput<Bls24_315>;

impl BlsConfig for Bls24_315 {
    const X: u64 = 0xbfcfffff;
    const X_IS_NEGATIVE: bool = true;
    const TWIST_TYPE: TwistType = TwistType::D;

    type Fp = Fq;
    type Fq = Fq4;
    type Fk = Fq24;

    type G1Config = g1::Config;
    type G2Config = g2::Config;

    #[inline]
    fn mul_by_line(f: &mut Fq24, c0: &Fq4, c1: &Fq4, c2: &Fq4) {
        f.mul_by_012(c0, c2, c1);
    }

    #[inline]
    fn cyclotomic_inverse(f: &Fq24) -> Fq24 {
        f.conjugate()
    }

    #[inline]
    fn cyclotomic_square(f: &Fq24) -> Fq24 {
        f.cyclotomic_square()
    }

    fn final_exponentiation(f: &Fq24) -> Result<Fq24> {
        // easy part: f^((p^12 - 1)(p^4 + 1))
        let mut t = f.conjugate() * f.inverse()?;
        t = t.frobenius_map(4) * t;

        // hard part: 3(p^8 - p^4 + 1)/r = (x - 1)²(x + p)(x² + p²)(x⁴ + p⁴ - 1) + 3
        let mut a = Self::exp_by_x(&t) * t.conjugate();
        a = Self::exp_by_x(&a) * a.conjugate();

        let b = Self::exp_by_x(&a) * a.frobenius_map(1);
        let c = Self::exp_by_x(&Self::exp_by_x(&b)) * b.frobenius_map(2);

        let mut d = c;
        for _ in 0..4 {
            d = Self::exp_by_x(&d);
        }
        d = d * c.frobenius_map(4) * c.conjugate();

        Ok(d * t.cyclotomic_square() * t)
    }
}

/// Product of the Miller loops of `(g1[i], g2[i])`
pub fn miller_loop(g1: &[G1Affine], g2: &[G2Affine]) -> Result<MillerLoopOutput<Bls24_315>> {
    engine::miller_loop::<Bls24_315>(g1, g2)
}

pub fn final_exponentiation(f: MillerLoopOutput<Bls24_315>) -> Result<Gt> {
    engine::final_exponentiation(f)
}

/// `prod_i e(g1[i], g2[i])`
pub fn pairing(g1: &[G1Affine], g2: &[G2Affine]) -> Result<Gt> {
    engine::pairing::<Bls24_315>(g1, g2)
}
