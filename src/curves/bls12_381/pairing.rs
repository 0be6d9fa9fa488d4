//! Optimal ate pairing on BLS12-381, embedding degree 12

use super::fields::{Fq, Fq12, Fq2};
use super::g1::{self, G1Affine};
use super::g2::{self, G2Affine};
use crate::error::Result;
use crate::field::Field;
use crate::pairing::{self as engine, BlsConfig, MillerLoopOutput, PairingOutput, TwistType};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bls12_381;

/// Target group
pub type Gt = PairingOutput<Bls12_381>;

impl BlsConfig for Bls12_381 {
    const X: u64 = 0xd201000000010000;
    const X_IS_NEGATIVE: bool = true;
    const TWIST_TYPE: TwistType = TwistType::M;

    type Fp = Fq;
    type Fq = Fq2;
    type Fk = Fq12;

    type G1Config = g1::Config;
    type G2Config = g2::Config;

    #[inline]
    fn mul_by_line(f: &mut Fq12, c0: &Fq2, c1: &Fq2, c2: &Fq2) {
        f.mul_by_014(c0, c1, c2);
    }

    #[inline]
    fn cyclotomic_inverse(f: &Fq12) -> Fq12 {
        f.conjugate()
    }

    #[inline]
    fn cyclotomic_square(f: &Fq12) -> Fq12 {
        f.cyclotomic_square()
    }

    /// Hard part after Fuentes-Castañeda et al., giving e(P, Q)³
    fn final_exponentiation(f: &Fq12) -> Result<Fq12> {
        // easy part: f^((p^6 - 1)(p^2 + 1))
        let mut r = *f;
        r.conjugate_in_place();
        r *= f.inverse()?;
        r = r.frobenius_map(2) * r;

        let mut y0 = r.cyclotomic_square();
        let mut y1 = Self::exp_by_x(&r);
        let mut y2 = r.conjugate();
        y1 *= y2;
        y2 = Self::exp_by_x(&y1);
        y1 = y1.conjugate();
        y1 *= y2;
        y2 = Self::exp_by_x(&y1);
        y1 = y1.frobenius_map(1);
        y1 *= y2;
        r *= y0;
        y0 = Self::exp_by_x(&y1);
        y2 = Self::exp_by_x(&y0);
        y0 = y1.frobenius_map(2);
        y1 = y1.conjugate();
        y1 *= y2;
        y1 *= y0;
        r *= y1;

        Ok(r)
    }
}

/// Product of the Miller loops of `(g1[i], g2[i])`
pub fn miller_loop(g1: &[G1Affine], g2: &[G2Affine]) -> Result<MillerLoopOutput<Bls12_381>> {
    engine::miller_loop::<Bls12_381>(g1, g2)
}

pub fn final_exponentiation(f: MillerLoopOutput<Bls12_381>) -> Result<Gt> {
    engine::final_exponentiation(f)
}

/// `prod_i e(g1[i], g2[i])`
pub fn pairing(g1: &[G1Affine], g2: &[G2Affine]) -> Result<Gt> {
    engine::pairing::<Bls12_381>(g1, g2)
}
