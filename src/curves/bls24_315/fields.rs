//! BLS24-315 fields
//!
//! Fq -> Fq2 = Fq[u]/(u² - 13) -> Fq4 = Fq2[v]/(v² - u) -> Fq8 = Fq4[w]/(w² - v)
//! -> Fq24 = Fq8[t]/(t³ - w)

use crate::bigint::BigInt;
use crate::field::{
    frobenius_coefficients, CubicExt, CubicExtConfig, Field, Fp, FpConfig, QuadExt,
    QuadExtConfig,
};
use once_cell::sync::Lazy;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FqConfig;

impl FpConfig<5> for FqConfig {
    const MODULUS: BigInt<5> = BigInt::from_limbs([
        0x6fe802ff40300001,
        0x421ee5da52bde502,
        0xdec1d01aa27a1ae0,
        0xd3f7498be97c5eaf,
        0x04c23a02b586d650,
    ]);
    const NONRESIDUE: u64 = 13;
}

/// Base field, 315 bits
pub type Fq = Fp<FqConfig, 5>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FrConfig;

impl FpConfig<4> for FrConfig {
    const MODULUS: BigInt<4> = BigInt::from_limbs([
        0x19d0c5fd00c00001,
        0xc8c480ece644e364,
        0x25fc7ec9cf927a98,
        0x196deac24a9da12b,
    ]);
    const NONRESIDUE: u64 = 7;
}

/// Scalar field, 253 bits
pub type Fr = Fp<FrConfig, 4>;

static FQ2_FROBENIUS_C1: Lazy<Vec<Fq>> =
    Lazy::new(|| frobenius_coefficients(Fq::from(13u64), 2, 2));

static FQ4_FROBENIUS_C1: Lazy<Vec<Fq2>> =
    Lazy::new(|| frobenius_coefficients(Fq2::new(Fq::ZERO, Fq::ONE), 2, 4));

static FQ8_FROBENIUS_C1: Lazy<Vec<Fq4>> =
    Lazy::new(|| frobenius_coefficients(Fq4::new(Fq2::zero(), Fq2::one()), 2, 8));

static FQ24_FROBENIUS_C1: Lazy<Vec<Fq8>> =
    Lazy::new(|| frobenius_coefficients(Fq8::new(Fq4::zero(), Fq4::one()), 3, 24));

static FQ24_FROBENIUS_C2: Lazy<Vec<Fq8>> =
    Lazy::new(|| FQ24_FROBENIUS_C1.iter().map(|c| c.square()).collect());

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fq2Config;

impl QuadExtConfig for Fq2Config {
    type BaseField = Fq;

    const DEGREE: usize = 2;

    fn nonresidue() -> Fq {
        Fq::from(13u64)
    }

    /// 13a = 8a + 4a + a
    #[inline]
    fn mul_base_by_nonresidue(elem: &Fq) -> Fq {
        let a4 = elem.double().double();
        a4.double() + a4 + *elem
    }

    fn frobenius_coeff_c1(power: usize) -> Fq {
        FQ2_FROBENIUS_C1[power]
    }
}

pub type Fq2 = QuadExt<Fq2Config>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fq4Config;

impl QuadExtConfig for Fq4Config {
    type BaseField = Fq2;

    const DEGREE: usize = 4;

    fn nonresidue() -> Fq2 {
        Fq2::new(Fq::ZERO, Fq::ONE)
    }

    #[inline]
    fn mul_base_by_nonresidue(elem: &Fq2) -> Fq2 {
        elem.mul_by_nonresidue()
    }

    fn frobenius_coeff_c1(power: usize) -> Fq2 {
        FQ4_FROBENIUS_C1[power]
    }
}

pub type Fq4 = QuadExt<Fq4Config>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fq8Config;

impl QuadExtConfig for Fq8Config {
    type BaseField = Fq4;

    const DEGREE: usize = 8;

    fn nonresidue() -> Fq4 {
        Fq4::new(Fq2::zero(), Fq2::one())
    }

    #[inline]
    fn mul_base_by_nonresidue(elem: &Fq4) -> Fq4 {
        elem.mul_by_nonresidue()
    }

    fn frobenius_coeff_c1(power: usize) -> Fq4 {
        FQ8_FROBENIUS_C1[power]
    }
}

pub type Fq8 = QuadExt<Fq8Config>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fq24Config;

impl CubicExtConfig for Fq24Config {
    type BaseField = Fq8;

    const DEGREE: usize = 24;

    fn nonresidue() -> Fq8 {
        Fq8::new(Fq4::zero(), Fq4::one())
    }

    #[inline]
    fn mul_base_by_nonresidue(elem: &Fq8) -> Fq8 {
        elem.mul_by_nonresidue()
    }

    fn frobenius_coeff_c1(power: usize) -> Fq8 {
        FQ24_FROBENIUS_C1[power]
    }

    fn frobenius_coeff_c2(power: usize) -> Fq8 {
        FQ24_FROBENIUS_C2[power]
    }
}

pub type Fq24 = CubicExt<Fq24Config>;

impl Fq24 {
    /// `self^(p^12)`: negates the odd coordinates of every Fq8 component
    pub fn conjugate(&self) -> Self {
        Self::new(
            self.c0.conjugate(),
            -self.c1.conjugate(),
            self.c2.conjugate(),
        )
    }

    /// Multiplies by the sparse element `(r0 + r1 w) + r2 t`
    pub fn mul_by_012(&mut self, r0: &Fq4, r1: &Fq4, r2: &Fq4) {
        let d0 = Fq8::new(*r0, *r1);
        let a_a = self.c0 * d0;
        let b_b = self.c1.mul_by_base(r2);

        let t1 = self.c2.mul_by_base(r2).mul_by_nonresidue() + a_a;
        let t3 = (self.c0 + self.c2) * d0 - a_a + b_b;
        let t2 = (self.c0 + self.c1) * Fq8::new(*r0 + *r2, *r1) - a_a - b_b;

        self.c0 = t1;
        self.c1 = t2;
        self.c2 = t3;
    }

    /// Squaring in the cyclotomic subgroup (Granger-Scott over Fq8)
    ///
    /// Only valid when `self^(p^12 + 1) = 1`.
    pub fn cyclotomic_square(&self) -> Self {
        let (a, b, c) = (self.c0, self.c1, self.c2);
        let a2 = a.square();
        let b2 = b.square();
        let wc2 = c.square().mul_by_nonresidue();

        Self::new(
            a2.double() + a2 - a.conjugate().double(),
            wc2.double() + wc2 + b.conjugate().double(),
            b2.double() + b2 - c.conjugate().double(),
        )
    }
}
