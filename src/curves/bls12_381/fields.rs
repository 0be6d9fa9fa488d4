//! BLS12-381 fields
//!
//! Fq -> Fq2 = Fq[u]/(u² + 1) -> Fq6 = Fq2[v]/(v³ - (1 + u)) -> Fq12 = Fq6[w]/(w² - v)

use crate::bigint::BigInt;
use crate::field::{
    frobenius_coefficients, CubicExt, CubicExtConfig, Field, Fp, FpConfig, QuadExt,
    QuadExtConfig,
};
use once_cell::sync::Lazy;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FqConfig;

impl FpConfig<6> for FqConfig {
    const MODULUS: BigInt<6> = BigInt::from_limbs([
        0xb9feffffffffaaab,
        0x1eabfffeb153ffff,
        0x6730d2a0f6b0f624,
        0x64774b84f38512bf,
        0x4b1ba7b6434bacd7,
        0x1a0111ea397fe69a,
    ]);
    const NONRESIDUE: u64 = 2;
}

/// Base field, 381 bits
pub type Fq = Fp<FqConfig, 6>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FrConfig;

impl FpConfig<4> for FrConfig {
    const MODULUS: BigInt<4> = BigInt::from_limbs([
        0xffffffff00000001,
        0x53bda402fffe5bfe,
        0x3339d80809a1d805,
        0x73eda753299d7d48,
    ]);
    const NONRESIDUE: u64 = 5;
}

/// Scalar field, 255 bits
pub type Fr = Fp<FrConfig, 4>;

static FQ2_FROBENIUS_C1: Lazy<Vec<Fq>> = Lazy::new(|| frobenius_coefficients(-Fq::ONE, 2, 2));

static FQ6_FROBENIUS_C1: Lazy<Vec<Fq2>> =
    Lazy::new(|| frobenius_coefficients(Fq2::new(Fq::ONE, Fq::ONE), 3, 6));

static FQ6_FROBENIUS_C2: Lazy<Vec<Fq2>> =
    Lazy::new(|| FQ6_FROBENIUS_C1.iter().map(|c| c.square()).collect());

static FQ12_FROBENIUS_C1: Lazy<Vec<Fq6>> = Lazy::new(|| {
    frobenius_coefficients(Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero()), 2, 12)
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fq2Config;

impl QuadExtConfig for Fq2Config {
    type BaseField = Fq;

    const DEGREE: usize = 2;

    fn nonresidue() -> Fq {
        -Fq::ONE
    }

    #[inline]
    fn mul_base_by_nonresidue(elem: &Fq) -> Fq {
        -*elem
    }

    fn frobenius_coeff_c1(power: usize) -> Fq {
        FQ2_FROBENIUS_C1[power]
    }
}

pub type Fq2 = QuadExt<Fq2Config>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fq6Config;

impl CubicExtConfig for Fq6Config {
    type BaseField = Fq2;

    const DEGREE: usize = 6;

    fn nonresidue() -> Fq2 {
        Fq2::new(Fq::ONE, Fq::ONE)
    }

    /// (a0 + a1 u)(1 + u) = (a0 - a1) + (a0 + a1) u
    #[inline]
    fn mul_base_by_nonresidue(elem: &Fq2) -> Fq2 {
        Fq2::new(elem.c0 - elem.c1, elem.c0 + elem.c1)
    }

    fn frobenius_coeff_c1(power: usize) -> Fq2 {
        FQ6_FROBENIUS_C1[power]
    }

    fn frobenius_coeff_c2(power: usize) -> Fq2 {
        FQ6_FROBENIUS_C2[power]
    }
}

pub type Fq6 = CubicExt<Fq6Config>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fq12Config;

impl QuadExtConfig for Fq12Config {
    type BaseField = Fq6;

    const DEGREE: usize = 12;

    fn nonresidue() -> Fq6 {
        Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero())
    }

    #[inline]
    fn mul_base_by_nonresidue(elem: &Fq6) -> Fq6 {
        elem.mul_by_nonresidue()
    }

    fn frobenius_coeff_c1(power: usize) -> Fq6 {
        FQ12_FROBENIUS_C1[power]
    }
}

pub type Fq12 = QuadExt<Fq12Config>;

// Squares a0 + a1 s in Fq4 = Fq2[s]/(s² - (1 + u))
fn fq4_square(a0: Fq2, a1: Fq2) -> (Fq2, Fq2) {
    let t0 = a0.square();
    let t1 = a1.square();
    (
        Fq6Config::mul_base_by_nonresidue(&t1) + t0,
        (a0 + a1).square() - t0 - t1,
    )
}

impl Fq12 {
    /// Multiplies by the sparse element `(c0 + c1 v) + c4 v w`
    pub fn mul_by_014(&mut self, c0: &Fq2, c1: &Fq2, c4: &Fq2) {
        let a_a = self.c0.mul_by_01(c0, c1);
        let b_b = self.c1.mul_by_1(c4);
        let o = *c1 + *c4;

        self.c1 = (self.c1 + self.c0).mul_by_01(c0, &o) - a_a - b_b;
        self.c0 = b_b.mul_by_nonresidue() + a_a;
    }

    /// Squaring in the cyclotomic subgroup (Granger-Scott)
    ///
    /// Only valid when `self^(p^6 + 1) = 1`.
    pub fn cyclotomic_square(&self) -> Self {
        let (mut z0, mut z4, mut z3) = (self.c0.c0, self.c0.c1, self.c0.c2);
        let (mut z2, mut z1, mut z5) = (self.c1.c0, self.c1.c1, self.c1.c2);

        let (t0, t1) = fq4_square(z0, z1);
        z0 = (t0 - z0).double() + t0;
        z1 = (t1 + z1).double() + t1;

        let (t0, t1) = fq4_square(z2, z3);
        let (t2, t3) = fq4_square(z4, z5);

        z4 = (t0 - z4).double() + t0;
        z5 = (t1 + z5).double() + t1;

        let t0 = Fq6Config::mul_base_by_nonresidue(&t3);
        z2 = (t0 + z2).double() + t0;
        z3 = (t2 - z3).double() + t2;

        Self::new(Fq6::new(z0, z4, z3), Fq6::new(z2, z1, z5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::PrimeField;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_frobenius_matches_pow_p() {
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        let p = Fq::modulus();

        let a = Fq2::random(&mut rng);
        assert_eq!(a.frobenius_map(1), a.pow(p));
        assert_eq!(a.frobenius_map(1), a.conjugate());
        let b = Fq6::random(&mut rng);
        assert_eq!(b.frobenius_map(1), b.pow(p));
        let c = Fq12::random(&mut rng);
        assert_eq!(c.frobenius_map(1), c.pow(p));
        assert_eq!(c.frobenius_map(6), c.conjugate());
        assert_eq!(c.frobenius_map(12), c);
    }

    #[test]
    fn test_mul_by_014_matches_dense() {
        let mut rng = ChaCha20Rng::seed_from_u64(14);
        for _ in 0..10 {
            let f = Fq12::random(&mut rng);
            let (c0, c1, c4) = (
                Fq2::random(&mut rng),
                Fq2::random(&mut rng),
                Fq2::random(&mut rng),
            );
            let sparse = Fq12::new(
                Fq6::new(c0, c1, Fq2::zero()),
                Fq6::new(Fq2::zero(), c4, Fq2::zero()),
            );

            let mut g = f;
            g.mul_by_014(&c0, &c1, &c4);
            assert_eq!(g, f * sparse);
        }
    }

    #[test]
    fn test_cubic_sparse_products() {
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        for _ in 0..10 {
            let f = Fq6::random(&mut rng);
            let (d0, d1) = (Fq2::random(&mut rng), Fq2::random(&mut rng));
            assert_eq!(f.mul_by_01(&d0, &d1), f * Fq6::new(d0, d1, Fq2::zero()));
            assert_eq!(f.mul_by_1(&d1), f * Fq6::new(Fq2::zero(), d1, Fq2::zero()));
            assert_eq!(f.mul_by_base(&d0), f * Fq6::new(d0, Fq2::zero(), Fq2::zero()));
        }
    }

    #[test]
    fn test_cyclotomic_square() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..5 {
            let f = Fq12::random(&mut rng);
            // f^((p^6 - 1)(p^2 + 1)) lies in the cyclotomic subgroup
            let mut t = f.conjugate() * f.inverse().unwrap();
            t = t.frobenius_map(2) * t;

            assert_eq!(t.cyclotomic_square(), t.square());
            assert_eq!(t * t.conjugate(), Fq12::one());
        }
    }
}
