//! Cubic extension `Base[w] / (w^3 - xi)`
//!
//! An element is `c0 + c1 * w + c2 * w^2`.

use super::config::CubicExtConfig;
use super::field_trait::Field;
use crate::error::{DecodingError, Result};
use rand::Rng;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Element `c0 + c1 * w + c2 * w^2` of a cubic extension
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubicExt<P: CubicExtConfig> {
    pub c0: P::BaseField,
    pub c1: P::BaseField,
    pub c2: P::BaseField,
}

impl<P: CubicExtConfig> CubicExt<P> {
    #[inline]
    pub const fn new(c0: P::BaseField, c1: P::BaseField, c2: P::BaseField) -> Self {
        Self { c0, c1, c2 }
    }

    #[inline]
    pub fn mul_by_base(&self, elem: &P::BaseField) -> Self {
        Self::new(self.c0 * *elem, self.c1 * *elem, self.c2 * *elem)
    }

    /// Multiplies by the generator `w`: shifts coordinates and folds `xi`
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Self {
        Self::new(P::mul_base_by_nonresidue(&self.c2), self.c0, self.c1)
    }

    /// Multiplies by the sparse element `d0 + d1 * w`
    pub fn mul_by_01(&self, d0: &P::BaseField, d1: &P::BaseField) -> Self {
        let a_a = self.c0 * *d0;
        let b_b = self.c1 * *d1;

        let t1 = P::mul_base_by_nonresidue(&(self.c2 * *d1)) + a_a;
        let t3 = (self.c0 + self.c2) * *d0 - a_a + b_b;
        let t2 = (*d0 + *d1) * (self.c0 + self.c1) - a_a - b_b;

        Self::new(t1, t2, t3)
    }

    /// Multiplies by the sparse element `d1 * w`
    pub fn mul_by_1(&self, d1: &P::BaseField) -> Self {
        Self::new(
            P::mul_base_by_nonresidue(&(self.c2 * *d1)),
            self.c0 * *d1,
            self.c1 * *d1,
        )
    }
}

impl<P: CubicExtConfig> Field for CubicExt<P> {
    type BasePrimeField = <P::BaseField as Field>::BasePrimeField;

    const EXTENSION_DEGREE: usize = P::DEGREE;
    const ENCODED_LEN: usize = 3 * <P::BaseField as Field>::ENCODED_LEN;

    #[inline]
    fn zero() -> Self {
        Self::new(
            P::BaseField::zero(),
            P::BaseField::zero(),
            P::BaseField::zero(),
        )
    }

    #[inline]
    fn one() -> Self {
        Self::new(
            P::BaseField::one(),
            P::BaseField::zero(),
            P::BaseField::zero(),
        )
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero() && self.c2.is_zero()
    }

    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self.c2.double_in_place();
        self
    }

    fn neg_in_place(&mut self) -> &mut Self {
        self.c0.neg_in_place();
        self.c1.neg_in_place();
        self.c2.neg_in_place();
        self
    }

    /// Chung-Hasan SQR2
    fn square_in_place(&mut self) -> &mut Self {
        let s0 = self.c0.square();
        let s1 = (self.c0 * self.c1).double();
        let s2 = (self.c0 - self.c1 + self.c2).square();
        let s3 = (self.c1 * self.c2).double();
        let s4 = self.c2.square();

        self.c0 = s0 + P::mul_base_by_nonresidue(&s3);
        self.c1 = s1 + P::mul_base_by_nonresidue(&s4);
        self.c2 = s1 + s2 + s3 - s0 - s4;
        self
    }

    fn inverse(&self) -> Result<Self> {
        let t0 = self.c0.square() - P::mul_base_by_nonresidue(&(self.c1 * self.c2));
        let t1 = P::mul_base_by_nonresidue(&self.c2.square()) - self.c0 * self.c1;
        let t2 = self.c1.square() - self.c0 * self.c2;

        let norm = self.c0 * t0 + P::mul_base_by_nonresidue(&(self.c2 * t1 + self.c1 * t2));
        let norm_inv = norm.inverse()?;

        Ok(Self::new(t0 * norm_inv, t1 * norm_inv, t2 * norm_inv))
    }

    fn frobenius_map(&self, power: usize) -> Self {
        let power = power % P::DEGREE;
        Self::new(
            self.c0.frobenius_map(power),
            self.c1.frobenius_map(power) * P::frobenius_coeff_c1(power),
            self.c2.frobenius_map(power) * P::frobenius_coeff_c2(power),
        )
    }

    fn mul_by_base_prime_field(&self, elem: &Self::BasePrimeField) -> Self {
        Self::new(
            self.c0.mul_by_base_prime_field(elem),
            self.c1.mul_by_base_prime_field(elem),
            self.c2.mul_by_base_prime_field(elem),
        )
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            P::BaseField::random(rng),
            P::BaseField::random(rng),
            P::BaseField::random(rng),
        )
    }

    /// Most significant coordinate first: `c2 || c1 || c0`
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.c2.to_bytes();
        bytes.extend_from_slice(&self.c1.to_bytes());
        bytes.extend_from_slice(&self.c0.to_bytes());
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, DecodingError> {
        if bytes.len() != Self::ENCODED_LEN {
            return Err(DecodingError::InvalidLength {
                expected: Self::ENCODED_LEN,
                actual: bytes.len(),
            });
        }
        let len = <P::BaseField as Field>::ENCODED_LEN;
        Ok(Self::new(
            P::BaseField::from_bytes(&bytes[2 * len..])?,
            P::BaseField::from_bytes(&bytes[len..2 * len])?,
            P::BaseField::from_bytes(&bytes[..len])?,
        ))
    }
}

impl<P: CubicExtConfig> Default for CubicExt<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: CubicExtConfig> Add for CubicExt<P> {
    type Output = Self;

    #[inline]
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<P: CubicExtConfig> AddAssign for CubicExt<P> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.c0 += other.c0;
        self.c1 += other.c1;
        self.c2 += other.c2;
    }
}

impl<P: CubicExtConfig> Sub for CubicExt<P> {
    type Output = Self;

    #[inline]
    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<P: CubicExtConfig> SubAssign for CubicExt<P> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.c0 -= other.c0;
        self.c1 -= other.c1;
        self.c2 -= other.c2;
    }
}

impl<P: CubicExtConfig> Neg for CubicExt<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1, -self.c2)
    }
}

impl<P: CubicExtConfig> Mul for CubicExt<P> {
    type Output = Self;

    #[inline]
    fn mul(mut self, other: Self) -> Self {
        self *= other;
        self
    }
}

// Karatsuba over three coordinates: six base multiplications
impl<P: CubicExtConfig> MulAssign for CubicExt<P> {
    fn mul_assign(&mut self, other: Self) {
        let (a0, a1, a2) = (self.c0, self.c1, self.c2);
        let (b0, b1, b2) = (other.c0, other.c1, other.c2);

        let v0 = a0 * b0;
        let v1 = a1 * b1;
        let v2 = a2 * b2;

        self.c0 = v0 + P::mul_base_by_nonresidue(&((a1 + a2) * (b1 + b2) - v1 - v2));
        self.c1 = (a0 + a1) * (b0 + b1) - v0 - v1 + P::mul_base_by_nonresidue(&v2);
        self.c2 = (a0 + a2) * (b0 + b2) - v0 + v1 - v2;
    }
}

impl<P: CubicExtConfig> fmt::Debug for CubicExt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?} + {:?} * w + {:?} * w^2)", self.c0, self.c1, self.c2)
    }
}

impl<P: CubicExtConfig> Serialize for CubicExt<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de, P: CubicExtConfig> Deserialize<'de> for CubicExt<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        Self::from_bytes(&bytes).map_err(D::Error::custom)
    }
}
