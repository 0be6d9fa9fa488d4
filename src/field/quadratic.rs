//! Quadratic extension `Base[w] / (w^2 - beta)`
//!
//! An element is `c0 + c1 * w`. The same type implements every quadratic
//! level of every tower; the config supplies `beta` and the Frobenius table.

use super::config::QuadExtConfig;
use super::field_trait::{Field, SqrtField};
use crate::error::{DecodingError, Result};
use rand::Rng;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Element `c0 + c1 * w` of a quadratic extension
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuadExt<P: QuadExtConfig> {
    pub c0: P::BaseField,
    pub c1: P::BaseField,
}

impl<P: QuadExtConfig> QuadExt<P> {
    #[inline]
    pub const fn new(c0: P::BaseField, c1: P::BaseField) -> Self {
        Self { c0, c1 }
    }

    /// Negates the odd coordinate: `c0 - c1 * w`
    ///
    /// On elements of norm one this is the inverse.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    pub fn conjugate_in_place(&mut self) -> &mut Self {
        self.c1 = -self.c1;
        self
    }

    /// `self * conjugate(self) = c0^2 - beta * c1^2`, an element of the base field
    pub fn norm(&self) -> P::BaseField {
        self.c0.square() - P::mul_base_by_nonresidue(&self.c1.square())
    }

    /// Multiplies both coordinates by an element of the base field
    #[inline]
    pub fn mul_by_base(&self, elem: &P::BaseField) -> Self {
        Self::new(self.c0 * *elem, self.c1 * *elem)
    }

    /// Multiplies by the generator `w`: `(c0 + c1 w) w = beta c1 + c0 w`
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Self {
        Self::new(P::mul_base_by_nonresidue(&self.c1), self.c0)
    }
}

impl<P: QuadExtConfig> Field for QuadExt<P> {
    type BasePrimeField = <P::BaseField as Field>::BasePrimeField;

    const EXTENSION_DEGREE: usize = P::DEGREE;
    const ENCODED_LEN: usize = 2 * <P::BaseField as Field>::ENCODED_LEN;

    #[inline]
    fn zero() -> Self {
        Self::new(P::BaseField::zero(), P::BaseField::zero())
    }

    #[inline]
    fn one() -> Self {
        Self::new(P::BaseField::one(), P::BaseField::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }

    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self
    }

    fn neg_in_place(&mut self) -> &mut Self {
        self.c0.neg_in_place();
        self.c1.neg_in_place();
        self
    }

    /// Complex squaring: two base multiplications instead of three
    ///
    /// v0 = (c0 - c1)(c0 - beta c1) + c0 c1
    /// c0' = v0 + beta c0 c1, c1' = 2 c0 c1
    fn square_in_place(&mut self) -> &mut Self {
        let v2 = self.c0 * self.c1;
        let v0 = (self.c0 - self.c1) * (self.c0 - P::mul_base_by_nonresidue(&self.c1)) + v2;
        self.c0 = v0 + P::mul_base_by_nonresidue(&v2);
        self.c1 = v2.double();
        self
    }

    /// `(c0 - c1 w) / (c0^2 - beta c1^2)`
    fn inverse(&self) -> Result<Self> {
        let norm_inv = self.norm().inverse()?;
        Ok(Self::new(self.c0 * norm_inv, -(self.c1 * norm_inv)))
    }

    fn frobenius_map(&self, power: usize) -> Self {
        Self::new(
            self.c0.frobenius_map(power),
            self.c1.frobenius_map(power) * P::frobenius_coeff_c1(power % P::DEGREE),
        )
    }

    fn mul_by_base_prime_field(&self, elem: &Self::BasePrimeField) -> Self {
        Self::new(
            self.c0.mul_by_base_prime_field(elem),
            self.c1.mul_by_base_prime_field(elem),
        )
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(P::BaseField::random(rng), P::BaseField::random(rng))
    }

    /// Most significant coordinate first: `c1 || c0`
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.c1.to_bytes();
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
        let (hi, lo) = bytes.split_at(<P::BaseField as Field>::ENCODED_LEN);
        Ok(Self::new(
            P::BaseField::from_bytes(lo)?,
            P::BaseField::from_bytes(hi)?,
        ))
    }
}

/// Square roots through the norm map
///
/// For `a = c0 + c1 w` with `a = (x + y w)^2`:
/// x^2 = (c0 ± sqrt(norm(a))) / 2 and y = c1 / 2x, so only square roots in
/// the base field are needed.
impl<P: QuadExtConfig> SqrtField for QuadExt<P>
where
    P::BaseField: SqrtField,
{
    fn sqrt(&self) -> Option<Self> {
        if self.c1.is_zero() {
            return match self.c0.sqrt() {
                Some(root) => Some(Self::new(root, P::BaseField::zero())),
                // c0 = beta y^2
                None => {
                    let beta_inv = P::nonresidue().inverse().ok()?;
                    let root = (self.c0 * beta_inv).sqrt()?;
                    Some(Self::new(P::BaseField::zero(), root))
                }
            };
        }

        let delta = self.norm().sqrt()?;
        let two_inv = P::BaseField::one().double().inverse().ok()?;
        let mut x_squared = (self.c0 + delta) * two_inv;
        if !x_squared.is_square() {
            x_squared = (self.c0 - delta) * two_inv;
        }
        let x = x_squared.sqrt()?;
        let y = self.c1 * x.double().inverse().ok()?;

        let root = Self::new(x, y);
        (root.square() == *self).then_some(root)
    }
}

impl<P: QuadExtConfig> Default for QuadExt<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: QuadExtConfig> Add for QuadExt<P> {
    type Output = Self;

    #[inline]
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<P: QuadExtConfig> AddAssign for QuadExt<P> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.c0 += other.c0;
        self.c1 += other.c1;
    }
}

impl<P: QuadExtConfig> Sub for QuadExt<P> {
    type Output = Self;

    #[inline]
    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<P: QuadExtConfig> SubAssign for QuadExt<P> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.c0 -= other.c0;
        self.c1 -= other.c1;
    }
}

impl<P: QuadExtConfig> Neg for QuadExt<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}

impl<P: QuadExtConfig> Mul for QuadExt<P> {
    type Output = Self;

    #[inline]
    fn mul(mut self, other: Self) -> Self {
        self *= other;
        self
    }
}

// Karatsuba: (a0 + a1 w)(b0 + b1 w) = (v0 + beta v1) + ((a0 + a1)(b0 + b1) - v0 - v1) w
impl<P: QuadExtConfig> MulAssign for QuadExt<P> {
    fn mul_assign(&mut self, other: Self) {
        let v0 = self.c0 * other.c0;
        let v1 = self.c1 * other.c1;
        self.c1 = (self.c0 + self.c1) * (other.c0 + other.c1) - v0 - v1;
        self.c0 = v0 + P::mul_base_by_nonresidue(&v1);
    }
}

impl<P: QuadExtConfig> fmt::Debug for QuadExt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?} + {:?} * w)", self.c0, self.c1)
    }
}

impl<P: QuadExtConfig> Serialize for QuadExt<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de, P: QuadExtConfig> Deserialize<'de> for QuadExt<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        Self::from_bytes(&bytes).map_err(D::Error::custom)
    }
}
