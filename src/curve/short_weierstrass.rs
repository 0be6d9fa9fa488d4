//! Elliptic curves in short Weierstrass form: y² = x³ + ax + b
//!
//! `Affine` is the canonical external form with an explicit point at
//! infinity. `Projective` uses Jacobian coordinates (x = X/Z², y = Y/Z³) so
//! chains of additions and doublings need no inversion.

use crate::error::DecodingError;
use crate::field::config::ConfigMarker;
use crate::field::{Field, PrimeField};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Constants of a short Weierstrass curve group
pub trait SWCurveConfig: ConfigMarker {
    /// Field the coordinates live in
    type BaseField: Field;
    /// Field of scalars, of prime order r
    type ScalarField: PrimeField;

    /// Cofactor h with `#E = h * r`, little-endian limbs
    const COFACTOR: &'static [u64];

    fn coeff_a() -> Self::BaseField;

    fn coeff_b() -> Self::BaseField;

    /// Generator of the order-r subgroup
    fn generator() -> Affine<Self>;

    #[inline]
    fn mul_by_a(elem: &Self::BaseField) -> Self::BaseField {
        Self::coeff_a() * *elem
    }
}

/// Snapshot of a curve's constants, returned by value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams<P: SWCurveConfig> {
    pub a: P::BaseField,
    pub b: P::BaseField,
    pub generator: Affine<P>,
    pub order: <P::ScalarField as PrimeField>::BigInt,
    pub cofactor: Vec<u64>,
}

/// A point in affine coordinates
#[derive(Clone, Copy)]
pub struct Affine<P: SWCurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub infinity: bool,
}

impl<P: SWCurveConfig> Affine<P> {
    /// Creates a point, checking the curve equation
    pub fn new(x: P::BaseField, y: P::BaseField) -> Result<Self, DecodingError> {
        let point = Self::new_unchecked(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(DecodingError::NotOnCurve)
        }
    }

    #[inline]
    pub const fn new_unchecked(x: P::BaseField, y: P::BaseField) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// The point at infinity
    #[inline]
    pub fn identity() -> Self {
        Self {
            x: P::BaseField::zero(),
            y: P::BaseField::zero(),
            infinity: true,
        }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    pub fn generator() -> Self {
        P::generator()
    }

    pub fn curve_params() -> CurveParams<P> {
        CurveParams {
            a: P::coeff_a(),
            b: P::coeff_b(),
            generator: P::generator(),
            order: P::ScalarField::modulus(),
            cofactor: P::COFACTOR.to_vec(),
        }
    }

    /// Coordinates, or `None` for the point at infinity
    pub fn xy(&self) -> Option<(P::BaseField, P::BaseField)> {
        (!self.infinity).then_some((self.x, self.y))
    }

    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }
        let rhs = self.x.square() * self.x + P::mul_by_a(&self.x) + P::coeff_b();
        self.y.square() == rhs
    }

    /// Checks `r * P = O`
    pub fn is_in_correct_subgroup(&self) -> bool {
        self.mul_bigint(P::ScalarField::modulus()).is_zero()
    }

    /// Chord-and-tangent addition, one inversion
    pub fn add(&self, other: &Self) -> Self {
        if self.infinity {
            return *other;
        }
        if other.infinity {
            return *self;
        }
        if self.x == other.x && self.y != other.y {
            return Self::identity();
        }
        if self.x == other.x {
            return self.double();
        }

        // x1 != x2 here, so the denominator is non-zero
        let Ok(denominator) = (other.x - self.x).inverse() else {
            return Self::identity();
        };
        let lambda = (other.y - self.y) * denominator;
        let x3 = lambda.square() - self.x - other.x;
        let y3 = lambda * (self.x - x3) - self.y;
        Self::new_unchecked(x3, y3)
    }

    /// Tangent doubling; a vertical tangent (y = 0) gives the identity
    pub fn double(&self) -> Self {
        if self.infinity {
            return *self;
        }
        let Ok(denominator) = self.y.double().inverse() else {
            return Self::identity();
        };
        let x_squared = self.x.square();
        let lambda = (x_squared.double() + x_squared + P::coeff_a()) * denominator;
        let x3 = lambda.square() - self.x.double();
        let y3 = lambda * (self.x - x3) - self.y;
        Self::new_unchecked(x3, y3)
    }

    /// Double-and-add over little-endian limbs, most significant bit first
    pub fn mul_bigint<S: AsRef<[u64]>>(&self, scalar: S) -> Projective<P> {
        let mut res = Projective::zero();
        for &limb in scalar.as_ref().iter().rev() {
            for i in (0..64).rev() {
                res.double_in_place();
                let sum = res.add_affine(self);
                if (limb >> i) & 1 == 1 {
                    res = sum;
                }
            }
        }
        res
    }

    /// Maps an arbitrary curve point into the order-r subgroup
    pub fn clear_cofactor(&self) -> Self {
        self.mul_bigint(P::COFACTOR).into_affine()
    }

    #[inline]
    pub fn into_projective(&self) -> Projective<P> {
        Projective::from(*self)
    }

    /// Uncompressed `x || y`; the identity is all-zero bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        if self.infinity {
            return vec![0u8; Self::ENCODED_LEN];
        }
        let mut bytes = self.x.to_bytes();
        bytes.extend_from_slice(&self.y.to_bytes());
        bytes
    }

    /// Length of the `to_bytes` encoding
    pub const ENCODED_LEN: usize = 2 * <P::BaseField as Field>::ENCODED_LEN;

    /// Decodes `to_bytes` output
    ///
    /// # Errors
    /// `InvalidLength`, `NonCanonical` for an unreduced coordinate,
    /// `NotOnCurve`, or `NotInSubgroup` for a point outside the order-r subgroup.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodingError> {
        if bytes.len() != Self::ENCODED_LEN {
            return Err(DecodingError::InvalidLength {
                expected: Self::ENCODED_LEN,
                actual: bytes.len(),
            });
        }
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }

        let (x_bytes, y_bytes) = bytes.split_at(<P::BaseField as Field>::ENCODED_LEN);
        let point = Self::new(
            P::BaseField::from_bytes(x_bytes)?,
            P::BaseField::from_bytes(y_bytes)?,
        )?;
        if !point.is_in_correct_subgroup() {
            return Err(DecodingError::NotInSubgroup);
        }
        Ok(point)
    }
}

impl<P: SWCurveConfig> PartialEq for Affine<P> {
    fn eq(&self, other: &Self) -> bool {
        match (self.infinity, other.infinity) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl<P: SWCurveConfig> Eq for Affine<P> {}

impl<P: SWCurveConfig> Neg for Affine<P> {
    type Output = Self;

    fn neg(self) -> Self {
        if self.infinity {
            return self;
        }
        Self::new_unchecked(self.x, -self.y)
    }
}

impl<P: SWCurveConfig> Mul<P::ScalarField> for Affine<P> {
    type Output = Projective<P>;

    fn mul(self, scalar: P::ScalarField) -> Projective<P> {
        self.mul_bigint(scalar.into_bigint())
    }
}

impl<P: SWCurveConfig> fmt::Debug for Affine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity {
            write!(f, "Affine(infinity)")
        } else {
            write!(f, "Affine(x={:?}, y={:?})", self.x, self.y)
        }
    }
}

impl<P: SWCurveConfig> fmt::Display for Affine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity {
            write!(f, "O (point at infinity)")
        } else {
            write!(f, "({:?}, {:?})", self.x, self.y)
        }
    }
}

impl<P: SWCurveConfig> Serialize for Affine<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de, P: SWCurveConfig> Deserialize<'de> for Affine<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        Self::from_bytes(&bytes).map_err(D::Error::custom)
    }
}

/// A point in Jacobian coordinates
#[derive(Clone, Copy)]
pub struct Projective<P: SWCurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub z: P::BaseField,
}

impl<P: SWCurveConfig> Projective<P> {
    #[inline]
    pub const fn new_unchecked(x: P::BaseField, y: P::BaseField, z: P::BaseField) -> Self {
        Self { x, y, z }
    }

    /// The point at infinity, `(1 : 1 : 0)`
    #[inline]
    pub fn zero() -> Self {
        Self::new_unchecked(
            P::BaseField::one(),
            P::BaseField::one(),
            P::BaseField::zero(),
        )
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.z.is_zero()
    }

    pub fn generator() -> Self {
        P::generator().into()
    }

    /// Normalizes with one inversion
    pub fn into_affine(&self) -> Affine<P> {
        let Ok(z_inv) = self.z.inverse() else {
            return Affine::identity();
        };
        let z_inv_squared = z_inv.square();
        Affine::new_unchecked(self.x * z_inv_squared, self.y * z_inv_squared * z_inv)
    }

    /// Normalizes many points with a single inversion (Montgomery's trick)
    pub fn normalize_batch(points: &[Self]) -> Vec<Affine<P>> {
        let mut prefix = Vec::with_capacity(points.len());
        let mut acc = P::BaseField::one();
        for point in points {
            if !point.is_zero() {
                acc *= point.z;
            }
            prefix.push(acc);
        }

        let Ok(mut acc_inv) = acc.inverse() else {
            return points.iter().map(Self::into_affine).collect();
        };

        let mut result = vec![Affine::identity(); points.len()];
        for (i, point) in points.iter().enumerate().rev() {
            if point.is_zero() {
                continue;
            }
            let before = if i == 0 {
                P::BaseField::one()
            } else {
                prefix[i - 1]
            };
            let z_inv = acc_inv * before;
            acc_inv *= point.z;

            let z_inv_squared = z_inv.square();
            result[i] =
                Affine::new_unchecked(point.x * z_inv_squared, point.y * z_inv_squared * z_inv);
        }
        result
    }

    pub fn double(&self) -> Self {
        let mut result = *self;
        result.double_in_place();
        result
    }

    pub fn double_in_place(&mut self) -> &mut Self {
        if self.is_zero() {
            return self;
        }

        if P::coeff_a().is_zero() {
            // dbl-2009-l
            let a = self.x.square();
            let b = self.y.square();
            let c = b.square();
            let d = ((self.x + b).square() - a - c).double();
            let e = a.double() + a;
            let f = e.square();

            self.z *= self.y;
            self.z.double_in_place();
            self.x = f - d.double();
            self.y = e * (d - self.x) - c.double().double().double();
        } else {
            // dbl-2007-bl
            let xx = self.x.square();
            let yy = self.y.square();
            let yyyy = yy.square();
            let zz = self.z.square();
            let s = ((self.x + yy).square() - xx - yyyy).double();
            let m = xx.double() + xx + P::mul_by_a(&zz.square());
            let t = m.square() - s.double();

            self.z = (self.y + self.z).square() - yy - zz;
            self.x = t;
            self.y = m * (s - t) - yyyy.double().double().double();
        }
        self
    }

    /// Mixed addition with an affine point (madd-2007-bl)
    pub fn add_affine(&self, other: &Affine<P>) -> Self {
        if other.infinity {
            return *self;
        }
        if self.is_zero() {
            return Self::from(*other);
        }

        let z1z1 = self.z.square();
        let u2 = other.x * z1z1;
        let s2 = other.y * self.z * z1z1;

        if self.x == u2 {
            return if self.y == s2 {
                self.double()
            } else {
                Self::zero()
            };
        }

        let h = u2 - self.x;
        let hh = h.square();
        let i = hh.double().double();
        let j = h * i;
        let r = (s2 - self.y).double();
        let v = self.x * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (self.y * j).double();
        let z3 = (self.z + h).square() - z1z1 - hh;
        Self::new_unchecked(x3, y3, z3)
    }

    /// Double-and-add over little-endian limbs, most significant bit first
    pub fn mul_bigint<S: AsRef<[u64]>>(&self, scalar: S) -> Self {
        let mut res = Self::zero();
        for &limb in scalar.as_ref().iter().rev() {
            for i in (0..64).rev() {
                res.double_in_place();
                let sum = res + *self;
                if (limb >> i) & 1 == 1 {
                    res = sum;
                }
            }
        }
        res
    }
}

impl<P: SWCurveConfig> From<Affine<P>> for Projective<P> {
    fn from(p: Affine<P>) -> Self {
        if p.infinity {
            Self::zero()
        } else {
            Self::new_unchecked(p.x, p.y, P::BaseField::one())
        }
    }
}

impl<P: SWCurveConfig> From<Projective<P>> for Affine<P> {
    fn from(p: Projective<P>) -> Self {
        p.into_affine()
    }
}

/// Projective equality: X1 Z2² = X2 Z1² and Y1 Z2³ = Y2 Z1³
impl<P: SWCurveConfig> PartialEq for Projective<P> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return true,
            (false, false) => {}
            _ => return false,
        }
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        if self.x * z2z2 != other.x * z1z1 {
            return false;
        }
        self.y * (z2z2 * other.z) == other.y * (z1z1 * self.z)
    }
}

impl<P: SWCurveConfig> Eq for Projective<P> {}

impl<P: SWCurveConfig> PartialEq<Affine<P>> for Projective<P> {
    fn eq(&self, other: &Affine<P>) -> bool {
        *self == Self::from(*other)
    }
}

impl<P: SWCurveConfig> Default for Projective<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: SWCurveConfig> Neg for Projective<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new_unchecked(self.x, -self.y, self.z)
    }
}

impl<P: SWCurveConfig> Add for Projective<P> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

// add-2007-bl
impl<P: SWCurveConfig> AddAssign for Projective<P> {
    fn add_assign(&mut self, other: Self) {
        if self.is_zero() {
            *self = other;
            return;
        }
        if other.is_zero() {
            return;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x * z2z2;
        let u2 = other.x * z1z1;
        let s1 = self.y * other.z * z2z2;
        let s2 = other.y * self.z * z1z1;

        if u1 == u2 {
            if s1 == s2 {
                self.double_in_place();
            } else {
                *self = Self::zero();
            }
            return;
        }

        let h = u2 - u1;
        let i = h.double().square();
        let j = h * i;
        let r = (s2 - s1).double();
        let v = u1 * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (s1 * j).double();
        let z3 = ((self.z + other.z).square() - z1z1 - z2z2) * h;
        *self = Self::new_unchecked(x3, y3, z3);
    }
}

impl<P: SWCurveConfig> Add<Affine<P>> for Projective<P> {
    type Output = Self;

    fn add(self, other: Affine<P>) -> Self {
        self.add_affine(&other)
    }
}

impl<P: SWCurveConfig> AddAssign<Affine<P>> for Projective<P> {
    fn add_assign(&mut self, other: Affine<P>) {
        *self = self.add_affine(&other);
    }
}

impl<P: SWCurveConfig> Sub for Projective<P> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl<P: SWCurveConfig> SubAssign for Projective<P> {
    fn sub_assign(&mut self, other: Self) {
        *self += -other;
    }
}

impl<P: SWCurveConfig> Mul<P::ScalarField> for Projective<P> {
    type Output = Self;

    fn mul(self, scalar: P::ScalarField) -> Self {
        self.mul_bigint(scalar.into_bigint())
    }
}

impl<P: SWCurveConfig> Sum for Projective<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}

impl<P: SWCurveConfig> fmt::Debug for Projective<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.into_affine())
    }
}
