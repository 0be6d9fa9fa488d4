//! Twisted Edwards curves: a·x² + y² = 1 + d·x²·y²
//!
//! With `a` a square and `d` a non-square the addition law is complete: the
//! same formula adds distinct points, doubles, and handles the neutral
//! element `(0, 1)` with no special cases.

use crate::error::DecodingError;
use crate::field::config::ConfigMarker;
use crate::field::{Field, PrimeField, SqrtField};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Constants of a complete twisted Edwards curve
pub trait TECurveConfig: ConfigMarker {
    type BaseField: PrimeField;

    /// Cofactor, little-endian limbs
    const COFACTOR: &'static [u64];

    /// Order of the prime subgroup, little-endian limbs
    const ORDER: &'static [u64];

    fn coeff_a() -> Self::BaseField;

    fn coeff_d() -> Self::BaseField;

    /// Generator of the prime-order subgroup
    fn generator() -> Affine<Self>;

    #[inline]
    fn mul_by_a(elem: &Self::BaseField) -> Self::BaseField {
        Self::coeff_a() * *elem
    }
}

/// Snapshot of a twisted Edwards curve's constants, returned by value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams<P: TECurveConfig> {
    pub a: P::BaseField,
    pub d: P::BaseField,
    pub cofactor: Vec<u64>,
    pub order: Vec<u64>,
    pub base: Affine<P>,
}

// Denominators of the complete formulas never vanish for points on the curve.
fn invert_nonzero<F: Field>(value: F) -> F {
    value
        .inverse()
        .expect("complete twisted Edwards formulas have non-zero denominators")
}

/// A point in affine coordinates
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Affine<P: TECurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
}

impl<P: TECurveConfig> Affine<P> {
    /// Creates a point, checking the curve equation
    pub fn new(x: P::BaseField, y: P::BaseField) -> Result<Self, DecodingError> {
        let point = Self::new_unchecked(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(DecodingError::NotOnCurve)
        }
    }

    /// Creates a point without checking the curve equation
    ///
    /// The caller must pass a point on the curve: the addition formulas are
    /// complete only there, and `add`, `double` panic on an off-curve operand.
    #[inline]
    pub const fn new_unchecked(x: P::BaseField, y: P::BaseField) -> Self {
        Self { x, y }
    }

    /// The neutral element `(0, 1)`
    #[inline]
    pub fn identity() -> Self {
        Self::new_unchecked(P::BaseField::zero(), P::BaseField::one())
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_one()
    }

    pub fn generator() -> Self {
        P::generator()
    }

    pub fn curve_params() -> CurveParams<P> {
        CurveParams {
            a: P::coeff_a(),
            d: P::coeff_d(),
            cofactor: P::COFACTOR.to_vec(),
            order: P::ORDER.to_vec(),
            base: P::generator(),
        }
    }

    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();
        P::mul_by_a(&x2) + y2 == P::BaseField::one() + P::coeff_d() * x2 * y2
    }

    /// Checks `order * P = (0, 1)`
    pub fn is_in_correct_subgroup(&self) -> bool {
        self.mul_bigint(P::ORDER).is_zero()
    }

    /// Unified addition
    ///
    /// x3 = (x1 y2 + y1 x2) / (1 + d x1 x2 y1 y2)
    /// y3 = (y1 y2 - a x1 x2) / (1 - d x1 x2 y1 y2)
    ///
    /// # Panics
    /// Only if an operand is not on the curve (built with `new_unchecked`).
    pub fn add(&self, other: &Self) -> Self {
        let x1y2 = self.x * other.y;
        let y1x2 = self.y * other.x;
        let x1x2 = self.x * other.x;
        let y1y2 = self.y * other.y;
        let dxy = P::coeff_d() * x1x2 * y1y2;

        let den_x = P::BaseField::one() + dxy;
        let den_y = P::BaseField::one() - dxy;
        let inv = invert_nonzero(den_x * den_y);

        Self::new_unchecked(
            (x1y2 + y1x2) * den_y * inv,
            (y1y2 - P::mul_by_a(&x1x2)) * den_x * inv,
        )
    }

    /// x3 = 2xy / (a x² + y²), y3 = (y² - a x²) / (2 - a x² - y²)
    ///
    /// # Panics
    /// Only if the point is not on the curve.
    pub fn double(&self) -> Self {
        let ax2 = P::mul_by_a(&self.x.square());
        let y2 = self.y.square();
        let den_x = ax2 + y2;
        let den_y = P::BaseField::one().double() - den_x;
        let inv = invert_nonzero(den_x * den_y);

        Self::new_unchecked(
            (self.x * self.y).double() * den_y * inv,
            (y2 - ax2) * den_x * inv,
        )
    }

    /// Double-and-add over little-endian limbs, most significant bit first
    pub fn mul_bigint<S: AsRef<[u64]>>(&self, scalar: S) -> Projective<P> {
        Projective::from(*self).mul_bigint(scalar)
    }

    #[inline]
    pub fn into_projective(&self) -> Projective<P> {
        Projective::from(*self)
    }

    /// Length of the `to_bytes` encoding
    pub const ENCODED_LEN: usize = 2 * <P::BaseField as Field>::ENCODED_LEN;

    /// Length of the `to_compressed` encoding
    pub const COMPRESSED_LEN: usize = <P::BaseField as Field>::ENCODED_LEN;

    /// Uncompressed `x || y`, big-endian
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.x.to_bytes();
        bytes.extend_from_slice(&self.y.to_bytes());
        bytes
    }

    /// Decodes `to_bytes` output, checking the curve equation
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodingError> {
        if bytes.len() != Self::ENCODED_LEN {
            return Err(DecodingError::InvalidLength {
                expected: Self::ENCODED_LEN,
                actual: bytes.len(),
            });
        }
        let (x_bytes, y_bytes) = bytes.split_at(Self::COMPRESSED_LEN);
        Self::new(
            P::BaseField::from_bytes(x_bytes)?,
            P::BaseField::from_bytes(y_bytes)?,
        )
    }

    /// `y` big-endian with the top bit set when `x` is lexicographically largest
    pub fn to_compressed(&self) -> Vec<u8> {
        let mut bytes = self.y.to_bytes();
        if self.x.is_lexicographically_largest() {
            bytes[0] |= 0x80;
        }
        bytes
    }

    /// Recovers `x` from `y` via x² = (1 - y²) / (a - d y²)
    pub fn from_compressed(bytes: &[u8]) -> Result<Self, DecodingError> {
        if bytes.len() != Self::COMPRESSED_LEN {
            return Err(DecodingError::InvalidLength {
                expected: Self::COMPRESSED_LEN,
                actual: bytes.len(),
            });
        }
        let mut y_bytes = bytes.to_vec();
        let largest = y_bytes[0] & 0x80 != 0;
        y_bytes[0] &= 0x7f;

        let y = P::BaseField::from_bytes(&y_bytes)?;
        let y2 = y.square();
        let denominator = P::coeff_a() - P::coeff_d() * y2;
        let denominator_inv = denominator
            .inverse()
            .map_err(|_| DecodingError::InvalidCompression)?;
        let x2 = (P::BaseField::one() - y2) * denominator_inv;

        let mut x = x2.sqrt().ok_or(DecodingError::InvalidCompression)?;
        if x.is_zero() && largest {
            return Err(DecodingError::InvalidCompression);
        }
        if x.is_lexicographically_largest() != largest {
            x = -x;
        }
        Ok(Self::new_unchecked(x, y))
    }
}

impl<P: TECurveConfig> Default for Affine<P> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<P: TECurveConfig> Neg for Affine<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new_unchecked(-self.x, self.y)
    }
}

impl<P: TECurveConfig> Add for Affine<P> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Affine::add(&self, &other)
    }
}

impl<P: TECurveConfig> fmt::Debug for Affine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Affine(x={:?}, y={:?})", self.x, self.y)
    }
}

impl<P: TECurveConfig> fmt::Display for Affine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x.into_bigint(), self.y.into_bigint())
    }
}

impl<P: TECurveConfig> Serialize for Affine<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_compressed())
    }
}

impl<'de, P: TECurveConfig> Deserialize<'de> for Affine<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        Self::from_compressed(&bytes).map_err(D::Error::custom)
    }
}

/// A point in homogeneous projective coordinates (X : Y : Z), x = X/Z, y = Y/Z
#[derive(Clone, Copy)]
pub struct Projective<P: TECurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub z: P::BaseField,
}

impl<P: TECurveConfig> Projective<P> {
    /// Creates a point from raw coordinates
    ///
    /// `(X/Z, Y/Z)` must lie on the curve with `Z != 0`, otherwise
    /// `into_affine` panics.
    #[inline]
    pub const fn new_unchecked(x: P::BaseField, y: P::BaseField, z: P::BaseField) -> Self {
        Self { x, y, z }
    }

    /// The neutral element `(0 : 1 : 1)`
    #[inline]
    pub fn zero() -> Self {
        Self::new_unchecked(
            P::BaseField::zero(),
            P::BaseField::one(),
            P::BaseField::one(),
        )
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y == self.z
    }

    /// Normalizes with one inversion
    ///
    /// # Panics
    /// Only for a value not produced from points on the curve (Z = 0).
    pub fn into_affine(&self) -> Affine<P> {
        let z_inv = invert_nonzero(self.z);
        Affine::new_unchecked(self.x * z_inv, self.y * z_inv)
    }

    pub fn double(&self) -> Self {
        let mut result = *self;
        result.double_in_place();
        result
    }

    /// dbl-2008-bbjlp
    pub fn double_in_place(&mut self) -> &mut Self {
        let b = (self.x + self.y).square();
        let c = self.x.square();
        let d = self.y.square();
        let e = P::mul_by_a(&c);
        let f = e + d;
        let h = self.z.square();
        let j = f - h.double();

        self.x = (b - c - d) * j;
        self.y = f * (e - d);
        self.z = f * j;
        self
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

impl<P: TECurveConfig> From<Affine<P>> for Projective<P> {
    fn from(p: Affine<P>) -> Self {
        Self::new_unchecked(p.x, p.y, P::BaseField::one())
    }
}

impl<P: TECurveConfig> From<Projective<P>> for Affine<P> {
    fn from(p: Projective<P>) -> Self {
        p.into_affine()
    }
}

impl<P: TECurveConfig> Default for Projective<P> {
    fn default() -> Self {
        Self::zero()
    }
}

/// X1 Z2 = X2 Z1 and Y1 Z2 = Y2 Z1
impl<P: TECurveConfig> PartialEq for Projective<P> {
    fn eq(&self, other: &Self) -> bool {
        self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
    }
}

impl<P: TECurveConfig> Eq for Projective<P> {}

impl<P: TECurveConfig> Neg for Projective<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new_unchecked(-self.x, self.y, self.z)
    }
}

impl<P: TECurveConfig> Add for Projective<P> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

// add-2008-bbjlp
impl<P: TECurveConfig> AddAssign for Projective<P> {
    fn add_assign(&mut self, other: Self) {
        let a = self.z * other.z;
        let b = a.square();
        let c = self.x * other.x;
        let d = self.y * other.y;
        let e = P::coeff_d() * c * d;
        let f = b - e;
        let g = b + e;

        let x3 = a * f * ((self.x + self.y) * (other.x + other.y) - c - d);
        let y3 = a * g * (d - P::mul_by_a(&c));
        let z3 = f * g;
        *self = Self::new_unchecked(x3, y3, z3);
    }
}

impl<P: TECurveConfig> Sub for Projective<P> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl<P: TECurveConfig> fmt::Debug for Projective<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Projective({:?} : {:?} : {:?})", self.x, self.y, self.z)
    }
}
