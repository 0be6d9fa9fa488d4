//! The `Field` capability shared by the base field and every tower level.
//!
//! All field types must implement:
//! - Addition, negation, subtraction, doubling
//! - Multiplication, squaring, partial inversion
//! - Frobenius powers and exponentiation by a limb slice
//! - Fixed-width big-endian byte encoding

use crate::error::{DecodingError, Result};
use rand::Rng;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Trait defining the interface for finite field elements
///
/// Every type implementing this trait represents an element of F_p^k and is
/// a small `Copy` value. The in-place methods take `&mut self` and are
/// required to give the same result as the value-returning forms, including
/// when the operand is a copy of the receiver.
///
/// # Laws
/// - Additive identity: `a + zero() = a`
/// - Multiplicative identity: `a * one() = a`
/// - Additive inverse: `a + (-a) = zero()`
/// - Multiplicative inverse: `a * a.inverse()? = one()` (for non-zero a)
///
/// # Examples
/// ```
/// use ecpair::curves::bls24_315::Fq4;
/// use ecpair::field::Field;
///
/// fn sum_of_products<F: Field>(a: F, b: F) -> F {
///     a * b + a.square()
/// }
///
/// let x = Fq4::one().double();
/// assert_eq!(sum_of_products(x, x), x.square().double());
/// ```
pub trait Field:
    'static
    + Sized
    + Copy
    + Clone
    + Debug
    + Default
    + PartialEq
    + Eq
    + Hash
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// The prime field at the bottom of the tower
    type BasePrimeField: PrimeField;

    /// Degree of this field over its prime field
    const EXTENSION_DEGREE: usize;

    /// Length in bytes of the fixed-width encoding
    const ENCODED_LEN: usize;

    fn zero() -> Self;

    fn one() -> Self;

    fn is_zero(&self) -> bool;

    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    /// Returns `self + self`
    fn double(&self) -> Self {
        let mut result = *self;
        result.double_in_place();
        result
    }

    fn double_in_place(&mut self) -> &mut Self;

    fn neg_in_place(&mut self) -> &mut Self {
        *self = -*self;
        self
    }

    /// Returns `self * self` using the level's dedicated squaring formula
    fn square(&self) -> Self {
        let mut result = *self;
        result.square_in_place();
        result
    }

    fn square_in_place(&mut self) -> &mut Self;

    /// Computes the multiplicative inverse
    ///
    /// # Errors
    /// `Error::NonInvertible` when `self` is zero.
    fn inverse(&self) -> Result<Self>;

    fn inverse_in_place(&mut self) -> Result<&mut Self> {
        *self = self.inverse()?;
        Ok(self)
    }

    /// Raises to the `p^power`-th power
    fn frobenius_map(&self, power: usize) -> Self;

    /// Multiplies every prime-field coordinate by `elem`
    fn mul_by_base_prime_field(&self, elem: &Self::BasePrimeField) -> Self;

    /// Computes exponentiation: self^exp
    ///
    /// `exp` holds little-endian 64-bit limbs. Bits are consumed most
    /// significant first with a Montgomery ladder, so every bit costs one
    /// multiplication and one squaring.
    ///
    /// # Special cases
    /// - `a.pow([0]) = one()`
    /// - `zero().pow(exp) = zero()` for exp > 0
    fn pow<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        // Invariant: r1 = r0 * self
        let mut r0 = Self::one();
        let mut r1 = *self;

        for &limb in exp.as_ref().iter().rev() {
            for bit_index in (0..64).rev() {
                if (limb >> bit_index) & 1 == 0 {
                    r1 *= r0;
                    r0.square_in_place();
                } else {
                    r0 *= r1;
                    r1.square_in_place();
                }
            }
        }

        r0
    }

    /// Samples a uniformly random element
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Big-endian encoding of exactly `ENCODED_LEN` bytes
    fn to_bytes(&self) -> Vec<u8>;

    /// Decodes `ENCODED_LEN` bytes produced by `to_bytes`
    ///
    /// # Errors
    /// `InvalidLength` on a length mismatch, `NonCanonical` if any prime-field
    /// coordinate is not below the modulus.
    fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, DecodingError>;
}

/// Fields with a square root algorithm
pub trait SqrtField: Field {
    /// A square root, or `None` for a quadratic non-residue
    fn sqrt(&self) -> Option<Self>;

    fn is_square(&self) -> bool {
        self.sqrt().is_some()
    }
}

/// A prime field F_p: the bottom of every tower
pub trait PrimeField: Field<BasePrimeField = Self> + SqrtField + Ord {
    /// Canonical integer representation
    type BigInt: AsRef<[u64]> + Copy + Debug + Eq + Ord;

    /// Bit length of the modulus
    const MODULUS_BIT_SIZE: usize;

    fn modulus() -> Self::BigInt;

    /// `(p - 1) / divisor`; `divisor` must divide `p - 1`
    fn modulus_minus_one_div(divisor: u64) -> Self::BigInt;

    /// Returns `None` unless `repr` is below the modulus
    fn from_bigint(repr: Self::BigInt) -> Option<Self>;

    fn into_bigint(&self) -> Self::BigInt;

    fn from_u64(value: u64) -> Self;

    /// Whether the canonical value exceeds `(p - 1) / 2`
    fn is_lexicographically_largest(&self) -> bool;
}
