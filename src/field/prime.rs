//! Prime field F_p in Montgomery form
//!
//! Elements store `a * R mod p` with `R = 2^(64N)`. Multiplication is the
//! coarsely integrated operand scanning (CIOS) Montgomery product; addition
//! and subtraction are a single conditional correction.

use super::config::FpConfig;
use super::field_trait::{Field, PrimeField, SqrtField};
use crate::bigint::BigInt;
use crate::error::{DecodingError, Error, Result};
use rand::Rng;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Element of a prime field F_p
///
/// # Type Parameters
/// - `C`: Field configuration (defines p via `FpConfig`)
/// - `N`: Number of 64-bit limbs
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fp<C: FpConfig<N>, const N: usize> {
    /// Montgomery form, always below the modulus
    value: BigInt<N>,
    _config: PhantomData<C>,
}

#[inline(always)]
fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

#[inline(always)]
fn adc(a: u64, b: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128);
    (t as u64, (t >> 64) as u64)
}

impl<C: FpConfig<N>, const N: usize> Fp<C, N> {
    pub const ZERO: Self = Self::from_montgomery(BigInt::zero());
    pub const ONE: Self = Self::from_montgomery(C::R);

    #[inline]
    const fn from_montgomery(value: BigInt<N>) -> Self {
        Self {
            value,
            _config: PhantomData,
        }
    }

    /// Creates a field element from an integer, reducing it modulo p
    pub fn new(value: BigInt<N>) -> Self {
        let reduced = value.modulo(&C::MODULUS);
        Self::from_montgomery(Self::mont_mul(&reduced, &C::R2))
    }

    /// Core Montgomery multiplication: returns `a * b * R^{-1} mod p`
    ///
    /// Requires `a, b < p`.
    #[inline]
    fn mont_mul(a: &BigInt<N>, b: &BigInt<N>) -> BigInt<N> {
        let a = a.limbs();
        let b = b.limbs();
        let m = C::MODULUS;
        let m = m.limbs();

        let mut t = [0u64; N];
        let mut hi = 0u64;

        for i in 0..N {
            // t += a * b[i]
            let mut carry = 0u64;
            for j in 0..N {
                (t[j], carry) = mac(t[j], a[j], b[i], carry);
            }
            let (acc, top) = adc(hi, carry);

            // t += k * m, then shift down one limb
            let k = t[0].wrapping_mul(C::INV);
            let (_, mut carry) = mac(t[0], k, m[0], 0);
            for j in 1..N {
                (t[j - 1], carry) = mac(t[j], k, m[j], carry);
            }
            let (last, c) = adc(acc, carry);
            t[N - 1] = last;
            hi = top + c;
        }

        let result = BigInt::from_limbs(t);
        if hi != 0 || result.compare(&C::MODULUS) != Ordering::Less {
            result.sub_with_borrow(&C::MODULUS).0
        } else {
            result
        }
    }

    /// Legendre symbol: 1 for non-zero squares, -1 for non-squares, 0 for zero
    pub fn legendre(&self) -> i8 {
        if self.is_zero() {
            return 0;
        }
        let s = self.pow(Self::modulus_minus_one_div(2));
        if s.is_one() {
            1
        } else {
            -1
        }
    }
}

impl<C: FpConfig<N>, const N: usize> Field for Fp<C, N> {
    type BasePrimeField = Self;

    const EXTENSION_DEGREE: usize = 1;
    const ENCODED_LEN: usize = N * 8;

    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    #[inline]
    fn double_in_place(&mut self) -> &mut Self {
        self.value = self.value.mod_add(&self.value, &C::MODULUS);
        self
    }

    #[inline]
    fn square_in_place(&mut self) -> &mut Self {
        self.value = Self::mont_mul(&self.value, &self.value);
        self
    }

    /// Fermat inversion: `a^(p-2)`
    fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::NonInvertible);
        }
        let exp = C::MODULUS.sub_with_borrow(&BigInt::from_u64(2)).0;
        Ok(self.pow(exp))
    }

    #[inline]
    fn frobenius_map(&self, _power: usize) -> Self {
        *self
    }

    #[inline]
    fn mul_by_base_prime_field(&self, elem: &Self) -> Self {
        *self * *elem
    }

    /// Rejection sampling over the modulus bit length
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bits = Self::MODULUS_BIT_SIZE;
        let top_mask = if bits % 64 == 0 {
            u64::MAX
        } else {
            (1u64 << (bits % 64)) - 1
        };
        let top = (bits - 1) / 64;

        loop {
            let mut limbs = [0u64; N];
            for limb in limbs.iter_mut().take(top + 1) {
                *limb = rng.gen();
            }
            limbs[top] &= top_mask;
            if let Some(value) = Self::from_bigint(BigInt::from_limbs(limbs)) {
                return value;
            }
        }
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.into_bigint().to_be_bytes()
    }

    fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, DecodingError> {
        if bytes.len() != Self::ENCODED_LEN {
            return Err(DecodingError::InvalidLength {
                expected: Self::ENCODED_LEN,
                actual: bytes.len(),
            });
        }
        Self::from_bigint(BigInt::from_be_bytes(bytes)).ok_or(DecodingError::NonCanonical)
    }
}

impl<C: FpConfig<N>, const N: usize> PrimeField for Fp<C, N> {
    type BigInt = BigInt<N>;

    const MODULUS_BIT_SIZE: usize = N * 64 - C::MODULUS.limbs()[N - 1].leading_zeros() as usize;

    fn modulus() -> BigInt<N> {
        C::MODULUS
    }

    fn modulus_minus_one_div(divisor: u64) -> BigInt<N> {
        let p_minus_one = C::MODULUS.sub_with_borrow(&BigInt::one()).0;
        p_minus_one.div_rem_u64(divisor).0
    }

    fn from_bigint(repr: BigInt<N>) -> Option<Self> {
        if repr.compare(&C::MODULUS) != Ordering::Less {
            return None;
        }
        Some(Self::from_montgomery(Self::mont_mul(&repr, &C::R2)))
    }

    fn into_bigint(&self) -> BigInt<N> {
        Self::mont_mul(&self.value, &BigInt::one())
    }

    fn from_u64(value: u64) -> Self {
        Self::new(BigInt::from_u64(value))
    }

    fn is_lexicographically_largest(&self) -> bool {
        let half = C::MODULUS.sub_with_borrow(&BigInt::one()).0.shr(1);
        self.into_bigint().compare(&half) == Ordering::Greater
    }
}

impl<C: FpConfig<N>, const N: usize> SqrtField for Fp<C, N> {
    /// Tonelli-Shanks
    fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(*self);
        }

        let p_minus_one = C::MODULUS.sub_with_borrow(&BigInt::one()).0;
        let two_adicity = p_minus_one.trailing_zeros();
        let trace = p_minus_one.shr(two_adicity);
        let trace_plus_one_div_two = trace.add_with_carry(&BigInt::one()).0.shr(1);

        let mut z = Self::from_u64(C::NONRESIDUE).pow(trace);
        let mut x = self.pow(trace_plus_one_div_two);
        let mut b = self.pow(trace);
        let mut m = two_adicity;

        while !b.is_one() {
            let mut i = 0;
            let mut b2 = b;
            while !b2.is_one() {
                b2.square_in_place();
                i += 1;
                if i == m {
                    return None;
                }
            }

            let mut c = z;
            for _ in 0..(m - i - 1) {
                c.square_in_place();
            }
            x *= c;
            z = c.square();
            b *= z;
            m = i;
        }

        Some(x)
    }

    fn is_square(&self) -> bool {
        self.legendre() >= 0
    }
}

impl<C: FpConfig<N>, const N: usize> Default for Fp<C, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<C: FpConfig<N>, const N: usize> From<u64> for Fp<C, N> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<C: FpConfig<N>, const N: usize> FromStr for Fp<C, N> {
    type Err = DecodingError;

    /// Parses a canonical decimal representation
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let value = BigInt::from_dec_str(s)?;
        Self::from_bigint(value).ok_or(DecodingError::NonCanonical)
    }
}

impl<C: FpConfig<N>, const N: usize> PartialOrd for Fp<C, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: FpConfig<N>, const N: usize> Ord for Fp<C, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.into_bigint().compare(&other.into_bigint())
    }
}

impl<C: FpConfig<N>, const N: usize> Add for Fp<C, N> {
    type Output = Self;

    #[inline]
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<C: FpConfig<N>, const N: usize> AddAssign for Fp<C, N> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.value = self.value.mod_add(&other.value, &C::MODULUS);
    }
}

impl<C: FpConfig<N>, const N: usize> Sub for Fp<C, N> {
    type Output = Self;

    #[inline]
    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<C: FpConfig<N>, const N: usize> SubAssign for Fp<C, N> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.value = self.value.mod_sub(&other.value, &C::MODULUS);
    }
}

// -a = p - a, with -0 = 0
impl<C: FpConfig<N>, const N: usize> Neg for Fp<C, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.is_zero() {
            return self;
        }
        Self::from_montgomery(C::MODULUS.sub_with_borrow(&self.value).0)
    }
}

impl<C: FpConfig<N>, const N: usize> Mul for Fp<C, N> {
    type Output = Self;

    #[inline]
    fn mul(mut self, other: Self) -> Self {
        self *= other;
        self
    }
}

impl<C: FpConfig<N>, const N: usize> MulAssign for Fp<C, N> {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        self.value = Self::mont_mul(&self.value, &other.value);
    }
}

impl<C: FpConfig<N>, const N: usize> fmt::Debug for Fp<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp({})", self.into_bigint())
    }
}

impl<C: FpConfig<N>, const N: usize> fmt::Display for Fp<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_bigint())
    }
}

impl<C: FpConfig<N>, const N: usize> Serialize for Fp<C, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de, C: FpConfig<N>, const N: usize> Deserialize<'de> for Fp<C, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        Self::from_bytes(&bytes).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    struct F97Config;

    impl FpConfig<1> for F97Config {
        const MODULUS: BigInt<1> = BigInt::from_u64(97);
        const NONRESIDUE: u64 = 5;
    }

    type F97 = Fp<F97Config, 1>;

    // 2^255 - 19: four limbs with a single spare bit
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    struct F25519Config;

    impl FpConfig<4> for F25519Config {
        const MODULUS: BigInt<4> = BigInt::from_limbs([
            0xffffffffffffffed,
            0xffffffffffffffff,
            0xffffffffffffffff,
            0x7fffffffffffffff,
        ]);
        const NONRESIDUE: u64 = 2;
    }

    type F25519 = Fp<F25519Config, 4>;

    #[test]
    fn test_prime_field_basic() {
        assert!(F97::zero().is_zero());
        assert!(F97::one().is_one());
        assert_eq!(F97::from(3u64) + F97::from(4u64), F97::from(7u64));
        assert_eq!(F97::from(90u64) + F97::from(10u64), F97::from(3u64));
        assert_eq!(F97::from(3u64) - F97::from(4u64), F97::from(96u64));
        assert_eq!(-F97::from(1u64), F97::from(96u64));
        assert_eq!(-F97::zero(), F97::zero());
    }

    #[test]
    fn test_prime_field_multiplication() {
        let a = F97::from(30u64);
        let b = F97::from(50u64);
        assert_eq!(a * b, F97::from(1500 % 97));
        assert_eq!(a.square(), F97::from(900 % 97));
        assert_eq!(a.into_bigint(), BigInt::from_u64(30));
    }

    #[test]
    fn test_prime_field_inverse() {
        for v in 1..97u64 {
            let a = F97::from(v);
            assert_eq!(a * a.inverse().unwrap(), F97::one());
        }
        assert_eq!(F97::zero().inverse(), Err(Error::NonInvertible));
    }

    #[test]
    fn test_prime_field_exponentiation() {
        let a = F97::from(2u64);
        assert_eq!(a.pow([10u64]), F97::from(1024 % 97));
        assert_eq!(a.pow([0u64]), F97::one());
        assert_eq!(F97::zero().pow([5u64]), F97::zero());
    }

    #[test]
    fn test_sqrt_and_legendre() {
        let mut squares = 0;
        for v in 0..97u64 {
            let a = F97::from(v);
            match a.sqrt() {
                Some(root) => {
                    assert_eq!(root.square(), a);
                    assert!(a.legendre() >= 0);
                    squares += 1;
                }
                None => assert_eq!(a.legendre(), -1),
            }
        }
        // 48 non-zero squares plus zero
        assert_eq!(squares, 49);
    }

    #[test]
    fn test_multi_limb_arithmetic() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..100 {
            let a = F25519::random(&mut rng);
            let b = F25519::random(&mut rng);
            assert_eq!((a + b) - b, a);
            assert_eq!(a * b, b * a);
            assert_eq!(a.square(), a * a);
            if let Ok(b_inv) = b.inverse() {
                assert_eq!(a * b * b_inv, a);
            }
            let sq = a.square();
            let root = sq.sqrt().unwrap();
            assert!(root == a || root == -a);
        }
    }

    #[test]
    fn test_decimal_and_bytes() {
        let a: F25519 = "57896044618658097711785492504343953926634992332820282019728792003956564819948"
            .parse()
            .unwrap();
        assert_eq!(a, -F25519::one());
        assert_eq!(F25519::from_bytes(&a.to_bytes()).unwrap(), a);

        let p = "57896044618658097711785492504343953926634992332820282019728792003956564819949";
        assert_eq!(p.parse::<F25519>(), Err(DecodingError::NonCanonical));

        let too_short = [0u8; 31];
        assert_eq!(
            F25519::from_bytes(&too_short),
            Err(DecodingError::InvalidLength {
                expected: 32,
                actual: 31
            })
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let a = F97::from(42u64);
        let json = serde_json::to_string(&a).unwrap();
        let back: F97 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
