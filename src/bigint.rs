//! Big Integer implementation with compile-time sizing
//!
//! `BigInt<N>` is an unsigned integer of N 64-bit limbs, stored little-endian
//! (least significant limb first). Field moduli, Montgomery constants, curve
//! orders and cofactors are all expressed with it:
//! - BigInt<4> for the 253/255-bit scalar fields
//! - BigInt<5> for the 315-bit BLS24-315 base field
//! - BigInt<6> for the 381-bit BLS12-381 base field
//!
//! The `const fn` helpers at the bottom of the impl derive Montgomery
//! constants from a modulus at compile time.

use crate::error::DecodingError;
use std::cmp::Ordering;
use std::fmt;

/// A big integer with N 64-bit limbs (N * 64 bits total)
///
/// # Examples
/// ```
/// use ecpair::bigint::BigInt;
/// let a = BigInt::<4>::from_u64(42);
/// let b = BigInt::<4>::from_dec_str("100").unwrap();
/// let (sum, carry) = a.add_with_carry(&b);
/// assert_eq!(sum, BigInt::from_u64(142));
/// assert!(!carry);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BigInt<const N: usize> {
    limbs: [u64; N],
}

impl<const N: usize> BigInt<N> {
    /// Number of bits this BigInt can represent
    pub const BITS: usize = N * 64;

    /// Number of bytes in the big-endian encoding
    pub const BYTES: usize = N * 8;

    #[inline]
    pub const fn zero() -> Self {
        Self { limbs: [0; N] }
    }

    #[inline]
    pub const fn one() -> Self {
        let mut limbs = [0; N];
        limbs[0] = 1;
        Self { limbs }
    }

    #[inline]
    pub const fn from_u64(val: u64) -> Self {
        let mut limbs = [0; N];
        limbs[0] = val;
        Self { limbs }
    }

    /// Creates a BigInt from limbs in little-endian order
    #[inline]
    pub const fn from_limbs(limbs: [u64; N]) -> Self {
        Self { limbs }
    }

    /// Gets a reference to the internal limbs array (little-endian)
    #[inline]
    pub const fn limbs(&self) -> &[u64; N] {
        &self.limbs
    }

    /// Creates a BigInt from a hexadecimal string (big-endian, optional "0x")
    ///
    /// Intended for hard-wired constants.
    ///
    /// # Panics
    /// Panics if the string contains a non-hex digit or does not fit in N limbs.
    pub(crate) fn from_hex(hex: &str) -> Self {
        let hex = hex.trim();
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let mut limbs = [0u64; N];

        for (i, c) in hex.bytes().rev().enumerate() {
            let digit = (c as char).to_digit(16).expect("invalid hex digit") as u64;
            let limb_idx = i / 16;
            assert!(limb_idx < N || digit == 0, "hex literal too large");
            if limb_idx < N {
                limbs[limb_idx] |= digit << ((i % 16) * 4);
            }
        }

        Self { limbs }
    }

    /// Parses an unsigned decimal string
    ///
    /// Fails on an empty string, any non-decimal character, or a value that
    /// does not fit in N limbs.
    pub fn from_dec_str(s: &str) -> Result<Self, DecodingError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DecodingError::InvalidDigit(' '));
        }

        let mut result = Self::zero();
        for c in s.chars() {
            let digit = c.to_digit(10).ok_or(DecodingError::InvalidDigit(c))? as u64;
            let mut carry = digit as u128;
            for limb in result.limbs.iter_mut() {
                let t = (*limb as u128) * 10 + carry;
                *limb = t as u64;
                carry = t >> 64;
            }
            if carry != 0 {
                return Err(DecodingError::Overflow);
            }
        }

        Ok(result)
    }

    /// Creates a BigInt from big-endian bytes
    ///
    /// Bytes beyond the N-limb capacity (at the most significant end) are ignored.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut limbs = [0u64; N];

        for (i, &byte) in bytes.iter().rev().enumerate() {
            let limb_idx = i / 8;
            let byte_idx = i % 8;
            if limb_idx < N {
                limbs[limb_idx] |= (byte as u64) << (byte_idx * 8);
            }
        }

        Self { limbs }
    }

    /// Returns exactly N * 8 bytes in big-endian order
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::BYTES);
        for limb in self.limbs.iter().rev() {
            bytes.extend_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.limbs[0] == 1 && self.limbs[1..].iter().all(|&limb| limb == 0)
    }

    /// Returns the bit length (position of highest set bit + 1), 0 for zero
    pub fn bit_length(&self) -> usize {
        for i in (0..N).rev() {
            if self.limbs[i] != 0 {
                let leading_zeros = self.limbs[i].leading_zeros() as usize;
                return (i + 1) * 64 - leading_zeros;
            }
        }
        0
    }

    /// Get a specific bit (0-indexed from least significant)
    pub fn get_bit(&self, idx: usize) -> bool {
        if idx >= Self::BITS {
            return false;
        }
        (self.limbs[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Number of trailing zero bits, `BITS` for zero
    pub fn trailing_zeros(&self) -> usize {
        let mut count = 0;
        for &limb in self.limbs.iter() {
            if limb == 0 {
                count += 64;
            } else {
                return count + limb.trailing_zeros() as usize;
            }
        }
        count
    }

    /// Compares from the most significant limb down
    pub fn compare(&self, other: &Self) -> Ordering {
        for i in (0..N).rev() {
            match self.limbs[i].cmp(&other.limbs[i]) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }

    /// Addition with carry detection
    ///
    /// Returns (result, overflow) where overflow is true if addition overflowed
    #[inline]
    pub fn add_with_carry(&self, other: &Self) -> (Self, bool) {
        let mut result = Self::zero();
        let mut carry = false;

        for i in 0..N {
            let (sum1, overflow1) = self.limbs[i].overflowing_add(other.limbs[i]);
            let (sum2, overflow2) = sum1.overflowing_add(carry as u64);
            result.limbs[i] = sum2;
            carry = overflow1 || overflow2;
        }

        (result, carry)
    }

    /// Subtraction with borrow detection
    ///
    /// Returns (result, underflow) where underflow is true if subtraction underflowed
    #[inline]
    pub fn sub_with_borrow(&self, other: &Self) -> (Self, bool) {
        let mut result = Self::zero();
        let mut borrow = false;

        for i in 0..N {
            let (diff1, underflow1) = self.limbs[i].overflowing_sub(other.limbs[i]);
            let (diff2, underflow2) = diff1.overflowing_sub(borrow as u64);
            result.limbs[i] = diff2;
            borrow = underflow1 || underflow2;
        }

        (result, borrow)
    }

    /// Right shift by a number of bits
    pub fn shr(&self, bits: usize) -> Self {
        if bits >= Self::BITS {
            return Self::zero();
        }

        let limb_shift = bits / 64;
        let bit_shift = bits % 64;
        let mut result = Self::zero();

        for i in 0..(N - limb_shift) {
            let src_idx = i + limb_shift;
            result.limbs[i] = self.limbs[src_idx] >> bit_shift;
            if bit_shift != 0 && src_idx + 1 < N {
                result.limbs[i] |= self.limbs[src_idx + 1] << (64 - bit_shift);
            }
        }

        result
    }

    /// Division by a small non-zero divisor: (quotient, remainder)
    pub fn div_rem_u64(&self, divisor: u64) -> (Self, u64) {
        assert!(divisor != 0, "Division by zero");
        let mut quotient = Self::zero();
        let mut rem = 0u128;

        for i in (0..N).rev() {
            let cur = (rem << 64) | self.limbs[i] as u128;
            quotient.limbs[i] = (cur / divisor as u128) as u64;
            rem = cur % divisor as u128;
        }

        (quotient, rem as u64)
    }

    /// Modular reduction by shift-and-subtract long division
    pub fn modulo(&self, modulus: &Self) -> Self {
        assert!(!modulus.is_zero(), "Division by zero");
        if self.compare(modulus) == Ordering::Less {
            return *self;
        }

        let mut remainder = Self::zero();
        for i in (0..Self::BITS).rev() {
            let top = remainder.limbs[N - 1] >> 63;
            remainder = remainder.shl1();
            if self.get_bit(i) {
                remainder.limbs[0] |= 1;
            }
            if top == 1 || remainder.compare(modulus) != Ordering::Less {
                remainder = remainder.sub_with_borrow(modulus).0;
            }
        }

        remainder
    }

    /// (self + other) mod modulus, assuming self < modulus and other < modulus
    #[inline]
    pub fn mod_add(&self, other: &Self, modulus: &Self) -> Self {
        let (sum, carry) = self.add_with_carry(other);
        if carry || sum.compare(modulus) != Ordering::Less {
            sum.sub_with_borrow(modulus).0
        } else {
            sum
        }
    }

    /// (self - other) mod modulus, assuming self < modulus and other < modulus
    #[inline]
    pub fn mod_sub(&self, other: &Self, modulus: &Self) -> Self {
        let (diff, borrow) = self.sub_with_borrow(other);
        if borrow {
            diff.add_with_carry(modulus).0
        } else {
            diff
        }
    }

    #[inline]
    fn shl1(&self) -> Self {
        let mut result = Self::zero();
        let mut carry = 0u64;
        for i in 0..N {
            result.limbs[i] = (self.limbs[i] << 1) | carry;
            carry = self.limbs[i] >> 63;
        }
        result
    }

    /// `self >= other`, usable in constant contexts
    pub const fn const_geq(&self, other: &Self) -> bool {
        let mut i = N;
        while i > 0 {
            i -= 1;
            if self.limbs[i] > other.limbs[i] {
                return true;
            }
            if self.limbs[i] < other.limbs[i] {
                return false;
            }
        }
        true
    }

    /// Wrapping subtraction, usable in constant contexts
    pub const fn const_sub(&self, other: &Self) -> Self {
        let mut limbs = [0u64; N];
        let mut borrow = false;
        let mut i = 0;
        while i < N {
            let (d1, u1) = self.limbs[i].overflowing_sub(other.limbs[i]);
            let (d2, u2) = d1.overflowing_sub(borrow as u64);
            limbs[i] = d2;
            borrow = u1 || u2;
            i += 1;
        }
        Self { limbs }
    }

    /// `2 * self mod modulus` for `self < modulus`, usable in constant contexts
    pub const fn const_double_mod(&self, modulus: &Self) -> Self {
        let mut limbs = [0u64; N];
        let mut carry = 0u64;
        let mut i = 0;
        while i < N {
            limbs[i] = (self.limbs[i] << 1) | carry;
            carry = self.limbs[i] >> 63;
            i += 1;
        }
        let doubled = Self { limbs };
        if carry == 1 || doubled.const_geq(modulus) {
            doubled.const_sub(modulus)
        } else {
            doubled
        }
    }

    /// `2^(64 * N * k) mod modulus`, the k-th power of the Montgomery radix
    pub const fn montgomery_radix_power(modulus: &Self, k: usize) -> Self {
        let mut r = Self::one();
        let mut i = 0;
        while i < 64 * N * k {
            r = r.const_double_mod(modulus);
            i += 1;
        }
        r
    }
}

/// `-m0^{-1} mod 2^64` for an odd least significant limb `m0`
pub const fn montgomery_inv(m0: u64) -> u64 {
    // m0^(2^63 - 1) = m0^(-1) in the group of units mod 2^64
    let mut inv = 1u64;
    let mut i = 0;
    while i < 63 {
        inv = inv.wrapping_mul(inv);
        inv = inv.wrapping_mul(m0);
        i += 1;
    }
    inv.wrapping_neg()
}

impl<const N: usize> PartialOrd for BigInt<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for BigInt<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<const N: usize> AsRef<[u64]> for BigInt<N> {
    fn as_ref(&self) -> &[u64] {
        &self.limbs
    }
}

impl<const N: usize> Default for BigInt<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> fmt::Debug for BigInt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt<{}>(0x", N)?;
        for &limb in self.limbs.iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        write!(f, ")")
    }
}

impl<const N: usize> fmt::Display for BigInt<N> {
    /// Decimal rendering
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut digits = Vec::new();
        let mut cur = *self;
        while !cur.is_zero() {
            let (q, r) = cur.div_rem_u64(10);
            digits.push(b'0' + r as u8);
            cur = q;
        }
        digits.reverse();
        f.write_str(&String::from_utf8_lossy(&digits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type BigInt256 = BigInt<4>;

    #[test]
    fn test_zero_and_one() {
        let zero = BigInt256::zero();
        let one = BigInt256::one();

        assert!(zero.is_zero());
        assert!(!one.is_zero());
        assert!(one.is_one());
        assert!(!zero.is_one());
    }

    #[test]
    fn test_addition_with_carry() {
        let a = BigInt256::from_u64(u64::MAX);
        let b = BigInt256::from_u64(1);
        let (sum, overflow) = a.add_with_carry(&b);

        assert_eq!(sum.limbs[0], 0);
        assert_eq!(sum.limbs[1], 1);
        assert!(!overflow);

        let max = BigInt256::from_limbs([u64::MAX; 4]);
        let (wrapped, overflow) = max.add_with_carry(&b);
        assert!(wrapped.is_zero());
        assert!(overflow);
    }

    #[test]
    fn test_subtraction_with_borrow() {
        let a = BigInt256::from_u64(300);
        let b = BigInt256::from_u64(100);
        assert_eq!(a.sub_with_borrow(&b), (BigInt256::from_u64(200), false));

        let (diff, borrow) = b.sub_with_borrow(&a);
        assert!(borrow);
        assert_eq!(diff.add_with_carry(&a).0, b);
    }

    #[test]
    fn test_decimal_parsing() {
        let n = BigInt256::from_dec_str("18446744073709551616").unwrap();
        assert_eq!(n.limbs(), &[0, 1, 0, 0]);
        assert_eq!(n.to_string(), "18446744073709551616");

        assert_eq!(
            BigInt256::from_dec_str("12a"),
            Err(DecodingError::InvalidDigit('a'))
        );
        let too_big = "1".repeat(80);
        assert_eq!(
            BigInt256::from_dec_str(&too_big),
            Err(DecodingError::Overflow)
        );
    }

    #[test]
    fn test_hex_parsing() {
        let n = BigInt256::from_hex("0x10000000000000000");
        assert_eq!(n.limbs(), &[0, 1, 0, 0]);
        assert_eq!(BigInt256::from_hex("ff"), BigInt256::from_u64(255));
    }

    #[test]
    fn test_shift_right() {
        let a = BigInt256::from_limbs([0, 1, 0, 0]);
        assert_eq!(a.shr(1).limbs(), &[1 << 63, 0, 0, 0]);
        assert_eq!(a.shr(64), BigInt256::one());
        assert!(a.shr(256).is_zero());
    }

    #[test]
    fn test_div_rem_small() {
        let a = BigInt256::from_limbs([7, 1, 0, 0]);
        let (q, r) = a.div_rem_u64(3);
        // 2^64 + 7 = 3 * q + r
        let back = q
            .add_with_carry(&q)
            .0
            .add_with_carry(&q)
            .0
            .add_with_carry(&BigInt256::from_u64(r))
            .0;
        assert_eq!(back, a);
        assert!(r < 3);
    }

    #[test]
    fn test_modulo() {
        let a = BigInt256::from_u64(100);
        let b = BigInt256::from_u64(7);
        assert_eq!(a.modulo(&b), BigInt256::from_u64(2));

        let big = BigInt256::from_limbs([5, 0, 0, u64::MAX]);
        let m = BigInt256::from_limbs([3, 0, 0, 1 << 62]);
        let r = big.modulo(&m);
        assert!(r < m);
        // big = 3 * m + r  since u64::MAX / 2^62 = 3
        let three_m = m.add_with_carry(&m).0.add_with_carry(&m).0;
        assert_eq!(three_m.add_with_carry(&r).0, big);
    }

    #[test]
    fn test_trailing_zeros_and_bits() {
        let a = BigInt256::from_limbs([0, 8, 0, 0]);
        assert_eq!(a.trailing_zeros(), 67);
        assert_eq!(a.bit_length(), 68);
        assert!(a.get_bit(67));
        assert!(!a.get_bit(66));
    }

    #[test]
    fn test_montgomery_constants() {
        let m = BigInt256::from_u64(97);
        let inv = montgomery_inv(97);
        assert_eq!(97u64.wrapping_mul(inv), u64::MAX);

        // 2^256 mod 97 computed by repeated doubling of 2^64 mod 97
        let r = BigInt256::montgomery_radix_power(&m, 1);
        let mut expected = 1u64;
        for _ in 0..256 {
            expected = expected * 2 % 97;
        }
        assert_eq!(r, BigInt256::from_u64(expected));
        let r2 = BigInt256::montgomery_radix_power(&m, 2);
        assert_eq!(r2, BigInt256::from_u64(expected * expected % 97));
    }

    #[test]
    fn test_be_bytes_conversion() {
        let num = BigInt256::from_u64(0x123456789ABCDEF0);
        let bytes = num.to_be_bytes();

        assert_eq!(bytes.len(), 32);
        assert_eq!(&bytes[24..], &[0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0]);
        assert_eq!(BigInt256::from_be_bytes(&bytes), num);
    }
}
