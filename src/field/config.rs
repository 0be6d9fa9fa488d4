//! Field configuration traits
//!
//! Fields are parameterised by zero-sized config types so that elements of
//! different fields cannot be mixed. A prime field config supplies a modulus;
//! an extension config supplies its base field, its non-residue and its
//! Frobenius constants.

use super::field_trait::{Field, PrimeField};
use crate::bigint::{montgomery_inv, BigInt};
use std::fmt::Debug;
use std::hash::Hash;

/// Common bounds for config marker types
pub trait ConfigMarker:
    'static + Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync
{
}

impl<T> ConfigMarker for T where
    T: 'static + Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync
{
}

/// Parameters of a prime field F_p with an N-limb odd modulus
///
/// Only `MODULUS` and `NONRESIDUE` are required; the Montgomery constants are
/// derived from the modulus during constant evaluation.
///
/// # Example
/// ```
/// use ecpair::bigint::BigInt;
/// use ecpair::field::{Fp, FpConfig, Field};
///
/// #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// struct F97Config;
///
/// impl FpConfig<1> for F97Config {
///     const MODULUS: BigInt<1> = BigInt::from_u64(97);
///     const NONRESIDUE: u64 = 5;
/// }
///
/// type F97 = Fp<F97Config, 1>;
/// let a = F97::from(10u64);
/// assert_eq!(a * a.inverse().unwrap(), F97::one());
/// ```
pub trait FpConfig<const N: usize>: ConfigMarker {
    /// The prime modulus p
    const MODULUS: BigInt<N>;

    /// A small quadratic non-residue, used by square roots
    const NONRESIDUE: u64;

    /// `-p^{-1} mod 2^64`
    const INV: u64 = montgomery_inv(Self::MODULUS.limbs()[0]);

    /// `R = 2^(64N) mod p`, the Montgomery form of one
    const R: BigInt<N> = BigInt::montgomery_radix_power(&Self::MODULUS, 1);

    /// `R^2 mod p`, used to enter Montgomery form
    const R2: BigInt<N> = BigInt::montgomery_radix_power(&Self::MODULUS, 2);
}

/// Parameters of a quadratic extension `Base[w] / (w^2 - nonresidue)`
pub trait QuadExtConfig: ConfigMarker {
    type BaseField: Field;

    /// Degree of the extension over the prime field
    const DEGREE: usize;

    fn nonresidue() -> Self::BaseField;

    /// Multiplies an element of the base field by the non-residue
    #[inline]
    fn mul_base_by_nonresidue(elem: &Self::BaseField) -> Self::BaseField {
        Self::nonresidue() * *elem
    }

    /// `nonresidue^((p^power - 1) / 2)`
    fn frobenius_coeff_c1(power: usize) -> Self::BaseField;
}

/// Parameters of a cubic extension `Base[w] / (w^3 - nonresidue)`
pub trait CubicExtConfig: ConfigMarker {
    type BaseField: Field;

    /// Degree of the extension over the prime field
    const DEGREE: usize;

    fn nonresidue() -> Self::BaseField;

    #[inline]
    fn mul_base_by_nonresidue(elem: &Self::BaseField) -> Self::BaseField {
        Self::nonresidue() * *elem
    }

    /// `nonresidue^((p^power - 1) / 3)`
    fn frobenius_coeff_c1(power: usize) -> Self::BaseField;

    /// `nonresidue^(2 (p^power - 1) / 3)`
    fn frobenius_coeff_c2(power: usize) -> Self::BaseField;
}

/// Builds the Frobenius table `[gamma_0, ..., gamma_{len-1}]` of a degree-`root`
/// extension defined by `nonresidue`, where `gamma_i = nonresidue^((p^i - 1)/root)`.
///
/// Uses `gamma_i = frobenius(gamma_{i-1}) * gamma_1`, so only one full
/// exponentiation is performed.
pub fn frobenius_coefficients<F: Field>(nonresidue: F, root: u64, len: usize) -> Vec<F> {
    let exponent = <F::BasePrimeField as PrimeField>::modulus_minus_one_div(root);
    let gamma = nonresidue.pow(exponent);

    let mut coeffs = Vec::with_capacity(len);
    let mut current = F::one();
    for _ in 0..len {
        coeffs.push(current);
        current = current.frobenius_map(1) * gamma;
    }
    coeffs
}
