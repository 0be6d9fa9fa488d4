//! Optimal ate pairing for BLS families
//!
//! The Miller loop, the G2 line precomputation and the output group are
//! shared; a family supplies its seed, its twist type and the parts that
//! depend on the shape of its tower (`BlsConfig`).
//!
//! Line coefficients are computed in homogeneous projective coordinates on
//! the twist and evaluated at the G1 point by scaling two of them with
//! `x_P` and `y_P`. Which two depends on the twist:
//!
//! | twist | scaled | sparse product |
//! |---|---|---|
//! | M | c1 · x_P, c2 · y_P | family's `mul_by_line` |
//! | D | c0 · y_P, c1 · x_P | family's `mul_by_line` |

use crate::curve::short_weierstrass::{Affine, SWCurveConfig};
use crate::error::{Error, Result};
use crate::field::config::ConfigMarker;
use crate::field::{Field, PrimeField};
use rayon::prelude::*;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Mul, MulAssign};

/// Where the sextic twist sends the line: multiplicative or divisive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TwistType {
    M,
    D,
}

/// Description of a BLS pairing-friendly family
pub trait BlsConfig: ConfigMarker {
    /// |x|, the absolute value of the seed
    const X: u64;
    const X_IS_NEGATIVE: bool;
    const TWIST_TYPE: TwistType;

    /// Base prime field
    type Fp: PrimeField;
    /// Field of definition of the twist
    type Fq: Field<BasePrimeField = Self::Fp>;
    /// Target field F_p^k
    type Fk: Field<BasePrimeField = Self::Fp>;

    type G1Config: SWCurveConfig<BaseField = Self::Fp>;
    type G2Config: SWCurveConfig<
        BaseField = Self::Fq,
        ScalarField = <Self::G1Config as SWCurveConfig>::ScalarField,
    >;

    /// Multiplies `f` by an evaluated line `(c0, c1, c2)`
    fn mul_by_line(f: &mut Self::Fk, c0: &Self::Fq, c1: &Self::Fq, c2: &Self::Fq);

    /// Conjugation over F_p^(k/2): the inverse of a unitary element
    fn cyclotomic_inverse(f: &Self::Fk) -> Self::Fk;

    /// Squaring of an element of the cyclotomic subgroup
    fn cyclotomic_square(f: &Self::Fk) -> Self::Fk;

    /// Raises a Miller loop output to `(p^k - 1) / r` (or a fixed multiple)
    fn final_exponentiation(f: &Self::Fk) -> Result<Self::Fk>;

    /// `f^x` for `f` in the cyclotomic subgroup, signed seed included
    fn exp_by_x(f: &Self::Fk) -> Self::Fk {
        let mut result = Self::Fk::one();
        for i in (0..64 - Self::X.leading_zeros()).rev() {
            result = Self::cyclotomic_square(&result);
            if (Self::X >> i) & 1 == 1 {
                result *= *f;
            }
        }
        if Self::X_IS_NEGATIVE {
            Self::cyclotomic_inverse(&result)
        } else {
            result
        }
    }
}

pub type G1Affine<P> = Affine<<P as BlsConfig>::G1Config>;
pub type G2Affine<P> = Affine<<P as BlsConfig>::G2Config>;

type LineCoeffs<P> = (
    <P as BlsConfig>::Fq,
    <P as BlsConfig>::Fq,
    <P as BlsConfig>::Fq,
);

/// Line coefficients of a G2 point, in Miller loop order
pub struct G2Prepared<P: BlsConfig> {
    pub ell_coeffs: Vec<LineCoeffs<P>>,
    pub infinity: bool,
}

impl<P: BlsConfig> Clone for G2Prepared<P> {
    fn clone(&self) -> Self {
        Self {
            ell_coeffs: self.ell_coeffs.clone(),
            infinity: self.infinity,
        }
    }
}

impl<P: BlsConfig> fmt::Debug for G2Prepared<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("G2Prepared")
            .field("lines", &self.ell_coeffs.len())
            .field("infinity", &self.infinity)
            .finish()
    }
}

/// Running point of the precomputation, homogeneous (x = X/Z, y = Y/Z)
struct G2Homogeneous<P: BlsConfig> {
    x: P::Fq,
    y: P::Fq,
    z: P::Fq,
}

impl<P: BlsConfig> G2Homogeneous<P> {
    /// Tangent line at R, then R = 2R
    ///
    /// Coordinates are kept scaled by 4 so that no division by two is needed;
    /// a common factor does not change the point.
    fn double_in_place(&mut self) -> LineCoeffs<P> {
        let b = self.y.square();
        let c = self.z.square();
        let e = <P::G2Config as SWCurveConfig>::coeff_b() * (c.double() + c);
        let f = e.double() + e;
        let g = b + f;
        let h = (self.y + self.z).square() - (b + c);
        let i = e - b;
        let j = self.x.square();
        let e_square = e.square();

        self.x = (self.x * self.y * (b - f)).double();
        self.y = g.square() - (e_square.double() + e_square).double().double();
        self.z = (b * h).double().double();

        match P::TWIST_TYPE {
            TwistType::M => (i, j.double() + j, -h),
            TwistType::D => (-h, j.double() + j, i),
        }
    }

    /// Chord through R and Q, then R = R + Q
    fn add_in_place(&mut self, q: &G2Affine<P>) -> LineCoeffs<P> {
        let theta = self.y - q.y * self.z;
        let lambda = self.x - q.x * self.z;
        let c = theta.square();
        let d = lambda.square();
        let e = lambda * d;
        let f = self.z * c;
        let g = self.x * d;
        let h = e + f - g.double();

        self.x = lambda * h;
        self.y = theta * (g - h) - e * self.y;
        self.z *= e;

        let j = theta * q.x - lambda * q.y;
        match P::TWIST_TYPE {
            TwistType::M => (j, -theta, lambda),
            TwistType::D => (lambda, -theta, j),
        }
    }
}

/// Bits of |x| below the most significant one, high to low
fn loop_bits<P: BlsConfig>() -> impl Iterator<Item = bool> {
    let top = 63 - P::X.leading_zeros();
    (0..top).rev().map(|i| (P::X >> i) & 1 == 1)
}

impl<P: BlsConfig> From<G2Affine<P>> for G2Prepared<P> {
    fn from(q: G2Affine<P>) -> Self {
        if q.is_identity() {
            return Self {
                ell_coeffs: Vec::new(),
                infinity: true,
            };
        }

        let mut r = G2Homogeneous::<P> {
            x: q.x,
            y: q.y,
            z: P::Fq::one(),
        };
        let mut ell_coeffs = Vec::new();
        for bit in loop_bits::<P>() {
            ell_coeffs.push(r.double_in_place());
            if bit {
                ell_coeffs.push(r.add_in_place(&q));
            }
        }

        Self {
            ell_coeffs,
            infinity: false,
        }
    }
}

impl<P: BlsConfig> From<&G2Affine<P>> for G2Prepared<P> {
    fn from(q: &G2Affine<P>) -> Self {
        Self::from(*q)
    }
}

/// Evaluates a line at `p` and multiplies it into `f`
fn ell<P: BlsConfig>(f: &mut P::Fk, coeffs: &LineCoeffs<P>, p: &G1Affine<P>) {
    let (mut c0, mut c1, mut c2) = *coeffs;
    match P::TWIST_TYPE {
        TwistType::M => {
            c1 = c1.mul_by_base_prime_field(&p.x);
            c2 = c2.mul_by_base_prime_field(&p.y);
        }
        TwistType::D => {
            c0 = c0.mul_by_base_prime_field(&p.y);
            c1 = c1.mul_by_base_prime_field(&p.x);
        }
    }
    P::mul_by_line(f, &c0, &c1, &c2);
}

/// Value of the Miller loop, before final exponentiation
pub struct MillerLoopOutput<P: BlsConfig>(pub P::Fk);

impl<P: BlsConfig> Clone for MillerLoopOutput<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: BlsConfig> Copy for MillerLoopOutput<P> {}

impl<P: BlsConfig> PartialEq for MillerLoopOutput<P> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<P: BlsConfig> Eq for MillerLoopOutput<P> {}

impl<P: BlsConfig> fmt::Debug for MillerLoopOutput<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MillerLoopOutput({:?})", self.0)
    }
}

/// Product of the Miller loops of all pairs `(g1[i], g2[i])`
///
/// Pairs where either point is the identity contribute nothing.
///
/// # Arguments
/// * `g1` - Points of G1, one per pair
/// * `g2` - Points of G2, paired index by index with `g1`
///
/// # Returns
/// The accumulated loop value, not yet in the target group; an empty
/// batch gives one
///
/// # Errors
/// `Error::LengthMismatch` if the slices differ in length.
pub fn miller_loop<P: BlsConfig>(
    g1: &[G1Affine<P>],
    g2: &[G2Affine<P>],
) -> Result<MillerLoopOutput<P>> {
    if g1.len() != g2.len() {
        return Err(Error::LengthMismatch {
            g1: g1.len(),
            g2: g2.len(),
        });
    }

    let pairs: Vec<(G1Affine<P>, G2Prepared<P>)> = g1
        .par_iter()
        .zip(g2.par_iter())
        .filter(|(p, q)| !p.is_identity() && !q.is_identity())
        .map(|(p, q)| (*p, G2Prepared::from(q)))
        .collect();

    let mut f = P::Fk::one();
    let mut idx = 0;
    for bit in loop_bits::<P>() {
        f.square_in_place();
        for (p, q) in &pairs {
            ell::<P>(&mut f, &q.ell_coeffs[idx], p);
        }
        idx += 1;

        if bit {
            for (p, q) in &pairs {
                ell::<P>(&mut f, &q.ell_coeffs[idx], p);
            }
            idx += 1;
        }
    }

    if P::X_IS_NEGATIVE {
        f = P::cyclotomic_inverse(&f);
    }
    Ok(MillerLoopOutput(f))
}

/// Maps a Miller loop output into the target group
///
/// # Arguments
/// * `f` - Output of `miller_loop`
///
/// # Returns
/// A power of `f` lying in the order-r subgroup of the target field
///
/// # Errors
/// `Error::NonInvertible` if `f` is zero, which no `miller_loop` output is.
pub fn final_exponentiation<P: BlsConfig>(f: MillerLoopOutput<P>) -> Result<PairingOutput<P>> {
    P::final_exponentiation(&f.0).map(PairingOutput)
}

/// `prod_i e(g1[i], g2[i])`
///
/// # Arguments
/// * `g1` - Points of G1
/// * `g2` - Points of G2, paired index by index with `g1`
///
/// # Returns
/// The product of the pairings; one for an empty batch
///
/// # Errors
/// `Error::LengthMismatch` if the slices differ in length.
pub fn pairing<P: BlsConfig>(g1: &[G1Affine<P>], g2: &[G2Affine<P>]) -> Result<PairingOutput<P>> {
    final_exponentiation(miller_loop(g1, g2)?)
}

/// Element of the target group GT, written multiplicatively
pub struct PairingOutput<P: BlsConfig>(P::Fk);

impl<P: BlsConfig> PairingOutput<P> {
    pub fn one() -> Self {
        Self(P::Fk::one())
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// The underlying element of F_p^k
    pub fn value(&self) -> &P::Fk {
        &self.0
    }

    pub fn into_inner(self) -> P::Fk {
        self.0
    }

    /// Inverse in GT, a conjugation
    pub fn inverse(&self) -> Self {
        Self(P::cyclotomic_inverse(&self.0))
    }

    pub fn pow<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        Self(self.0.pow(exp))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes()
    }
}

impl<P: BlsConfig> Clone for PairingOutput<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: BlsConfig> Copy for PairingOutput<P> {}

impl<P: BlsConfig> PartialEq for PairingOutput<P> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<P: BlsConfig> Eq for PairingOutput<P> {}

impl<P: BlsConfig> std::hash::Hash for PairingOutput<P> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<P: BlsConfig> Default for PairingOutput<P> {
    fn default() -> Self {
        Self::one()
    }
}

impl<P: BlsConfig> Mul for PairingOutput<P> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<P: BlsConfig> MulAssign for PairingOutput<P> {
    fn mul_assign(&mut self, other: Self) {
        self.0 *= other.0;
    }
}

impl<P: BlsConfig> fmt::Debug for PairingOutput<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PairingOutput({:?})", self.0)
    }
}

impl<P: BlsConfig> Serialize for PairingOutput<P>
where
    P::Fk: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
