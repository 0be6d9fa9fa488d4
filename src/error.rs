//! Error types shared by the field, curve and pairing layers.

use thiserror::Error;

/// Failures while decoding fixed-width encodings or parsing integers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    #[error("invalid encoding length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("encoded value is not reduced modulo the field characteristic")]
    NonCanonical,
    #[error("decoded point is not on the curve")]
    NotOnCurve,
    #[error("decoded point is not in the prime-order subgroup")]
    NotInSubgroup,
    #[error("invalid digit {0:?} in integer literal")]
    InvalidDigit(char),
    #[error("integer literal does not fit in the target width")]
    Overflow,
    #[error("compressed coordinate has no matching point")]
    InvalidCompression,
}

/// Errors returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Decoding(#[from] DecodingError),
    /// Inversion of the additive identity.
    #[error("attempted to invert zero")]
    NonInvertible,
    #[error("pairing inputs differ in length: {g1} G1 points, {g2} G2 points")]
    LengthMismatch { g1: usize, g2: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
