//! Shamir's Secret Sharing over GF(2^16).
//!
//! [`split`] turns an even-length secret into `parts` shares such that any
//! `threshold` of them reconstruct it via [`combine`], while any fewer
//! reveal nothing. Working on 16-bit words instead of single bytes halves
//! the number of polynomial evaluations per byte of secret and raises the
//! share limit from 255 to [`MAX_PARTS`] (65535).
//!
//! Each share is the secret's length plus [`SHARE_OVERHEAD`] bytes: one
//! polynomial evaluation per secret word, followed by a word-long tag
//! carrying the evaluation point. Everything on the wire is big-endian.
//!
//! The scheme is information-theoretic against a passive holder of fewer
//! than `threshold` shares, and nothing more. Shares carry no integrity
//! metadata: [`combine`] happily produces garbage from an under-threshold
//! set, or from shares that came out of two different [`split`] calls.
//! Callers that need detection should MAC the secret before splitting.

mod gf16;
mod poly;
mod shamir;
mod tables;

pub use gf16::FIELD_SIZE;
pub use shamir::{combine, split, MAX_PARTS, SHARE_OVERHEAD};

use thiserror::Error;

/// Errors returned by [`split`] and [`combine`].
///
/// Every variant except [`Error::Randomness`] is an argument-validation
/// failure: the call was malformed and recovery means fixing the call.
/// [`Error::Randomness`] is environmental and may simply be retried.
#[derive(Debug, Error)]
pub enum Error {
    /// Fewer parts were requested than the reconstruction threshold.
    #[error("parts cannot be less than threshold")]
    PartsBelowThreshold,

    /// More parts were requested than GF(2^16) has non-zero points.
    #[error("parts cannot exceed 65535")]
    TooManyParts,

    /// A threshold below two is trivial: a single share is the secret.
    #[error("threshold must be at least 2")]
    ThresholdTooSmall,

    /// There is nothing to split.
    #[error("cannot split an empty secret")]
    EmptySecret,

    /// The secret does not align to 16-bit words.
    #[error("cannot split an odd-length secret")]
    OddLengthSecret,

    /// Reconstruction needs at least two shares.
    #[error("less than two shares cannot be used to reconstruct the secret")]
    TooFewShares,

    /// A share is at least four bytes: one secret word plus the tag.
    #[error("shares must be at least four bytes")]
    ShareTooShort,

    /// Shares are sequences of 16-bit words and have even length.
    #[error("shares must be even bytes long")]
    OddLengthShare,

    /// Shares from one split all have the same length.
    #[error("all shares must be the same length")]
    ShareLengthMismatch,

    /// Two shares carry the same evaluation point.
    #[error("duplicate share detected")]
    DuplicateShare,

    /// The platform CSPRNG refused or returned short.
    #[error("failed to read from the system randomness source")]
    Randomness(#[source] rand_core::Error),
}
