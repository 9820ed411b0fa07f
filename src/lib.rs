#![cfg_attr(not(feature = "std"), no_std)]

//! Shamir secret-share reconstruction and corrupted-share audit.
//!
//! This library recovers a secret from a set of Shamir shares and checks every
//! share against the polynomial reconstructed from a threshold subset, flagging
//! shares whose value disagrees with that polynomial.
//!
//! # Components
//! - `field`: Finite-field arithmetic (an arbitrary-precision prime field and
//!   GF(2^8)) plus the [`Field`] descriptor selecting between them.
//! - `share`: The [`Share`] type and the validated, immutable [`ShareSet`].
//! - `point`: Mapping of shares onto polynomial points for each field.
//! - `interpolate`: Lagrange evaluation at an arbitrary coordinate.
//! - `reconstruct`: Secret recovery at x = 0.
//! - `detect`: Corrupted-share detection and disjoint-subset cross-validation.
//!
//! # Field injection
//! Reconstruction and detection take the same explicit [`Field`] value; there
//! is no global modulus. Mixing fields between the two paths of one job is
//! therefore impossible by construction.
//!
//! # Security
//! - **Exact arithmetic**: All prime-field math runs on `BigUint`; nothing
//!   passes through a fixed-width integer or a float.
//! - **Zeroization**: Share payloads and reconstructed intermediates are wiped
//!   on drop.
//! - **GF(2^8) constant-time**: The binary-field primitives are branch-free.
//!   The prime-field path is *not* hardened against timing side-channels.

extern crate alloc;

use core::fmt;

pub mod detect;
pub mod field;
pub mod interpolate;
pub mod point;
pub mod reconstruct;
pub mod share;

pub use crate::detect::{cross_validate, detect, Reconstruction, WrongShare};
pub use crate::field::Field;
pub use crate::reconstruct::reconstruct;
pub use crate::share::{Share, ShareSet};

/// Errors for share reconstruction and audit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Share index is zero (reserved for the secret's evaluation point).
    InvalidShareIndex,
    /// Share payload is empty.
    EmptyShare,
    /// Share payload length differs from the job's canonical length.
    PayloadLengthMismatch,
    /// Two shares carry the same index (equal or differing payloads).
    DuplicateShareIndex,
    /// Threshold is zero.
    InvalidThreshold,
    /// Fewer shares supplied than the declared threshold.
    InsufficientShares,
    /// Modular inverse undefined (non-coprime operands).
    NoInverse,
    /// Prime modulus cannot represent every possible payload value.
    FieldTooSmall,
    /// Reconstructed field element does not fit the canonical payload length.
    SecretOverflow,
    /// Disjoint threshold subsets reconstruct different secrets.
    AmbiguousReconstruction,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidShareIndex => write!(f, "Share index must be non-zero"),
            Error::EmptyShare => write!(f, "Share payload is empty"),
            Error::PayloadLengthMismatch => write!(f, "Share payload length mismatch"),
            Error::DuplicateShareIndex => write!(f, "Duplicate share index"),
            Error::InvalidThreshold => write!(f, "Threshold must be at least 1"),
            Error::InsufficientShares => write!(f, "Not enough shares for the threshold"),
            Error::NoInverse => write!(f, "Modular inverse does not exist"),
            Error::FieldTooSmall => write!(f, "Field modulus too small for payload range"),
            Error::SecretOverflow => write!(f, "Reconstructed secret exceeds payload length"),
            Error::AmbiguousReconstruction => {
                write!(f, "Disjoint share subsets reconstruct different secrets")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
