//! Secret share definition and validated share sets.
//!
//! A share is a point $(x, y)$ on the polynomial hiding the secret:
//! - $x$ (index): a non-zero byte identifying the participant.
//! - $y$ (payload): the polynomial evaluation at $x$, as bytes.
//!
//! [`ShareSet`] carries the invariants one reconstruction job relies on,
//! pairwise-distinct indices and equal payload lengths, as part of the type:
//! a set that violates them cannot be constructed. Duplicate indices are
//! rejected whether the payloads agree or not; Lagrange interpolation assumes
//! distinct x-coordinates either way.
//!
//! # Security
//! - Payloads are zeroized on drop and redacted from `Debug` output.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::Error;

/// One participant's fragment of a split secret.
///
/// Immutable after construction; consumed by point mapping and detection.
/// Deserialization routes through [`Share::new`], so a decoded share carries
/// the same guarantees as a constructed one.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawShare")
)]
pub struct Share {
    /// The x-coordinate (1..=255). Public information.
    #[zeroize(skip)]
    index: u8,

    /// The y-coordinate bytes. Sensitive.
    payload: Vec<u8>,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("index", &self.index)
            .field("length", &self.payload.len())
            .field("payload", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    /// Creates a share, rejecting a zero index and an empty payload.
    ///
    /// Index 0 is reserved as the secret's evaluation point; a share sitting
    /// at x = 0 would dictate the "secret" directly.
    pub fn new(index: u8, payload: Vec<u8>) -> Result<Self, Error> {
        if index == 0 {
            return Err(Error::InvalidShareIndex);
        }
        if payload.is_empty() {
            return Err(Error::EmptyShare);
        }
        Ok(Self { index, payload })
    }

    /// The share index (x-coordinate), never zero.
    pub fn index(&self) -> u8 {
        self.index
    }

    /// The payload bytes (y-coordinate).
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// Unvalidated wire form of a share; only exists as the deserialization
/// entry point feeding [`Share::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawShare {
    index: u8,
    payload: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawShare> for Share {
    type Error = Error;

    fn try_from(raw: RawShare) -> Result<Self, Error> {
        Share::new(raw.index, raw.payload)
    }
}

/// An ordered, validated set of shares for one reconstruction job.
///
/// Construction enforces equal payload lengths and pairwise-distinct indices;
/// the set is immutable afterwards and preserves input order, which fixes the
/// deterministic threshold subset used downstream.
#[derive(Debug, Clone)]
pub struct ShareSet {
    shares: Vec<Share>,
    payload_len: usize,
}

impl ShareSet {
    /// Validates and seals a share set.
    ///
    /// Errors with [`Error::PayloadLengthMismatch`] on uneven payloads and
    /// [`Error::DuplicateShareIndex`] on any repeated index, including the
    /// repeated-index-different-payload case, which would otherwise surface
    /// much later as a failed inverse inside interpolation.
    pub fn new(shares: Vec<Share>) -> Result<Self, Error> {
        let payload_len = shares.first().map(|s| s.payload.len()).unwrap_or(0);
        for share in &shares {
            // Backstop for shares that did not come through Share::new.
            if share.index == 0 {
                return Err(Error::InvalidShareIndex);
            }
            if share.payload.is_empty() {
                return Err(Error::EmptyShare);
            }
            if share.payload.len() != payload_len {
                return Err(Error::PayloadLengthMismatch);
            }
        }

        // O(n^2) is fine; indices are bytes, so n <= 255.
        for i in 0..shares.len() {
            for j in (i + 1)..shares.len() {
                if shares[i].index == shares[j].index {
                    return Err(Error::DuplicateShareIndex);
                }
            }
        }

        Ok(Self { shares, payload_len })
    }

    /// The shares in input order.
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// The job's canonical payload length in bytes.
    pub fn payload_len(&self) -> usize {
        self.payload_len
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}
