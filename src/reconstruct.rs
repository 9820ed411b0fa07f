//! Secret recovery from a threshold subset of shares.
//!
//! The subset choice is deterministic: the first `threshold` shares in the
//! set's input order. Reconstruction is therefore reproducible and auditable;
//! the caller controls the order, the library never samples.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::Zeroizing;

use crate::field::gf256::GF256;
use crate::field::Field;
use crate::interpolate::{binary_evaluate_at, prime_evaluate_at};
use crate::point::{BytePoint, PrimePoint};
use crate::share::ShareSet;
use crate::Error;

/// Recovers the secret by interpolating the first `threshold` shares at x = 0.
///
/// The result is big-endian, left-zero-padded to the job's canonical payload
/// length. Pure function of its inputs; no partial result on failure.
pub fn reconstruct(set: &ShareSet, threshold: usize, field: &Field) -> Result<Vec<u8>, Error> {
    if threshold == 0 {
        return Err(Error::InvalidThreshold);
    }
    if set.len() < threshold {
        return Err(Error::InsufficientShares);
    }
    field.ensure_covers(set.payload_len())?;

    log::debug!(
        "reconstructing secret from {} shares (threshold {})",
        set.len(),
        threshold
    );
    let subset = &set.shares()[..threshold];

    match field {
        Field::Prime(m) => {
            let points = subset
                .iter()
                .map(|s| PrimePoint::from_share(s, set.payload_len(), m))
                .collect::<Result<Vec<_>, _>>()?;
            let value = prime_evaluate_at(&points, &BigUint::zero(), m)?;
            element_to_bytes(&value, set.payload_len())
        }
        Field::Binary8 => {
            let points = subset
                .iter()
                .map(|s| BytePoint::from_share(s, set.payload_len()))
                .collect::<Result<Vec<_>, _>>()?;
            binary_evaluate_at(&points, GF256(0))
        }
    }
}

/// Renders a field element as big-endian bytes of exactly `payload_len`.
fn element_to_bytes(value: &BigUint, payload_len: usize) -> Result<Vec<u8>, Error> {
    let raw = Zeroizing::new(value.to_bytes_be());
    if raw.len() > payload_len {
        // Only reachable with corrupted input: the subset polynomial's
        // intercept landed above the payload range.
        return Err(Error::SecretOverflow);
    }
    let mut out = vec![0u8; payload_len];
    out[payload_len - raw.len()..].copy_from_slice(&raw);
    Ok(out)
}
