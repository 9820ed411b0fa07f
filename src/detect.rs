//! Corrupted-share detection.
//!
//! A share is corrupted when its value disagrees with the polynomial
//! reconstructed from the job's trusted threshold subset. Detection
//! re-evaluates that polynomial at every share's own x (subset members
//! included, as a self-consistency check) and reports mismatches in input
//! order.
//!
//! Validation is relative to one chosen subset (the first `threshold` shares).
//! If the subset itself contains a corrupted share, the mismatches land on the
//! honest shares instead; [`cross_validate`] catches that case by comparing
//! disjoint subsets.
//!
//! Cost is O(n·k²) modular multiplications for n shares at threshold k, which
//! is fine at secret-sharing scale.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;

use num_bigint::BigUint;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::field::gf256::GF256;
use crate::field::Field;
use crate::interpolate::{binary_evaluate_at, prime_evaluate_at};
use crate::point::{BytePoint, PrimePoint};
use crate::reconstruct::reconstruct;
use crate::share::ShareSet;
use crate::Error;

/// A share whose value disagrees with the subset polynomial.
///
/// `value` is the observed payload as a big-endian integer, uniform across
/// both fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WrongShare {
    pub index: u8,
    pub value: BigUint,
}

/// The outcome of one detection pass. Read-only once produced.
///
/// `secret` is `None` only on the degraded below-threshold path, where no
/// polynomial exists to validate against.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reconstruction {
    pub secret: Option<Vec<u8>>,
    #[zeroize(skip)]
    pub wrong_shares: Vec<WrongShare>,
}

impl fmt::Debug for Reconstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reconstruction")
            .field(
                "secret",
                &self.secret.as_ref().map(|_| "***SENSITIVE***"),
            )
            .field("wrong_shares", &self.wrong_shares)
            .finish()
    }
}

/// Reconstructs the secret and flags every share inconsistent with the
/// threshold-subset polynomial.
///
/// Below-threshold input degrades to `{ secret: None, wrong_shares: [] }`
/// instead of raising; the caller asked for an audit it cannot have yet, not
/// an impossible operation.
pub fn detect(set: &ShareSet, threshold: usize, field: &Field) -> Result<Reconstruction, Error> {
    if threshold == 0 {
        return Err(Error::InvalidThreshold);
    }
    if set.len() < threshold {
        log::warn!(
            "share audit skipped: {} shares below threshold {}",
            set.len(),
            threshold
        );
        return Ok(Reconstruction {
            secret: None,
            wrong_shares: Vec::new(),
        });
    }

    let secret = reconstruct(set, threshold, field)?;
    let subset = &set.shares()[..threshold];
    let mut wrong_shares = Vec::new();

    match field {
        Field::Prime(m) => {
            let points = subset
                .iter()
                .map(|s| PrimePoint::from_share(s, set.payload_len(), m))
                .collect::<Result<Vec<_>, _>>()?;
            for share in set.shares() {
                let expected =
                    prime_evaluate_at(&points, &BigUint::from(share.index()), m)?;
                let observed = BigUint::from_bytes_be(share.payload());
                if &observed % m != expected {
                    log::warn!(
                        "share {} disagrees with subset polynomial (observed {})",
                        share.index(),
                        hex::encode(share.payload())
                    );
                    wrong_shares.push(WrongShare {
                        index: share.index(),
                        value: observed,
                    });
                }
            }
        }
        Field::Binary8 => {
            let points = subset
                .iter()
                .map(|s| BytePoint::from_share(s, set.payload_len()))
                .collect::<Result<Vec<_>, _>>()?;
            for share in set.shares() {
                let expected = binary_evaluate_at(&points, GF256(share.index()))?;
                if expected != share.payload() {
                    log::warn!(
                        "share {} disagrees with subset polynomial (observed {})",
                        share.index(),
                        hex::encode(share.payload())
                    );
                    wrong_shares.push(WrongShare {
                        index: share.index(),
                        value: BigUint::from_bytes_be(share.payload()),
                    });
                }
            }
        }
    }

    Ok(Reconstruction {
        secret: Some(secret),
        wrong_shares,
    })
}

/// Reconstructs from every disjoint `threshold`-sized chunk of the set and
/// fails when two chunks disagree on the secret.
///
/// Disagreement means the overall set is conflicting or corrupted in a way a
/// single-subset audit cannot localize. A trailing partial chunk is ignored.
pub fn cross_validate(set: &ShareSet, threshold: usize, field: &Field) -> Result<(), Error> {
    if threshold == 0 {
        return Err(Error::InvalidThreshold);
    }
    if set.len() < threshold {
        return Err(Error::InsufficientShares);
    }

    let mut reference: Option<Vec<u8>> = None;
    for chunk in set.shares().chunks_exact(threshold) {
        let subset = ShareSet::new(chunk.to_vec())?;
        let secret = reconstruct(&subset, threshold, field)?;
        match &reference {
            None => reference = Some(secret),
            Some(first) if *first != secret => {
                log::warn!("disjoint share subsets reconstruct different secrets");
                return Err(Error::AmbiguousReconstruction);
            }
            Some(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::Share;
    use alloc::vec;
    use num_traits::One;

    fn mersenne_521() -> Field {
        Field::Prime((BigUint::one() << 521u32) - BigUint::one())
    }

    fn line_set() -> ShareSet {
        // y = 6x + 1: (1, 7), (2, 13), (3, 19)
        ShareSet::new(vec![
            Share::new(1, vec![0x07]).unwrap(),
            Share::new(2, vec![0x0D]).unwrap(),
            Share::new(3, vec![0x13]).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_clean_set_has_no_wrong_shares() {
        let result = detect(&line_set(), 2, &mersenne_521()).unwrap();
        assert_eq!(result.secret, Some(vec![0x01]));
        assert!(result.wrong_shares.is_empty());
    }

    #[test]
    fn test_tampered_share_reported_with_observed_value() {
        // Share 3 altered from 0x13 to 0x14; shares 1 and 2 still fix the line.
        let set = ShareSet::new(vec![
            Share::new(1, vec![0x07]).unwrap(),
            Share::new(2, vec![0x0D]).unwrap(),
            Share::new(3, vec![0x14]).unwrap(),
        ])
        .unwrap();
        let result = detect(&set, 2, &mersenne_521()).unwrap();
        assert_eq!(result.secret, Some(vec![0x01]));
        assert_eq!(
            result.wrong_shares,
            vec![WrongShare {
                index: 3,
                value: BigUint::from(20u32),
            }]
        );
    }

    #[test]
    fn test_below_threshold_degrades_without_raising() {
        let set = ShareSet::new(vec![Share::new(1, vec![0x07]).unwrap()]).unwrap();
        let result = detect(&set, 2, &mersenne_521()).unwrap();
        assert_eq!(result.secret, None);
        assert!(result.wrong_shares.is_empty());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        assert_eq!(
            detect(&line_set(), 0, &mersenne_521()),
            Err(Error::InvalidThreshold)
        );
    }

    fn binary_set(n: u8) -> ShareSet {
        // Bytewise f(x) = s + c1*x + c2*x^2, secret [0x42, 0x99, 0xAB].
        let secret = [0x42u8, 0x99, 0xAB];
        let c1 = [0x11u8, 0x35, 0xD8];
        let c2 = [0x6Fu8, 0x02, 0x90];
        let shares = (1..=n)
            .map(|i| {
                let x = GF256(i);
                let payload = (0..3)
                    .map(|p| (GF256(secret[p]) + GF256(c1[p]) * x + GF256(c2[p]) * x * x).0)
                    .collect();
                Share::new(i, payload).unwrap()
            })
            .collect();
        ShareSet::new(shares).unwrap()
    }

    #[test]
    fn test_binary_no_false_positives() {
        let result = detect(&binary_set(5), 3, &Field::Binary8).unwrap();
        assert_eq!(result.secret, Some(vec![0x42, 0x99, 0xAB]));
        assert!(result.wrong_shares.is_empty());
    }

    #[test]
    fn test_binary_single_bit_flip_detected() {
        // Flip one bit in each non-subset share in turn; each flip must be
        // flagged and must not move the secret.
        for victim in [4u8, 5] {
            for bit in 0..8 {
                let mut shares: Vec<Share> = binary_set(5).shares().to_vec();
                let s = &shares[victim as usize - 1];
                let mut payload = s.payload().to_vec();
                payload[1] ^= 1 << bit;
                shares[victim as usize - 1] = Share::new(victim, payload).unwrap();

                let set = ShareSet::new(shares).unwrap();
                let result = detect(&set, 3, &Field::Binary8).unwrap();
                assert_eq!(result.secret, Some(vec![0x42, 0x99, 0xAB]));
                assert_eq!(result.wrong_shares.len(), 1);
                assert_eq!(result.wrong_shares[0].index, victim);
            }
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let result = detect(&line_set(), 2, &mersenne_521()).unwrap();
        let rendered = alloc::format!("{result:?}");
        assert!(rendered.contains("***SENSITIVE***"));
        assert!(!rendered.contains("[1]"));
    }

    #[test]
    fn test_cross_validate_consistent_set() {
        // Four points on y = 6x + 1, two disjoint pairs.
        let set = ShareSet::new(vec![
            Share::new(1, vec![0x07]).unwrap(),
            Share::new(2, vec![0x0D]).unwrap(),
            Share::new(3, vec![0x13]).unwrap(),
            Share::new(4, vec![0x19]).unwrap(),
        ])
        .unwrap();
        assert_eq!(cross_validate(&set, 2, &mersenne_521()), Ok(()));
    }

    #[test]
    fn test_cross_validate_flags_conflicting_subsets() {
        // (1, 7), (2, 13) lie on y = 6x + 1 with intercept 1; (3, 5), (4, 6)
        // lie on y = x + 2 with intercept 2.
        let set = ShareSet::new(vec![
            Share::new(1, vec![0x07]).unwrap(),
            Share::new(2, vec![0x0D]).unwrap(),
            Share::new(3, vec![0x05]).unwrap(),
            Share::new(4, vec![0x06]).unwrap(),
        ])
        .unwrap();
        assert_eq!(
            cross_validate(&set, 2, &mersenne_521()),
            Err(Error::AmbiguousReconstruction)
        );
    }

    #[test]
    fn test_cross_validate_below_threshold_errors() {
        let set = ShareSet::new(vec![Share::new(1, vec![0x07]).unwrap()]).unwrap();
        assert_eq!(
            cross_validate(&set, 2, &mersenne_521()),
            Err(Error::InsufficientShares)
        );
    }
}
