//! Finite-field selection and arithmetic.
//!
//! Two algebraic domains are supported:
//! - `prime`: arithmetic modulo a large prime, on arbitrary-precision integers.
//! - `gf256`: the binary extension field GF(2^8), bytewise.
//!
//! A [`Field`] value names the domain for one reconstruction job. The same
//! value must be handed to both the reconstruction and the detection path;
//! validating shares against a polynomial built in a different field than the
//! one the shares were generated in produces meaningless mismatches.

pub mod gf256;
pub mod prime;

use num_bigint::BigUint;
use num_traits::One;

use crate::Error;

/// The arithmetic domain for one reconstruction job.
///
/// Fixed at configuration time and shared by every operation of the job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Arithmetic modulo the contained prime. The modulus is taken on trust;
    /// primality is not checked here.
    Prime(BigUint),
    /// GF(2^8) with irreducible polynomial 0x11B; payloads map bytewise.
    Binary8,
}

impl Field {
    /// Checks that every possible payload of `payload_len` bytes fits below
    /// the modulus, so no valid share value is ever reduced away.
    ///
    /// For a prime field this requires `p > 2^(8 * payload_len) - 1`. The
    /// binary field imposes no bound; bytes map to field elements one-to-one.
    pub fn ensure_covers(&self, payload_len: usize) -> Result<(), Error> {
        match self {
            Field::Prime(m) => {
                let bound = BigUint::one() << (8 * payload_len);
                if *m < bound {
                    return Err(Error::FieldTooSmall);
                }
                Ok(())
            }
            Field::Binary8 => Ok(()),
        }
    }
}
