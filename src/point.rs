//! Share-to-point mapping.
//!
//! A share becomes a coordinate pair on the sharing polynomial. The x side is
//! always the share index; the y side depends on the field:
//! - prime field: the whole payload as one big-endian integer, reduced mod p;
//! - GF(2^8): one independent y byte per payload position, no reduction.
//!
//! Zero indices never reach this layer; [`Share`](crate::share::Share)
//! construction rejects them, keeping x = 0 reserved for the secret.

use num_bigint::BigUint;

use crate::field::gf256::GF256;
use crate::share::Share;
use crate::Error;

/// A point $(x, y)$ over a prime field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimePoint {
    pub x: BigUint,
    pub y: BigUint,
}

impl PrimePoint {
    /// Maps a share to `(index, payload as big-endian integer mod p)`.
    ///
    /// The payload must match the job's canonical length exactly; a stray
    /// length here means the caller skipped [`ShareSet`](crate::share::ShareSet)
    /// validation.
    pub fn from_share(
        share: &Share,
        payload_len: usize,
        modulus: &BigUint,
    ) -> Result<Self, Error> {
        if share.payload().len() != payload_len {
            return Err(Error::PayloadLengthMismatch);
        }
        Ok(Self {
            x: BigUint::from(share.index()),
            y: BigUint::from_bytes_be(share.payload()) % modulus,
        })
    }
}

/// A bytewise point over GF(2^8): one x with one y byte per payload position.
#[derive(Debug, Clone, Copy)]
pub struct BytePoint<'a> {
    pub x: GF256,
    pub ys: &'a [u8],
}

impl<'a> BytePoint<'a> {
    /// Maps a share to `(index as GF(2^8) element, payload bytes)`.
    pub fn from_share(share: &'a Share, payload_len: usize) -> Result<Self, Error> {
        if share.payload().len() != payload_len {
            return Err(Error::PayloadLengthMismatch);
        }
        Ok(Self {
            x: GF256(share.index()),
            ys: share.payload(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_prime_point_big_endian() {
        let m = BigUint::from(1u32) << 32;
        let share = Share::new(7, vec![0x01, 0x02]).unwrap();
        let p = PrimePoint::from_share(&share, 2, &m).unwrap();
        assert_eq!(p.x, BigUint::from(7u32));
        assert_eq!(p.y, BigUint::from(0x0102u32));
    }

    #[test]
    fn test_prime_point_reduces_mod_p() {
        let m = BigUint::from(100u32);
        let share = Share::new(1, vec![0x01, 0x02]).unwrap(); // 258
        let p = PrimePoint::from_share(&share, 2, &m).unwrap();
        assert_eq!(p.y, BigUint::from(58u32));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let m = BigUint::from(1u32) << 32;
        let share = Share::new(1, vec![0xAA]).unwrap();
        assert!(matches!(
            PrimePoint::from_share(&share, 2, &m),
            Err(Error::PayloadLengthMismatch)
        ));
        assert!(matches!(
            BytePoint::from_share(&share, 2),
            Err(Error::PayloadLengthMismatch)
        ));
    }

    #[test]
    fn test_byte_point_no_reduction() {
        let share = Share::new(9, vec![0xFF, 0x00, 0x42]).unwrap();
        let p = BytePoint::from_share(&share, 3).unwrap();
        assert_eq!(p.x, GF256(9));
        assert_eq!(p.ys, &[0xFF, 0x00, 0x42]);
    }
}
