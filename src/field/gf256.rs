//! GF(2^8) arithmetic with irreducible polynomial x^8 + x^4 + x^3 + x + 1 (0x11B).
//!
//! All operations are constant-time and branch-free: multiplication is
//! bit-serial with mask-based conditionals, inversion is a fixed
//! square-and-multiply to the power 254. No lookup tables, so no cache-timing
//! leaks.
//!
//! In characteristic 2 subtraction equals addition (both XOR); [`GF256`]
//! implements `Sub` anyway so interpolation code reads the same over both
//! supported fields.

use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// Low byte of the irreducible polynomial 0x11B.
const POLY: u8 = 0x1B;

/// A GF(2^8) field element wrapping a `u8`.
///
/// The wrapper keeps field operations distinct from plain integer operations;
/// every `u8` is a valid element, so conversion never fails.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct GF256(pub u8);

impl From<u8> for GF256 {
    #[inline(always)]
    fn from(value: u8) -> Self {
        GF256(value)
    }
}

impl From<GF256> for u8 {
    #[inline(always)]
    fn from(e: GF256) -> u8 {
        e.0
    }
}

impl Add for GF256 {
    type Output = Self;

    /// Field addition: XOR, since the characteristic is 2.
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        GF256(self.0 ^ rhs.0)
    }
}

impl AddAssign for GF256 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for GF256 {
    type Output = Self;

    /// Field subtraction: identical to addition in characteristic 2.
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self + rhs
    }
}

impl SubAssign for GF256 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for GF256 {
    type Output = Self;

    /// Bit-serial multiplication reduced modulo 0x11B.
    ///
    /// Fixed 8 iterations; conditionals are realized as masks, never branches.
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        let mut acc: u8 = 0;
        let mut a = self.0;
        let mut b = rhs.0;

        for _ in 0..8 {
            // acc ^= a if the low bit of b is set.
            let lsb_mask = (b & 1).wrapping_mul(0xFF);
            acc ^= a & lsb_mask;

            // a = a * x mod 0x11B.
            let carry_mask = (a >> 7).wrapping_mul(0xFF);
            a = (a << 1) ^ (POLY & carry_mask);

            b >>= 1;
        }

        GF256(acc)
    }
}

impl MulAssign for GF256 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl GF256 {
    /// Multiplicative inverse, `a^254` by Fermat.
    ///
    /// Fixed-iteration square-and-multiply with masked factors; no
    /// data-dependent branches. Maps 0 to 0 by convention; callers that need
    /// division must treat a zero denominator as an error themselves.
    #[inline(always)]
    pub fn inv(self) -> Self {
        let mut result = GF256(1);
        let mut base = self;
        let mut exp: u8 = 0xFE; // a^254 = a^-1, since a^255 = 1

        for _ in 0..8 {
            // factor = base if the low exponent bit is set, else 1.
            let mask = (exp & 1).wrapping_mul(0xFF);
            let factor = GF256((base.0 & mask) | (1 & !mask));
            result = result * factor;
            base = base * base;
            exp >>= 1;
        }

        result
    }

    /// `self / rhs`, or `None` when `rhs` is zero.
    pub fn div(self, rhs: Self) -> Option<Self> {
        if rhs.0 == 0 {
            None
        } else {
            Some(self * rhs.inv())
        }
    }
}
