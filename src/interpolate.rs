//! Lagrange interpolation at an arbitrary coordinate.
//!
//! Given k points with pairwise-distinct x, evaluates the unique
//! degree-(k-1) polynomial through them at a target coordinate:
//!
//! ```text
//! f(x0) = Σ_i y_i · Π_{j≠i} (x0 − x_j) · (x_i − x_j)^{-1}   (mod m)
//! ```
//!
//! Evaluation is deterministic and exact; identical inputs always produce
//! identical output. Distinct x is validated upfront for a clear error; the
//! failed modular inverse that a repeated x would cause is kept only as a
//! safety net.

extern crate alloc;
use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::field::gf256::GF256;
use crate::field::prime::{mod_add, mod_inverse, mod_mul, mod_sub};
use crate::point::{BytePoint, PrimePoint};
use crate::Error;

/// Evaluates the polynomial through `points` at `x0` over a prime field.
pub fn prime_evaluate_at(
    points: &[PrimePoint],
    x0: &BigUint,
    modulus: &BigUint,
) -> Result<BigUint, Error> {
    if points.is_empty() {
        return Err(Error::InsufficientShares);
    }
    // No field exists below modulus 2; rejecting here also keeps the plain
    // mod_* helpers away from a division by zero.
    if *modulus < BigUint::from(2u32) {
        return Err(Error::FieldTooSmall);
    }
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if points[i].x == points[j].x {
                return Err(Error::DuplicateShareIndex);
            }
        }
    }

    let mut acc = BigUint::zero();
    for (i, pi) in points.iter().enumerate() {
        let mut num = BigUint::one();
        let mut den = BigUint::one();
        for (j, pj) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            // mod_sub normalizes x0 - x_j into [0, m), so x0 < x_j is fine.
            num = mod_mul(&num, &mod_sub(x0, &pj.x, modulus), modulus);
            den = mod_mul(&den, &mod_sub(&pi.x, &pj.x, modulus), modulus);
        }
        let basis = mod_mul(&num, &mod_inverse(&den, modulus)?, modulus);
        acc = mod_add(&acc, &mod_mul(&pi.y, &basis, modulus), modulus);
    }
    Ok(acc)
}

/// Evaluates the polynomial through `points` at `x0` over GF(2^8), bytewise.
///
/// Each payload position is an independent polynomial sharing the same
/// x-coordinates, so the Lagrange basis values are computed once and applied
/// across the whole payload vector.
pub fn binary_evaluate_at(points: &[BytePoint<'_>], x0: GF256) -> Result<Vec<u8>, Error> {
    if points.is_empty() {
        return Err(Error::InsufficientShares);
    }
    let payload_len = points[0].ys.len();
    for p in points {
        if p.ys.len() != payload_len {
            return Err(Error::PayloadLengthMismatch);
        }
    }
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if points[i].x == points[j].x {
                return Err(Error::DuplicateShareIndex);
            }
        }
    }

    // Basis values at x0, one per point.
    let mut basis = Vec::with_capacity(points.len());
    for (j, pj) in points.iter().enumerate() {
        let mut num = GF256(1);
        let mut den = GF256(1);
        for (m, pm) in points.iter().enumerate() {
            if j == m {
                continue;
            }
            num *= x0 - pm.x;
            den *= pj.x - pm.x;
        }
        let lambda = num.div(den).ok_or(Error::NoInverse)?;
        basis.push(lambda);
    }

    let mut out = Vec::with_capacity(payload_len);
    for p in 0..payload_len {
        let mut sum = GF256(0);
        for (j, pj) in points.iter().enumerate() {
            sum += GF256(pj.ys[p]) * basis[j];
        }
        out.push(sum.0);
    }
    Ok(out)
}
