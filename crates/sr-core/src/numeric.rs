use core::cmp::Ordering;

use crate::{SrError, SrResult};

/// Floating point type used for road distances.
pub type Real = f64;

/// Distance reported when no route connects two locations.
pub const UNREACHABLE: Real = Real::INFINITY;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    if a == b {
        // covers matching infinities
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> SrResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SrError::NonFinite { what, value: v })
    }
}

/// Accept only finite values >= 0. `-0.0` is normalized to `0.0`.
pub fn ensure_distance(v: Real, what: &'static str) -> SrResult<Real> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(SrError::Negative { what, value: v });
    }
    Ok(v + 0.0)
}

/// Total order over distances, usable as a heap key.
#[inline]
pub fn cmp_distance(a: Real, b: Real) -> Ordering {
    a.total_cmp(&b)
}
