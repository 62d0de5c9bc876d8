// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared floating-point tolerance used by every comparison in the crate.
//!
//! Screen coordinates are floating point, so exact equality is unreliable.
//! Sorting, tie detection, and match decisions all go through the helpers in
//! this module so that they agree on what "the same coordinate" means.

use core::cmp::Ordering;

/// Absolute tolerance below which two scalars are considered equal.
pub const EPSILON: f64 = 1e-7;

/// Whether `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    distance(a, b) < EPSILON
}

/// Absolute difference between two scalars.
#[inline]
pub fn distance(a: f64, b: f64) -> f64 {
    if a > b { a - b } else { b - a }
}

/// Tolerance-aware ordering.
///
/// Returns [`Ordering::Equal`] when the values are [`approx_eq`], otherwise the
/// total order of the two values. The result is symmetric: `cmp_approx(a, b)`
/// is always the reverse of `cmp_approx(b, a)`.
#[inline]
pub fn cmp_approx(a: f64, b: f64) -> Ordering {
    if approx_eq(a, b) {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_is_strict_at_epsilon() {
        assert!(approx_eq(1.0, 1.0));
        assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
        assert!(!approx_eq(0.0, 2.0 * EPSILON));
    }

    #[test]
    fn cmp_approx_ties_are_symmetric() {
        let a = 10.0;
        let b = 10.0 + EPSILON / 4.0;
        assert_eq!(cmp_approx(a, b), Ordering::Equal);
        assert_eq!(cmp_approx(b, a), Ordering::Equal);
        assert_eq!(cmp_approx(1.0, 2.0), Ordering::Less);
        assert_eq!(cmp_approx(2.0, 1.0), Ordering::Greater);
    }

    #[test]
    fn distance_is_absolute() {
        assert_eq!(distance(3.0, 5.0), 2.0);
        assert_eq!(distance(5.0, 3.0), 2.0);
        assert_eq!(distance(-1.0, 1.0), 2.0);
    }
}
