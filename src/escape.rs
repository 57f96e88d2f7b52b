// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time loop.
//!
//! Starting from `z0`, we repeatedly replace `z` with `z² + c` and
//! count how many of those updates leave `z` within a radius of 2 of
//! the origin.  The first update that carries it outside stops the
//! count; a point that is still inside after `cap` updates is taken to
//! be in the set.
//!
//! Note that the count is of updates that *stayed inside*.  A point
//! that is flung outside by the very first update scores 0, not 1.

use num::Complex;

use crate::complex::{modulus, square, sum};

/// The iteration cap both programs use.
pub const DEFAULT_CAP: usize = 50;

/// Once the modulus passes this, the orbit is gone for good.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Returns the number of updates, between 0 and `cap` inclusive, that
/// kept the orbit of `z0` under `z ← z² + c` inside the escape radius.
pub fn escape_time(z0: Complex<f64>, c: Complex<f64>, cap: usize) -> usize {
    match (0..cap).try_fold(z0, |z, i| {
        let z = sum(square(z), c);
        if modulus(z) > ESCAPE_RADIUS {
            Err(i)
        } else {
            Ok(z)
        }
    }) {
        Ok(_) => cap,
        Err(escaped) => escaped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::{Distribution, Uniform};
    use rand::SeedableRng;

    const ORIGIN: Complex<f64> = Complex { re: 0.0, im: 0.0 };

    #[test]
    fn the_origin_never_escapes() {
        for &cap in &[0, 1, 50, 1000] {
            assert_eq!(escape_time(ORIGIN, ORIGIN, cap), cap);
        }
    }

    #[test]
    fn five_escapes_on_the_first_update() {
        assert_eq!(escape_time(ORIGIN, Complex::new(5.0, 0.0), 50), 0);
    }

    #[test]
    fn minus_two_sits_on_the_boundary() {
        // 0 -> -2 -> 2 -> 2 -> ...: the modulus is exactly 2, never above.
        assert_eq!(escape_time(ORIGIN, Complex::new(-2.0, 0.0), 50), 50);
    }

    #[test]
    fn counts_updates_that_stayed_inside() {
        // 0 -> 1 -> 2 -> 5: two updates stay inside, the third escapes.
        assert_eq!(escape_time(ORIGIN, Complex::new(1.0, 0.0), 50), 2);
        // A cap below the escape point just reports the cap.
        assert_eq!(escape_time(ORIGIN, Complex::new(1.0, 0.0), 2), 2);
        assert_eq!(escape_time(ORIGIN, Complex::new(1.0, 0.0), 1), 1);
    }

    #[test]
    fn julia_of_minus_one_keeps_the_origin() {
        // 0 -> -1 -> 0 -> -1 ...
        assert_eq!(escape_time(ORIGIN, Complex::new(-1.0, 0.0), 50), 50);
    }

    #[test]
    fn escape_time_is_bounded_and_deterministic() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
        let coord = Uniform::new_inclusive(-2.5_f64, 2.5);
        for _ in 0..2000 {
            let z0 = Complex::new(coord.sample(&mut rng), coord.sample(&mut rng));
            let c = Complex::new(coord.sample(&mut rng), coord.sample(&mut rng));
            let first = escape_time(z0, c, DEFAULT_CAP);
            assert!(first <= DEFAULT_CAP);
            assert_eq!(escape_time(z0, c, DEFAULT_CAP), first);
        }
    }
}
