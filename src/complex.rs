// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The handful of complex operations the escape-time loop needs.
//!
//! We don't need our own complex type; `num::Complex<f64>` is already a
//! plain `Copy` pair of doubles.  What we do need is to pin down
//! exactly how each operation is computed, because whether a point
//! escapes on a given iteration depends on the last bit of the
//! modulus.  `Complex::norm()` goes through `hypot`, which rounds
//! differently from the plain `sqrt(re² + im²)` used here.

use num::Complex;

/// Component-wise addition.
#[inline]
pub fn sum(left: Complex<f64>, right: Complex<f64>) -> Complex<f64> {
    Complex::new(left.re + right.re, left.im + right.im)
}

/// The standard complex product.
#[inline]
pub fn multiply(left: Complex<f64>, right: Complex<f64>) -> Complex<f64> {
    Complex::new(
        left.re * right.re - left.im * right.im,
        left.re * right.im + left.im * right.re,
    )
}

/// `multiply(c, c)`.
#[inline]
pub fn square(c: Complex<f64>) -> Complex<f64> {
    multiply(c, c)
}

/// The distance of `c` from the origin.
#[inline]
pub fn modulus(c: Complex<f64>) -> f64 {
    (c.re * c.re + c.im * c.im).sqrt()
}
