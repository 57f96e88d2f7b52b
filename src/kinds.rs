// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Which fractal we draw, and which of the two programs is drawing it.
//!
//! The two programs share everything but a few decisions: the
//! palette, which input events move the constant, whether screenshots
//! exist, and, oddly, which operand of `z² + c` is the pixel and which
//! is held fixed.  The banded program uses the textbook roles.  The
//! mono program swaps them for both fractals, so its "Julia" is really
//! a slice through parameter space seeded by the constant, and its
//! "Mandelbrot" is a Julia set of the reference point.  That is how it
//! has always looked, so it stays that way.

use std::fmt;
use std::str::FromStr;

use num::Complex;

use crate::errors::FractalError;
use crate::palette::Palette;

/// The usage hint printed whenever the fractal argument is wrong.
pub const AVAILABLE_FRACTALS: &str = "Available fractals: Julia, Mandelbrot";

/// The two fractals we know how to draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Fractal {
    /// Iterate the pixel, hold the user's constant fixed.
    Julia,
    /// Iterate from the origin, with the pixel as the constant.
    Mandelbrot,
}

impl FromStr for Fractal {
    type Err = FractalError;

    /// Case-sensitive: "julia" is not a fractal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Julia" => Ok(Fractal::Julia),
            "Mandelbrot" => Ok(Fractal::Mandelbrot),
            other => Err(FractalError::UnknownFractal(other.to_string())),
        }
    }
}

impl fmt::Display for Fractal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Fractal::Julia => write!(f, "Julia"),
            Fractal::Mandelbrot => write!(f, "Mandelbrot"),
        }
    }
}

impl Fractal {
    /// Where the constant starts, on the plane.  The Mandelbrot
    /// doesn't use it in the banded program, but the mono program
    /// does, and the origin is as good a place as any.
    pub fn initial_constant(self) -> Complex<f64> {
        match self {
            Fractal::Julia => Complex::new(-1.0, 0.0),
            Fractal::Mandelbrot => Complex::new(0.0, 0.0),
        }
    }
}

/// The two programs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Five-band palette, click or Ctrl+drag to move the Julia
    /// constant, `S` to save a screenshot.
    Banded,
    /// Black and white, the constant follows the mouse.
    Mono,
}

impl Variant {
    /// The palette this program paints with.
    pub fn palette(self) -> Palette {
        match self {
            Variant::Banded => Palette::Banded,
            Variant::Mono => Palette::Binary,
        }
    }

    /// Whether the `S` key does anything.
    pub fn screenshots(self) -> bool {
        self == Variant::Banded
    }

    /// Whether pan and zoom move the picture.  The banded program's
    /// Mandelbrot always samples the unpanned `[-2, 2]` window; the
    /// view still changes underneath it, it just isn't looked at.
    pub fn follows_view(self, fractal: Fractal) -> bool {
        !(self == Variant::Banded && fractal == Fractal::Mandelbrot)
    }

    /// Given the point sampled for a pixel and the constant, returns
    /// `(z0, c)` for the escape-time loop.
    #[inline]
    pub fn operands(
        self,
        fractal: Fractal,
        sample: Complex<f64>,
        constant: Complex<f64>,
    ) -> (Complex<f64>, Complex<f64>) {
        match (self, fractal) {
            (Variant::Banded, Fractal::Julia) => (sample, constant),
            (Variant::Banded, Fractal::Mandelbrot) => (Complex::new(0.0, 0.0), sample),
            (Variant::Mono, Fractal::Julia) => (constant, sample),
            (Variant::Mono, Fractal::Mandelbrot) => (sample, constant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractal_names_are_case_sensitive() {
        assert_eq!("Julia".parse::<Fractal>().unwrap(), Fractal::Julia);
        assert_eq!(
            "Mandelbrot".parse::<Fractal>().unwrap(),
            Fractal::Mandelbrot
        );
        assert!("julia".parse::<Fractal>().is_err());
        assert!("MANDELBROT".parse::<Fractal>().is_err());
        assert!("".parse::<Fractal>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for f in &[Fractal::Julia, Fractal::Mandelbrot] {
            assert_eq!(f.to_string().parse::<Fractal>().unwrap(), *f);
        }
    }

    #[test]
    fn banded_uses_the_textbook_roles() {
        let s = Complex::new(0.25, -0.5);
        let k = Complex::new(-1.0, 0.0);
        let v = Variant::Banded;
        assert_eq!(v.operands(Fractal::Julia, s, k), (s, k));
        assert_eq!(
            v.operands(Fractal::Mandelbrot, s, k),
            (Complex::new(0.0, 0.0), s)
        );
    }

    #[test]
    fn mono_swaps_the_roles() {
        let s = Complex::new(0.25, -0.5);
        let k = Complex::new(-1.0, 0.0);
        let v = Variant::Mono;
        assert_eq!(v.operands(Fractal::Julia, s, k), (k, s));
        assert_eq!(v.operands(Fractal::Mandelbrot, s, k), (s, k));
    }

    #[test]
    fn banded_mandelbrot_is_the_only_fixed_view() {
        assert!(Variant::Banded.follows_view(Fractal::Julia));
        assert!(!Variant::Banded.follows_view(Fractal::Mandelbrot));
        assert!(Variant::Mono.follows_view(Fractal::Julia));
        assert!(Variant::Mono.follows_view(Fractal::Mandelbrot));
    }

    #[test]
    fn only_the_banded_program_saves_screenshots() {
        assert!(Variant::Banded.screenshots());
        assert!(!Variant::Mono.screenshots());
        assert_eq!(Variant::Banded.palette(), Palette::Banded);
        assert_eq!(Variant::Mono.palette(), Palette::Binary);
    }
}
