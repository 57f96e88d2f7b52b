#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia and Mandelbrot explorer
//!
//! Both fractals are drawn the same way.  Take a point on the complex
//! plane, repeatedly square it and add a constant, and count how many
//! rounds it survives before wandering more than 2 away from the
//! origin.  That count, capped at 50, picks the pixel's color.  The
//! Mandelbrot set starts every orbit at the origin and uses the pixel
//! as the constant; a Julia set starts the orbit at the pixel and
//! holds a user-chosen constant fixed.
//!
//! There are two programs built on this library.  `fractal` paints in
//! five bands of green, lets you click or Ctrl+drag the Julia constant
//! around, and saves screenshots.  `fractal-mono` paints in black and
//! white and drags the constant along with the mouse.  Both pan with
//! the arrow keys and zoom with the wheel.

pub mod app;
pub mod cli;
pub mod complex;
pub mod controls;
pub mod errors;
pub mod escape;
pub mod kinds;
pub mod palette;
pub mod planes;
pub mod render;
pub mod screenshot;
pub mod viewport;
pub mod window;

pub use app::App;
pub use errors::FractalError;
pub use escape::escape_time;
pub use kinds::{Fractal, Variant};
pub use render::{Raster, Renderer};
pub use viewport::Viewport;
