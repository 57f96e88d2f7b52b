// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The view state: how far we've zoomed, how far we've panned, and
//! where the constant sits.  This is all the renderer needs to know
//! besides the raster shape, and it is only ever changed by the input
//! handlers in `controls`.

use crate::kinds::Fractal;
use crate::planes::PlaneMapper;

/// Each wheel notch doubles or halves the zoom.
pub const ZOOM_FACTOR: f64 = 2.0;

/// An arrow key pans by this fraction of the raster width, at zoom 1.
pub const PAN_DIVISOR: f64 = 30.0;

/// The four arrow keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Up
    Up,
    /// Down
    Down,
    /// Left
    Left,
    /// Right
    Right,
}

/// Everything the user can change about the picture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Magnification; 1.0 shows the whole `[-2, 2]` window.
    pub zoom: f64,
    /// Pan offsets, in pixels at the current zoom.
    pub pan: (f64, f64),
    /// The Julia constant (or the mono program's Mandelbrot reference
    /// point), in pixel coordinates.  Pan and zoom don't move it.
    pub constant: (f64, f64),
    /// Where the cursor was for the last zoom.
    pub focus: (f64, f64),
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            zoom: 1.0,
            pan: (0.0, 0.0),
            constant: (0.0, 0.0),
            focus: (0.0, 0.0),
        }
    }
}

impl Viewport {
    /// The starting view for a fractal.
    pub fn new(fractal: Fractal, plane: &PlaneMapper) -> Self {
        let k = fractal.initial_constant();
        Viewport {
            constant: (plane.plane_to_pixel(k.re), plane.plane_to_pixel(k.im)),
            ..Viewport::default()
        }
    }

    /// How far one arrow press moves the view, in pan units.
    pub fn pan_step(&self, width: usize) -> f64 {
        (width as f64 / PAN_DIVISOR) / self.zoom
    }

    /// Shift the view one step in a direction.
    pub fn pan(&mut self, direction: Direction, width: usize) {
        let step = self.pan_step(width);
        match direction {
            Direction::Up => self.pan.1 -= step,
            Direction::Down => self.pan.1 += step,
            Direction::Left => self.pan.0 -= step,
            Direction::Right => self.pan.0 += step,
        }
    }

    /// Multiply the zoom by `factor`, keeping whatever is under the
    /// cursor at `(x, y)` under the cursor.
    ///
    /// A pixel `p` samples `(low + k·p) / zoom + k·pan`, with `k` the
    /// plane width of one pixel, so holding that fixed while the zoom
    /// changes means moving the pan by `(low + k·p)(1/old - 1/new) / k`.
    pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64, plane: &PlaneMapper) {
        let old = self.zoom;
        let new = old * factor;
        let k = plane.scale();
        let shift = |p: f64| plane.pixel_to_plane(p) * (1.0 / old - 1.0 / new) / k;
        self.pan = (self.pan.0 + shift(x), self.pan.1 + shift(y));
        self.zoom = new;
        self.focus = (x, y);
    }

    /// Move the constant to a pixel.
    pub fn set_constant(&mut self, x: f64, y: f64) {
        self.constant = (x, y);
    }
}
