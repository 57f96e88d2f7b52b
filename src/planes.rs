// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a square of pixels with an origin at 0,0 and a square
//! window onto the complex plane.  The same window is used for both
//! axes: x maps to the real part and y to the imaginary part, with y
//! growing downwards the way the raster does.
use num::Complex;

use crate::errors::FractalError;
use crate::viewport::Viewport;

/// Describes the x, y of a pixel in the raster.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// The default side of the raster, in pixels.
pub const DEFAULT_WIDTH: usize = 800;

/// The canonical window onto the complex plane, on both axes.
pub const DEFAULT_WINDOW: (f64, f64) = (-2.0, 2.0);

/// Maps pixel coordinates onto the plane and back.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The side of the square raster.
    pub width: usize,
    /// The low and high edge of the window on the plane.
    pub window: (f64, f64),
    // plane units per pixel
    scale: f64,
}

impl Default for PlaneMapper {
    fn default() -> Self {
        PlaneMapper {
            width: DEFAULT_WIDTH,
            window: DEFAULT_WINDOW,
            scale: (DEFAULT_WINDOW.1 - DEFAULT_WINDOW.0) / DEFAULT_WIDTH as f64,
        }
    }
}

impl PlaneMapper {
    /// Constructor.  Takes the side of the raster and the low and high
    /// edges of the window onto the plane.
    pub fn new(width: usize, low: f64, high: f64) -> Result<PlaneMapper, FractalError> {
        if width == 0 {
            return Err(FractalError::Plane(
                "The raster must be at least one pixel wide.".to_string(),
            ));
        }
        if !(low < high) {
            return Err(FractalError::Plane(
                "The low edge of the window is not below the high edge.".to_string(),
            ));
        }
        Ok(PlaneMapper {
            width,
            window: (low, high),
            scale: (high - low) / width as f64,
        })
    }

    /// The total number of pixels in the raster.
    pub fn len(&self) -> usize {
        self.width * self.width
    }

    /// Never true; the constructor refuses empty rasters.
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// The width of one pixel, in plane units.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Maps a (possibly fractional) pixel coordinate onto the plane.
    #[inline]
    pub fn pixel_to_plane(&self, p: f64) -> f64 {
        self.window.0 + self.scale * p
    }

    /// Maps a plane coordinate back onto the pixel axis.  Only used to
    /// seed the initial Julia constant, which is kept in pixel units.
    #[inline]
    pub fn plane_to_pixel(&self, v: f64) -> f64 {
        (v - self.window.0) * self.width as f64 / (self.window.1 - self.window.0)
    }

    /// The plane coordinate actually sampled for pixel `p` on an axis
    /// panned by `delta` and zoomed by `zoom`.  The pan is in pixel
    /// units at the current zoom, which is why it gets multiplied back
    /// up before the division.
    #[inline]
    pub fn sample(&self, p: f64, delta: f64, zoom: f64) -> f64 {
        self.pixel_to_plane(p + delta * zoom) / zoom
    }

    /// The complex point sampled for a pixel under a viewport.
    pub fn pixel_to_point(&self, pixel: &Pixel, view: &Viewport) -> Complex<f64> {
        Complex::new(
            self.sample(pixel.0 as f64, view.pan.0, view.zoom),
            self.sample(pixel.1 as f64, view.pan.1, view.zoom),
        )
    }

    /// The complex point for a pixel with no pan or zoom applied.
    pub fn pixel_to_fixed_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.pixel_to_plane(pixel.0 as f64),
            self.pixel_to_plane(pixel.1 as f64),
        )
    }

    /// The viewport's constant, which lives in pixel units and is not
    /// affected by pan or zoom, as a point on the plane.
    pub fn constant_point(&self, view: &Viewport) -> Complex<f64> {
        Complex::new(
            self.pixel_to_plane(view.constant.0),
            self.pixel_to_plane(view.constant.1),
        )
    }
}
