// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The frame driver.
//!
//! Every pixel of the raster is independent of every other: map it to
//! the plane, run the escape-time loop with the program's choice of
//! operands, pick a color.  The single-threaded render does this row
//! by row on the calling thread.  The threaded render deals the rows
//! out in contiguous bands, one per worker, and each worker writes
//! only into its own band of the raster, so the only synchronization
//! is the join at the end.  Either way, every render recomputes the
//! whole raster from scratch.

use itertools::iproduct;
use log::debug;
use std::time::Instant;

use crate::errors::FractalError;
use crate::escape::{escape_time, DEFAULT_CAP};
use crate::kinds::{Fractal, Variant};
use crate::palette::Rgb;
use crate::planes::{Pixel, PlaneMapper};
use crate::viewport::Viewport;

/// A square grid of packed `0xRRGGBB` pixels, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    width: usize,
    pixels: Vec<u32>,
}

impl Raster {
    /// An all-black raster.
    pub fn new(width: usize) -> Self {
        Raster {
            width,
            pixels: vec![0 as u32; width * width],
        }
    }

    /// The side of the raster.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The packed pixels.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// The packed color at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.width {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Copies the raster into an RGBA8 frame of the same shape, which is
    /// what the window surface wants.
    pub fn blit(&self, frame: &mut [u8]) {
        for (pixel, rgba) in self.pixels.iter().zip(frame.chunks_exact_mut(4)) {
            rgba[0] = (pixel >> 16) as u8;
            rgba[1] = (pixel >> 8) as u8;
            rgba[2] = *pixel as u8;
            rgba[3] = 0xff;
        }
    }

    /// The raster as tightly packed RGB8 bytes, for image encoders.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for &p in &self.pixels {
            let Rgb(r, g, b) = Rgb::unpack(p);
            bytes.extend_from_slice(&[r, g, b]);
        }
        bytes
    }
}

/// The parameters a frame is rendered with.  Once set, this object
/// should not be mutable; everything that changes between frames lives
/// in the `Viewport`.
#[derive(Copy, Clone, Debug)]
pub struct Renderer {
    /// Which program's rules we paint by.
    pub variant: Variant,
    /// Which fractal.
    pub fractal: Fractal,
    /// The raster shape and its window on the plane.
    pub plane: PlaneMapper,
    /// The iteration cap.
    pub cap: usize,
}

impl Renderer {
    /// A renderer with the default 800-pixel raster, `[-2, 2]` window
    /// and a cap of 50.
    pub fn new(variant: Variant, fractal: Fractal) -> Self {
        Renderer {
            variant,
            fractal,
            plane: PlaneMapper::default(),
            cap: DEFAULT_CAP,
        }
    }

    /// Replace the plane.
    pub fn with_plane(self, plane: PlaneMapper) -> Self {
        Renderer { plane, ..self }
    }

    /// Replace the iteration cap.
    pub fn with_cap(self, cap: usize) -> Self {
        Renderer { cap, ..self }
    }

    /// A blank raster of the right size for this renderer.
    pub fn raster(&self) -> Raster {
        Raster::new(self.plane.width)
    }

    /// The escape time of one pixel.
    #[inline]
    pub fn iterations_at(&self, pixel: &Pixel, view: &Viewport) -> usize {
        let sample = if self.variant.follows_view(self.fractal) {
            self.plane.pixel_to_point(pixel, view)
        } else {
            self.plane.pixel_to_fixed_point(pixel)
        };
        let constant = self.plane.constant_point(view);
        let (z0, c) = self.variant.operands(self.fractal, sample, constant);
        escape_time(z0, c, self.cap)
    }

    /// The escape time of every pixel, row-major.
    pub fn iterations(&self, view: &Viewport) -> Vec<usize> {
        let width = self.plane.width;
        iproduct!(0..width, 0..width)
            .map(|(row, column)| self.iterations_at(&Pixel(column, row), view))
            .collect()
    }

    // Paints `band`, which holds whole rows starting at `first_row`.
    fn render_rows(&self, view: &Viewport, first_row: usize, band: &mut [u32]) {
        let width = self.plane.width;
        let palette = self.variant.palette();
        for (i, row) in band.chunks_mut(width).enumerate() {
            for (column, out) in row.iter_mut().enumerate() {
                let iters = self.iterations_at(&Pixel(column, first_row + i), view);
                *out = palette.packed(iters, self.cap);
            }
        }
    }

    fn check(&self, raster: &Raster) -> Result<(), FractalError> {
        if raster.width != self.plane.width {
            return Err(FractalError::Plane(format!(
                "A {}-pixel renderer cannot paint a {}-pixel raster.",
                self.plane.width, raster.width
            )));
        }
        Ok(())
    }

    /// Repaints the whole raster on the calling thread.
    pub fn render(&self, view: &Viewport, raster: &mut Raster) -> Result<(), FractalError> {
        self.check(raster)?;
        let started = Instant::now();
        self.render_rows(view, 0, &mut raster.pixels);
        debug!(
            "Rendered {} {}x{} in {:?}",
            self.fractal,
            raster.width,
            raster.width,
            started.elapsed()
        );
        Ok(())
    }

    /// Repaints the whole raster using up to `threads` threads, each
    /// handling a contiguous band of rows.  The result is identical to
    /// `render`.
    pub fn render_threaded(
        &self,
        view: &Viewport,
        raster: &mut Raster,
        threads: usize,
    ) -> Result<(), FractalError> {
        if threads <= 1 {
            return self.render(view, raster);
        }
        self.check(raster)?;
        let started = Instant::now();
        let width = self.plane.width;
        let rows_per_band = (width + threads - 1) / threads;
        crossbeam::scope(|spawner| {
            for (band_number, band) in raster.pixels.chunks_mut(rows_per_band * width).enumerate()
            {
                spawner.spawn(move |_| {
                    self.render_rows(view, band_number * rows_per_band, band);
                });
            }
        })
        .map_err(|_| FractalError::RenderThread)?;
        debug!(
            "Rendered {} {}x{} on {} threads in {:?}",
            self.fractal,
            width,
            width,
            threads,
            started.elapsed()
        );
        Ok(())
    }
}
