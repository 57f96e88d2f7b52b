// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Input handling, independent of any windowing library.  The window
//! translates raw events into `Input`s, and `Controls::apply` decides
//! what each one does to the viewport and whether a re-render is
//! needed.

use crate::kinds::{Fractal, Variant};
use crate::planes::PlaneMapper;
use crate::viewport::{Direction, Viewport, ZOOM_FACTOR};

/// The inputs the programs react to.  Positions are raster pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Input {
    /// Escape.
    Quit,
    /// An arrow key.
    Arrow(Direction),
    /// The `S` key.
    Save,
    /// Left mouse button pressed.
    Click(f64, f64),
    /// The cursor moved; `ctrl` says whether Control is held.
    Moved {
        /// x
        x: f64,
        /// y
        y: f64,
        /// Control is held.
        ctrl: bool,
    },
    /// A wheel notch; `up` is away from the user, which zooms in.
    Wheel {
        /// x
        x: f64,
        /// y
        y: f64,
        /// Rolled up
        up: bool,
    },
}

/// What the window should do after an input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Nothing changed.
    Ignore,
    /// The viewport changed; render again.
    Redraw,
    /// Ask about, then maybe save, a screenshot.
    Screenshot,
    /// Leave.
    Quit,
}

/// Binds a program variant and a fractal to the shape of the plane.
#[derive(Copy, Clone, Debug)]
pub struct Controls {
    /// Which program.
    pub variant: Variant,
    /// Which fractal.
    pub fractal: Fractal,
    /// The raster and its window.
    pub plane: PlaneMapper,
}

impl Controls {
    /// Constructor.
    pub fn new(variant: Variant, fractal: Fractal, plane: PlaneMapper) -> Self {
        Controls {
            variant,
            fractal,
            plane,
        }
    }

    /// Apply one input to the viewport.
    pub fn apply(&self, view: &mut Viewport, input: Input) -> Response {
        match input {
            Input::Quit => Response::Quit,
            Input::Arrow(direction) => {
                view.pan(direction, self.plane.width);
                Response::Redraw
            }
            Input::Save => {
                if self.variant.screenshots() {
                    Response::Screenshot
                } else {
                    Response::Ignore
                }
            }
            Input::Click(x, y) => match (self.variant, self.fractal) {
                (Variant::Banded, Fractal::Julia) => {
                    view.set_constant(x, y);
                    Response::Redraw
                }
                _ => Response::Ignore,
            },
            Input::Moved { x, y, ctrl } => match (self.variant, self.fractal) {
                (Variant::Banded, Fractal::Julia) if ctrl => {
                    view.set_constant(x, y);
                    Response::Redraw
                }
                (Variant::Mono, _) => {
                    view.set_constant(x, y);
                    Response::Redraw
                }
                _ => Response::Ignore,
            },
            Input::Wheel { x, y, up } => {
                let factor = if up { ZOOM_FACTOR } else { 1.0 / ZOOM_FACTOR };
                view.zoom_at(x, y, factor, &self.plane);
                Response::Redraw
            }
        }
    }
}
