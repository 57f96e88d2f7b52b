// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong, which isn't much.

use failure::Fail;
use std::io;
use std::path::Path;

/// The crate-wide error type.
#[derive(Debug, Fail)]
pub enum FractalError {
    /// The program was started with the wrong number of fractal names.
    #[fail(display = "Bad arguments!")]
    BadArguments,

    /// Anything else clap didn't like, including requests for help.
    #[fail(display = "{}", _0)]
    Usage(#[cause] clap::Error),

    /// The fractal name was not one we know about.
    #[fail(display = "Bad fractal name")]
    UnknownFractal(String),

    /// A plane mapper was asked for a shape it cannot represent.
    #[fail(display = "{}", _0)]
    Plane(String),

    /// The screenshot directory does not exist.
    #[fail(display = "No such directory: {}", _0)]
    MissingDirectory(String),

    /// Writing the screenshot failed.
    #[fail(display = "{}", _0)]
    Io(#[cause] io::Error),

    /// Encoding the screenshot failed.
    #[fail(display = "{}", _0)]
    Image(String),

    /// One of the render threads panicked.
    #[fail(display = "A render thread panicked")]
    RenderThread,

    /// The window or its drawing surface could not be set up, or a
    /// frame could not be presented.
    #[fail(display = "Display failure: {}", _0)]
    Display(String),
}

impl FractalError {
    /// Shorthand for a missing screenshot directory.
    pub fn missing_directory(path: &Path) -> FractalError {
        FractalError::MissingDirectory(path.display().to_string())
    }
}

impl From<io::Error> for FractalError {
    fn from(e: io::Error) -> Self {
        FractalError::Io(e)
    }
}

impl From<image::ImageError> for FractalError {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(e) => FractalError::Io(e),
            e => FractalError::Image(e.to_string()),
        }
    }
}

impl From<pixels::Error> for FractalError {
    fn from(e: pixels::Error) -> Self {
        FractalError::Display(e.to_string())
    }
}

impl From<winit::error::OsError> for FractalError {
    fn from(e: winit::error::OsError) -> Self {
        FractalError::Display(e.to_string())
    }
}
