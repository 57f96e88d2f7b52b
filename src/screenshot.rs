// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Saving the current raster as a JPEG named after the moment it was
//! taken, `DD.MM.YYYY-HH.MM.SS.jpg`, in the user's desktop directory
//! unless told otherwise.

use chrono::{DateTime, Local, TimeZone};
use image::{ColorType, ImageFormat};
use log::info;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::errors::FractalError;
use crate::render::Raster;

/// The file name a screenshot taken at `when` gets.
pub fn filename<Tz: TimeZone>(when: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("{}.jpg", when.format("%d.%m.%Y-%H.%M.%S"))
}

/// The user's desktop, or `~/Desktop` on platforms that don't say.
pub fn default_dir() -> Option<PathBuf> {
    dirs_next::desktop_dir().or_else(|| dirs_next::home_dir().map(|home| home.join("Desktop")))
}

/// Writes the raster into `dir` as a screenshot taken at `when`, and
/// returns the path written.
pub fn save_at<Tz: TimeZone>(
    raster: &Raster,
    dir: &Path,
    when: &DateTime<Tz>,
) -> Result<PathBuf, FractalError>
where
    Tz::Offset: Display,
{
    if !dir.is_dir() {
        return Err(FractalError::missing_directory(dir));
    }
    let path = dir.join(filename(when));
    let side = raster.width() as u32;
    image::save_buffer_with_format(
        &path,
        &raster.to_rgb_bytes(),
        side,
        side,
        ColorType::Rgb8,
        ImageFormat::Jpeg,
    )?;
    info!("Saved screenshot to {}", path.display());
    Ok(path)
}

/// Where screenshots go.
#[derive(Clone, Debug)]
pub struct Screenshots {
    /// The target directory.
    pub dir: PathBuf,
}

impl Screenshots {
    /// Screenshots into `dir`, or into the desktop if `dir` is `None`.
    /// Fails only if there is no directory to fall back to.
    pub fn new(dir: Option<PathBuf>) -> Result<Self, FractalError> {
        match dir.or_else(default_dir) {
            Some(dir) => Ok(Screenshots { dir }),
            None => Err(FractalError::MissingDirectory("Desktop".to_string())),
        }
    }

    /// Save the raster, stamped with the current local time.
    pub fn save(&self, raster: &Raster) -> Result<PathBuf, FractalError> {
        save_at(raster, &self.dir, &Local::now())
    }
}
