// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! One running program: the view, the raster it paints into, and the
//! renderer that does the painting.  The window feeds it `Input`s and
//! shows whatever is in the raster afterwards.

use log::info;
use std::path::PathBuf;

use crate::cli::Config;
use crate::controls::{Controls, Input, Response};
use crate::errors::FractalError;
use crate::kinds::{Fractal, Variant};
use crate::render::{Raster, Renderer};
use crate::screenshot::Screenshots;
use crate::viewport::Viewport;

/// The state of a running program.
pub struct App {
    controls: Controls,
    renderer: Renderer,
    view: Viewport,
    raster: Raster,
    threads: usize,
    screenshots: Option<PathBuf>,
}

impl App {
    /// Sets up the starting view for a fractal.  Nothing is rendered
    /// until `render` is called.
    pub fn new(variant: Variant, config: &Config) -> Self {
        App::with_renderer(Renderer::new(variant, config.fractal), config)
    }

    /// As `new`, with a renderer of the caller's choosing.
    pub fn with_renderer(renderer: Renderer, config: &Config) -> Self {
        info!(
            "Drawing {} ({:?}) on {} thread(s)",
            renderer.fractal, renderer.variant, config.threads
        );
        App {
            controls: Controls::new(renderer.variant, renderer.fractal, renderer.plane),
            view: Viewport::new(renderer.fractal, &renderer.plane),
            raster: renderer.raster(),
            renderer,
            threads: config.threads,
            screenshots: config.screenshots.clone(),
        }
    }

    /// The side of the raster, in pixels.
    pub fn side(&self) -> usize {
        self.raster.width()
    }

    /// Which fractal this is.
    pub fn fractal(&self) -> Fractal {
        self.renderer.fractal
    }

    /// The current view.
    pub fn view(&self) -> &Viewport {
        &self.view
    }

    /// The most recently rendered raster.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Recompute the whole raster for the current view.
    pub fn render(&mut self) -> Result<(), FractalError> {
        self.renderer
            .render_threaded(&self.view, &mut self.raster, self.threads)
    }

    /// Apply an input, re-rendering if it changed the view.
    pub fn handle(&mut self, input: Input) -> Result<Response, FractalError> {
        let response = self.controls.apply(&mut self.view, input);
        if response == Response::Redraw {
            self.render()?;
        }
        Ok(response)
    }

    /// Save the raster as a screenshot.
    pub fn save_screenshot(&self) -> Result<PathBuf, FractalError> {
        Screenshots::new(self.screenshots.clone())?.save(&self.raster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::DEFAULT_CAP;
    use crate::palette::{BLACK, WHITE};
    use crate::planes::PlaneMapper;
    use crate::viewport::Direction;

    fn config(fractal: Fractal, screenshots: Option<PathBuf>) -> Config {
        Config {
            fractal,
            threads: 2,
            screenshots,
        }
    }

    fn small(variant: Variant, fractal: Fractal, screenshots: Option<PathBuf>) -> App {
        let renderer = Renderer::new(variant, fractal)
            .with_plane(PlaneMapper::new(40, -2.0, 2.0).unwrap())
            .with_cap(DEFAULT_CAP);
        App::with_renderer(renderer, &config(fractal, screenshots))
    }

    #[test]
    fn nothing_is_drawn_until_asked() {
        let mut app = small(Variant::Mono, Fractal::Mandelbrot, None);
        assert!(app.raster().pixels().iter().all(|&p| p == BLACK.pack()));
        app.render().unwrap();
        assert_eq!(app.raster().get(20, 20), Some(WHITE.pack()));
    }

    #[test]
    fn inputs_that_change_the_view_repaint() {
        let mut app = small(Variant::Banded, Fractal::Julia, None);
        app.render().unwrap();
        let before = app.raster().clone();

        let response = app.handle(Input::Click(30.0, 10.0)).unwrap();
        assert_eq!(response, Response::Redraw);
        assert_eq!(app.view().constant, (30.0, 10.0));
        assert_ne!(app.raster(), &before);

        let mut expected = app.raster().clone();
        Renderer::new(Variant::Banded, Fractal::Julia)
            .with_plane(PlaneMapper::new(40, -2.0, 2.0).unwrap())
            .render(app.view(), &mut expected)
            .unwrap();
        assert_eq!(app.raster(), &expected);
    }

    #[test]
    fn ignored_inputs_leave_the_raster_alone() {
        let mut app = small(Variant::Banded, Fractal::Mandelbrot, None);
        app.render().unwrap();
        let before = app.raster().clone();
        assert_eq!(
            app.handle(Input::Click(3.0, 3.0)).unwrap(),
            Response::Ignore
        );
        assert_eq!(app.raster(), &before);
    }

    #[test]
    fn panning_moves_the_julia_picture() {
        let mut app = small(Variant::Banded, Fractal::Julia, None);
        app.render().unwrap();
        let before = app.raster().clone();
        app.handle(Input::Arrow(Direction::Right)).unwrap();
        assert!(app.view().pan.0 > 0.0);
        assert_ne!(app.raster(), &before);
    }

    #[test]
    fn banded_mandelbrot_redraws_the_same_picture() {
        let mut app = small(Variant::Banded, Fractal::Mandelbrot, None);
        app.render().unwrap();
        let before = app.raster().clone();
        assert_eq!(
            app.handle(Input::Arrow(Direction::Right)).unwrap(),
            Response::Redraw
        );
        let wheel = Input::Wheel {
            x: 5.0,
            y: 30.0,
            up: true,
        };
        assert_eq!(app.handle(wheel).unwrap(), Response::Redraw);
        assert!(app.view().pan.0 > 0.0);
        assert_eq!(app.view().zoom, 2.0);
        assert_eq!(app.raster(), &before);
    }

    #[test]
    fn screenshots_land_in_the_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = small(
            Variant::Banded,
            Fractal::Julia,
            Some(dir.path().to_path_buf()),
        );
        app.render().unwrap();
        assert_eq!(app.handle(Input::Save).unwrap(), Response::Screenshot);
        let path = app.save_screenshot().unwrap();
        assert!(path.exists());
        assert_eq!(app.side(), 40);
        assert_eq!(app.fractal(), Fractal::Julia);
    }
}
