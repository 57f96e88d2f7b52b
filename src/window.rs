// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The window: a fixed-size winit window with a `pixels` surface the
//! raster is copied onto, an event loop that turns keyboard and mouse
//! events into `Input`s, and the message boxes for screenshots.
//!
//! Rendering happens right here on the event thread, so a slow render
//! holds up the events behind it.

use log::{error, warn};
use pixels::{Pixels, SurfaceTexture};
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};
use winit_input_helper::WinitInputHelper;

use crate::app::App;
use crate::controls::{Input, Response};
use crate::errors::FractalError;
use crate::viewport::Direction;

fn arrow(key: VirtualKeyCode) -> Option<Direction> {
    match key {
        VirtualKeyCode::Up => Some(Direction::Up),
        VirtualKeyCode::Down => Some(Direction::Down),
        VirtualKeyCode::Left => Some(Direction::Left),
        VirtualKeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

// How many wheel notches a scroll amount is worth.  Any movement at
// all counts as one.
fn notches(scroll: f32) -> usize {
    if scroll == 0.0 {
        0
    } else {
        (scroll.abs().round() as usize).max(1)
    }
}

fn wheel(x: f64, y: f64, scroll: f32) -> impl Iterator<Item = Input> {
    let up = scroll > 0.0;
    (0..notches(scroll)).map(move |_| Input::Wheel { x, y, up })
}

// Everything seen since the last batch, in the order the programs
// have always handled them.  Arrows come from the raw key events so
// that held keys repeat.
fn gather(input: &WinitInputHelper, pixels: &Pixels, arrows: Vec<Direction>) -> Vec<Input> {
    let mut inputs = vec![];
    if input.key_pressed(VirtualKeyCode::Escape) {
        inputs.push(Input::Quit);
        return inputs;
    }
    inputs.extend(arrows.into_iter().map(Input::Arrow));
    if input.key_pressed(VirtualKeyCode::S) {
        inputs.push(Input::Save);
    }

    let cursor = input
        .mouse()
        .and_then(|pos| pixels.window_pos_to_pixel(pos).ok())
        .map(|(x, y)| (x as f64, y as f64));

    if let Some((x, y)) = cursor {
        if input.mouse_pressed(0) {
            inputs.push(Input::Click(x, y));
        }
        if input.mouse_diff() != (0.0, 0.0) {
            inputs.push(Input::Moved {
                x,
                y,
                ctrl: input.held_control(),
            });
        }
        inputs.extend(wheel(x, y, input.scroll_diff()));
    }
    inputs
}

fn screenshot(app: &App) {
    let save = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("")
        .set_description("Save current image?")
        .set_buttons(MessageButtons::YesNo)
        .show();
    if !save {
        return;
    }
    match app.save_screenshot() {
        Ok(_) => {
            MessageDialog::new()
                .set_level(MessageLevel::Info)
                .set_description("Done!")
                .set_buttons(MessageButtons::Ok)
                .show();
        }
        Err(e) => {
            warn!("Screenshot failed: {}", e);
            MessageDialog::new()
                .set_level(MessageLevel::Error)
                .set_title("Error!")
                .set_description(&e.to_string())
                .set_buttons(MessageButtons::Ok)
                .show();
        }
    }
}

fn open(app: &mut App) -> Result<(EventLoop<()>, Window, Pixels), FractalError> {
    let side = app.side() as u32;
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(app.fractal().to_string())
        .with_inner_size(LogicalSize::new(side as f64, side as f64))
        .with_resizable(false)
        .build(&event_loop)?;

    let pixels = {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, &window);
        Pixels::new(side, side, surface)?
    };

    app.render()?;
    Ok((event_loop, window, pixels))
}

fn setup_failed(err: FractalError) -> FractalError {
    error!("Could not open the window: {}", err);
    err
}

/// Opens the window and runs the program until it is closed.  Only
/// returns if the window or its surface can't be created; the failure
/// has already been logged by then.
pub fn run(mut app: App) -> Result<(), FractalError> {
    let (event_loop, window, mut pixels) = open(&mut app).map_err(setup_failed)?;
    let mut input = WinitInputHelper::new();
    let mut arrows = vec![];
    window.request_redraw();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        if let Event::RedrawRequested(_) = event {
            app.raster().blit(pixels.frame_mut());
            if let Err(err) = pixels.render() {
                error!("pixels.render error: {}", err);
                *control_flow = ControlFlow::ExitWithCode(1);
                return;
            }
        }

        if let Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                },
            ..
        } = event
        {
            arrows.extend(arrow(key));
        }

        if !input.update(&event) {
            return;
        }
        if input.close_requested() || input.destroyed() {
            *control_flow = ControlFlow::Exit;
            return;
        }
        for action in gather(&input, &pixels, std::mem::take(&mut arrows)) {
            match app.handle(action) {
                Ok(Response::Quit) => {
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                Ok(Response::Redraw) => window.request_redraw(),
                Ok(Response::Screenshot) => screenshot(&app),
                Ok(Response::Ignore) => {}
                Err(err) => {
                    error!("render error: {}", err);
                    *control_flow = ControlFlow::ExitWithCode(1);
                    return;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_arrow_keys_pan() {
        assert_eq!(arrow(VirtualKeyCode::Up), Some(Direction::Up));
        assert_eq!(arrow(VirtualKeyCode::Down), Some(Direction::Down));
        assert_eq!(arrow(VirtualKeyCode::Left), Some(Direction::Left));
        assert_eq!(arrow(VirtualKeyCode::Right), Some(Direction::Right));
        assert_eq!(arrow(VirtualKeyCode::S), None);
        assert_eq!(arrow(VirtualKeyCode::Escape), None);
    }

    #[test]
    fn every_notch_counts() {
        assert_eq!(notches(0.0), 0);
        assert_eq!(notches(0.2), 1);
        assert_eq!(notches(1.0), 1);
        assert_eq!(notches(3.0), 3);
        assert_eq!(notches(-2.4), 2);
    }

    #[test]
    fn a_fast_scroll_zooms_once_per_notch() {
        let inputs: Vec<Input> = wheel(10.0, 20.0, -3.0).collect();
        assert_eq!(
            inputs,
            vec![
                Input::Wheel {
                    x: 10.0,
                    y: 20.0,
                    up: false
                };
                3
            ]
        );
        assert_eq!(wheel(10.0, 20.0, 0.0).count(), 0);
    }

    #[test]
    fn setup_failures_pass_through_unchanged() {
        let err = setup_failed(FractalError::Display("no adapter".to_string()));
        assert_eq!(err.to_string(), "Display failure: no adapter");
    }
}
