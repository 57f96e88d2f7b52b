// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! `fractal-mono Julia` or `fractal-mono Mandelbrot`: the black and
//! white explorer, whose constant follows the mouse.

use env_logger::Env;
use fractal::{cli, window, App, Variant};

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = cli::config_or_exit(Variant::Mono);
    // Failures have already been logged.
    if window::run(App::new(Variant::Mono, &config)).is_err() {
        std::process::exit(1);
    }
}
