// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! `fractal Julia` or `fractal Mandelbrot`: the banded explorer.

use env_logger::Env;
use fractal::{cli, window, App, Variant};

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = cli::config_or_exit(Variant::Banded);
    // Failures have already been logged.
    if window::run(App::new(Variant::Banded, &config)).is_err() {
        std::process::exit(1);
    }
}
