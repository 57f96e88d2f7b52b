// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command line handling shared by both programs.
//!
//! Each program takes exactly one fractal name.  Getting the count
//! wrong is fatal (status 1); getting the name wrong prints the same
//! hint but is treated as a clean exit.

use clap::{App, Arg, ArgMatches};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use crate::errors::FractalError;
use crate::kinds::{Fractal, Variant, AVAILABLE_FRACTALS};

const FRACTAL: &str = "fractal";
const THREADS: &str = "threads";
const SCREENSHOTS: &str = "screenshots";

/// What the user asked for.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Which fractal to draw.
    pub fractal: Fractal,
    /// How many threads to render with; 1 renders on the event thread.
    pub threads: usize,
    /// Where screenshots go, if not the desktop.
    pub screenshots: Option<PathBuf>,
}

// Thread counts run from 1 up to the number of cores.
fn validate_threads(s: &str, max: usize) -> Result<(), String> {
    match usize::from_str(s) {
        Ok(n) if n >= 1 && n <= max => Ok(()),
        Ok(_) => Err(format!("Thread count must be between 1 and {}", max)),
        Err(_) => Err("Could not parse thread count".to_string()),
    }
}

fn app<'a, 'b>(variant: Variant) -> App<'a, 'b> {
    let max_threads = num_cpus::get();

    let (name, about) = match variant {
        Variant::Banded => ("fractal", "Julia and Mandelbrot explorer"),
        Variant::Mono => ("fractal-mono", "Black and white Julia and Mandelbrot explorer"),
    };

    let app = App::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
        .after_help(AVAILABLE_FRACTALS)
        .arg(
            Arg::with_name(FRACTAL)
                .required(false)
                .multiple(true)
                .help("The fractal to draw: Julia or Mandelbrot"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| validate_threads(&s, max_threads))
                .help("Number of threads to render with"),
        );

    if variant.screenshots() {
        app.arg(
            Arg::with_name(SCREENSHOTS)
                .required(false)
                .long(SCREENSHOTS)
                .short("s")
                .takes_value(true)
                .help("Directory to save screenshots in (default: the desktop)"),
        )
    } else {
        app
    }
}

fn config(matches: &ArgMatches) -> Result<Config, FractalError> {
    let names: Vec<&str> = matches
        .values_of(FRACTAL)
        .map(|values| values.collect())
        .unwrap_or_default();
    if names.len() != 1 {
        return Err(FractalError::BadArguments);
    }
    let fractal = Fractal::from_str(names[0])?;
    // Already validated by clap.
    let threads = matches
        .value_of(THREADS)
        .and_then(|s| usize::from_str(s).ok())
        .unwrap_or(1);
    Ok(Config {
        fractal,
        threads,
        screenshots: matches.value_of(SCREENSHOTS).map(PathBuf::from),
    })
}

/// Parses a full argument list, program name first.
pub fn parse_from<I, T>(variant: Variant, args: I) -> Result<Config, FractalError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = app(variant)
        .get_matches_from_safe(args)
        .map_err(FractalError::Usage)?;
    config(&matches)
}

/// Parses the process arguments.  Anything other than a usable
/// configuration ends the process here, with the messages and exit
/// status each mistake calls for.
pub fn config_or_exit(variant: Variant) -> Config {
    match parse_from(variant, std::env::args_os()) {
        Ok(config) => config,
        Err(FractalError::Usage(e)) => e.exit(),
        Err(e @ FractalError::BadArguments) => {
            println!("{}", e);
            println!("{}", AVAILABLE_FRACTALS);
            process::exit(1);
        }
        Err(e) => {
            println!("{}", e);
            println!("{}", AVAILABLE_FRACTALS);
            process::exit(0);
        }
    }
}
