// SPDX-License-Identifier: MPL-2.0
//! Headless host driver.
//!
//! Replays an event script (or stdin) against a controller whose surface
//! prints every directive, then reports the final state and diagnostics.

use image_display::config;
use image_display::controller::ImageLoadController;
use image_display::host::{ConsoleSurface, ScriptEvent};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: image_display [--config-dir DIR] [--script FILE] [--no-autoload]

Reads one JSON event per line from FILE (or stdin):
  {\"type\":\"SETTINGS_UPDATE\",\"settings\":{...}}
  {\"type\":\"LOAD_OK\"} | {\"type\":\"LOAD_ERROR\"}   (optional \"source\")
  {\"type\":\"RELOAD\"}";

struct Flags {
    config_dir: Option<PathBuf>,
    script: Option<PathBuf>,
    autoload: bool,
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        script: args.opt_value_from_str("--script")?,
        autoload: !args.contains("--no-autoload"),
    };
    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let (config, warning) = config::load_with_override(flags.config_dir);
    if let Some(warning) = warning {
        log::warn!("{warning}");
    }

    let input: Box<dyn BufRead> = match &flags.script {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(err) => {
                eprintln!("Cannot open {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut controller = ImageLoadController::new(ConsoleSurface::new(io::stdout()), &config);
    if flags.autoload {
        controller.load_image();
    }

    for (index, line) in input.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("Read error: {err}");
                return ExitCode::FAILURE;
            }
        };
        match ScriptEvent::parse_line(&line) {
            Ok(Some(event)) => match event.into_message(controller.active_source()) {
                Some(message) => controller.handle(message),
                None => log::warn!("line {}: no outstanding request to report on", index + 1),
            },
            Ok(None) => {}
            Err(err) => log::warn!("line {}: {err}", index + 1),
        }
    }

    println!("state: {:?}", controller.state());
    match controller.diagnostics().to_json() {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Diagnostics export failed: {err}"),
    }
    ExitCode::SUCCESS
}
