// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;

mod app;
mod cli;
mod presentation;
mod session;

use cli::args::Args;
use cli::config::RunMode;

fn main() -> ExitCode {
    let args = Args::parse();

    match RunMode::from_args(args) {
        Ok(RunMode::Interactive) => session::run_with_stdio(),
        Ok(RunMode::OneShot(config)) => app::run(&config),
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}
