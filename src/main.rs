mod app;
mod camera;
mod components;
mod config;
mod error;
mod image_pipeline;
mod message;
mod model;
mod service;
mod utils;
mod views;

use std::process::ExitCode;

fn main() -> ExitCode {
    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
