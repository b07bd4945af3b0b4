//! Terminal front end: wiring between CLI, controller, engine and display.
mod app;
pub mod cli;
mod config;
mod effects;
mod logging;
mod ui;

pub use app::{run_app, RunOutcome};
