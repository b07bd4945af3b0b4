use std::process::ExitCode;

use clap::Parser;

mod platform;

fn main() -> ExitCode {
    let args = platform::cli::Args::parse();
    match platform::run_app(args) {
        Ok(outcome) if outcome.succeeded() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("resume_analyzer: {err:#}");
            ExitCode::from(2)
        }
    }
}
