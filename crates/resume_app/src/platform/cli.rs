use std::path::PathBuf;

use clap::Parser;

use super::logging::LogDestination;

/// Submit a PDF resume to the analysis service and print the results.
#[derive(Debug, Parser)]
#[command(name = "resume_analyzer", version)]
pub struct Args {
    /// PDF file to analyze. Omitting it reproduces the "no file" path.
    pub file: Option<PathBuf>,

    /// Email to send along with the resume.
    #[arg(long, default_value = "")]
    pub email: String,

    /// Base URL of the analysis service; `/analyze` is appended.
    #[arg(long)]
    pub base_url: Option<String>,

    /// RON config file (defaults to ./resume_analyzer.ron when present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where log output goes.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
}
