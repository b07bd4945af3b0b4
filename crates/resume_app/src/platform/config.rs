use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use resume_engine::SubmitSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cli::Args;
use super::logging::LogDestination;

pub const DEFAULT_CONFIG_FILENAME: &str = "resume_analyzer.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Optional settings file. Every field may be left out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub log: Option<LogDestination>,
}

/// Settings after CLI flags, config file and defaults are merged, in that
/// order of precedence.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub submit: SubmitSettings,
    pub log: LogDestination,
    pub source: Option<PathBuf>,
}

/// Loads the config file named by `explicit`, or the default file in `dir`.
///
/// A missing default file means "use defaults"; a missing explicit file is an
/// error.
pub fn load_file_config(
    explicit: Option<&Path>,
    dir: &Path,
) -> Result<(FileConfig, Option<PathBuf>), ConfigError> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (dir.join(DEFAULT_CONFIG_FILENAME), false),
    };

    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
            return Ok((FileConfig::default(), None));
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    let config = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.clone(),
        message: err.to_string(),
    })?;
    Ok((config, Some(path)))
}

pub fn resolve(args: &Args, file: FileConfig, source: Option<PathBuf>) -> ResolvedConfig {
    let mut submit = SubmitSettings::default();
    if let Some(base_url) = args.base_url.clone().or(file.base_url) {
        submit.base_url = base_url;
    }
    if let Some(secs) = file.connect_timeout_secs {
        submit.connect_timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = file.request_timeout_secs {
        submit.request_timeout = Duration::from_secs(secs);
    }

    ResolvedConfig {
        submit,
        log: args.log.or(file.log).unwrap_or_default(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["resume_analyzer"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn missing_default_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let (config, source) = load_file_config(None, temp.path()).unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(source.is_none());

        let resolved = resolve(&args(&[]), config, source);
        assert_eq!(resolved.submit.base_url, resume_engine::DEFAULT_BASE_URL);
        assert_eq!(resolved.log, LogDestination::File);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.ron");
        let err = load_file_config(Some(&path), temp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn file_values_apply_and_cli_overrides_them() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(DEFAULT_CONFIG_FILENAME),
            r#"(base_url: Some("http://analysis.local:8000"), request_timeout_secs: Some(5), log: Some(both))"#,
        )
        .unwrap();

        let (config, source) = load_file_config(None, temp.path()).unwrap();
        let resolved = resolve(&args(&[]), config.clone(), source.clone());
        assert_eq!(resolved.submit.base_url, "http://analysis.local:8000");
        assert_eq!(resolved.submit.request_timeout, Duration::from_secs(5));
        assert_eq!(resolved.log, LogDestination::Both);
        assert!(resolved.source.is_some());

        let resolved = resolve(
            &args(&["--base-url", "http://other:9000", "--log", "terminal"]),
            config,
            source,
        );
        assert_eq!(resolved.submit.base_url, "http://other:9000");
        assert_eq!(resolved.log, LogDestination::Terminal);
    }

    #[test]
    fn malformed_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.ron");
        fs::write(&path, "(base_url: 42").unwrap();
        let err = load_file_config(Some(&path), temp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
