use std::path::{Path, PathBuf};

use serde::Deserialize;

use line_ratio_infra::FileReader;
use line_ratio_shared_kernel::{PresentationError, Result};

use crate::{
    args::{Args, Command},
    options::{DEFAULT_INPUT, DEFAULT_TRUNCATE, ReportTarget},
};

/// Settings read from a YAML (or JSON) config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    /// Kept untyped: only a string selects a file sink, anything else means console.
    pub output: Option<serde_yaml::Value>,
    pub target: Option<ReportTarget>,
    pub truncate: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = FileReader::read_to_string(path)?;
        Self::parse(&contents)
            .map_err(|details| PresentationError::ConfigLoad { path: path.to_path_buf(), details }.into())
    }

    fn parse(contents: &str) -> std::result::Result<Self, String> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).map_err(|err| err.to_string())
    }
}

/// Resolved destination for serialized reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Console,
    File(PathBuf),
}

impl OutputSink {
    /// Interpret a configured `output` value.
    ///
    /// Absent, empty or non-string values fall back to the console without an error.
    pub fn from_setting(value: Option<&serde_yaml::Value>) -> Self {
        match value {
            None => Self::Console,
            Some(serde_yaml::Value::String(path)) => Self::from_path(path),
            Some(other) => {
                log::debug!("ignoring non-string output setting {other:?}; reporting to console");
                Self::Console
            }
        }
    }

    /// An empty path means no file sink.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.as_os_str().is_empty() { Self::Console } else { Self::File(path) }
    }
}

/// Fully resolved run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub sink: OutputSink,
    pub target: ReportTarget,
    pub truncate: usize,
    pub command: Command,
}

impl Config {
    /// Load the config file named by `--config`, if any, and merge it under the CLI flags.
    pub fn from_args(args: Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(args, file))
    }

    /// CLI flags win over config file values, which win over defaults.
    pub fn resolve(args: Args, file: FileConfig) -> Self {
        let input = args.input.or(file.input).unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

        let sink = match args.output {
            Some(path) => OutputSink::from_path(path),
            None => OutputSink::from_setting(file.output.as_ref()),
        };

        let target = args.target.or(file.target).unwrap_or(match sink {
            OutputSink::File(_) => ReportTarget::Sink,
            OutputSink::Console => ReportTarget::Console,
        });

        let truncate = match &args.command {
            Command::Author { truncate: Some(width), .. } => *width,
            _ => file.truncate.unwrap_or(DEFAULT_TRUNCATE),
        };

        Self { input, sink, target, truncate, command: args.command }
    }

    /// File that receives the JSON report, or `None` for a console report.
    ///
    /// The console wins when it is the selected target or when no file sink is configured.
    pub fn report_file(&self) -> Option<&Path> {
        match (&self.target, &self.sink) {
            (ReportTarget::Sink, OutputSink::File(path)) => Some(path.as_path()),
            _ => None,
        }
    }
}
