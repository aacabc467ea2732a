use std::fmt;
use std::io;
use std::process::ExitCode;

use redate_domain::PathKind;
use redate_infra::{FsDirectoryLister, FsPathProbe, FsTimestampStore};
use redate_ports::filesystem::PathProbe;
use redate_shared_kernel::{RedateError, normalize_raw_path};
use redate_usecase::{ApplyTimestamps, SelectFiles};

use crate::cli::args::OutputFormat;
use crate::cli::config::{Action, OneShotConfig};
use crate::presentation;

/// Everything that can stop a run: a core failure or broken output.
#[derive(Debug)]
pub enum RunError {
    Core(RedateError),
    Io(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Core(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RedateError> for RunError {
    fn from(err: RedateError) -> Self {
        Self::Core(err)
    }
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Execute one non-interactive invocation.
pub fn run(config: &OneShotConfig) -> ExitCode {
    match execute(config) {
        Ok(clean) if clean => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn execute(config: &OneShotConfig) -> Result<bool, RunError> {
    let probe = FsPathProbe::new();
    let lister = FsDirectoryLister::new();
    let selector = SelectFiles::new(&probe, &lister);

    let kind = match config.kind {
        Some(kind) => kind,
        None => infer_kind(&probe, &config.raw_path)?,
    };
    let selection = selector.select(&config.raw_path, kind, &config.filter)?;

    let mut stdout = io::stdout().lock();
    match &config.action {
        Action::Preview => {
            match config.format {
                OutputFormat::Text => presentation::write_selection(&mut stdout, &selection)?,
                OutputFormat::Json => presentation::write_json_selection(&mut stdout, &selection)?,
            }
            Ok(true)
        }
        Action::Apply { kind, moment } => {
            let store = FsTimestampStore::new();
            let applier = ApplyTimestamps::new(&store);
            let report = applier.apply(&selection, *kind, *moment)?;
            match config.format {
                OutputFormat::Text => presentation::write_report(&mut stdout, &report)?,
                OutputFormat::Json => presentation::write_json_report(&mut stdout, &report)?,
            }
            Ok(report.is_clean())
        }
    }
}

/// Without `--kind`, interpret the path the way the filesystem sees it:
/// an existing directory enumerates, anything else is treated as a file.
fn infer_kind(probe: &dyn PathProbe, raw: &str) -> Result<PathKind, RedateError> {
    let path = normalize_raw_path(raw)?;
    let stat = probe.probe(&path)?;
    Ok(if stat.is_dir {
        PathKind::Directory
    } else {
        PathKind::File
    })
}
