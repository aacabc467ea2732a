use chrono::NaiveTime;
use redate_domain::{PathKind, TargetMoment, TimestampKind};

use crate::cli::args::{Args, OutputFormat};

/// What one non-interactive invocation should do.
#[derive(Debug)]
pub struct OneShotConfig {
    pub raw_path: String,
    /// `None` means: infer from what the path points at.
    pub kind: Option<PathKind>,
    pub filter: String,
    pub action: Action,
    pub format: OutputFormat,
}

#[derive(Debug)]
pub enum Action {
    /// List the selection, mutate nothing.
    Preview,
    /// Apply one timestamp change across the selection.
    Apply {
        kind: TimestampKind,
        moment: TargetMoment,
    },
}

#[derive(Debug)]
pub enum RunMode {
    Interactive,
    OneShot(OneShotConfig),
}

impl RunMode {
    /// Decide what to run from parsed arguments.
    ///
    /// # Errors
    /// Returns a usage message when flags are combined in a way that
    /// cannot be executed.
    pub fn from_args(args: Args) -> Result<Self, String> {
        if args.interactive {
            return Ok(Self::Interactive);
        }
        let Some(raw_path) = args.path else {
            if args.set.is_some() || args.date.is_some() || args.dry_run {
                return Err("PATH is required unless running interactively".to_string());
            }
            return Ok(Self::Interactive);
        };

        let action = if args.dry_run {
            Action::Preview
        } else {
            let set = args
                .set
                .ok_or_else(|| "--set is required unless --dry-run is given".to_string())?;
            let date = args
                .date
                .ok_or_else(|| "--date is required unless --dry-run is given".to_string())?;
            let time = args.time.map_or(NaiveTime::MIN, |t| t.0);
            Action::Apply {
                kind: set.into(),
                moment: TargetMoment::new(date.0, time),
            }
        };

        Ok(Self::OneShot(OneShotConfig {
            raw_path,
            kind: args.kind.map(Into::into),
            filter: args.filter,
            action,
            format: args.format,
        }))
    }
}
