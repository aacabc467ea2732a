use std::path::PathBuf;

use redate_shared_kernel::{RedateError, Timestamp};
use serde::Serialize;

/// Before/after record for one successfully changed file.
///
/// `new` is re-read from disk after the write, so it reflects whatever
/// precision the filesystem actually stored.
#[derive(Debug, Clone, Serialize)]
pub struct TimestampChange {
    pub path: PathBuf,
    pub old: Timestamp,
    pub new: Timestamp,
}

/// One file that could not be changed.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: RedateError,
}

/// Per-file outcomes of one batch.
///
/// A failure never voids changes already applied to earlier files and
/// never stops later files from being attempted.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub changes: Vec<TimestampChange>,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.changes.len() + self.failures.len()
    }
}
