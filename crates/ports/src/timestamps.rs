// crates/ports/src/timestamps.rs
use std::path::Path;

use redate_shared_kernel::{Result, Timestamp};
use serde::{Deserialize, Serialize};

/// Which OS-tracked time attribute a store call touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeField {
    Created,
    Modified,
    Accessed,
}

impl TimeField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Modified => "modified",
            Self::Accessed => "accessed",
        }
    }
}

/// Port reading and writing one time attribute of a file.
pub trait TimestampStore: Send + Sync {
    fn read(&self, path: &Path, field: TimeField) -> Result<Timestamp>;
    fn write(&self, path: &Path, field: TimeField, value: Timestamp) -> Result<()>;
}
