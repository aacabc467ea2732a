// crates/shared-kernel/src/value_objects/timestamp.rs
use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// An absolute local timestamp, displayed with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub DateTime<Local>);

impl Timestamp {
    pub fn from_system_time(time: SystemTime) -> Self {
        Self(time.into())
    }

    pub fn system_time(&self) -> SystemTime {
        self.0.into()
    }
}

impl From<DateTime<Local>> for Timestamp {
    fn from(value: DateTime<Local>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}
