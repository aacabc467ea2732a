#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod value_objects;

pub use model::{BatchReport, FileFailure, FileSelection, TimestampChange};
pub use value_objects::{NameFilter, PathKind, TargetMoment, TimestampKind};
