// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod timestamps;

pub use filesystem::{FsDirectoryLister, FsPathProbe};
pub use timestamps::FsTimestampStore;
