// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError, RedateError, Result,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use path::{logical_absolute, normalize_raw_path};
pub use value_objects::Timestamp;
