// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum RedateError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<RedateError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, RedateError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unrecognized {expected}: '{input}'")]
    InvalidInput {
        input: String,
        expected: &'static str,
    },

    #[error("Invalid filter '{pattern}': {details}")]
    InvalidFilter { pattern: String, details: String },

    #[error("Invalid moment: {details}")]
    InvalidMoment { details: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Cannot resolve '{input}' to an absolute path")]
    PathResolution { input: String },

    #[error("No {expected} found at '{}'", .path.display())]
    NotFound {
        path: PathBuf,
        expected: &'static str,
    },

    #[error("Failed to inspect '{}': {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory '{}': {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read the {field} time of '{}': {source}", .path.display())]
    TimestampRead {
        path: PathBuf,
        field: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to set the {field} time of '{}': {source}", .path.display())]
    TimestampWrite {
        path: PathBuf,
        field: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("The {field} time cannot be set on this platform")]
    UnsupportedField { field: &'static str },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<RedateError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| RedateError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| RedateError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
