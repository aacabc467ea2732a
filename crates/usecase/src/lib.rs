//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement the two operations of the tool:
//!
//! - [`selector`]: resolving raw input into a concrete file selection
//! - [`applier`]: rewriting one timestamp attribute across a selection
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod applier;
pub mod selector;

pub use applier::ApplyTimestamps;
pub use selector::SelectFiles;
