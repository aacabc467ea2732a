pub mod change;
pub mod selection;

pub use change::{BatchReport, FileFailure, TimestampChange};
pub use selection::FileSelection;
