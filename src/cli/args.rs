use clap::{Parser, ValueEnum};
use redate_domain::{PathKind, TimestampKind};

use crate::cli::parsers::{DateArg, TimeArg};

#[derive(Parser, Debug)]
#[command(name = "redate", version)]
#[command(about = "Change file creation/modification/access timestamps")]
pub struct Args {
    /// File or directory to operate on; omit to start the interactive session
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Timestamp attribute to change
    #[arg(long, value_enum, value_name = "ATTRIBUTE")]
    pub set: Option<FieldArg>,

    /// New local calendar date, e.g. 2023-06-15
    #[arg(long, value_name = "DATE")]
    pub date: Option<DateArg>,

    /// New local time of day, e.g. 07:45:13.000; defaults to midnight
    #[arg(long, value_name = "TIME")]
    pub time: Option<TimeArg>,

    /// Treat PATH as a file or a directory instead of inferring it
    #[arg(long, value_enum, value_name = "KIND")]
    pub kind: Option<KindArg>,

    /// File-name filter for directories: name*, *name*, an exact name or *
    #[arg(long, default_value = "*", value_name = "PATTERN")]
    pub filter: String,

    /// List the selection without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for the change report
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Run the interactive session
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    File,
    Directory,
}

impl From<KindArg> for PathKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::File => Self::File,
            KindArg::Directory => Self::Directory,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FieldArg {
    Created,
    Modified,
    Accessed,
}

impl From<FieldArg> for TimestampKind {
    fn from(value: FieldArg) -> Self {
        match value {
            FieldArg::Created => Self::Created,
            FieldArg::Modified => Self::Modified,
            FieldArg::Accessed => Self::Accessed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
