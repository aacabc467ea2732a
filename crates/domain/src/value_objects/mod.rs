pub mod name_filter;
pub mod path_kind;
pub mod target_moment;
pub mod timestamp_kind;

pub use name_filter::NameFilter;
pub use path_kind::PathKind;
pub use target_moment::TargetMoment;
pub use timestamp_kind::TimestampKind;
