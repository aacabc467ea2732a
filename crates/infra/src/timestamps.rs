// crates/infra/src/timestamps.rs
use std::path::Path;

use filetime::FileTime;
use redate_ports::timestamps::{TimeField, TimestampStore};
use redate_shared_kernel::{InfrastructureError, Result, Timestamp};

/// `std::fs` + `filetime` adapter for file time attributes.
///
/// Creation time is read-only here: no portable API can set it (the
/// ecosystem crates `filetime` and `fs-set-times` both omit it), so a
/// write to it fails with a typed unsupported-field error and the read
/// surfaces whatever the OS reports.
#[derive(Debug, Default)]
pub struct FsTimestampStore;

impl FsTimestampStore {
    pub fn new() -> Self {
        Self
    }
}

impl TimestampStore for FsTimestampStore {
    fn read(&self, path: &Path, field: TimeField) -> Result<Timestamp> {
        let read_error = |source| InfrastructureError::TimestampRead {
            path: path.to_path_buf(),
            field: field.label(),
            source,
        };

        let meta = std::fs::metadata(path).map_err(read_error)?;
        let time = match field {
            TimeField::Created => meta.created(),
            TimeField::Modified => meta.modified(),
            TimeField::Accessed => meta.accessed(),
        }
        .map_err(read_error)?;
        Ok(Timestamp::from_system_time(time))
    }

    fn write(&self, path: &Path, field: TimeField, value: Timestamp) -> Result<()> {
        let stamp = FileTime::from_system_time(value.system_time());
        let outcome = match field {
            TimeField::Created => {
                return Err(InfrastructureError::UnsupportedField {
                    field: field.label(),
                }
                .into());
            }
            TimeField::Modified => filetime::set_file_mtime(path, stamp),
            TimeField::Accessed => filetime::set_file_atime(path, stamp),
        };
        outcome.map_err(|source| InfrastructureError::TimestampWrite {
            path: path.to_path_buf(),
            field: field.label(),
            source,
        })?;
        Ok(())
    }
}
