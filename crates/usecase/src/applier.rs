use std::path::Path;

use redate_domain::{
    BatchReport, FileFailure, FileSelection, TargetMoment, TimestampChange, TimestampKind,
};
use redate_ports::timestamps::{TimeField, TimestampStore};
use redate_shared_kernel::{Result, Timestamp};

/// Rewrites one timestamp attribute across a selection, file by file.
pub struct ApplyTimestamps<'a> {
    store: &'a dyn TimestampStore,
}

impl<'a> ApplyTimestamps<'a> {
    pub fn new(store: &'a dyn TimestampStore) -> Self {
        Self { store }
    }

    /// Apply `moment` to every file in the selection.
    ///
    /// Per-file outcomes are collected: a file that fails (removed since
    /// selection, permission denied, unsupported attribute) is recorded
    /// as a failure while the remaining files are still attempted.
    /// Changes already applied are never rolled back.
    ///
    /// # Errors
    /// Fails up front only when `moment` does not resolve to a local
    /// instant; everything after that point is reported per file.
    pub fn apply(
        &self,
        selection: &FileSelection,
        kind: TimestampKind,
        moment: TargetMoment,
    ) -> Result<BatchReport> {
        let value = moment.resolve()?;
        let field = field_for(kind);

        let mut report = BatchReport::default();
        for path in selection.iter() {
            match self.change_one(path, field, value) {
                Ok(change) => report.changes.push(change),
                Err(error) => report.failures.push(FileFailure {
                    path: path.to_path_buf(),
                    error,
                }),
            }
        }
        Ok(report)
    }

    fn change_one(&self, path: &Path, field: TimeField, value: Timestamp) -> Result<TimestampChange> {
        let old = self.store.read(path, field)?;
        self.store.write(path, field, value)?;
        // Re-read instead of assuming: the filesystem may truncate precision.
        let new = self.store.read(path, field)?;
        Ok(TimestampChange {
            path: path.to_path_buf(),
            old,
            new,
        })
    }
}

fn field_for(kind: TimestampKind) -> TimeField {
    match kind {
        TimestampKind::Created => TimeField::Created,
        TimestampKind::Modified => TimeField::Modified,
        TimestampKind::Accessed => TimeField::Accessed,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use chrono::{NaiveDate, NaiveTime, TimeZone};
    use redate_shared_kernel::{InfrastructureError, RedateError};

    use super::*;

    struct StubStore {
        times: Mutex<HashMap<PathBuf, Timestamp>>,
    }

    impl StubStore {
        fn with_files(paths: &[&str]) -> Self {
            let origin = Timestamp(chrono::Local.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap());
            let times = paths
                .iter()
                .map(|p| (PathBuf::from(p), origin))
                .collect();
            Self {
                times: Mutex::new(times),
            }
        }

        fn current(&self, path: &str) -> Timestamp {
            self.times.lock().unwrap()[&PathBuf::from(path)]
        }
    }

    impl TimestampStore for StubStore {
        fn read(&self, path: &Path, field: TimeField) -> Result<Timestamp> {
            self.times
                .lock()
                .unwrap()
                .get(path)
                .copied()
                .ok_or_else(|| {
                    InfrastructureError::TimestampRead {
                        path: path.to_path_buf(),
                        field: field.label(),
                        source: std::io::Error::from(std::io::ErrorKind::NotFound),
                    }
                    .into()
                })
        }

        fn write(&self, path: &Path, field: TimeField, value: Timestamp) -> Result<()> {
            if field == TimeField::Created {
                return Err(InfrastructureError::UnsupportedField {
                    field: field.label(),
                }
                .into());
            }
            match self.times.lock().unwrap().get_mut(path) {
                Some(slot) => {
                    *slot = value;
                    Ok(())
                }
                None => Err(InfrastructureError::TimestampWrite {
                    path: path.to_path_buf(),
                    field: field.label(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                }
                .into()),
            }
        }
    }

    fn moment() -> TargetMoment {
        TargetMoment::new(
            NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
            NaiveTime::from_hms_milli_opt(7, 45, 13, 0).unwrap(),
        )
    }

    #[test]
    fn records_old_and_new_value_per_file() {
        let store = StubStore::with_files(&["/data/a.txt", "/data/b.txt"]);
        let applier = ApplyTimestamps::new(&store);
        let selection = FileSelection::from_unsorted(vec![
            PathBuf::from("/data/a.txt"),
            PathBuf::from("/data/b.txt"),
        ]);

        let report = applier
            .apply(&selection, TimestampKind::Modified, moment())
            .expect("moment resolves");

        assert!(report.is_clean());
        assert_eq!(report.changes.len(), 2);
        for change in &report.changes {
            assert_eq!(change.old.to_string(), "2000-01-01 12:00:00.000");
            assert_eq!(change.new.to_string(), "2023-06-15 07:45:13.000");
        }
    }

    #[test]
    fn a_failing_file_does_not_abort_the_rest() {
        let store = StubStore::with_files(&["/data/a.txt", "/data/c.txt"]);
        let applier = ApplyTimestamps::new(&store);
        // b.txt vanished between selection and mutation.
        let selection = FileSelection::from_unsorted(vec![
            PathBuf::from("/data/a.txt"),
            PathBuf::from("/data/b.txt"),
            PathBuf::from("/data/c.txt"),
        ]);

        let report = applier
            .apply(&selection, TimestampKind::Accessed, moment())
            .expect("moment resolves");

        assert_eq!(report.changes.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, PathBuf::from("/data/b.txt"));
        assert_eq!(report.total(), 3);
        // The survivors were still changed.
        assert_eq!(store.current("/data/a.txt").to_string(), "2023-06-15 07:45:13.000");
        assert_eq!(store.current("/data/c.txt").to_string(), "2023-06-15 07:45:13.000");
    }

    #[test]
    fn unsupported_attribute_is_reported_per_file() {
        let store = StubStore::with_files(&["/data/a.txt"]);
        let applier = ApplyTimestamps::new(&store);
        let selection = FileSelection::single(PathBuf::from("/data/a.txt"));

        let report = applier
            .apply(&selection, TimestampKind::Created, moment())
            .expect("moment resolves");

        assert!(report.changes.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            report.failures[0].error,
            RedateError::Infrastructure(InfrastructureError::UnsupportedField { .. })
        ));
        // The attribute was left untouched.
        assert_eq!(store.current("/data/a.txt").to_string(), "2000-01-01 12:00:00.000");
    }

    #[test]
    fn empty_selection_produces_an_empty_report() {
        let store = StubStore::with_files(&[]);
        let applier = ApplyTimestamps::new(&store);
        let selection = FileSelection::default();

        let report = applier
            .apply(&selection, TimestampKind::Modified, moment())
            .expect("moment resolves");
        assert!(report.is_clean());
        assert_eq!(report.total(), 0);
    }
}
