// crates/infra/src/filesystem.rs
use std::path::Path;

use redate_domain::NameFilter;
use redate_ports::filesystem::{DirectoryLister, FileEntryDto, ListingPlan, PathProbe, PathStat};
use redate_shared_kernel::{InfrastructureError, Result};

/// `std::fs` adapter implementing the probe port.
///
/// Symlinks are followed, so a link pointing at a regular file counts as
/// a file, the same interpretation `std::fs::metadata` applies.
#[derive(Debug, Default)]
pub struct FsPathProbe;

impl FsPathProbe {
    pub fn new() -> Self {
        Self
    }
}

impl PathProbe for FsPathProbe {
    fn probe(&self, path: &Path) -> Result<PathStat> {
        match std::fs::metadata(path) {
            Ok(meta) => Ok(PathStat {
                exists: true,
                is_file: meta.is_file(),
                is_dir: meta.is_dir(),
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(PathStat::missing()),
            Err(source) => Err(InfrastructureError::Metadata {
                path: path.to_path_buf(),
                source,
            }
            .into()),
        }
    }
}

/// `read_dir`-based listing of the direct regular files of a directory.
///
/// Subdirectories are never descended into. Symlinked entries are
/// skipped: a listing reports only what can safely be mutated in place.
#[derive(Debug, Default)]
pub struct FsDirectoryLister;

impl FsDirectoryLister {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for FsDirectoryLister {
    fn list(&self, plan: &ListingPlan) -> Result<Vec<FileEntryDto>> {
        let filter = NameFilter::new(&plan.name_glob)?;
        let dir_error = |source| InfrastructureError::DirectoryRead {
            path: plan.dir.clone(),
            source,
        };

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&plan.dir).map_err(dir_error)? {
            let entry = entry.map_err(dir_error)?;
            let file_type = entry.file_type().map_err(dir_error)?;
            if !file_type.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if !filter.matches(&name) {
                continue;
            }
            entries.push(FileEntryDto {
                path: entry.path(),
                name,
            });
        }
        Ok(entries)
    }
}
