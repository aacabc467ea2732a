// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use redate_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// What a path currently resolves to on disk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PathStat {
    pub exists: bool,
    pub is_file: bool,
    pub is_dir: bool,
}

impl PathStat {
    pub fn missing() -> Self {
        Self {
            exists: false,
            is_file: false,
            is_dir: false,
        }
    }
}

/// Input parameters controlling one directory listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingPlan {
    pub dir: PathBuf,
    /// Glob applied to plain file names; `*` lists everything.
    pub name_glob: String,
}

/// DTO representing a regular file discovered by a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntryDto {
    pub path: PathBuf,
    pub name: String,
}

/// Port probing what kind of object a path points at.
pub trait PathProbe: Send + Sync {
    fn probe(&self, path: &Path) -> Result<PathStat>;
}

/// Port enumerating the direct regular files of a directory.
///
/// Listings never recurse: subdirectories and their contents are not
/// reported, and directory entries themselves are never included.
pub trait DirectoryLister: Send + Sync {
    fn list(&self, plan: &ListingPlan) -> Result<Vec<FileEntryDto>>;
}
