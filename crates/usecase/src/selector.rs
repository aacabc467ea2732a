use std::path::PathBuf;

use redate_domain::{FileSelection, NameFilter, PathKind};
use redate_ports::filesystem::{DirectoryLister, ListingPlan, PathProbe};
use redate_shared_kernel::{InfrastructureError, Result, normalize_raw_path};

/// Resolves raw user input into a concrete, ordered list of files.
pub struct SelectFiles<'a> {
    probe: &'a dyn PathProbe,
    lister: &'a dyn DirectoryLister,
}

impl<'a> SelectFiles<'a> {
    pub fn new(probe: &'a dyn PathProbe, lister: &'a dyn DirectoryLister) -> Self {
        Self { probe, lister }
    }

    /// Normalize `raw` and verify it currently exists as `kind`.
    ///
    /// # Errors
    /// `PathResolution` when the input cannot name a path, `NotFound`
    /// when nothing of the expected kind exists there.
    pub fn resolve(&self, raw: &str, kind: PathKind) -> Result<PathBuf> {
        let path = normalize_raw_path(raw)?;
        let stat = self.probe.probe(&path)?;
        let matches_kind = match kind {
            PathKind::File => stat.is_file,
            PathKind::Directory => stat.is_dir,
        };
        if !matches_kind {
            return Err(InfrastructureError::NotFound {
                path,
                expected: kind.noun(),
            }
            .into());
        }
        Ok(path)
    }

    /// Build the selection for one run.
    ///
    /// For [`PathKind::File`] the filter is ignored and the selection has
    /// exactly one element. For [`PathKind::Directory`] the direct child
    /// files matching `filter` are returned sorted by name; a filter that
    /// matches nothing yields a valid, empty selection.
    pub fn select(&self, raw: &str, kind: PathKind, filter: &str) -> Result<FileSelection> {
        // Validate the pattern before touching the filesystem.
        let filter = NameFilter::new(filter)?;
        let path = self.resolve(raw, kind)?;
        match kind {
            PathKind::File => Ok(FileSelection::single(path)),
            PathKind::Directory => {
                let plan = ListingPlan {
                    dir: path,
                    name_glob: filter.pattern().to_string(),
                };
                let entries = self.lister.list(&plan)?;
                Ok(FileSelection::from_unsorted(
                    entries.into_iter().map(|e| e.path).collect(),
                ))
            }
        }
    }
}
