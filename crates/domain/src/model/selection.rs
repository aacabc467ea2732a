use std::path::{Path, PathBuf};

/// An ordered list of absolute paths of regular files chosen for one run.
///
/// Directory listings are sorted by file name so a run is deterministic
/// regardless of filesystem enumeration order. Empty selections are
/// valid: a filter may simply match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    paths: Vec<PathBuf>,
}

impl FileSelection {
    /// Selection holding exactly one file.
    pub fn single(path: PathBuf) -> Self {
        Self { paths: vec![path] }
    }

    /// Build a selection from listing output, sorting by file name.
    pub fn from_unsorted(mut paths: Vec<PathBuf>) -> Self {
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Self { paths }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_unsorted_orders_by_file_name() {
        let selection = FileSelection::from_unsorted(vec![
            PathBuf::from("/data/b.txt"),
            PathBuf::from("/data/ab.txt"),
            PathBuf::from("/data/a.txt"),
        ]);
        let names: Vec<_> = selection
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.txt", "ab.txt", "b.txt"]);
    }

    #[test]
    fn empty_selection_is_valid() {
        let selection = FileSelection::from_unsorted(Vec::new());
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
    }
}
