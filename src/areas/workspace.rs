use crate::artifacts::diff::diff_result::FileMetadata;
use crate::artifacts::matching::extension_filter::ExtensionFilter;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File system operations scoped to one comparison root.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Enumerate files under the root, keyed by forward-slash relative
    /// path. `BTreeMap` keeps the enumeration lexicographically sorted.
    pub fn list_files(
        &self,
        recursive: bool,
        filter: &ExtensionFilter,
    ) -> anyhow::Result<BTreeMap<String, PathBuf>> {
        let mut walker = WalkDir::new(&self.path);
        if !recursive {
            walker = walker.max_depth(1);
        }

        let mut files = BTreeMap::new();
        for entry in walker {
            let entry =
                entry.with_context(|| format!("Failed to scan folder: {:?}", self.path))?;

            if !entry.file_type().is_file() || !filter.accepts(entry.path()) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(self.path.as_ref())
                .with_context(|| format!("File outside of root: {:?}", entry.path()))?;
            files.insert(relative_name(relative), entry.path().to_path_buf());
        }

        Ok(files)
    }

    pub fn read_bytes(&self, path: &Path) -> anyhow::Result<Vec<u8>> {
        std::fs::read(path).with_context(|| format!("Failed to read file: {path:?}"))
    }

    pub fn stat_file(&self, path: &Path) -> anyhow::Result<FileMetadata> {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Failed to stat file: {path:?}"))?;

        Ok(FileMetadata::from_fs(&metadata))
    }
}

// Relative paths are compared across the two roots, so the platform
// separator is normalized to forward slashes.
fn relative_name(relative: &Path) -> String {
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::Workspace;
    use crate::artifacts::matching::extension_filter::ExtensionFilter;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteBin, PathChild};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn lists_files_sorted_by_relative_path() {
        let dir = TempDir::new().unwrap();
        dir.child("z.bin").write_binary(b"z").unwrap();
        dir.child("a/inner.bin").write_binary(b"i").unwrap();
        dir.child("m.bin").write_binary(b"m").unwrap();

        let workspace = Workspace::new(dir.path().to_path_buf().into_boxed_path());
        let files = workspace
            .list_files(true, &ExtensionFilter::default())
            .unwrap();

        let names = files.keys().cloned().collect::<Vec<_>>();
        assert_eq!(names, vec!["a/inner.bin", "m.bin", "z.bin"]);
    }

    #[rstest]
    fn read_bytes_round_trips_binary_content() {
        let dir = TempDir::new().unwrap();
        let payload = [0x00u8, 0xFF, 0x7F, 0x80];
        dir.child("raw.bin").write_binary(&payload).unwrap();

        let workspace = Workspace::new(dir.path().to_path_buf().into_boxed_path());
        let data = workspace.read_bytes(dir.child("raw.bin").path()).unwrap();

        assert_eq!(data, payload);
    }

    #[rstest]
    fn stat_reports_size_and_timestamps() {
        let dir = TempDir::new().unwrap();
        dir.child("sized.bin").write_binary(&[0u8; 42]).unwrap();

        let workspace = Workspace::new(dir.path().to_path_buf().into_boxed_path());
        let metadata = workspace.stat_file(dir.child("sized.bin").path()).unwrap();

        assert_eq!(metadata.size, 42);
        assert!(!metadata.modified.is_empty());
    }

    #[rstest]
    fn read_failure_is_an_error_not_a_panic() {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::new(dir.path().to_path_buf().into_boxed_path());

        let result = workspace.read_bytes(dir.child("missing.bin").path());

        assert!(result.is_err());
    }
}
