use derive_new::new;
use std::path::PathBuf;

/// A file present under the same relative path in both compared roots.
///
/// The relative name (forward-slash separated) is the pair's identity;
/// the two absolute paths point at the concrete files to read. Pairs are
/// created by the tree matcher and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FilePair {
    pub relative_name: String,
    pub path_a: PathBuf,
    pub path_b: PathBuf,
}

/// Outcome of matching two roots: the pairs to compare plus the relative
/// paths found on only one side. All three lists are sorted
/// lexicographically for deterministic reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeMatch {
    pub pairs: Vec<FilePair>,
    pub only_in_a: Vec<String>,
    pub only_in_b: Vec<String>,
}
