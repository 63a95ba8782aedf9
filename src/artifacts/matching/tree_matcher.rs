use crate::areas::workspace::Workspace;
use crate::artifacts::matching::extension_filter::ExtensionFilter;
use crate::artifacts::matching::file_pair::{FilePair, TreeMatch};
use std::path::Path;

/// Match two single files: exactly one pair, named after the first
/// file's base name, and nothing unique on either side.
pub fn match_single_files(path_a: &Path, path_b: &Path) -> TreeMatch {
    let relative_name = path_a
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    TreeMatch {
        pairs: vec![FilePair::new(
            relative_name,
            path_a.to_path_buf(),
            path_b.to_path_buf(),
        )],
        only_in_a: Vec::new(),
        only_in_b: Vec::new(),
    }
}

/// Match two folder trees by relative path.
///
/// Both roots are enumerated (recursively or top-level only), the
/// extension filter is applied during the scan, and the relative path
/// sets are intersected. `BTreeMap` enumeration keeps every output list
/// in lexicographic order without an extra sort.
pub fn match_directory_trees(
    workspace_a: &Workspace,
    workspace_b: &Workspace,
    filter: &ExtensionFilter,
    recursive: bool,
) -> anyhow::Result<TreeMatch> {
    let files_a = workspace_a.list_files(recursive, filter)?;
    let files_b = workspace_b.list_files(recursive, filter)?;

    let pairs = files_a
        .iter()
        .filter_map(|(relative, path_a)| {
            files_b
                .get(relative)
                .map(|path_b| FilePair::new(relative.clone(), path_a.clone(), path_b.clone()))
        })
        .collect::<Vec<_>>();

    let only_in_a = files_a
        .keys()
        .filter(|relative| !files_b.contains_key(*relative))
        .cloned()
        .collect::<Vec<_>>();

    let only_in_b = files_b
        .keys()
        .filter(|relative| !files_a.contains_key(*relative))
        .cloned()
        .collect::<Vec<_>>();

    Ok(TreeMatch {
        pairs,
        only_in_a,
        only_in_b,
    })
}
