//! Per-pair comparison record
//!
//! One `DiffResult` is appended to the session for every compared file
//! pair. The full file contents are dropped once a pair has been rendered
//! to the console; only the truncated display buffers survive for the
//! HTML report, so memory stays bounded by the largest single pair.

use crate::artifacts::diff::byte_diff::ByteDiff;
use crate::artifacts::matching::file_pair::FilePair;
use bytes::Bytes;
use std::path::PathBuf;

/// File metadata shown alongside a comparison: size plus formatted
/// modification and creation timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub size: u64,
    pub modified: String,
    pub created: String,
}

impl FileMetadata {
    pub fn from_fs(metadata: &std::fs::Metadata) -> Self {
        FileMetadata {
            size: metadata.len(),
            modified: format_timestamp(metadata.modified().ok()),
            created: format_timestamp(metadata.created().ok()),
        }
    }
}

// Creation time is unavailable on some filesystems; render a dash
// rather than failing the whole stat.
fn format_timestamp(time: Option<std::time::SystemTime>) -> String {
    match time {
        Some(time) => chrono::DateTime::<chrono::Local>::from(time)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "-".to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct DiffResult {
    pub relative_name: String,
    pub path_a: PathBuf,
    pub path_b: PathBuf,
    pub size_a: u64,
    pub size_b: u64,
    pub metadata_a: Option<FileMetadata>,
    pub metadata_b: Option<FileMetadata>,
    pub identical: bool,
    pub difference_count: usize,
    pub first_difference_offset: Option<usize>,
    pub similarity: f64,
    /// Leading bytes of each side, capped at the configured display window.
    pub display_a: Bytes,
    pub display_b: Bytes,
    /// Differing offsets that fall inside the display window.
    pub display_positions: Vec<usize>,
    /// Set when a side could not be read and was compared as empty.
    pub degraded: bool,
}

impl DiffResult {
    pub fn from_comparison(
        pair: &FilePair,
        data_a: &[u8],
        data_b: &[u8],
        diff: &ByteDiff,
        metadata_a: Option<FileMetadata>,
        metadata_b: Option<FileMetadata>,
        max_display_bytes: usize,
        degraded: bool,
    ) -> Self {
        let display_positions = diff
            .differing_offsets
            .iter()
            .copied()
            .take_while(|&offset| offset < max_display_bytes)
            .collect::<Vec<_>>();

        DiffResult {
            relative_name: pair.relative_name.clone(),
            path_a: pair.path_a.clone(),
            path_b: pair.path_b.clone(),
            size_a: data_a.len() as u64,
            size_b: data_b.len() as u64,
            metadata_a,
            metadata_b,
            // A degraded pair is never reported identical: one side was
            // substituted with empty content, so equality is meaningless.
            identical: diff.identical && !degraded,
            difference_count: diff.difference_count(),
            first_difference_offset: diff.first_difference_offset(),
            similarity: diff.similarity,
            display_a: Bytes::copy_from_slice(&data_a[..data_a.len().min(max_display_bytes)]),
            display_b: Bytes::copy_from_slice(&data_b[..data_b.len().min(max_display_bytes)]),
            display_positions,
            degraded,
        }
    }
}
