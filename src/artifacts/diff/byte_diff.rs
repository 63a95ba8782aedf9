//! Positional byte differ
//!
//! A deliberately simple O(max(len)) single pass: offsets are compared
//! position by position, with no alignment and no edit distance. A byte
//! against end-of-data always counts as a difference, so a truncated file
//! reports every trailing offset of the longer side.

use crate::artifacts::diff::byte_at::ByteAt;

/// Outcome of comparing two byte sequences in full.
#[derive(Debug, Clone, PartialEq)]
pub struct ByteDiff {
    pub identical: bool,
    /// Byte offsets where the sequences disagree, in ascending order.
    pub differing_offsets: Vec<usize>,
    /// Percentage of agreeing positions out of the longer length,
    /// in `[0.0, 100.0]`. Two empty sequences score `100.0`.
    pub similarity: f64,
}

impl ByteDiff {
    pub fn compute(a: &[u8], b: &[u8]) -> Self {
        // Byte-for-byte equality (including equal length) short-circuits
        // the scan. This also settles the empty-vs-empty case at 100%.
        if a == b {
            return ByteDiff {
                identical: true,
                differing_offsets: Vec::new(),
                similarity: 100.0,
            };
        }

        let max_len = a.len().max(b.len());
        let differing_offsets = (0..max_len)
            .filter(|&offset| ByteAt::of(a, offset) != ByteAt::of(b, offset))
            .collect::<Vec<_>>();

        let similarity =
            (max_len - differing_offsets.len()) as f64 / max_len as f64 * 100.0;

        ByteDiff {
            identical: false,
            differing_offsets,
            similarity,
        }
    }

    pub fn first_difference_offset(&self) -> Option<usize> {
        self.differing_offsets.first().copied()
    }

    pub fn difference_count(&self) -> usize {
        self.differing_offsets.len()
    }
}
