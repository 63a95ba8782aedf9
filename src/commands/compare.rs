//! Comparison orchestration and console rendering
//!
//! A run moves strictly forward: match the two roots, compare each pair
//! in sorted order, then summarize. A pair that cannot be read is
//! downgraded to an empty-content comparison and reported as different;
//! it never aborts the run.

use crate::areas::session::Session;
use crate::areas::workspace::Workspace;
use crate::artifacts::diff::byte_at::ByteAt;
use crate::artifacts::diff::byte_diff::ByteDiff;
use crate::artifacts::diff::diff_result::{DiffResult, FileMetadata};
use crate::artifacts::matching::file_pair::{FilePair, TreeMatch};
use crate::artifacts::matching::tree_matcher;
use crate::artifacts::render::hex_dump::hex_dump;
use crate::artifacts::render::side_by_side::side_by_side;
use crate::artifacts::report::summary::Summary;
use colored::Colorize;
use std::collections::BTreeSet;
use std::path::Path;

const WIDE_RULE: usize = 120;
const RULE: usize = 80;

/// How many files unique to one side are listed individually.
const UNMATCHED_LISTING_CAP: usize = 10;

/// Cap on rows in the per-byte difference table.
const DIFF_TABLE_CAP: usize = 50;

impl Session {
    /// Run the whole comparison and return the aggregate summary.
    pub fn run(&mut self) -> anyhow::Result<Summary> {
        self.print_banner()?;

        let tree_match = self.match_targets()?;
        self.print_unmatched(&tree_match)?;

        if tree_match.pairs.is_empty() {
            writeln!(self.writer(), "\n{}", "No files to compare!".red())?;
        } else {
            writeln!(
                self.writer(),
                "\n{}",
                format!(
                    "\u{2713} Found {} file(s) to compare",
                    tree_match.pairs.len()
                )
                .green()
            )?;

            for pair in &tree_match.pairs {
                self.compare_pair(pair)?;
            }
        }

        let summary = Summary::from_results(self.results());
        self.print_summary(&summary, &tree_match)?;

        Ok(summary)
    }

    fn match_targets(&self) -> anyhow::Result<TreeMatch> {
        if self.is_file_comparison() {
            Ok(tree_matcher::match_single_files(
                self.target_a().path(),
                self.target_b().path(),
            ))
        } else {
            tree_matcher::match_directory_trees(
                self.workspace_a(),
                self.workspace_b(),
                &self.options().extensions,
                self.options().recursive,
            )
        }
    }

    /// Compare one pair: read both sides fully, diff, render the console
    /// section and append the result. Unreadable sides degrade to empty
    /// content with a visible note.
    pub fn compare_pair(&mut self, pair: &FilePair) -> anyhow::Result<()> {
        writeln!(self.writer(), "\n{}", "=".repeat(RULE))?;
        writeln!(self.writer(), "{}", format!("Comparing: {}", pair.relative_name).bold())?;
        writeln!(self.writer(), "{}", "=".repeat(RULE))?;
        writeln!(self.writer(), "File 1: {}", pair.path_a.display())?;
        writeln!(self.writer(), "File 2: {}", pair.path_b.display())?;

        let metadata_a = self.workspace_a().stat_file(&pair.path_a).ok();
        let metadata_b = self.workspace_b().stat_file(&pair.path_b).ok();
        self.print_file_info("File 1", metadata_a.as_ref())?;
        self.print_file_info("File 2", metadata_b.as_ref())?;

        let (data_a, failed_a) = self.read_side(self.workspace_a(), &pair.path_a, "File 1")?;
        let (data_b, failed_b) = self.read_side(self.workspace_b(), &pair.path_b, "File 2")?;
        let degraded = failed_a || failed_b;

        let diff = ByteDiff::compute(&data_a, &data_b);
        let result = DiffResult::from_comparison(
            pair,
            &data_a,
            &data_b,
            &diff,
            metadata_a,
            metadata_b,
            self.options().max_display_bytes,
            degraded,
        );

        if result.identical {
            writeln!(self.writer(), "\n{}", "\u{2713} Files are IDENTICAL".green())?;
        } else {
            writeln!(self.writer(), "\n{}", "\u{2717} Files are DIFFERENT".red())?;
            self.print_difference_stats(&diff)?;

            if self.options().side_by_side {
                self.print_side_by_side(&data_a, &data_b)?;
            }

            self.print_hex_dumps(pair, &data_a, &data_b, &diff)?;
            self.print_difference_table(&data_a, &data_b, &diff)?;
        }

        self.push_result(result);
        Ok(())
    }

    fn read_side(
        &self,
        workspace: &Workspace,
        path: &Path,
        label: &str,
    ) -> anyhow::Result<(Vec<u8>, bool)> {
        match workspace.read_bytes(path) {
            Ok(data) => Ok((data, false)),
            Err(e) => {
                writeln!(
                    self.writer(),
                    "{}",
                    format!(
                        "\u{26a0} Could not read {label} ({}): {e:#} - treating as empty",
                        path.display()
                    )
                    .yellow()
                )?;
                Ok((Vec::new(), true))
            }
        }
    }

    fn print_file_info(&self, label: &str, metadata: Option<&FileMetadata>) -> anyhow::Result<()> {
        writeln!(self.writer(), "\n{label} Info:")?;
        match metadata {
            Some(meta) => {
                writeln!(
                    self.writer(),
                    "  Size: {} bytes",
                    crate::artifacts::core::group_digits(meta.size)
                )?;
                writeln!(self.writer(), "  Modified: {}", meta.modified)?;
                writeln!(self.writer(), "  Created: {}", meta.created)?;
            }
            None => writeln!(self.writer(), "  (unavailable)")?,
        }
        Ok(())
    }

    fn print_difference_stats(&self, diff: &ByteDiff) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "\nDifferences found: {} bytes",
            crate::artifacts::core::group_digits(diff.difference_count() as u64)
        )?;

        if let Some(offset) = diff.first_difference_offset() {
            writeln!(
                self.writer(),
                "First difference at offset: 0x{offset:08X}"
            )?;
        }
        writeln!(self.writer(), "Similarity: {:.2}%", diff.similarity)?;

        Ok(())
    }

    fn print_side_by_side(&self, data_a: &[u8], data_b: &[u8]) -> anyhow::Result<()> {
        writeln!(self.writer(), "\n{}", "-".repeat(WIDE_RULE))?;
        writeln!(self.writer(), "SIDE-BY-SIDE COMPARISON")?;
        writeln!(self.writer(), "{}", "-".repeat(WIDE_RULE))?;
        writeln!(
            self.writer(),
            "{}",
            side_by_side(
                data_a,
                data_b,
                self.options().max_display_bytes,
                self.options().dump_mode
            )
        )?;
        Ok(())
    }

    fn print_hex_dumps(
        &self,
        pair: &FilePair,
        data_a: &[u8],
        data_b: &[u8],
        diff: &ByteDiff,
    ) -> anyhow::Result<()> {
        let display_size = self
            .options()
            .max_display_bytes
            .min(data_a.len().max(data_b.len()));
        let highlights = diff
            .differing_offsets
            .iter()
            .copied()
            .take_while(|&offset| offset < display_size)
            .collect::<BTreeSet<_>>();
        let mode = self.options().dump_mode;

        for (label, data) in [("File 1", data_a), ("File 2", data_b)] {
            writeln!(self.writer(), "\n{}", "-".repeat(RULE))?;
            writeln!(
                self.writer(),
                "HEX DUMP - {label}: {}",
                pair.relative_name
            )?;
            writeln!(self.writer(), "{}", "-".repeat(RULE))?;
            writeln!(
                self.writer(),
                "{}",
                hex_dump(&data[..data.len().min(display_size)], 0, &highlights, mode)
            )?;
        }

        Ok(())
    }

    fn print_difference_table(
        &self,
        data_a: &[u8],
        data_b: &[u8],
        diff: &ByteDiff,
    ) -> anyhow::Result<()> {
        if diff.differing_offsets.is_empty() {
            return Ok(());
        }

        writeln!(self.writer(), "\n{}", "-".repeat(RULE))?;
        writeln!(
            self.writer(),
            "DETAILED DIFFERENCES (showing up to {DIFF_TABLE_CAP})"
        )?;
        writeln!(self.writer(), "{}", "-".repeat(RULE))?;
        writeln!(
            self.writer(),
            "{:<12} {:<15} {:<15} {:<15} {:<15}",
            "Offset", "File1 (Hex)", "File1 (ASCII)", "File2 (Hex)", "File2 (ASCII)"
        )?;
        writeln!(self.writer(), "{}", "-".repeat(RULE))?;

        for &offset in diff.differing_offsets.iter().take(DIFF_TABLE_CAP) {
            let byte_a = ByteAt::of(data_a, offset);
            let byte_b = ByteAt::of(data_b, offset);

            writeln!(
                self.writer(),
                "0x{offset:08X}   {:<15} {:<15} {:<15} {:<15}",
                byte_a.to_hex(),
                byte_a.to_ascii(),
                byte_b.to_hex(),
                byte_b.to_ascii()
            )?;
        }

        let remaining = diff.difference_count().saturating_sub(DIFF_TABLE_CAP);
        if remaining > 0 {
            writeln!(
                self.writer(),
                "  ... and {} more differing bytes",
                crate::artifacts::core::group_digits(remaining as u64)
            )?;
        }

        Ok(())
    }

    fn print_banner(&self) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", "=".repeat(RULE))?;
        writeln!(self.writer(), "{}", "BINARY FILE COMPARISON TOOL".bold())?;
        writeln!(self.writer(), "{}", "=".repeat(RULE))?;

        if self.is_file_comparison() {
            writeln!(self.writer(), "Mode: FILE COMPARISON")?;
            writeln!(self.writer(), "File 1: {}", self.target_a().path().display())?;
            writeln!(self.writer(), "File 2: {}", self.target_b().path().display())?;
        } else {
            writeln!(self.writer(), "Mode: FOLDER COMPARISON")?;
            writeln!(self.writer(), "Folder 1: {}", self.target_a().path().display())?;
            writeln!(self.writer(), "Folder 2: {}", self.target_b().path().display())?;
            writeln!(self.writer(), "Recursive: {}", self.options().recursive)?;

            let extensions = if self.options().extensions.is_empty() {
                "All files".to_string()
            } else {
                self.options().extensions.suffixes().join(", ")
            };
            writeln!(self.writer(), "Extensions: {extensions}")?;
        }

        Ok(())
    }

    fn print_unmatched(&self, tree_match: &TreeMatch) -> anyhow::Result<()> {
        for (folder, unmatched) in [
            ("Folder 1", &tree_match.only_in_a),
            ("Folder 2", &tree_match.only_in_b),
        ] {
            if unmatched.is_empty() {
                continue;
            }

            writeln!(
                self.writer(),
                "\n{}",
                format!("\u{26a0} Files only in {folder} ({}):", unmatched.len()).yellow()
            )?;
            for name in unmatched.iter().take(UNMATCHED_LISTING_CAP) {
                writeln!(self.writer(), "  - {name}")?;
            }
            if unmatched.len() > UNMATCHED_LISTING_CAP {
                writeln!(
                    self.writer(),
                    "  ... and {} more",
                    unmatched.len() - UNMATCHED_LISTING_CAP
                )?;
            }
        }

        Ok(())
    }

    fn print_summary(&self, summary: &Summary, tree_match: &TreeMatch) -> anyhow::Result<()> {
        writeln!(self.writer(), "\n{}", "=".repeat(RULE))?;
        writeln!(self.writer(), "{}", "SUMMARY".bold())?;
        writeln!(self.writer(), "{}", "=".repeat(RULE))?;

        if self.is_file_comparison() {
            writeln!(self.writer(), "Comparison Mode: FILE")?;
            let verdict = if summary.identical > 0 {
                "\u{2713} IDENTICAL".green()
            } else {
                "\u{2717} DIFFERENT".red()
            };
            writeln!(self.writer(), "Result: {verdict}")?;
        } else {
            writeln!(self.writer(), "Comparison Mode: FOLDER")?;
            writeln!(self.writer(), "Total files compared: {}", summary.total)?;
            writeln!(
                self.writer(),
                "{}",
                format!("\u{2713} Identical files: {}", summary.identical).green()
            )?;
            writeln!(
                self.writer(),
                "{}",
                format!("\u{2717} Different files: {}", summary.different).red()
            )?;
            writeln!(
                self.writer(),
                "Files only in Folder 1: {}",
                tree_match.only_in_a.len()
            )?;
            writeln!(
                self.writer(),
                "Files only in Folder 2: {}",
                tree_match.only_in_b.len()
            )?;
        }

        let degraded = self
            .results()
            .iter()
            .filter(|result| result.degraded)
            .count();
        if degraded > 0 {
            writeln!(
                self.writer(),
                "{}",
                format!("\u{26a0} Pairs with unreadable content: {degraded}").yellow()
            )?;
        }

        if summary.total > 0 {
            writeln!(
                self.writer(),
                "Average similarity: {:.2}%",
                summary.average_similarity
            )?;
        }

        Ok(())
    }
}
