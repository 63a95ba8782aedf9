//! HTML report generation
//!
//! Builds the placeholder map from the accumulated results and writes a
//! single self-contained document. The template collaborator guarantees
//! a template string exists by the time rendering starts; placeholders
//! it does not know about are left untouched.

use crate::areas::session::Session;
use crate::areas::template::TemplateEngine;
use crate::artifacts::report::{html, summary::Summary};
use anyhow::Context;
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::PathBuf;

impl Session {
    pub fn generate_html_report(&self) -> anyhow::Result<PathBuf> {
        writeln!(self.writer(), "\nGenerating HTML report...")?;

        let template_path = &self.options().template_path;
        if !template_path.exists() {
            writeln!(
                self.writer(),
                "{}",
                format!(
                    "\u{26a0} Template file {:?} not found, creating default template",
                    template_path
                )
                .yellow()
            )?;
        }
        let engine = TemplateEngine::load(template_path)?;

        let document = engine.render(&self.placeholder_values());
        let output_path = self.options().html_output.clone();
        std::fs::write(&output_path, document)
            .with_context(|| format!("Failed to write HTML report: {output_path:?}"))?;

        writeln!(
            self.writer(),
            "{}",
            format!("\u{2713} HTML report generated: {}", output_path.display()).green()
        )?;

        Ok(output_path)
    }

    fn placeholder_values(&self) -> BTreeMap<&'static str, String> {
        let file_mode = self.is_file_comparison();
        let summary = Summary::from_results(self.results());

        let comparison_type = if file_mode {
            "File Comparison"
        } else {
            "Folder Comparison"
        };
        let badge_class = if file_mode { "badge-file" } else { "badge-folder" };
        let comparison_mode = if file_mode {
            "FILE COMPARISON"
        } else {
            "FOLDER COMPARISON"
        };
        let section_title = if file_mode {
            "File Comparison"
        } else {
            "File Comparisons"
        };

        let extensions_info = if file_mode {
            String::new()
        } else {
            html::extensions_block(&self.options().extensions)
        };

        let file_comparisons = self
            .results()
            .iter()
            .enumerate()
            .map(|(index, result)| html::comparison_block(result, index))
            .collect::<String>();

        BTreeMap::from([
            ("COMPARISON_TYPE", comparison_type.to_string()),
            ("BADGE_CLASS", badge_class.to_string()),
            ("COMPARISON_MODE", comparison_mode.to_string()),
            (
                "PATH_INFO",
                html::path_info_block(self.target_a().path(), self.target_b().path(), file_mode),
            ),
            (
                "REPORT_TIME",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            ),
            ("EXTENSIONS_INFO", extensions_info),
            ("TOTAL_FILES", summary.total.to_string()),
            ("IDENTICAL_FILES", summary.identical.to_string()),
            ("DIFFERENT_FILES", summary.different.to_string()),
            (
                "AVERAGE_SIMILARITY",
                format!("{:.2}", summary.average_similarity),
            ),
            ("COMPARISON_SECTION_TITLE", section_title.to_string()),
            ("FILE_COMPARISONS", file_comparisons),
        ])
    }
}
