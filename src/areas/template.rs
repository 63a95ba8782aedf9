//! HTML report template engine
//!
//! Loads the report template from disk, materializing a default one when
//! the configured file is missing. Rendering is a single substitution
//! pass over named `{{PLACEHOLDER}}` tokens; placeholders without a
//! supplied value are left verbatim rather than treated as errors.

use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

pub struct TemplateEngine {
    template: String,
}

impl TemplateEngine {
    /// Load the template at `path`, writing the built-in default there
    /// first when the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let template = match std::fs::read_to_string(path) {
            Ok(template) => template,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                std::fs::write(path, DEFAULT_TEMPLATE)
                    .with_context(|| format!("Failed to create default template: {path:?}"))?;
                DEFAULT_TEMPLATE.to_string()
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read template: {path:?}"));
            }
        };

        Ok(TemplateEngine { template })
    }

    pub fn from_string(template: impl Into<String>) -> Self {
        TemplateEngine {
            template: template.into(),
        }
    }

    pub fn render(&self, values: &BTreeMap<&str, String>) -> String {
        let mut result = self.template.clone();
        for (name, value) in values {
            result = result.replace(&format!("{{{{{name}}}}}"), value);
        }
        result
    }
}

pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Binary Comparison Report - {{COMPARISON_TYPE}}</title>
<style>
  body { font-family: -apple-system, "Segoe UI", sans-serif; margin: 0; background: #f4f5f7; color: #24292f; }
  .container { max-width: 1280px; margin: 0 auto; padding: 24px; }
  header { background: #1f2937; color: #f9fafb; padding: 24px; border-radius: 8px; margin-bottom: 24px; }
  header h1 { margin: 0 0 8px 0; font-size: 24px; }
  .badge { display: inline-block; padding: 4px 12px; border-radius: 12px; font-size: 12px; font-weight: bold; }
  .badge-file { background: #2563eb; color: #fff; }
  .badge-folder { background: #7c3aed; color: #fff; }
  .info-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 12px; margin: 12px 0; }
  .info-item { background: #fff; border: 1px solid #d0d7de; border-radius: 6px; padding: 12px; font-size: 14px; }
  .path-display { font-family: monospace; word-break: break-all; margin-top: 4px; color: #57606a; }
  .stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px; margin-bottom: 24px; }
  .stat-card { background: #fff; border: 1px solid #d0d7de; border-radius: 6px; padding: 16px; text-align: center; }
  .stat-card .value { font-size: 28px; font-weight: bold; }
  .stat-card .label { font-size: 12px; color: #57606a; text-transform: uppercase; }
  .file-comparison { background: #fff; border: 1px solid #d0d7de; border-radius: 6px; margin-bottom: 16px; overflow: hidden; }
  .file-header { display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; cursor: pointer; }
  .file-header.identical { background: #dafbe1; }
  .file-header.different { background: #ffebe9; }
  .status-badge { margin-left: 12px; padding: 2px 10px; border-radius: 10px; font-size: 12px; font-weight: bold; }
  .status-identical { background: #1a7f37; color: #fff; }
  .status-different { background: #cf222e; color: #fff; }
  .file-content { padding: 16px; display: none; }
  .file-content.open { display: block; }
  .progress-bar { background: #eaeef2; border-radius: 6px; overflow: hidden; margin-top: 6px; height: 18px; }
  .progress-fill { background: linear-gradient(90deg, #1a7f37, #2da44e); color: #fff; font-size: 11px; line-height: 18px; text-align: center; white-space: nowrap; }
  .hex-container { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-top: 16px; }
  .hex-panel { background: #0d1117; color: #c9d1d9; border-radius: 6px; padding: 12px; overflow-x: auto; }
  .hex-title { color: #8b949e; font-size: 12px; margin-bottom: 8px; }
  .hex-line { font-family: monospace; font-size: 12px; white-space: nowrap; }
  .diff { background: #cf222e; color: #fff; border-radius: 2px; }
  footer { text-align: center; color: #57606a; font-size: 12px; margin-top: 24px; }
</style>
</head>
<body>
<div class="container">
  <header>
    <h1>Binary Comparison Report</h1>
    <span class="badge {{BADGE_CLASS}}">{{COMPARISON_MODE}}</span>
    <div class="info-grid">
      {{PATH_INFO}}
      {{EXTENSIONS_INFO}}
      <div class="info-item">
        <strong>Report Time:</strong><br>{{REPORT_TIME}}
      </div>
    </div>
  </header>

  <div class="stats">
    <div class="stat-card"><div class="value">{{TOTAL_FILES}}</div><div class="label">Files Compared</div></div>
    <div class="stat-card"><div class="value">{{IDENTICAL_FILES}}</div><div class="label">Identical</div></div>
    <div class="stat-card"><div class="value">{{DIFFERENT_FILES}}</div><div class="label">Different</div></div>
    <div class="stat-card"><div class="value">{{AVERAGE_SIMILARITY}}%</div><div class="label">Avg. Similarity</div></div>
  </div>

  <h2>{{COMPARISON_SECTION_TITLE}}</h2>
  {{FILE_COMPARISONS}}

  <footer>Generated by bineye</footer>
</div>
<script>
function toggleContent(index) {
  const content = document.getElementById('content-' + index);
  const icon = document.getElementById('toggle-' + index);
  content.classList.toggle('open');
  icon.innerHTML = content.classList.contains('open') ? '&#9650;' : '&#9660;';
}
</script>
</body>
</html>
"#;
