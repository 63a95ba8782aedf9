//! HTML report fragments
//!
//! Each function renders one self-contained fragment that the report
//! command substitutes into the loaded template. CSS class names here
//! must stay in sync with the default template in `areas::template`.

use crate::artifacts::core::group_digits;
use crate::artifacts::diff::diff_result::{DiffResult, FileMetadata};
use crate::artifacts::matching::extension_filter::ExtensionFilter;
use crate::artifacts::render::hex_dump::{DumpMode, hex_dump};
use std::collections::BTreeSet;
use std::path::Path;

/// Collapsible per-pair comparison section: status header, file info
/// grid, and highlighted hex dumps of both display windows when the
/// pair differs.
pub fn comparison_block(result: &DiffResult, index: usize) -> String {
    let status_class = if result.identical {
        "identical"
    } else {
        "different"
    };
    let status_text = if result.identical {
        "\u{2713} IDENTICAL"
    } else {
        "\u{2717} DIFFERENT"
    };

    let mut block = format!(
        r#"<div class="file-comparison">
  <div class="file-header {status_class}" onclick="toggleContent({index})">
    <div>
      <strong>{name}</strong>
      <span class="status-badge status-{status_class}">{status_text}</span>
    </div>
    <span class="toggle-icon" id="toggle-{index}">&#9660;</span>
  </div>
  <div class="file-content" id="content-{index}">
    <div class="file-info">
      <h3>File Information</h3>
      <div class="info-grid">
        {info_a}
        {info_b}
"#,
        name = result.relative_name,
        info_a = file_info_item("File 1", result.size_a, result.metadata_a.as_ref()),
        info_b = file_info_item("File 2", result.size_b, result.metadata_b.as_ref()),
    );

    if !result.identical {
        block.push_str(&difference_info_items(result));
    }

    block.push_str("      </div>\n    </div>\n");

    if !result.identical {
        block.push_str(&hex_panels(result));
    }

    block.push_str("  </div>\n</div>\n");
    block
}

fn file_info_item(label: &str, size: u64, metadata: Option<&FileMetadata>) -> String {
    let (modified, created) = match metadata {
        Some(meta) => (meta.modified.as_str(), meta.created.as_str()),
        None => ("-", "-"),
    };

    format!(
        r#"<div class="info-item">
          <strong>{label} Size:</strong> {size} bytes<br>
          <strong>Modified:</strong> {modified}<br>
          <strong>Created:</strong> {created}
        </div>"#,
        size = group_digits(size),
    )
}

fn difference_info_items(result: &DiffResult) -> String {
    let first_offset = result
        .first_difference_offset
        .map(|offset| format!("0x{offset:08X}"))
        .unwrap_or_else(|| "-".to_string());
    let note = if result.degraded {
        "<br><strong>Note:</strong> a side could not be read"
    } else {
        ""
    };

    format!(
        r#"        <div class="info-item">
          <strong>Differences:</strong> {count} bytes<br>
          <strong>First Difference:</strong> {first_offset}{note}
        </div>
        <div class="info-item">
          <strong>Similarity:</strong> {similarity:.2}%
          <div class="progress-bar">
            <div class="progress-fill" style="width: {similarity:.2}%">{similarity:.2}%</div>
          </div>
        </div>
"#,
        count = group_digits(result.difference_count as u64),
        similarity = result.similarity,
    )
}

fn hex_panels(result: &DiffResult) -> String {
    let highlights = result
        .display_positions
        .iter()
        .copied()
        .collect::<BTreeSet<_>>();

    format!(
        r#"    <div class="hex-container">
      <div class="hex-panel">
        <div class="hex-title">File 1: {name}</div>
{dump_a}
      </div>
      <div class="hex-panel">
        <div class="hex-title">File 2: {name}</div>
{dump_b}
      </div>
    </div>
"#,
        name = result.relative_name,
        dump_a = hex_dump(&result.display_a, 0, &highlights, DumpMode::Html),
        dump_b = hex_dump(&result.display_b, 0, &highlights, DumpMode::Html),
    )
}

/// The two compared paths, labelled by comparison mode.
pub fn path_info_block(path_a: &Path, path_b: &Path, file_mode: bool) -> String {
    let label = if file_mode { "File" } else { "Folder" };

    format!(
        r#"<div class="info-item">
  <strong>{label} 1:</strong>
  <div class="path-display">{a}</div>
</div>
<div class="info-item">
  <strong>{label} 2:</strong>
  <div class="path-display">{b}</div>
</div>"#,
        a = path_a.display(),
        b = path_b.display(),
    )
}

/// Extension filter description; only rendered in folder mode.
pub fn extensions_block(filter: &ExtensionFilter) -> String {
    let text = if filter.is_empty() {
        "All".to_string()
    } else {
        filter.suffixes().join(", ")
    };

    format!(
        r#"<div class="info-item">
  <strong>File Extensions:</strong><br>{text}
</div>"#
    )
}
