//! Hex+ASCII dump rendering
//!
//! Data is rendered in 16-byte windows. Each line carries an 8-digit
//! uppercase hex offset, the bytes as two groups of eight hex pairs, and
//! an ASCII column where unprintable bytes show as `.`. Bytes whose
//! absolute position is in the highlight set are wrapped in a
//! mode-specific emphasis marker. The renderer is a pure function of its
//! inputs; presentation (ANSI vs HTML vs plain) is selected by
//! `DumpMode` and never leaks into the data model.

use crate::artifacts::diff::byte_at::ByteAt;
use std::collections::BTreeSet;

/// Bytes per dump line.
pub const BYTES_PER_LINE: usize = 16;

/// Visible width the hex column is padded to in console modes, so the
/// ASCII column lines up across full and partial lines.
const HEX_FIELD_WIDTH: usize = 58;

const ANSI_HIGHLIGHT: &str = "\x1b[91m";
const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpMode {
    /// No emphasis markers; used when output is not a terminal.
    Plain,
    /// Bright-red ANSI escapes around highlighted bytes.
    Ansi,
    /// `<span class="diff">` markers and entity escaping for HTML reports.
    Html,
}

impl DumpMode {
    fn emphasize(&self, text: &str) -> String {
        match self {
            DumpMode::Plain => text.to_string(),
            DumpMode::Ansi => format!("{ANSI_HIGHLIGHT}{text}{ANSI_RESET}"),
            DumpMode::Html => format!("<span class=\"diff\">{text}</span>"),
        }
    }
}

/// Render `data` as a hex+ASCII dump.
///
/// Offsets in `highlights` are absolute positions within `data` (not
/// shifted by `base_offset`, which only affects the printed offset
/// column).
pub fn hex_dump(
    data: &[u8],
    base_offset: usize,
    highlights: &BTreeSet<usize>,
    mode: DumpMode,
) -> String {
    data.chunks(BYTES_PER_LINE)
        .enumerate()
        .map(|(line_index, window)| {
            let window_start = line_index * BYTES_PER_LINE;
            match mode {
                DumpMode::Plain | DumpMode::Ansi => {
                    console_line(window, window_start, base_offset, highlights, mode)
                }
                DumpMode::Html => html_line(window, window_start, base_offset, highlights),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn console_line(
    window: &[u8],
    window_start: usize,
    base_offset: usize,
    highlights: &BTreeSet<usize>,
    mode: DumpMode,
) -> String {
    let cells = window
        .iter()
        .enumerate()
        .map(|(column, byte)| {
            let cell = format!("{byte:02X}");
            if highlights.contains(&(window_start + column)) {
                mode.emphasize(&cell)
            } else {
                cell
            }
        })
        .collect::<Vec<_>>();

    let split = window.len().min(8);
    let mut hex_field = format!("{}  {}", cells[..split].join(" "), cells[split..].join(" "));

    // Pad on visible width: ANSI escapes occupy no columns on screen,
    // so the raw string length cannot be used here.
    let visible = visible_hex_width(window.len());
    hex_field.extend(std::iter::repeat_n(' ', HEX_FIELD_WIDTH.saturating_sub(visible)));

    let ascii = window
        .iter()
        .enumerate()
        .map(|(column, byte)| {
            let ch = ByteAt::Present(*byte).to_ascii().to_string();
            if highlights.contains(&(window_start + column)) {
                mode.emphasize(&ch)
            } else {
                ch
            }
        })
        .collect::<String>();

    format!(
        "{:08X}  {}  |{}|",
        base_offset + window_start,
        hex_field,
        ascii
    )
}

fn html_line(
    window: &[u8],
    window_start: usize,
    base_offset: usize,
    highlights: &BTreeSet<usize>,
) -> String {
    let cells = window
        .iter()
        .enumerate()
        .map(|(column, byte)| {
            let cell = format!("{byte:02X}");
            if highlights.contains(&(window_start + column)) {
                DumpMode::Html.emphasize(&cell)
            } else {
                cell
            }
        })
        .collect::<Vec<_>>();

    let split = window.len().min(8);
    let hex_field = format!(
        "{}&nbsp;&nbsp;{}",
        cells[..split].join(" "),
        cells[split..].join(" ")
    );

    let ascii = window
        .iter()
        .enumerate()
        .map(|(column, byte)| {
            let ch = ByteAt::Present(*byte)
                .to_ascii()
                .to_string()
                .replace('<', "&lt;")
                .replace('>', "&gt;");
            if highlights.contains(&(window_start + column)) {
                DumpMode::Html.emphasize(&ch)
            } else {
                ch
            }
        })
        .collect::<String>();

    format!(
        "<div class=\"hex-line\">{:08X}&nbsp;&nbsp;{}&nbsp;&nbsp;|{}|</div>",
        base_offset + window_start,
        hex_field,
        ascii
    )
}

// Width of the hex column for an n-byte window before padding: each
// group of k bytes renders as 3k-1 characters, with 2 between groups.
fn visible_hex_width(bytes: usize) -> usize {
    let first = bytes.min(8);
    let second = bytes.saturating_sub(8);
    let mut width = 3 * first - 1 + 2;
    if second > 0 {
        width += 3 * second - 1;
    }
    width
}
