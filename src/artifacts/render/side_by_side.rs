//! Two-column hex comparison
//!
//! Renders both sequences 16 bytes at a time next to each other with a
//! per-window match indicator, up to a caller-supplied byte cap. Useful
//! for eyeballing where two images start to drift without scanning two
//! separate dumps.

use crate::artifacts::diff::byte_at::ByteAt;
use crate::artifacts::render::hex_dump::{BYTES_PER_LINE, DumpMode};

const ANSI_MISMATCH: &str = "\x1b[91m\u{2717}\x1b[0m";

pub fn side_by_side(data_a: &[u8], data_b: &[u8], max_bytes: usize, mode: DumpMode) -> String {
    let mut lines = vec![
        format!(
            "{:<10} {:<50} {:<50} {}",
            "Offset", "File 1 (Hex + ASCII)", "File 2 (Hex + ASCII)", "Match"
        ),
        "-".repeat(120),
    ];

    let limit = max_bytes.min(data_a.len().max(data_b.len()));

    for window_start in (0..limit).step_by(BYTES_PER_LINE) {
        let chunk_a = window_of(data_a, window_start);
        let chunk_b = window_of(data_b, window_start);

        let mark = if chunk_a == chunk_b {
            "\u{2713}".to_string()
        } else if mode == DumpMode::Ansi {
            ANSI_MISMATCH.to_string()
        } else {
            "\u{2717}".to_string()
        };

        lines.push(format!(
            "{:<10} {:<50} {:<50} {}",
            format!("{window_start:08X}"),
            column(chunk_a),
            column(chunk_b),
            mark
        ));
    }

    lines.join("\n")
}

fn window_of(data: &[u8], window_start: usize) -> &[u8] {
    if window_start >= data.len() {
        return &[];
    }
    &data[window_start..data.len().min(window_start + BYTES_PER_LINE)]
}

fn column(window: &[u8]) -> String {
    let hex = window
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ");
    let ascii = window
        .iter()
        .map(|byte| ByteAt::Present(*byte).to_ascii())
        .collect::<String>();

    format!("{hex:<40} |{ascii}|")
}
