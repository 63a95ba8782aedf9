#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// Write a binary fixture file, creating parent directories as needed.
pub fn write_bytes(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {parent:?}: {e}"));
    }

    std::fs::write(path, content)
        .unwrap_or_else(|e| panic!("Failed to write file {path:?}: {e}"));
}

/// A pair of trees that share `a.txt` but each hold one unique log file.
pub fn write_overlapping_trees(dir_a: &Path, dir_b: &Path) {
    write_bytes(&dir_a.join("a.txt"), b"shared content");
    write_bytes(&dir_a.join("b.log"), b"only in a");
    write_bytes(&dir_b.join("a.txt"), b"shared content");
    write_bytes(&dir_b.join("c.log"), b"only in b");
}

pub fn bineye_cmd() -> Command {
    Command::cargo_bin("bineye").expect("Failed to find bineye binary")
}
