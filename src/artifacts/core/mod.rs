//! Core utilities and shared types
//!
//! This module contains small helpers used across the application:
//! the pager writer adapter, the configuration error type and number
//! formatting for byte counts.

use derive_new::new;
use minus::Pager;
use std::fmt::Display;
use std::io::{self, Write};

/// Error raised when the two comparison targets cannot form a valid run,
/// e.g. one path is a file and the other a folder.
///
/// Kept as a dedicated type so callers can tell a configuration problem
/// apart from ordinary I/O failures via `Error::downcast_ref`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Adapter implementing `Write` on top of the minus pager
///
/// The pager accepts text through `push_str` rather than `std::io::Write`,
/// so this wrapper lets the comparison session treat a pager the same way
/// it treats stdout. Hex dumps over many file pairs get long enough that
/// paging them is worth the indirection.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Format a byte count with thousands separators, e.g. `1234567` -> `1,234,567`.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
