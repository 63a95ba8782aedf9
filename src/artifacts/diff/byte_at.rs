//! Optional-byte type for positional comparison
//!
//! When two sequences of different lengths are compared position by
//! position, offsets past the shorter sequence's end still need a value
//! to compare against. `ByteAt` models that explicitly: a position either
//! holds a byte or is past end-of-data, and an absent position never
//! equals a present byte.

/// The value of one sequence at a given byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteAt {
    Present(u8),
    Absent,
}

impl ByteAt {
    pub fn of(data: &[u8], offset: usize) -> Self {
        match data.get(offset) {
            Some(byte) => ByteAt::Present(*byte),
            None => ByteAt::Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, ByteAt::Present(_))
    }

    /// Two-digit uppercase hex for a present byte, `EOF` otherwise.
    pub fn to_hex(&self) -> String {
        match self {
            ByteAt::Present(byte) => format!("{byte:02X}"),
            ByteAt::Absent => "EOF".to_string(),
        }
    }

    /// Printable ASCII character for a present byte in `[32, 127)`,
    /// `.` for everything else (including absent positions).
    pub fn to_ascii(&self) -> char {
        match self {
            ByteAt::Present(byte) if (32..127).contains(byte) => *byte as char,
            _ => '.',
        }
    }
}
