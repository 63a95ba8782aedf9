//! Hex rendering
//!
//! - `hex_dump`: fixed-width hex+ASCII dumps with per-byte highlighting
//! - `side_by_side`: two-column window comparison with match indicators

pub mod hex_dump;
pub mod side_by_side;
