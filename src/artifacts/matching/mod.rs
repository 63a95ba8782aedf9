//! Tree matching for folder comparison
//!
//! - `extension_filter`: case-insensitive file extension filtering
//! - `file_pair`: matched pairs and the overall match outcome
//! - `tree_matcher`: pairing files by relative path across two roots

pub mod extension_filter;
pub mod file_pair;
pub mod tree_matcher;
