//! Comparison data structures and algorithms
//!
//! This module contains the core types and algorithms:
//!
//! - `core`: shared utilities (pager wrapper, config error, formatting)
//! - `diff`: positional byte differ and per-pair results
//! - `matching`: tree matching and extension filtering
//! - `render`: hex dump and side-by-side rendering
//! - `report`: summary statistics and HTML fragments

pub mod core;
pub mod diff;
pub mod matching;
pub mod render;
pub mod report;
