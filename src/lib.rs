//! Binary file and folder comparison with hex visualization
//!
//! `bineye` compares two files or two folder trees byte by byte and
//! reports precisely where and how much they differ: differing offsets,
//! a similarity percentage, highlighted hex dumps and an optional
//! templated HTML report.
//!
//! The crate is organized into three layers:
//!
//! - `areas`: I/O-backed components (session, workspace, template)
//! - `artifacts`: pure comparison and rendering logic
//! - `commands`: run operations implemented on the session

pub mod areas;
pub mod artifacts;
pub mod commands;
