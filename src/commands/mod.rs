//! Comparison run operations
//!
//! Operations are implemented as `impl Session` blocks:
//!
//! - `compare`: orchestration of a full run plus console rendering
//! - `report`: templated HTML report generation

pub mod compare;
pub mod report;
