//! Report building blocks
//!
//! - `summary`: aggregate counts and mean similarity over a run
//! - `html`: HTML fragments substituted into the report template

pub mod html;
pub mod summary;
