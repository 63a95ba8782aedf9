//! Byte-level comparison types and algorithms
//!
//! This module contains the positional byte differ:
//!
//! - `byte_at`: optional-byte type modelling positions past end of data
//! - `byte_diff`: the differ itself plus similarity scoring
//! - `diff_result`: the per-pair record accumulated by a comparison run

pub mod byte_at;
pub mod byte_diff;
pub mod diff_result;
