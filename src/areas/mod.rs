//! I/O-backed comparison components
//!
//! This module contains the parts of a run that touch the outside world:
//!
//! - `session`: comparison targets, options, writer and result sequence
//! - `template`: HTML report template loading and substitution
//! - `workspace`: file system enumeration, reads and stat per root

pub mod session;
pub mod template;
pub mod workspace;
