//! Core utilities for the vbgen declaration generator.
//!
//! Generated files are only rewritten when their content changes, which keeps
//! downstream incremental builds quiet.

mod file;

pub use file::{File, WriteResult};
