//! Core operations.
//!
//! This module contains the business logic for vbgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod config;
pub mod generate;
pub mod init;

pub use check::check;
pub use config::{generator_config, load_manifest};
pub use generate::generate;
pub use init::init;
