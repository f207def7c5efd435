// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! `vbgen.toml` parsing and validation.
//!
//! Every key is optional; an empty file (or no file at all) yields the
//! canonical configuration.

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{
    GeneratorSection, IndentSetting, Manifest, NamesSection, ParseContext, VbgenToml, template,
};
