//! Check operation - compare a generated file with fresh output.

use std::path::Path;

use eyre::Result;
use vbgen_codegen::{Emitter, GeneratorConfig};
use vbgen_core::File;

use crate::reports::{CheckReport, CheckStatus};

/// Compare the file at `output` with what the configuration would generate.
pub fn check(config: GeneratorConfig, output: &Path) -> Result<CheckReport> {
    let file = File::new(output, Emitter::new(config).render());

    let status = match file.read_existing()? {
        None => CheckStatus::Missing,
        Some(existing) if existing == file.content() => CheckStatus::UpToDate,
        Some(_) => CheckStatus::Stale,
    };
    log::debug!("{}: {:?}", output.display(), status);

    Ok(CheckReport {
        output_path: output.to_path_buf(),
        status,
    })
}
