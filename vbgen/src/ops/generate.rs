//! Generate operation - render and write the declarations file.

use std::path::Path;

use eyre::{Context, Result};
use vbgen_codegen::{Emitter, GeneratorConfig};
use vbgen_core::File;

use crate::reports::GenerateReport;

/// Render the declarations and write them to `output`.
///
/// The file is left untouched when it already holds the same content.
pub fn generate(config: GeneratorConfig, output: &Path) -> Result<GenerateReport> {
    let emitter = Emitter::new(config);
    let file = File::new(output, emitter.render());
    let result = file
        .write()
        .wrap_err("Failed to write generated declarations")?;

    Ok(GenerateReport {
        output_path: file.path().to_path_buf(),
        result,
        max_arity: emitter.config().max_arity(),
        blocks_per_group: emitter.arities().count(),
    })
}
