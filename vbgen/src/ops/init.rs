//! Init operation - write a default vbgen.toml.

use std::path::Path;

use eyre::{Context, Result, bail};
use vbgen_core::File;
use vbgen_manifest::template;

use crate::reports::InitReport;

/// Write the default configuration to `path`.
pub fn init(path: &Path, force: bool) -> Result<InitReport> {
    let file = File::new(path, template());
    if file.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }

    let result = file.write().wrap_err("Failed to write configuration")?;
    Ok(InitReport {
        config_path: path.to_path_buf(),
        result,
    })
}
