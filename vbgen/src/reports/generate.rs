//! Generate command report data structures.

use std::path::PathBuf;

use vbgen_core::WriteResult;

use super::output::{Output, Report};

/// Report data from writing the declarations file.
#[derive(Debug)]
pub struct GenerateReport {
    /// Path of the generated file.
    pub output_path: PathBuf,
    /// Whether the file was rewritten.
    pub result: WriteResult,
    /// Largest generated arity.
    pub max_arity: usize,
    /// Blocks emitted in each extension.
    pub blocks_per_group: usize,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.output_path.display();
        match self.result {
            WriteResult::Written => out.success(&format!("wrote {}", path)),
            WriteResult::Unchanged => out.success(&format!("{} is up to date", path)),
        }
        out.key_value("arities", &format!("2..={}", self.max_arity));
        out.key_value("blocks per group", &self.blocks_per_group.to_string());
    }
}
