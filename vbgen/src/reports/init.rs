//! Init command report.

use std::path::PathBuf;

use vbgen_core::WriteResult;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct InitReport {
    pub config_path: PathBuf,
    pub result: WriteResult,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.config_path.display();
        match self.result {
            WriteResult::Written => out.success(&format!("created {}", path)),
            WriteResult::Unchanged => out.success(&format!("{} already has the defaults", path)),
        }
    }
}
