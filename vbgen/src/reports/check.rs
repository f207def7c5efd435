//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// State of a generated file compared with fresh output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    UpToDate,
    Stale,
    Missing,
}

/// Report data from comparing a generated file.
#[derive(Debug)]
pub struct CheckReport {
    /// Path of the generated file.
    pub output_path: PathBuf,
    pub status: CheckStatus,
}

impl CheckReport {
    /// Whether the check passed.
    pub fn is_up_to_date(&self) -> bool {
        self.status == CheckStatus::UpToDate
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.output_path.display();
        match self.status {
            CheckStatus::UpToDate => out.success(&format!("{} is up to date", path)),
            CheckStatus::Stale => out.error(&format!("{} is out of date", path)),
            CheckStatus::Missing => out.error(&format!("{} does not exist", path)),
        }

        if !self.is_up_to_date() {
            out.hint(&format!("run 'vbgen generate -o {}' to regenerate it", path));
        }
    }
}
