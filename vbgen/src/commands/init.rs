use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the configuration
    #[arg(short, long, default_value = "vbgen.toml")]
    pub config: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::init(&self.config, self.force)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
