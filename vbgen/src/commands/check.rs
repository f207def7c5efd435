use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::ConfigArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Generated file to compare against
    #[arg(short, long)]
    pub output: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = self.config.resolve()?;
        let report = ops::check(config, &self.output)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_up_to_date() {
            std::process::exit(1);
        }

        Ok(())
    }
}
