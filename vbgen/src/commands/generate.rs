use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use vbgen_codegen::Emitter;

use super::ConfigArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Whether any option was passed on the command line.
    pub fn has_options(&self) -> bool {
        self.config.config.is_some() || self.config.max_arity.is_some() || self.output.is_some()
    }

    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.config.resolve()?;

        match &self.output {
            Some(path) => {
                let report = ops::generate(config, path)?;
                report.render(&mut TerminalOutput::new());
                Ok(())
            }
            None => Emitter::new(config)
                .emit()
                .wrap_err("Failed to write declarations to stdout"),
        }
    }
}
