mod check;
mod completions;
mod generate;
mod init;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Result, bail};
use generate::GenerateCommand;
use init::InitCommand;
use vbgen_codegen::GeneratorConfig;

use crate::ops;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for vbgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "vbgen")]
#[command(version)]
#[command(about = "Generate variadic Swift view-builder declarations")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Used when no command is given.
    #[command(flatten)]
    generate: GenerateCommand,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Run the selected command; no command prints the declarations to stdout.
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Some(_) if self.generate.has_options() => {
                bail!("-c, -o and --max-arity must follow the command name")
            }
            Some(Commands::Generate(cmd)) => cmd.run(),
            Some(Commands::Check(cmd)) => cmd.run(),
            Some(Commands::Init(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
            None => self.generate.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print or write the generated declarations
    Generate(GenerateCommand),

    /// Verify a generated file is up to date
    Check(CheckCommand),

    /// Write a default vbgen.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Options shared by every command that renders declarations.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to vbgen.toml (defaults to ./vbgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Largest arity to generate (overrides vbgen.toml)
    #[arg(long)]
    pub max_arity: Option<usize>,
}

impl ConfigArgs {
    /// Load the manifest and apply command-line overrides.
    pub fn resolve(&self) -> Result<GeneratorConfig> {
        let manifest = ops::load_manifest(self.config.as_deref()).unwrap_or_exit();
        ops::generator_config(&manifest, self.max_arity)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_no_arguments_generates_defaults() {
        let cli = Cli::try_parse_from(["vbgen"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.generate.has_options());

        // The crate directory has no vbgen.toml, so the canonical defaults apply.
        let config = cli.generate.config.resolve().unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_generate_options_without_command() {
        let cli = Cli::try_parse_from(["vbgen", "-v", "--max-arity", "3"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.generate.config.max_arity, Some(3));

        let config = cli.generate.config.resolve().unwrap();
        assert_eq!(config.max_arity(), 3);
    }

    #[test]
    fn test_subcommand_options() {
        let cli = Cli::try_parse_from(["vbgen", "-v", "generate", "--max-arity", "4"]).unwrap();
        assert!(!cli.generate.has_options());
        match cli.command {
            Some(Commands::Generate(ref cmd)) => assert_eq!(cmd.config.max_arity, Some(4)),
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_options_before_command_rejected() {
        let cli =
            Cli::try_parse_from(["vbgen", "--max-arity", "3", "check", "-o", "Out.swift"]).unwrap();
        let err = cli.run().unwrap_err();
        assert_eq!(
            err.to_string(),
            "-c, -o and --max-arity must follow the command name"
        );
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
