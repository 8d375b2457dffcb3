pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process::exit;

use crate::application::use_cases::scm_types::DEFAULT_PLUGIN_INFOS_FILE;
use crate::presentation::cli::commands::{ListCommand, ShowCommand};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    Text,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// pscm - Inspect the pluggable SCM types registered from plugin infos
#[derive(Parser, Debug)]
#[command(name = "pscm")]
#[command(about = "Inspect the pluggable SCM types registered from plugin infos")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_DATE"),
    ")"
))]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Plugin info document (YAML or JSON)
    #[arg(
        short = 'p',
        long,
        global = true,
        env = "PSCM_PLUGIN_INFOS",
        default_value = DEFAULT_PLUGIN_INFOS_FILE
    )]
    pub plugin_infos: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered pluggable SCM types
    List {
        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the type registered for one plugin id
    Show {
        /// Plugin id
        id: String,

        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn verbose(&self) -> bool {
        self.cli.verbose
    }

    pub async fn run(self) -> anyhow::Result<()> {
        colored::control::set_override(!self.cli.no_color);

        match self.handle_command().await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn handle_command(&self) -> anyhow::Result<()> {
        match &self.cli.command {
            Commands::List { output } => {
                ListCommand::new(self.cli.plugin_infos.clone(), *output, self.cli.verbose)
                    .execute()
                    .await
            }
            Commands::Show { id, output } => {
                ShowCommand::new(self.cli.plugin_infos.clone(), id.clone(), *output)
                    .execute()
                    .await
            }
        }
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_defaults() {
        let cli = Cli::try_parse_from(["pscm", "list"]).unwrap();

        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::List { output: OutputFormat::Text }));
    }

    #[test]
    fn test_parse_show_with_global_flags() {
        let cli = Cli::try_parse_from([
            "pscm",
            "show",
            "github.pr",
            "--output",
            "json",
            "--plugin-infos",
            "/etc/plugins.json",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.plugin_infos, PathBuf::from("/etc/plugins.json"));
        match cli.command {
            Commands::Show { id, output } => {
                assert_eq!(id, "github.pr");
                assert_eq!(output, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_show_requires_id() {
        assert!(Cli::try_parse_from(["pscm", "show"]).is_err());
    }
}
