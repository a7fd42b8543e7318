// ABOUTME: CLI argument parsing and command routing for cvwizard
//
// Provides command-line interface for:
// - Launching the wizard TUI (tui, default)
// - Inspecting and importing the stored profile (profile)

pub mod profile;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Build a career profile and tailor CVs to a job description
#[derive(Parser)]
#[command(name = "cvwizard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the wizard TUI (default if no command given)
    Tui,

    /// Inspect or replace the stored profile
    #[command(subcommand)]
    Profile(ProfileCommands),
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Print the standard profile location
    Path,

    /// Show the stored profile
    Show(ShowArgs),

    /// Validate a profile JSON file and store it
    Import(ImportArgs),
}

#[derive(clap::Args)]
pub struct ShowArgs {
    /// Read from this file instead of the standard location
    #[arg(long)]
    pub path: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ImportArgs {
    /// Profile JSON file to import
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_tui() {
        let cli = Cli::try_parse_from(["cvwizard"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_profile_show_with_global_format() {
        let cli =
            Cli::try_parse_from(["cvwizard", "profile", "show", "--path", "p.json", "--format", "json"])
                .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Some(Commands::Profile(ProfileCommands::Show(args))) => {
                assert_eq!(args.path, Some(PathBuf::from("p.json")));
            }
            _ => panic!("expected profile show"),
        }
    }

    #[test]
    fn test_import_requires_file() {
        assert!(Cli::try_parse_from(["cvwizard", "profile", "import"]).is_err());
    }
}
