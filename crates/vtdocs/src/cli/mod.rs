//! Command-line interface for vtdocs.
//!
//! This module provides the CLI structure for the `vtdocs` binary and the
//! library-side actions its commands run.

pub mod actions;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    BuildCommand, ConfigCommand, CopyCommand, RoutesCommand, SearchCommand, ShowCommand, ThemeArg,
};

/// vtdocs - Velora Connected Vehicles API documentation
///
/// Builds the static documentation site and gives command-line access to
/// its pages, code samples and search.
#[derive(Debug, Parser)]
#[command(name = "vtdocs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render every page to static HTML
    Build(BuildCommand),

    /// List the route table
    Routes(RoutesCommand),

    /// Show a page's code groups and tabs
    Show(ShowCommand),

    /// Copy a code sample to the clipboard
    Copy(CopyCommand),

    /// Search the documentation
    Search(SearchCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn routes() -> Command {
        Command::Routes(RoutesCommand { json: false })
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "vtdocs");
    }

    #[test]
    fn test_verbosity_levels() {
        let mut cli = Cli {
            config: None,
            verbose: 0,
            quiet: true,
            command: routes(),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);

        cli.quiet = false;
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);

        cli.verbose = 1;
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        cli.verbose = 3;
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from(["vtdocs", "build", "--out", "dist", "--theme", "dark"])
            .unwrap();
        match cli.command {
            Command::Build(cmd) => {
                assert_eq!(cmd.out, Some(PathBuf::from("dist")));
                assert_eq!(cmd.theme, Some(ThemeArg::Dark));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_copy() {
        let cli = Cli::try_parse_from([
            "vtdocs",
            "copy",
            "/quickstart",
            "--group",
            "2",
            "--tab",
            "Python",
            "--dry-run",
        ])
        .unwrap();
        match cli.command {
            Command::Copy(cmd) => {
                assert_eq!(cmd.path, "/quickstart");
                assert_eq!(cmd.group, 2);
                assert_eq!(cmd.tab.as_deref(), Some("Python"));
                assert!(cmd.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_copy_defaults() {
        let cli = Cli::try_parse_from(["vtdocs", "copy", "/"]).unwrap();
        match cli.command {
            Command::Copy(cmd) => {
                assert_eq!(cmd.group, 0);
                assert!(cmd.tab.is_none());
                assert!(!cmd.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from(["vtdocs", "search", "rate limit", "-l", "3"]).unwrap();
        match cli.command {
            Command::Search(cmd) => {
                assert_eq!(cmd.query, "rate limit");
                assert_eq!(cmd.limit, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["vtdocs", "config", "validate", "--file", "x.toml"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }

    #[test]
    fn test_parse_with_global_flags() {
        let cli = Cli::try_parse_from(["vtdocs", "routes", "-c", "/custom/config.toml", "-vv"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_rejects_bad_theme() {
        assert!(Cli::try_parse_from(["vtdocs", "build", "--theme", "sepia"]).is_err());
    }
}
