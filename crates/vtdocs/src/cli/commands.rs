//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::theme::Theme;

/// Build command arguments.
#[derive(Debug, Args)]
pub struct BuildCommand {
    /// Output directory (defaults to `site.output_dir`)
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Initial theme of the rendered pages
    #[arg(short, long, value_enum)]
    pub theme: Option<ThemeArg>,
}

/// Routes command arguments.
#[derive(Debug, Args)]
pub struct RoutesCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Page path, e.g. `/quickstart` or `/api-docs/quickstart`
    pub path: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Copy command arguments.
#[derive(Debug, Args)]
pub struct CopyCommand {
    /// Page path
    pub path: String,

    /// Code group number on the page (see `show`)
    #[arg(short, long, default_value = "0")]
    pub group: usize,

    /// Tab label to copy instead of the first tab
    #[arg(short, long)]
    pub tab: Option<String>,

    /// Use an in-memory clipboard and print the code instead
    #[arg(long)]
    pub dry_run: bool,
}

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// The search query
    pub query: String,

    /// Maximum number of results
    #[arg(short, long, default_value = "10")]
    pub limit: usize,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Theme argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    /// Light background
    Light,
    /// Dark background
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}
