//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--color`, `--verbose`) are inherited by all
//! subcommands. Every subcommand also answers to its one-letter alias.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// ngtw - Tailwind CSS helper for Angular projects
#[derive(Parser, Debug)]
#[command(name = "ngtw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv); NGTW_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the output stylesheet once
    #[command(visible_alias = "b")]
    Build {
        /// Purge unused selectors after building
        #[arg(short, long)]
        purge: bool,

        /// Alternate configuration file (instead of ./ng-tailwind.toml)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Rebuild whenever the source stylesheets or Tailwind config change
    #[command(visible_alias = "w")]
    Watch {
        /// Alternate configuration file (instead of ./ng-tailwind.toml)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Write ng-tailwind.toml
    #[command(visible_alias = "c")]
    Configure {
        /// Path to the Tailwind config script
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Source stylesheet
        #[arg(short, long, value_name = "PATH")]
        source: Option<PathBuf>,

        /// Output stylesheet
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Start from the defaults instead of the current file
        #[arg(short, long = "default")]
        default: bool,

        /// Purge unused selectors after every build
        #[arg(short, long)]
        purge: bool,

        /// Stop purging after builds
        #[arg(long)]
        unset_purge: bool,

        /// Compile the source with Sass before Tailwind
        #[arg(long)]
        sass: bool,
    },

    /// Add ngtw build/watch entries to package.json scripts
    #[command(visible_alias = "s")]
    Scripts,

    /// Purge unused selectors from the existing output
    #[command(visible_alias = "p")]
    Purge {
        /// Alternate configuration file (instead of ./ng-tailwind.toml)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Also remove unused @keyframes
        #[arg(short, long)]
        keyframes: bool,

        /// Also remove unused @font-face rules
        #[arg(short = 'f', long = "fontface")]
        fontface: bool,

        /// Print the removed selectors
        #[arg(short, long)]
        rejected: bool,
    },
}
