//! CLI for the weblace web-resource pipeline.

mod commands;
#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use weblace_core::config;
use weblace_core::snippet::Position;

use commands::{run_completions, run_overrides, run_resolve, run_sanitize};

/// Top-level CLI for the weblace web-resource pipeline.
#[derive(Debug, Parser)]
#[command(name = "weblace")]
#[command(about = "weblace: customizable web-resource pipeline", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Insertion point flag for ad-hoc snippet registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PositionArg {
    Head,
    Body,
    BodyEnd,
}

impl From<PositionArg> for Position {
    fn from(arg: PositionArg) -> Self {
        match arg {
            PositionArg::Head => Position::Head,
            PositionArg::Body => Position::Body,
            PositionArg::BodyEnd => Position::BodyEnd,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a resource through the customization pipeline and print it.
    Resolve {
        /// Plugin the resource belongs to.
        plugin: String,

        /// Resource file name (e.g. network.html).
        file_name: String,

        /// Path to the bundled source asset.
        #[arg(long)]
        source: PathBuf,

        /// Script source to inject (repeatable).
        #[arg(long = "script")]
        scripts: Vec<String>,

        /// Stylesheet source to inject (repeatable).
        #[arg(long = "style")]
        styles: Vec<String>,

        /// Insertion point for injected snippets.
        #[arg(long, value_enum, default_value = "head")]
        at: PositionArg,

        /// Write the result here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Strip active markup (and optionally convert §-color codes) in a file.
    Sanitize {
        /// File to sanitize; result goes to stdout.
        path: PathBuf,

        /// Also convert §-color codes to span elements.
        #[arg(long)]
        colors: bool,
    },

    /// List operator override files in the customization directory.
    Overrides,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();

    // Load global config early; commands receive it instead of re-reading.
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    match cli.command {
        CliCommand::Resolve {
            plugin,
            file_name,
            source,
            scripts,
            styles,
            at,
            out,
        } => run_resolve(
            &cfg,
            &plugin,
            &file_name,
            &source,
            &scripts,
            &styles,
            at.into(),
            out.as_deref(),
        ),
        CliCommand::Sanitize { path, colors } => run_sanitize(&path, colors),
        CliCommand::Overrides => run_overrides(&cfg),
        CliCommand::Completions { shell } => run_completions(shell),
    }
}
