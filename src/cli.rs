//! CLI definitions for casefile.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// casefile CLI.
#[derive(Parser)]
#[command(name = "casefile")]
#[command(about = "Inspect and reconstruct serialized test-failure causes")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "casefile.toml", env = "CASEFILE_CONFIG", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Reconstruct the failure causes of a JSON report and print them
    Inspect {
        /// Report file holding one failure cause or an array of them
        report: PathBuf,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print the normalized form of a failure message
    Normalize {
        /// Raw failure message
        message: String,
    },

    /// Check whether each failure cause of a report belongs to an error category
    Classify {
        /// Report file holding one failure cause or an array of them
        report: PathBuf,

        /// Error type identifier of the category
        #[arg(short = 't', long)]
        category: String,
    },

    /// List the registered error types
    Types,
}
