//! Command line argument parsing for the pharmadex CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::pill::{Color, Shape};

/// pharmadex - medication lookup: search terms, interactions, allergies, pills
#[derive(Parser, Debug, Clone)]
#[command(name = "pharmadex")]
#[command(about = "Medication lookup over curated drug tables")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PharmaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Directory for persisted state (overrides the config file)
    #[arg(long, env = "PHARMADEX_STORAGE_DIR", global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PharmaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the search terms a query resolves to
    Terms(QueryArgs),

    /// Show the label search expression for a query
    #[command(name = "label-query")]
    LabelQuery(QueryArgs),

    /// Search a saved label response and list summaries
    Search(SearchArgs),

    /// Show the detail view of one record in a saved label response
    Detail(DetailArgs),

    /// Check drugs for known interactions
    Interactions(InteractionArgs),

    /// Identify a pill by appearance
    Pill(PillArgs),

    /// Manage the persisted medication list
    #[command(subcommand)]
    Meds(MedsCommand),
}

/// A free-text drug query
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Drug name (Korean or English)
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for searching a label response
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Drug name (Korean or English)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Saved label response body (JSON)
    #[arg(short, long, value_name = "RESPONSE_FILE")]
    pub response: PathBuf,

    /// Maximum number of results (overrides the config file)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the detail view
#[derive(Args, Debug, Clone)]
pub struct DetailArgs {
    /// Saved label response body (JSON)
    #[arg(short, long, value_name = "RESPONSE_FILE")]
    pub response: PathBuf,

    /// Zero-based record index
    #[arg(short, long, default_value = "0")]
    pub index: usize,
}

/// Arguments for an interaction check
#[derive(Args, Debug, Clone)]
pub struct InteractionArgs {
    /// Drug names to check pairwise
    #[arg(value_name = "DRUG", num_args = 0..)]
    pub drugs: Vec<String>,
}

/// Arguments for pill identification
#[derive(Args, Debug, Clone)]
pub struct PillArgs {
    /// Pill shape
    #[arg(short, long)]
    pub shape: Option<Shape>,

    /// Pill color
    #[arg(short, long)]
    pub color: Option<Color>,

    /// Imprint text (partial matches allowed)
    #[arg(short, long)]
    pub imprint: Option<String>,
}

/// Medication list commands
#[derive(Subcommand, Debug, Clone)]
pub enum MedsCommand {
    /// Add a medication
    Add {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Remove a medication by name
    Remove {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// List medications
    List,

    /// Remove all medications
    Clear,

    /// Screen medications against an allergy
    #[command(name = "check-allergy")]
    CheckAllergy {
        #[arg(value_name = "ALLERGY")]
        allergy: String,
    },

    /// Check medications for interactions with each other
    #[command(name = "check-interactions")]
    CheckInteractions,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
