//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Composite trees of leaves and containers: uniform add, remove and depth-marked display
#[derive(Parser, Debug)]
#[command(name = "comptree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level, repeat for more output (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (overrides the global config)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the sample organization, one marker per depth level
    Display {
        /// Depth of the root node (default: from config, else 0)
        #[arg(long)]
        depth: Option<usize>,
    },

    /// Print the sample organization as a box-drawing outline
    Tree,

    /// Try to add a device below a device (always rejected)
    Misuse {
        /// Name of the device to attach
        #[arg(default_value = "printer")]
        name: String,
    },

    /// Show effective settings as TOML
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
