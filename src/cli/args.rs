//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Parse and run tag-delimited equipment inventory commands
#[derive(Parser, Debug)]
#[command(name = "eqparse")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Settings file applied over the global config
    #[arg(short, long, global = true, env = "EQPARSE_CONFIG_FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse one line and show the resulting command
    Parse {
        /// The line, e.g. `update sn/S1404115ASF c/2000` (words are joined with spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Execute lines in order against an empty in-memory inventory
    Run {
        /// One quoted line per argument; reads lines from stdin when omitted
        lines: Vec<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show global config path
    Path,
}
