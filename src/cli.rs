//! Command-line interface for piezas.

use clap::{Parser, Subcommand};
use piezas::RenderStyle;

/// Piezas - 3x4 vertical board game rules engine
#[derive(Parser, Debug)]
#[command(name = "piezas")]
#[command(about = "Play and score Piezas games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a move script given on the command line
    Play {
        /// Columns to drop, e.g. "3,2,3,1"
        #[arg(short, long, allow_hyphen_values = true)]
        moves: String,

        /// Print the JSON report instead of the board
        #[arg(long)]
        json: bool,

        /// Board output style (grid or compact)
        #[arg(long, default_value = "grid")]
        render: RenderStyle,
    },

    /// Replay the move script from a config file
    Replay {
        /// Path to the TOML config
        #[arg(long, default_value = "piezas.toml")]
        config: std::path::PathBuf,

        /// Print the JSON report instead of the board
        #[arg(long)]
        json: bool,
    },

    /// Read one column per line from stdin ("reset" clears the board)
    Interactive {
        /// Board output style (grid or compact)
        #[arg(long, default_value = "grid")]
        render: RenderStyle,
    },
}
