//! Command-line interface for strictly_quarto.

use clap::{Parser, Subcommand};

/// Strictly Quarto - Quarto rules engine with a local console
#[derive(Parser, Debug)]
#[command(name = "strictly_quarto")]
#[command(about = "Play Quarto at the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game on this terminal
    Play {
        /// Path to a host config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Let 2x2 squares win
        #[arg(long)]
        advanced: bool,

        /// Name of the first player
        #[arg(long)]
        player_one: Option<String>,

        /// Name of the second player
        #[arg(long)]
        player_two: Option<String>,
    },

    /// Print the board encoded in a renderer key
    Show {
        /// Key of the form `<slots>;<offer>;<last>;<winning>`
        key: String,
    },
}
