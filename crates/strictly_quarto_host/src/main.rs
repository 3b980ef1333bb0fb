//! Strictly Quarto - console host.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_quarto::RenderView;
use strictly_quarto_host::{Console, HostConfig, MemoryStore, TableService};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            advanced,
            player_one,
            player_two,
        } => {
            let config = match config {
                Some(path) => HostConfig::from_file(path)?,
                None => HostConfig::default(),
            };
            run_play(config.with_overrides(player_one, player_two, advanced))
        }
        Command::Show { key } => run_show(&key),
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Runs a hot-seat game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: HostConfig) -> Result<()> {
    init_tracing(config.log_filter());

    let service = TableService::new(MemoryStore::new());
    let id = service.challenge(config.player_one(), config.player_two(), config.channel())?;
    service.choose_rules(&id, *config.ruleset())?;
    service.accept(&id, &mut rand::rng())?;
    info!(%id, ruleset = %config.ruleset(), "Game started");

    let console = Console::new(service, id);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    console.run(stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Decodes a renderer key and prints the board
fn run_show(key: &str) -> Result<()> {
    init_tracing("info");

    let view = RenderView::from_key(key)?;
    print!("{}", view.board.display());
    if let Some(piece) = view.piece_on_offer {
        println!("On offer: {} ({})", piece, piece.describe());
    }
    if let Some(index) = view.last_placement {
        println!("Last placement: {}", index);
    }
    if let Some(fields) = view.winning_fields {
        println!("Winning fields: {:?}", fields);
    }
    Ok(())
}
