//! Piezas - command-line front end
//!
//! Replays move scripts and plays interactive games on the rules engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use piezas::{PiezasConfig, RenderStyle, ReportOutcome, Session, parse_columns};
use std::io::BufRead;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            moves,
            json,
            render,
        } => {
            init_tracing(PiezasConfig::default().log_filter());
            let columns = parse_columns(&moves)?;
            print_session(&Session::replay(&columns), render, json)
        }
        Command::Replay { config, json } => {
            let config = PiezasConfig::from_file(&config)
                .with_context(|| format!("loading {}", config.display()))?;
            init_tracing(config.log_filter());
            print_session(&Session::replay(config.moves()), *config.render(), json)
        }
        Command::Interactive { render } => {
            init_tracing(PiezasConfig::default().log_filter());
            run_interactive(render)
        }
    }
}

/// Installs the stderr subscriber, preferring `RUST_LOG` over `fallback`.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

/// Prints the board and outcome, or the JSON report.
#[instrument(skip(session))]
fn print_session(session: &Session, render: RenderStyle, json: bool) -> Result<()> {
    let report = session.report();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render.render(session.game()));
        println!("{}", report.outcome);
    }
    Ok(())
}

/// Plays from stdin until the board is full or input ends.
#[instrument]
fn run_interactive(render: RenderStyle) -> Result<()> {
    info!("Starting interactive game");
    let mut session = Session::new();
    println!("{}", render.render(session.game()));
    println!("Player {} to move (column 0-3, or \"reset\"):", session.game().turn());

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("reset") {
            session.reset();
        } else {
            match input.parse::<i32>() {
                Ok(column) => {
                    let result = session.drop_piece(column);
                    if let Some(record) = session.history().last() {
                        println!("{} => {}", record, result);
                    }
                }
                Err(e) => {
                    warn!(input, error = %e, "Ignoring input");
                    println!("Not a column: {}", input);
                    continue;
                }
            }
        }

        println!("{}", render.render(session.game()));
        let outcome = ReportOutcome::from(session.game().game_state());
        if outcome != ReportOutcome::InProgress {
            println!("{}", outcome);
            return Ok(());
        }
        println!("Player {} to move:", session.game().turn());
    }

    info!("Input closed before the board filled");
    Ok(())
}
