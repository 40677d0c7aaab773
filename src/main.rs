//! HMAC Rock-Paper-Scissors
//!
//! Command line entry point. Every argument is a move, in order; settings
//! come from `HMAC_RPS_KEY_BYTES` and `HMAC_RPS_ANNOUNCE`.

use std::io;

use clap::Parser;
use rand::rngs::OsRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hmac_rps::{MoveSet, Session, SessionConfig, USAGE, VERSION};

/// Generalized rock-paper-scissors with a verifiable computer move.
///
/// No flags are defined, so labels such as `--help` are moves too.
#[derive(Parser, Debug)]
#[command(name = "hmac-rps", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Moves, in cyclic order. Each move beats the half of the others listed after it.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    moves: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the game.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!("HMAC RPS v{}", VERSION);

    let moves = match MoveSet::from_args(cli.moves) {
        Ok(moves) => moves,
        Err(err) => {
            info!(%err, "move list rejected");
            println!("Error: {}", err);
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let config = SessionConfig::from_env()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(moves, config, OsRng, stdin.lock(), stdout.lock())?;
    session.run()?;

    Ok(())
}
