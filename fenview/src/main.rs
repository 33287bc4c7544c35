//! fenview - debug viewer for FEN positions.
//!
//! Two subcommands:
//!
//! 1. **`show`**: pretty prints one FEN position as an ASCII board, labelled
//!    with whether the side to move is us or them.
//! 2. **`replay`**: reads one FEN per line from a file or stdin and drives the
//!    placeholder player through its lifecycle as a game session would,
//!    printing every move it answers.
//!
//! Diagrams and moves go to stdout; logs go to stderr. See [`config`] for the
//! environment variables that change the defaults.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use chess::{FenError, FenRecord, Perspective, PieceColor, PlaceholderAi, Player, PrettyFen};
use clap::{Parser, Subcommand};
use serde::Serialize;

mod config;
mod replay;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "fenview", about = "Pretty print FEN positions for debugging")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one position as a board diagram.
    Show {
        /// The FEN string. Quote it, it contains spaces.
        fen: String,

        /// Color to view from; only its first letter is compared with the
        /// side to move. Defaults to `FENVIEW_COLOR` or `white`.
        #[arg(short, long)]
        color: Option<String>,

        /// Print the parsed fields as JSON instead of a diagram.
        #[arg(long)]
        json: bool,
    },

    /// Feed positions, one per line, to the placeholder player.
    Replay {
        /// Read positions from this file instead of stdin.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Color the player controls.
        #[arg(short, long)]
        color: Option<PieceColor>,

        /// Player name. Defaults to `FENVIEW_PLAYER_NAME`.
        #[arg(short, long)]
        name: Option<String>,
    },
}

/// Error type for CLI operations.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Fen(#[from] FenError),

    #[error(transparent)]
    Replay(#[from] replay::ReplayError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON view of a position for `show --json`.
#[derive(Serialize)]
struct ShowJson<'a> {
    #[serde(flatten)]
    record: &'a FenRecord,
    perspective: Perspective,
}

/// Render `fen` as a diagram or JSON into `out`.
fn show<W: Write>(fen: &str, color: &str, json: bool, mut out: W) -> Result<(), CliError> {
    let pretty = PrettyFen::new(fen, color)?;

    if json {
        let view = ShowJson {
            record: pretty.record(),
            perspective: pretty.perspective(),
        };
        serde_json::to_writer_pretty(&mut out, &view)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", pretty)?;
    }

    Ok(())
}

fn run_replay(
    file: Option<PathBuf>,
    color: PieceColor,
    name: String,
) -> anyhow::Result<replay::ReplaySummary> {
    let player = Player {
        name: name.clone(),
        color,
    };
    let mut ai = PlaceholderAi::new(name);
    let stdout = io::stdout();

    let summary = match file {
        Some(path) => {
            let reader = File::open(&path)
                .map(BufReader::new)
                .with_context(|| format!("failed to open {}", path.display()))?;
            replay::replay(&mut ai, &player, reader, stdout.lock())
                .map_err(CliError::from)
                .with_context(|| format!("replay of {} failed", path.display()))?
        }
        None => replay::replay(&mut ai, &player, io::stdin().lock(), stdout.lock())
            .map_err(CliError::from)
            .context("replay of stdin failed")?,
    };

    Ok(summary)
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config::get_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { fen, color, json } => {
            let color = color.unwrap_or_else(|| config::get_default_color().to_string());
            show(&fen, &color, json, io::stdout().lock()).context("cannot show position")?;
        }
        Commands::Replay { file, color, name } => {
            let color = color.unwrap_or_else(config::get_default_color);
            let name = name.unwrap_or_else(config::get_player_name);

            tracing::info!(%color, %name, "Starting replay");
            let summary = run_replay(file, color, name)?;
            tracing::info!(
                positions = summary.positions,
                moves = summary.moves,
                "Replay finished"
            );
        }
    }

    Ok(())
}
