//! Offline driver that feeds FEN positions to an [`Ai`] one turn at a time.
//!
//! Each non-blank line of input is one position, as a game session would
//! deliver it. Lines starting with `#` are comments.

use std::io::{BufRead, Write};

use chess::{parse_fen, Ai, AiError, FenError, GameState, PieceColor, Player};

/// Session id reported to the player during a replay.
pub const REPLAY_SESSION: &str = "offline-replay";

/// Reason passed to [`Ai::ended`] once the input runs out.
pub const END_REASON: &str = "input exhausted";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    pub positions: usize,
    pub moves: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Fen {
        line: usize,
        #[source]
        source: FenError,
    },

    #[error("line {line}: player failed to move: {source}")]
    Ai {
        line: usize,
        #[source]
        source: AiError,
    },
}

/// Run every position in `input` through `ai`, writing answered moves to `out`.
///
/// `start` is called before the first position and `ended` after the last.
/// `make_move` is only called when the side to move matches the player color.
pub fn replay<A, R, W>(
    ai: &mut A,
    player: &Player,
    input: R,
    mut out: W,
) -> Result<ReplaySummary, ReplayError>
where
    A: Ai + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut game = GameState {
        session: REPLAY_SESSION.to_string(),
        ..GameState::default()
    };
    let mut summary = ReplaySummary::default();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let fen = line.trim();
        if fen.is_empty() || fen.starts_with('#') {
            continue;
        }

        let record = parse_fen(fen).map_err(|source| ReplayError::Fen {
            line: line_no,
            source,
        })?;
        game.fen = fen.to_string();

        if summary.positions == 0 {
            ai.start(&game, player);
        }
        summary.positions += 1;
        ai.game_updated(&game);

        if PieceColor::from_fen_char(record.side_to_move) != Some(player.color) {
            tracing::debug!(line = line_no, "Opponent to move, skipping");
            continue;
        }

        let san = ai
            .make_move(&game, player)
            .map_err(|source| ReplayError::Ai {
                line: line_no,
                source,
            })?;
        tracing::debug!(line = line_no, %san, "Move answered");
        writeln!(out, "{}: {}", record.fullmove, san)?;
        game.history.push(san);
        summary.moves += 1;
    }

    if summary.positions == 0 {
        tracing::warn!("No positions in input");
    } else {
        ai.ended(false, END_REASON);
    }

    Ok(summary)
}
