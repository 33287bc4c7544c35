//! Splitting and validating Forsyth-Edwards Notation records.

use serde::Serialize;

/// Number of whitespace-separated fields a FEN record must carry.
pub const FEN_FIELDS: usize = 6;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A FEN string split into its fields.
///
/// Only the board, the side to move and the fullmove number are interpreted.
/// The remaining fields are carried as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FenRecord {
    /// Rank strings from rank 8 down to rank 1.
    pub ranks: Vec<String>,
    pub side_to_move: char,
    pub castling: String,
    pub en_passant: String,
    pub halfmove: String,
    pub fullmove: String,
}

/// Parse a FEN string into a [`FenRecord`].
///
/// Fields after the sixth are ignored.
pub fn parse_fen(fen: &str) -> Result<FenRecord, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() < FEN_FIELDS {
        return Err(FenError::MissingFields { found: parts.len() });
    }

    let ranks: Vec<&str> = parts[0].split('/').collect();
    check_ranks(ranks.as_slice())?;

    // split_whitespace never yields empty fields
    let side_to_move = parts[1].chars().next().unwrap_or_default();

    Ok(FenRecord {
        ranks: ranks.into_iter().map(str::to_string).collect(),
        side_to_move,
        castling: parts[2].to_string(),
        en_passant: parts[3].to_string(),
        halfmove: parts[4].to_string(),
        fullmove: parts[5].to_string(),
    })
}

/// Check that `ranks` holds exactly 8 ranks of 8 squares each, rank 8 first.
pub fn check_ranks<S: AsRef<str>>(ranks: &[S]) -> Result<(), FenError> {
    if ranks.len() != 8 {
        return Err(FenError::RankCount { found: ranks.len() });
    }
    for (idx, rank) in ranks.iter().enumerate() {
        rank_width(rank.as_ref(), 8 - idx as u8)?;
    }
    Ok(())
}

/// Count the squares a rank string covers, rejecting anything other than 8.
///
/// `rank` is the 1-based rank number used in error messages.
pub fn rank_width(rank_str: &str, rank: u8) -> Result<usize, FenError> {
    let mut squares = 0usize;
    for c in rank_str.chars() {
        match c.to_digit(10) {
            Some(run @ 1..=8) => squares += run as usize,
            Some(digit) => return Err(FenError::InvalidEmptyRun { rank, digit }),
            None => squares += 1,
        }
    }

    if squares != 8 {
        return Err(FenError::RankWidth { rank, squares });
    }
    Ok(squares)
}

/// Malformed FEN input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("Invalid FEN: expected 6 fields, found {found}")]
    MissingFields { found: usize },
    #[error("Invalid board layout: expected 8 ranks, found {found}")]
    RankCount { found: usize },
    #[error("Invalid board layout: rank {rank} covers {squares} squares, expected 8")]
    RankWidth { rank: u8, squares: usize },
    #[error("Invalid empty-square run '{digit}' on rank {rank}")]
    InvalidEmptyRun { rank: u8, digit: u32 },
    #[error("Viewer color must not be empty")]
    EmptyViewerColor,
}
