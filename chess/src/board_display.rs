//! Human-readable board diagrams rendered from FEN, for debugging and logs.

use std::fmt;

use crate::fen::{check_ranks, parse_fen, FenError, FenRecord};

const BORDER: &str = "   +-----------------+";
const FILE_LABELS: &str = "     a b c d e f g h";

/// An 8x8 board for display purposes only.
///
/// Piece letters are kept verbatim; case carries the color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayBoard {
    squares: [[Option<char>; 8]; 8],
}

impl DisplayBoard {
    /// Parse the board placement from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Self::from_record(&parse_fen(fen)?)
    }

    /// Build the board from a record, rechecking its ranks since the fields
    /// are public.
    pub fn from_record(record: &FenRecord) -> Result<Self, FenError> {
        check_ranks(record.ranks.as_slice())?;

        let mut squares = [[None; 8]; 8];
        for (rank_idx, rank_str) in record.ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    squares[rank][file] = Some(c);
                    file += 1;
                }
            }
        }

        Ok(DisplayBoard { squares })
    }

    /// Piece letter on a square, `file` and `rank` counted from a1 = (0, 0).
    pub fn piece_at(&self, file: u8, rank: u8) -> Option<char> {
        if file > 7 || rank > 7 {
            return None;
        }
        self.squares[rank as usize][file as usize]
    }

    /// One rendered body row, e.g. ` 8 | r n b q k b n r |`.
    ///
    /// `rank` is 0-based from rank 1.
    pub fn render_rank(&self, rank: u8) -> String {
        let mut row = format!(" {} |", rank + 1);
        for file in 0..8 {
            row.push(' ');
            row.push(self.piece_at(file, rank).unwrap_or('.'));
        }
        row.push_str(" |");
        row
    }
}

/// Whether the side to move is the viewer or the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Perspective {
    Us,
    Them,
}

impl Perspective {
    /// Compare the side to move against the first character of the viewer color.
    pub fn of(side_to_move: char, viewer_color: &str) -> Result<Self, FenError> {
        let viewer = viewer_color
            .chars()
            .next()
            .ok_or(FenError::EmptyViewerColor)?;
        Ok(if side_to_move == viewer {
            Self::Us
        } else {
            Self::Them
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Them => "them",
        }
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A FEN position as seen by one player, rendered through [`fmt::Display`].
#[derive(Debug, Clone)]
pub struct PrettyFen {
    record: FenRecord,
    board: DisplayBoard,
    perspective: Perspective,
}

impl PrettyFen {
    pub fn new(fen: &str, viewer_color: &str) -> Result<Self, FenError> {
        let record = parse_fen(fen)?;
        Self::from_record(record, viewer_color)
    }

    pub fn from_record(record: FenRecord, viewer_color: &str) -> Result<Self, FenError> {
        let perspective = Perspective::of(record.side_to_move, viewer_color)?;
        let board = DisplayBoard::from_record(&record)?;
        Ok(Self {
            record,
            board,
            perspective,
        })
    }

    pub fn record(&self) -> &FenRecord {
        &self.record
    }

    pub fn perspective(&self) -> Perspective {
        self.perspective
    }
}

impl fmt::Display for PrettyFen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Move: {}", self.record.fullmove)?;
        writeln!(
            f,
            "Side to move: {} ({})",
            self.record.side_to_move, self.perspective
        )?;
        writeln!(f, "{BORDER}")?;
        for rank in (0..8).rev() {
            writeln!(f, "{}", self.board.render_rank(rank))?;
        }
        writeln!(f, "{BORDER}")?;
        writeln!(f, "{FILE_LABELS}")
    }
}

/// Pretty format a FEN string for the player whose color is `viewer_color`.
///
/// Fails on malformed input instead of drawing a partial board.
pub fn format_board(fen: &str, viewer_color: &str) -> Result<String, FenError> {
    Ok(PrettyFen::new(fen, viewer_color)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::START_FEN;
    use proptest::prelude::*;

    fn body_rows(output: &str) -> Vec<&str> {
        output.lines().skip(3).take(8).collect()
    }

    #[test]
    fn test_starting_position() {
        let board = DisplayBoard::from_fen(START_FEN).unwrap();
        assert_eq!(board.piece_at(0, 0), Some('R'));
        assert_eq!(board.piece_at(4, 0), Some('K'));
        assert_eq!(board.piece_at(3, 7), Some('q'));
        assert_eq!(board.piece_at(4, 4), None);
        assert_eq!(board.piece_at(8, 0), None);
    }

    #[test]
    fn test_empty_board() {
        let board = DisplayBoard::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        for rank in 0..8 {
            for file in 0..8 {
                assert_eq!(board.piece_at(file, rank), None);
            }
        }
    }

    #[test]
    fn test_start_position_for_white() {
        let expected = "\
Move: 1
Side to move: w (us)
   +-----------------+
 8 | r n b q k b n r |
 7 | p p p p p p p p |
 6 | . . . . . . . . |
 5 | . . . . . . . . |
 4 | . . . . . . . . |
 3 | . . . . . . . . |
 2 | P P P P P P P P |
 1 | R N B Q K B N R |
   +-----------------+
     a b c d e f g h
";
        assert_eq!(format_board(START_FEN, "white").unwrap(), expected);
    }

    #[test]
    fn test_start_position_for_black_is_them() {
        let output = format_board(START_FEN, "black").unwrap();
        assert_eq!(output.lines().nth(1), Some("Side to move: w (them)"));
    }

    #[test]
    fn test_seven_ranks_is_an_error() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let err = format_board(fen, "white").unwrap_err();
        assert_eq!(err, FenError::RankCount { found: 7 });
    }

    fn hand_built(ranks: &[&str]) -> FenRecord {
        FenRecord {
            ranks: ranks.iter().map(|r| r.to_string()).collect(),
            side_to_move: 'w',
            castling: "-".to_string(),
            en_passant: "-".to_string(),
            halfmove: "0".to_string(),
            fullmove: "1".to_string(),
        }
    }

    #[test]
    fn test_hand_built_record_with_nine_ranks() {
        let record = hand_built(&["8"; 9]);
        assert_eq!(
            DisplayBoard::from_record(&record),
            Err(FenError::RankCount { found: 9 })
        );
    }

    #[test]
    fn test_hand_built_record_with_wide_rank() {
        let record = hand_built(&["9", "8", "8", "8", "8", "8", "8", "8p"]);
        let err = PrettyFen::from_record(record, "white").unwrap_err();
        assert_eq!(err, FenError::InvalidEmptyRun { rank: 8, digit: 9 });

        let record = hand_built(&["8", "8", "8", "8", "8", "8", "8", "8p"]);
        let err = PrettyFen::from_record(record, "white").unwrap_err();
        assert_eq!(err, FenError::RankWidth { rank: 1, squares: 9 });
    }

    #[test]
    fn test_runs_between_pieces() {
        let output = format_board("p3p3/8/8/8/8/8/8/8 b - - 0 12", "black").unwrap();
        assert_eq!(output.lines().next(), Some("Move: 12"));
        assert_eq!(output.lines().nth(1), Some("Side to move: b (us)"));
        assert_eq!(body_rows(&output)[0], " 8 | p . . . p . . . |");
    }

    #[test]
    fn test_unknown_piece_letters_are_kept() {
        let board = DisplayBoard::from_fen("x7/8/8/8/8/8/8/7Z w - - 0 1").unwrap();
        assert_eq!(board.piece_at(0, 7), Some('x'));
        assert_eq!(board.piece_at(7, 0), Some('Z'));
    }

    #[test]
    fn test_empty_viewer_color() {
        assert_eq!(
            format_board(START_FEN, ""),
            Err(FenError::EmptyViewerColor)
        );
    }

    fn rank_strategy() -> impl Strategy<Value = String> {
        // Random squares, then compress runs of empties into digits.
        prop::collection::vec(
            prop_oneof![
                Just(None::<u8>),
                prop::sample::select(b"pnbrqkPNBRQK".to_vec()).prop_map(Some),
            ],
            8,
        )
        .prop_map(|squares| {
            let mut out = String::new();
            let mut empties = 0;
            for sq in squares {
                match sq {
                    None => empties += 1,
                    Some(p) => {
                        if empties > 0 {
                            out.push_str(&empties.to_string());
                            empties = 0;
                        }
                        out.push(p as char);
                    }
                }
            }
            if empties > 0 {
                out.push_str(&empties.to_string());
            }
            out
        })
    }

    proptest! {
        #[test]
        fn prop_every_board_has_eight_rows_of_eight_cells(
            ranks in prop::collection::vec(rank_strategy(), 8),
            side in prop::sample::select(vec!['w', 'b']),
            fullmove in 1u32..500,
            viewer in prop::sample::select(vec!["white", "black"]),
        ) {
            let fen = format!("{} {} - - 0 {}", ranks.join("/"), side, fullmove);
            let output = format_board(&fen, viewer).unwrap();

            let rows = body_rows(&output);
            prop_assert_eq!(rows.len(), 8);
            for (idx, row) in rows.iter().enumerate() {
                let prefix = format!(" {} |", 8 - idx);
                prop_assert!(row.starts_with(&prefix));
                prop_assert!(row.ends_with(" |"));
                let cells = &row[prefix.len()..row.len() - 2];
                prop_assert_eq!(cells.len(), 16);
                for cell in cells.as_bytes().chunks(2) {
                    prop_assert_eq!(cell[0], b' ');
                }
            }

            let header = format!("Move: {fullmove}");
            prop_assert_eq!(output.lines().next(), Some(header.as_str()));
            let label = if viewer.starts_with(side) { "us" } else { "them" };
            let side_line = format!("Side to move: {side} ({label})");
            prop_assert_eq!(output.lines().nth(1), Some(side_line.as_str()));
        }
    }
}
