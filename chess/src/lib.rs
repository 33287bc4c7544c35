//! FEN parsing, debug board diagrams and the player lifecycle for a
//! turn-based chess client.

pub mod board_display;
pub mod fen;
pub mod player;
pub mod types;

pub use board_display::{format_board, DisplayBoard, Perspective, PrettyFen};
pub use fen::{parse_fen, FenError, FenRecord, START_FEN};
pub use player::{Ai, AiError, GameState, PlaceholderAi, Player};
pub use types::{ColorParseError, PieceColor};
