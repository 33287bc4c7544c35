//! Player lifecycle hooks driven by a game session, one call per event.

use crate::board_display::PrettyFen;
use crate::fen::FenError;
use crate::types::PieceColor;

/// The move the placeholder player always answers with.
pub const PLACEHOLDER_MOVE: &str = "b3";

pub const DEFAULT_PLAYER_NAME: &str = "Chess Rust Player";

/// Game state as delivered by the session each turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    /// Current position.
    pub fen: String,
    /// Moves known to this client in SAN, oldest first. Drivers that only
    /// see positions record just the moves this player answered.
    pub history: Vec<String>,
    /// Identifier of the game session.
    pub session: String,
}

impl GameState {
    pub fn new(fen: impl Into<String>) -> Self {
        Self {
            fen: fen.into(),
            ..Self::default()
        }
    }
}

/// The player this client controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: PieceColor,
}

/// Hooks called by a game session over the life of one game.
pub trait Ai {
    /// Name sent to the server when registering.
    fn name(&self) -> &str;

    /// Called once, after the game and player are known.
    fn start(&mut self, _game: &GameState, _player: &Player) {}

    /// Called every time the game state changes.
    fn game_updated(&mut self, _game: &GameState) {}

    /// Called on our turn. Returns the move in SAN.
    fn make_move(&mut self, game: &GameState, player: &Player) -> Result<String, AiError>;

    /// Called once when the game is over.
    fn ended(&mut self, _won: bool, _reason: &str) {}
}

/// Logs the board and always plays [`PLACEHOLDER_MOVE`].
#[derive(Debug, Clone)]
pub struct PlaceholderAi {
    name: String,
    moves_made: usize,
}

impl PlaceholderAi {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            moves_made: 0,
        }
    }

    pub fn moves_made(&self) -> usize {
        self.moves_made
    }
}

impl Default for PlaceholderAi {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME)
    }
}

impl Ai for PlaceholderAi {
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&mut self, game: &GameState, player: &Player) {
        tracing::info!(
            player = %self.name,
            color = %player.color,
            session = %game.session,
            "Game started"
        );
    }

    fn make_move(&mut self, game: &GameState, player: &Player) -> Result<String, AiError> {
        let pretty = PrettyFen::new(&game.fen, player.color.as_str())?;
        tracing::info!("\n{}", pretty);

        self.moves_made += 1;
        Ok(PLACEHOLDER_MOVE.to_string())
    }

    fn ended(&mut self, won: bool, reason: &str) {
        tracing::info!(won, reason, moves = self.moves_made, "Game ended");
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("Cannot read position: {0}")]
    Fen(#[from] FenError),
}
