//! Player color type shared by the player lifecycle and the CLI.

use std::str::FromStr;

/// Project-owned color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    pub fn from_fen_char(c: char) -> Option<Self> {
        match c {
            'w' => Some(Self::White),
            'b' => Some(Self::Black),
            _ => None,
        }
    }
}

impl FromStr for PieceColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Self::White),
            "black" | "b" => Ok(Self::Black),
            _ => Err(ColorParseError(s.to_string())),
        }
    }
}

impl std::fmt::Display for PieceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid color: {0:?} (expected \"white\" or \"black\")")]
pub struct ColorParseError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_names_and_letters() {
        assert_eq!("white".parse::<PieceColor>().unwrap(), PieceColor::White);
        assert_eq!("Black".parse::<PieceColor>().unwrap(), PieceColor::Black);
        assert_eq!("w".parse::<PieceColor>().unwrap(), PieceColor::White);
        assert!("red".parse::<PieceColor>().is_err());
    }

    #[test]
    fn test_color_name_starts_with_fen_char() {
        for color in [PieceColor::White, PieceColor::Black] {
            let letter = color.as_str().chars().next().unwrap();
            assert_eq!(PieceColor::from_fen_char(letter), Some(color));
        }
        assert_eq!(PieceColor::from_fen_char('x'), None);
    }
}
