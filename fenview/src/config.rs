//! Configuration for the fenview CLI.
//!
//! Every value has a compile-time default and can be overridden at runtime
//! via a dedicated environment variable. Command-line flags take precedence
//! over both.

use chess::player::DEFAULT_PLAYER_NAME;
use chess::PieceColor;

/// Default color the board is viewed from.
const DEFAULT_COLOR: PieceColor = PieceColor::White;

/// Default log filter when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info";

/// Get the color the board is viewed from.
///
/// Priority:
/// 1. `FENVIEW_COLOR` env variable if set (falls back to default if the
///    value is not a color)
/// 2. `white` as fallback
pub fn get_default_color() -> PieceColor {
    if let Ok(color) = std::env::var("FENVIEW_COLOR") {
        return color.parse().unwrap_or(DEFAULT_COLOR);
    }

    DEFAULT_COLOR
}

/// Get the player name used by `replay`.
///
/// Priority:
/// 1. `FENVIEW_PLAYER_NAME` env variable if set
/// 2. `Chess Rust Player` as fallback
pub fn get_player_name() -> String {
    if let Ok(name) = std::env::var("FENVIEW_PLAYER_NAME") {
        return name;
    }

    DEFAULT_PLAYER_NAME.to_string()
}

/// Get the log filter used when `RUST_LOG` is unset.
///
/// Priority:
/// 1. `FENVIEW_LOG` env variable if set
/// 2. `info` as fallback
pub fn get_log_filter() -> String {
    if let Ok(filter) = std::env::var("FENVIEW_LOG") {
        return filter;
    }

    DEFAULT_LOG_FILTER.to_string()
}
