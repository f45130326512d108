//! Game mode selection.

use noughts_tictactoe::Mark;
use serde::{Deserialize, Serialize};

/// Game mode - who is the opponent?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Human plays X against the minimax AI playing O.
    #[default]
    #[value(name = "single", alias = "single-player")]
    #[serde(alias = "single-player")]
    Single,
    /// Two humans share the terminal.
    #[value(name = "multi", alias = "multi-player")]
    #[serde(alias = "multi-player")]
    Multi,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::Single => "Single Player",
            GameMode::Multi => "Multi Player",
        }
    }

    /// Mark played by the AI, if this mode has one.
    ///
    /// The AI always takes the mark that moves second.
    pub fn ai_mark(&self) -> Option<Mark> {
        match self {
            GameMode::Single => Some(Mark::O),
            GameMode::Multi => None,
        }
    }

    /// Returns the other mode.
    pub fn toggle(self) -> Self {
        match self {
            GameMode::Single => GameMode::Multi,
            GameMode::Multi => GameMode::Single,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_single_player_has_ai() {
        assert_eq!(GameMode::Single.ai_mark(), Some(Mark::O));
        assert_eq!(GameMode::Multi.ai_mark(), None);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(GameMode::default().toggle(), GameMode::Multi);
        assert_eq!(GameMode::Multi.toggle(), GameMode::Single);
    }
}
