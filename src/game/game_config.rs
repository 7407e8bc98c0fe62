//! Per-game configuration: who the computer plays and how strongly.

use crate::game_state::chess_types::Color;
use crate::search::board_scoring::JitterMode;
use crate::search::difficulty::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Color driven by the engine, `None` for two human players.
    pub computer_color: Option<Color>,
    pub difficulty: Difficulty,
    pub jitter: JitterMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            computer_color: Some(Color::Dark),
            difficulty: Difficulty::default(),
            jitter: JitterMode::default(),
        }
    }
}

impl GameConfig {
    pub fn two_players() -> Self {
        Self {
            computer_color: None,
            ..Self::default()
        }
    }

    pub fn with_computer_color(mut self, computer_color: Option<Color>) -> Self {
        self.computer_color = computer_color;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_jitter(mut self, jitter: JitterMode) -> Self {
        self.jitter = jitter;
        self
    }

    #[inline]
    pub fn is_computer(&self, color: Color) -> bool {
        self.computer_color == Some(color)
    }
}

#[cfg(test)]
mod tests {
    use super::GameConfig;
    use crate::game_state::chess_types::Color;
    use crate::search::board_scoring::JitterMode;
    use crate::search::difficulty::Difficulty;

    #[test]
    fn default_has_the_computer_on_black() {
        let config = GameConfig::default();
        assert!(config.is_computer(Color::Dark));
        assert!(!config.is_computer(Color::Light));
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert_eq!(config.jitter, JitterMode::Entropy);
    }

    #[test]
    fn builders_override_fields() {
        let config = GameConfig::two_players()
            .with_difficulty(Difficulty::Hard)
            .with_jitter(JitterMode::Seeded(3));
        assert!(!config.is_computer(Color::Light));
        assert!(!config.is_computer(Color::Dark));
        assert_eq!(config.difficulty, Difficulty::Hard);

        let config = config.with_computer_color(Some(Color::Light));
        assert!(config.is_computer(Color::Light));
    }
}
