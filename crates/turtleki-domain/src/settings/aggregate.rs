use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// The single settings record. Mutated only by explicit user settings
/// changes, never by the reward ledger's earning paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsState {
    daily_ki_cap: u32,
    difficulty: Difficulty,
    reduce_motion: bool,
}

impl SettingsState {
    pub const MIN_DAILY_KI_CAP: u32 = 10;
    pub const MAX_DAILY_KI_CAP: u32 = 200;
    pub const DEFAULT_DAILY_KI_CAP: u32 = 50;

    pub fn new() -> Self {
        Self {
            daily_ki_cap: Self::DEFAULT_DAILY_KI_CAP,
            difficulty: Difficulty::Normal,
            reduce_motion: false,
        }
    }

    pub fn restore(daily_ki_cap: u32, difficulty: Difficulty, reduce_motion: bool) -> Self {
        Self {
            daily_ki_cap,
            difficulty,
            reduce_motion,
        }
    }

    pub fn daily_ki_cap(&self) -> u32 {
        self.daily_ki_cap
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn reduce_motion(&self) -> bool {
        self.reduce_motion
    }

    /// Clamp to the allowed range rather than rejecting out-of-range
    /// input; the slider UI can push any value here.
    pub fn set_daily_ki_cap(&mut self, cap: u32) {
        self.daily_ki_cap = cap.clamp(Self::MIN_DAILY_KI_CAP, Self::MAX_DAILY_KI_CAP);
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn set_reduce_motion(&mut self, reduce_motion: bool) {
        self.reduce_motion = reduce_motion;
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_launch() {
        let settings = SettingsState::new();
        assert_eq!(settings.daily_ki_cap(), 50);
        assert_eq!(settings.difficulty(), Difficulty::Normal);
        assert!(!settings.reduce_motion());
    }

    #[test]
    fn cap_is_clamped_to_range() {
        let mut settings = SettingsState::new();

        settings.set_daily_ki_cap(5);
        assert_eq!(settings.daily_ki_cap(), 10);

        settings.set_daily_ki_cap(1000);
        assert_eq!(settings.daily_ki_cap(), 200);

        settings.set_daily_ki_cap(120);
        assert_eq!(settings.daily_ki_cap(), 120);
    }

    #[test]
    fn difficulty_round_trips_through_strings() {
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            assert_eq!(Difficulty::parse(difficulty.as_str()), Some(difficulty));
        }
        assert_eq!(Difficulty::parse("nightmare"), None);
    }
}
