use std::fmt;
use std::time::Duration;

/// Speed and obstacle configuration for one difficulty stage.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct StageSettings {
    /// Time between simulation ticks.
    pub tick_interval: Duration,
    /// Obstacles generated when the stage is entered.
    pub obstacle_count: usize,
    /// Minimum score required to enter the stage.
    pub score_threshold: u32,
}

/// Stage table, in order.
pub const STAGES: [StageSettings; 3] = [
    StageSettings {
        tick_interval: Duration::from_millis(100),
        obstacle_count: 0,
        score_threshold: 0,
    },
    StageSettings {
        tick_interval: Duration::from_millis(80),
        obstacle_count: 3,
        score_threshold: 30,
    },
    StageSettings {
        tick_interval: Duration::from_millis(60),
        obstacle_count: 5,
        score_threshold: 60,
    },
];

/// Difficulty tier. Only ever moves forward within one game.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Stage {
    #[default]
    One,
    Two,
    Three,
}

impl Stage {
    /// Returns the 1-based stage number shown to the player.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    #[must_use]
    pub fn settings(self) -> &'static StageSettings {
        &STAGES[usize::from(self.number() - 1)]
    }

    #[must_use]
    pub fn tick_interval(self) -> Duration {
        self.settings().tick_interval
    }

    #[must_use]
    pub fn obstacle_count(self) -> usize {
        self.settings().obstacle_count
    }

    /// Returns the immediately following stage, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::One => Some(Self::Two),
            Self::Two => Some(Self::Three),
            Self::Three => None,
        }
    }

    /// Returns the stage to advance to for `score`.
    ///
    /// Only the next stage is considered, so one call advances at most one
    /// stage even if the score already satisfies a later threshold.
    #[must_use]
    pub fn promotion(self, score: u32) -> Option<Self> {
        let next = self.next()?;
        (score >= next.settings().score_threshold).then_some(next)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use proptest::prelude::*;

    use super::Stage;

    #[test]
    fn stage_table_matches_difficulty_curve() {
        assert_eq!(Stage::One.tick_interval(), Duration::from_millis(100));
        assert_eq!(Stage::Two.tick_interval(), Duration::from_millis(80));
        assert_eq!(Stage::Three.tick_interval(), Duration::from_millis(60));

        assert_eq!(Stage::One.obstacle_count(), 0);
        assert_eq!(Stage::Two.obstacle_count(), 3);
        assert_eq!(Stage::Three.obstacle_count(), 5);
    }

    #[test]
    fn promotion_requires_threshold() {
        assert_eq!(Stage::One.promotion(20), None);
        assert_eq!(Stage::One.promotion(30), Some(Stage::Two));
        assert_eq!(Stage::Two.promotion(50), None);
        assert_eq!(Stage::Two.promotion(60), Some(Stage::Three));
    }

    #[test]
    fn promotion_never_skips_a_stage() {
        assert_eq!(Stage::One.promotion(500), Some(Stage::Two));
    }

    #[test]
    fn final_stage_is_terminal() {
        assert_eq!(Stage::Three.promotion(u32::MAX), None);
    }

    #[test]
    fn display_uses_stage_number() {
        assert_eq!(Stage::Two.to_string(), "2");
    }

    proptest! {
        #[test]
        fn promotion_only_moves_forward_past_its_threshold(
            scores in proptest::collection::vec(0u32..200, 1..32)
        ) {
            let mut stage = Stage::One;
            let mut score = 0;
            for gain in scores {
                score += gain;
                if let Some(next) = stage.promotion(score) {
                    prop_assert!(next > stage);
                    prop_assert_eq!(Some(next), stage.next());
                    prop_assert!(score >= next.settings().score_threshold);
                    stage = next;
                }
            }
        }
    }
}
