//! Scoring and difficulty rules.
//!
//! Both policies are pure: they map counters to score deltas and speeds and
//! hold no game state of their own.

use super::config::EngineConfig;

/// Flat award per locked piece when [`ScoringPolicy::award_per_piece_bonus`] is set.
pub const PER_PIECE_BONUS: usize = 25;

/// Points for clearing `rows_cleared` rows with a single lock.
///
/// `(1 << rows) * 100` for one or more rows, zero otherwise:
///
/// ```
/// use tetro_engine::score_delta;
///
/// assert_eq!(score_delta(0), 0);
/// assert_eq!(score_delta(1), 200);
/// assert_eq!(score_delta(4), 1600);
/// ```
#[must_use]
pub const fn score_delta(rows_cleared: usize) -> usize {
    if rows_cleared == 0 {
        0
    } else {
        (1 << rows_cleared) * 100
    }
}

/// Score awarded when a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoringPolicy {
    /// Adds [`PER_PIECE_BONUS`] to every lock, with or without cleared rows.
    pub award_per_piece_bonus: bool,
}

impl ScoringPolicy {
    #[must_use]
    pub const fn lock_score(self, rows_cleared: usize) -> usize {
        let bonus = if self.award_per_piece_bonus {
            PER_PIECE_BONUS
        } else {
            0
        };
        score_delta(rows_cleared) + bonus
    }
}

/// Forced-drop cadence.
///
/// Speed is measured in ticks per forced drop, so a smaller value falls
/// faster. It starts at `initial_speed`, drops by one every `step` forced
/// drops and never goes below `min_speed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyPolicy {
    pub initial_speed: usize,
    pub min_speed: usize,
    pub step: usize,
}

impl DifficultyPolicy {
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            initial_speed: config.initial_speed,
            min_speed: config.min_speed,
            step: config.pieces_per_speed_step,
        }
    }

    /// Speed after the `forced_drops`-th forced drop, given the current speed.
    #[must_use]
    pub fn next_speed(self, speed: usize, forced_drops: usize) -> usize {
        if forced_drops > 0 && forced_drops.is_multiple_of(self.step) {
            speed.saturating_sub(1).max(self.min_speed)
        } else {
            speed
        }
    }
}
