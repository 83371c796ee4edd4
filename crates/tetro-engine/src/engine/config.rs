use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Tunable parameters of a game session.
///
/// Every field has a default matching the classic console game, so a config
/// file only needs the fields it changes:
///
/// ```
/// use tetro_engine::EngineConfig;
///
/// let config: EngineConfig = serde_json::from_str(r#"{ "seed": 7, "min-speed": 5 }"#).unwrap();
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.min_speed, 5);
/// assert_eq!(config.initial_speed, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct EngineConfig {
    /// Board width including both side walls.
    pub width: usize,
    /// Board height including the floor.
    pub height: usize,
    /// Real-time length of one tick, in milliseconds.
    pub tick_period_ms: u64,
    /// Ticks between forced drops at the start of a game.
    pub initial_speed: usize,
    /// Lowest ticks-per-drop the difficulty ramp may reach.
    pub min_speed: usize,
    /// Forced drops between two speed-ups.
    pub pieces_per_speed_step: usize,
    /// Award [`PER_PIECE_BONUS`](crate::PER_PIECE_BONUS) on every lock.
    pub award_per_piece_bonus: bool,
    /// Fixed seed for the piece randomizer; OS entropy when `None`.
    pub seed: Option<u64>,
    /// Commands buffered between ticks before further ones are dropped.
    pub input_queue_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 12,
            height: 21,
            tick_period_ms: 50,
            initial_speed: 20,
            min_speed: 10,
            pieces_per_speed_step: 50,
            award_per_piece_bonus: false,
            seed: None,
            input_queue_capacity: 32,
        }
    }
}

impl EngineConfig {
    /// Smallest board whose spawn point keeps every piece clear of the walls.
    pub const MIN_WIDTH: usize = 8;
    pub const MIN_HEIGHT: usize = 5;

    #[must_use]
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < Self::MIN_WIDTH || self.height < Self::MIN_HEIGHT {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        for (name, value) in [
            ("initial-speed", self.initial_speed),
            ("min-speed", self.min_speed),
            ("pieces-per-speed-step", self.pieces_per_speed_step),
            ("input-queue-capacity", self.input_queue_capacity),
        ] {
            if value == 0 {
                return Err(ConfigError::Zero(name));
            }
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::Zero("tick-period-ms"));
        }
        if self.min_speed > self.initial_speed {
            return Err(ConfigError::SpeedRange {
                initial: self.initial_speed,
                min: self.min_speed,
            });
        }
        Ok(())
    }
}
