pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece colliding when setting falling piece")]
pub struct PieceCollisionError;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("board {width}x{height} is too small")]
    BoardTooSmall { width: usize, height: usize },
    #[display("board {width}x{height} is too large")]
    BoardTooLarge { width: usize, height: usize },
    #[display("{_0} must be greater than zero")]
    Zero(#[error(not(source))] &'static str),
    #[display("min-speed {min} is greater than initial-speed {initial}")]
    SpeedRange { initial: usize, min: usize },
}
