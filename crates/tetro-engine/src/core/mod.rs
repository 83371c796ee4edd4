pub use self::{board::*, line_clear::FullRows, piece::*};

pub(crate) mod board;
pub mod line_clear;
pub(crate) mod piece;
