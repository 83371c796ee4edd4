//! Game rules and session state on top of [`core`](crate::core).
//!
//! - [`GameSession`] - one game, advanced by discrete ticks
//! - [`game_loop::run`] - drives a session in real time from a command channel
//! - [`EngineConfig`] - board size, timing and policy parameters
//! - [`ScoringPolicy`] / [`DifficultyPolicy`] - score and speed rules
//! - [`PieceGenerator`] - uniform random piece kinds
//! - [`Snapshot`] - what a [`RenderSink`] receives after every tick
//!
//! # Game Flow
//!
//! 1. [`GameSession::new`] spawns the first piece at the top center
//! 2. Each tick may apply one [`Command`] to the falling piece
//! 3. Every `speed` ticks the piece is forced one row down
//! 4. A piece that cannot move down locks; full rows are captured and scored
//! 5. The captured rows are removed on the following tick and a new piece
//!    spawns
//! 6. A spawned piece that does not fit ends the game

pub use self::{
    config::*, game_session::*, game_stats::*, io::*, piece_generator::*, policy::*, snapshot::*,
};

mod config;
pub mod game_loop;
mod game_session;
mod game_stats;
mod io;
mod piece_generator;
mod policy;
mod snapshot;
