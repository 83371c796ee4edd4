use std::convert::Infallible;

use super::snapshot::Snapshot;

/// A discrete player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Rotate the active piece a quarter turn clockwise.
    RotateCw,
    MoveLeft,
    MoveRight,
    /// Move the active piece one row down without locking it.
    SoftDrop,
    /// End the game loop immediately.
    Quit,
}

/// Receives a snapshot after every tick.
///
/// The engine makes no assumption about how, or whether, a snapshot is shown.
pub trait RenderSink {
    type Error;

    fn render(&mut self, snapshot: &Snapshot) -> Result<(), Self::Error>;
}

/// Keeps every snapshot, for headless runs and tests.
impl RenderSink for Vec<Snapshot> {
    type Error = Infallible;

    fn render(&mut self, snapshot: &Snapshot) -> Result<(), Self::Error> {
        self.push(snapshot.clone());
        Ok(())
    }
}
