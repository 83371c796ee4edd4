//! Real-time driver for a [`GameSession`].
//!
//! The loop waits on the command channel with a timeout equal to the time
//! left until the next tick, so input and ticks are merged into one blocking
//! wait and no CPU is spent while idle.

use std::{
    collections::VecDeque,
    sync::mpsc::{Receiver, RecvTimeoutError},
    time::{Duration, Instant},
};

use super::{
    game_session::GameSession,
    game_stats::GameStats,
    io::{Command, RenderSink},
};

/// Why [`run`] returned, with the statistics of the finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum LoopExit {
    GameOver(GameStats),
    /// A quit command arrived or every command sender was dropped.
    Quit(GameStats),
}

impl LoopExit {
    #[must_use]
    pub fn stats(&self) -> &GameStats {
        match self {
            Self::GameOver(stats) | Self::Quit(stats) => stats,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopEvent {
    Tick,
    Command(Command),
    Disconnected,
}

/// Fixed-period tick source.
#[derive(Debug)]
struct TickClock {
    period: Duration,
    last_tick: Instant,
}

impl TickClock {
    fn new(period: Duration) -> Self {
        Self {
            period,
            last_tick: Instant::now(),
        }
    }

    /// Blocks until the next tick is due or a command arrives.
    fn next(&mut self, commands: &Receiver<Command>) -> LoopEvent {
        loop {
            let now = Instant::now();
            if now.duration_since(self.last_tick) >= self.period {
                self.last_tick = now;
                return LoopEvent::Tick;
            }
            match commands.recv_timeout(self.compute_timeout(now)) {
                Ok(command) => return LoopEvent::Command(command),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return LoopEvent::Disconnected,
            }
        }
    }

    fn compute_timeout(&self, now: Instant) -> Duration {
        (self.last_tick + self.period).saturating_duration_since(now)
    }
}

/// Runs `session` in real time until the game ends or the player quits.
///
/// One [`GameSession::tick`] happens per tick period and `sink` receives a
/// snapshot after the first spawn and after every tick. Commands are buffered
/// between ticks, up to the configured input queue capacity; when the buffer
/// is full newer commands are dropped. [`Command::Quit`] skips the buffer and
/// returns at once. On game over the final snapshot is rendered a second time
/// before returning.
///
/// A failing sink stops the loop and its error is returned unchanged.
///
/// # Example
///
/// ```
/// use std::sync::mpsc;
///
/// use tetro_engine::{Command, EngineConfig, GameSession, Snapshot, game_loop};
///
/// let session = GameSession::new(EngineConfig { seed: Some(9), ..EngineConfig::default() }).unwrap();
/// let (tx, rx) = mpsc::channel();
/// tx.send(Command::Quit).unwrap();
///
/// let mut frames: Vec<Snapshot> = Vec::new();
/// let exit = game_loop::run(session, &rx, &mut frames).unwrap();
/// assert!(exit.is_quit());
/// assert_eq!(frames.len(), 1);
/// ```
pub fn run<S>(
    mut session: GameSession,
    commands: &Receiver<Command>,
    sink: &mut S,
) -> Result<LoopExit, S::Error>
where
    S: RenderSink,
{
    let capacity = session.config().input_queue_capacity;
    let mut pending = VecDeque::with_capacity(capacity);
    let mut clock = TickClock::new(session.config().tick_period());

    sink.render(&session.snapshot())?;
    while !session.session_state().is_game_over() {
        match clock.next(commands) {
            LoopEvent::Command(Command::Quit) | LoopEvent::Disconnected => {
                return Ok(LoopExit::Quit(*session.stats()));
            }
            LoopEvent::Command(command) => {
                if pending.len() < capacity {
                    pending.push_back(command);
                }
            }
            LoopEvent::Tick => {
                let command = if session.accepts_input() {
                    pending.pop_front()
                } else {
                    None
                };
                session.tick(command);
                sink.render(&session.snapshot())?;
            }
        }
    }

    sink.render(&session.snapshot())?;
    Ok(LoopExit::GameOver(*session.stats()))
}
