use crate::{
    ConfigError, PieceCollisionError,
    core::{
        board::{Block, Board},
        line_clear::{self, FullRows},
        piece::{Piece, PieceKind},
    },
};

use super::{
    config::EngineConfig,
    game_stats::GameStats,
    io::Command,
    piece_generator::PieceGenerator,
    policy::{DifficultyPolicy, ScoringPolicy},
    snapshot::{ActiveCell, Snapshot},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    /// A piece is active and responds to commands and gravity.
    Falling,
    /// Full rows were captured by the last lock and are removed on the next
    /// tick. No piece is active.
    LineClearing,
    /// The spawned piece did not fit. Terminal.
    GameOver,
}

/// What a single [`GameSession::tick`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub forced_drop: bool,
    /// Kind of the piece locked this tick.
    pub locked: Option<PieceKind>,
    /// Full rows captured by this tick's lock.
    pub cleared_rows: FullRows,
    /// Rows actually removed from the board this tick.
    pub removed_rows: usize,
    pub score_delta: usize,
    /// Set on the tick that entered [`SessionState::GameOver`].
    pub game_over: bool,
}

/// Complete state of one game, advanced one tick at a time.
///
/// The session owns the board and the active piece and never blocks or
/// touches a clock; [`run`](crate::game_loop::run) drives it in real time.
///
/// # Example
///
/// ```
/// use tetro_engine::{Command, EngineConfig, GameSession};
///
/// let config = EngineConfig { seed: Some(1), ..EngineConfig::default() };
/// let mut session = GameSession::new(config).unwrap();
/// let start = session.falling_piece().unwrap().position();
///
/// session.tick(Some(Command::MoveLeft));
/// assert_eq!(session.falling_piece().unwrap().position().x(), start.x() - 1);
///
/// for _ in 1..session.speed() {
///     session.tick(None);
/// }
/// assert_eq!(session.falling_piece().unwrap().position().y(), start.y() + 1);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    config: EngineConfig,
    board: Board,
    falling_piece: Option<Piece>,
    session_state: SessionState,
    clearing_rows: FullRows,
    generator: PieceGenerator,
    stats: GameStats,
    scoring: ScoringPolicy,
    difficulty: DifficultyPolicy,
    speed: usize,
    drop_counter: usize,
    previous_rotate_pressed: bool,
}

impl GameSession {
    /// Validates `config` and starts a game with its first piece spawned.
    ///
    /// If even the first piece does not fit the session starts in
    /// [`SessionState::GameOver`].
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut session = Self {
            board: Board::new(config.width, config.height),
            falling_piece: None,
            session_state: SessionState::Falling,
            clearing_rows: FullRows::new(),
            generator: PieceGenerator::from_seed(config.seed),
            stats: GameStats::new(),
            scoring: ScoringPolicy {
                award_per_piece_bonus: config.award_per_piece_bonus,
            },
            difficulty: DifficultyPolicy::from_config(&config),
            speed: config.initial_speed,
            drop_counter: 0,
            previous_rotate_pressed: false,
            config,
        };
        session.spawn_piece();
        Ok(session)
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active piece, absent while rows are clearing and after game over.
    #[must_use]
    pub fn falling_piece(&self) -> Option<&Piece> {
        self.falling_piece.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Current ticks per forced drop.
    #[must_use]
    pub fn speed(&self) -> usize {
        self.speed
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    /// Whether the next tick will apply a command.
    ///
    /// Commands arriving while this is false should be held back by the
    /// caller and offered again later.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.session_state.is_falling() && self.falling_piece.is_some()
    }

    /// Replaces the active piece if `piece` fits the board.
    ///
    /// Fails outside [`SessionState::Falling`]: no piece may be active while
    /// rows are clearing, and a finished session never changes.
    pub fn set_falling_piece(&mut self, piece: Piece) -> Result<(), PieceCollisionError> {
        if !self.session_state.is_falling() || !self.board.fits(piece) {
            return Err(PieceCollisionError);
        }
        self.falling_piece = Some(piece);
        Ok(())
    }

    pub fn try_move_left(&mut self) -> Result<(), PieceCollisionError> {
        let piece = self.falling_piece.ok_or(PieceCollisionError)?.left();
        self.set_falling_piece(piece)
    }

    pub fn try_move_right(&mut self) -> Result<(), PieceCollisionError> {
        let piece = self.falling_piece.ok_or(PieceCollisionError)?.right();
        self.set_falling_piece(piece)
    }

    pub fn try_soft_drop(&mut self) -> Result<(), PieceCollisionError> {
        let piece = self.falling_piece.ok_or(PieceCollisionError)?.down();
        self.set_falling_piece(piece)
    }

    /// Rotates the active piece a quarter turn clockwise in place. There are
    /// no wall kicks.
    pub fn try_rotate(&mut self) -> Result<(), PieceCollisionError> {
        let piece = self.falling_piece.ok_or(PieceCollisionError)?.rotated_right();
        self.set_falling_piece(piece)
    }

    /// Advances the game by one tick.
    ///
    /// `command` is applied only when [`accepts_input`](Self::accepts_input)
    /// holds; [`Command::Quit`] is ignored here and handled by the loop.
    /// Once the session is over every tick is a no-op.
    pub fn tick(&mut self, command: Option<Command>) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        match self.session_state {
            SessionState::GameOver => {}
            SessionState::LineClearing => self.finish_line_clear(&mut outcome),
            SessionState::Falling => {
                self.drop_counter += 1;
                if self.drop_counter >= self.speed {
                    outcome.forced_drop = true;
                    self.drop_counter = 0;
                }
                self.apply_command(command);
                if outcome.forced_drop {
                    self.forced_drop(&mut outcome);
                }
            }
        }
        outcome
    }

    fn apply_command(&mut self, command: Option<Command>) {
        let rotate_pressed = command == Some(Command::RotateCw);
        match command {
            Some(Command::RotateCw) if !self.previous_rotate_pressed => _ = self.try_rotate(),
            Some(Command::MoveLeft) => _ = self.try_move_left(),
            Some(Command::MoveRight) => _ = self.try_move_right(),
            Some(Command::SoftDrop) => _ = self.try_soft_drop(),
            Some(Command::RotateCw | Command::Quit) | None => {}
        }
        self.previous_rotate_pressed = rotate_pressed;
    }

    fn forced_drop(&mut self, outcome: &mut TickOutcome) {
        let forced_drops = self.stats.count_forced_drop();
        self.speed = self.difficulty.next_speed(self.speed, forced_drops);

        if self.try_soft_drop().is_ok() {
            return;
        }
        let Some(piece) = self.falling_piece.take() else {
            return;
        };
        self.board.lock(piece);
        let rows = line_clear::find_full_rows(&self.board, piece);
        let score = self.scoring.lock_score(rows.len());
        self.stats.complete_piece_drop(rows.len(), score);

        outcome.locked = Some(piece.kind());
        outcome.score_delta = score;
        outcome.cleared_rows.clone_from(&rows);

        if rows.is_empty() {
            self.spawn_piece();
            outcome.game_over = self.session_state.is_game_over();
        } else {
            self.clearing_rows = rows;
            self.session_state = SessionState::LineClearing;
        }
    }

    fn finish_line_clear(&mut self, outcome: &mut TickOutcome) {
        line_clear::remove_rows(&mut self.board, &self.clearing_rows);
        outcome.removed_rows = self.clearing_rows.len();
        self.clearing_rows.clear();
        self.session_state = SessionState::Falling;
        self.spawn_piece();
        outcome.game_over = self.session_state.is_game_over();
    }

    fn spawn_piece(&mut self) {
        let piece = Piece::spawn(self.generator.next_piece(), self.board.width());
        if self.board.fits(piece) {
            self.falling_piece = Some(piece);
        } else {
            self.falling_piece = None;
            self.session_state = SessionState::GameOver;
        }
    }

    /// Projects the current state into a render-ready snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let width = self.board.width();
        let mut grid = self.board.cells().to_vec();
        for &y in &self.clearing_rows {
            for x in self.board.interior_columns() {
                grid[y * width + x] = Block::Clearing;
            }
        }
        let active = self
            .falling_piece
            .iter()
            .flat_map(|piece| {
                piece.occupied_positions().map(move |(x, y)| ActiveCell {
                    x,
                    y,
                    kind: piece.kind(),
                })
            })
            .collect();
        Snapshot {
            width,
            height: self.board.height(),
            grid,
            active,
            clearing_rows: self.clearing_rows.clone(),
            stats: self.stats,
            speed: self.speed,
            game_over: self.session_state.is_game_over(),
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
