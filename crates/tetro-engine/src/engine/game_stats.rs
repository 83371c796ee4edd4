/// Counters accumulated over a game session.
///
/// - **Score**: sum of all lock scores
/// - **Completed pieces**: pieces locked into the board
/// - **Forced drops**: gravity steps taken so far, which drive the difficulty ramp
/// - **Line clear distribution**: locks that cleared 0, 1, 2, 3 or 4 rows
///
/// # Example
///
/// ```
/// use tetro_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_piece_drop(2, 400);
///
/// assert_eq!(stats.score(), 400);
/// assert_eq!(stats.total_cleared_lines(), 2);
/// assert_eq!(stats.line_cleared_counter()[2], 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameStats {
    score: usize,
    completed_pieces: usize,
    forced_drops: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; 5],
}

impl GameStats {
    /// Creates a new statistics tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            completed_pieces: 0,
            forced_drops: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns the total number of pieces that have been locked into place.
    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    /// Returns the number of forced drops so far.
    #[must_use]
    pub const fn forced_drops(&self) -> usize {
        self.forced_drops
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns a histogram of locks by rows cleared.
    ///
    /// - `[0]`: locks that cleared nothing
    /// - `[1]`..`[4]`: singles, doubles, triples and quads
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Counts one forced drop and returns the new total.
    pub const fn count_forced_drop(&mut self) -> usize {
        self.forced_drops += 1;
        self.forced_drops
    }

    /// Records a lock that cleared `cleared_lines` rows and earned `score`.
    pub const fn complete_piece_drop(&mut self, cleared_lines: usize, score: usize) {
        self.completed_pieces += 1;
        self.total_cleared_lines += cleared_lines;
        if cleared_lines < self.line_cleared_counter.len() {
            self.line_cleared_counter[cleared_lines] += 1;
        }
        self.score += score;
    }
}
