use arrayvec::ArrayVec;

use crate::{Block, FullRows, GameStats, PieceKind};

/// One occupied cell of the active piece, in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveCell {
    pub x: i32,
    pub y: i32,
    pub kind: PieceKind,
}

impl ActiveCell {
    #[must_use]
    pub const fn color_id(self) -> u8 {
        self.kind.color_id()
    }
}

/// Read-only view of a session after a tick, ready to be drawn.
///
/// `grid` holds the board with rows awaiting removal marked as
/// [`Block::Clearing`]. The active piece is kept apart in `active` so a sink can
/// draw it differently; [`composed`](Self::composed) merges the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    pub grid: Vec<Block>,
    pub active: ArrayVec<ActiveCell, 4>,
    pub clearing_rows: FullRows,
    pub stats: GameStats,
    pub speed: usize,
    pub game_over: bool,
}

impl Snapshot {
    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    /// Returns the grid cell at `(x, y)`, without the active piece.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<Block> {
        (x < self.width && y < self.height).then(|| self.grid[y * self.width + x])
    }

    /// The grid with the active piece drawn on top.
    ///
    /// Active cells outside the grid are dropped.
    #[must_use]
    pub fn composed(&self) -> Vec<Block> {
        let mut grid = self.grid.clone();
        for cell in &self.active {
            if let (Ok(x), Ok(y)) = (usize::try_from(cell.x), usize::try_from(cell.y))
                && x < self.width
                && y < self.height
            {
                grid[y * self.width + x] = Block::Piece(cell.kind);
            }
        }
        grid
    }

    /// Plain-text rendering of [`composed`](Self::composed), one line per row.
    ///
    /// ```
    /// use tetro_engine::{EngineConfig, GameSession};
    ///
    /// let config = EngineConfig { width: 8, height: 5, seed: Some(3), ..EngineConfig::default() };
    /// let session = GameSession::new(config).unwrap();
    /// let text = session.snapshot().to_text();
    /// assert_eq!(text.lines().count(), 5);
    /// assert_eq!(text.lines().last(), Some("########"));
    /// ```
    #[must_use]
    pub fn to_text(&self) -> String {
        let composed = self.composed();
        let mut text = String::with_capacity((self.width + 1) * self.height);
        for (i, row) in composed.chunks_exact(self.width).enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.extend(row.iter().map(|block| block.as_char()));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_3x2() -> Snapshot {
        Snapshot {
            width: 3,
            height: 2,
            grid: vec![
                Block::Wall,
                Block::Empty,
                Block::Wall,
                Block::Wall,
                Block::Wall,
                Block::Wall,
            ],
            active: [ActiveCell {
                x: 1,
                y: 0,
                kind: PieceKind::T,
            }]
            .into_iter()
            .collect(),
            clearing_rows: FullRows::new(),
            stats: GameStats::new(),
            speed: 20,
            game_over: false,
        }
    }

    #[test]
    fn test_composed_overlays_active_piece() {
        let snapshot = snapshot_3x2();
        assert_eq!(snapshot.cell(1, 0), Some(Block::Empty));
        assert_eq!(snapshot.composed()[1], Block::Piece(PieceKind::T));
        assert_eq!(snapshot.to_text(), "#B#\n###");
    }

    #[test]
    fn test_composed_drops_cells_outside_grid() {
        let mut snapshot = snapshot_3x2();
        snapshot.active[0].y = -1;
        assert_eq!(snapshot.composed(), snapshot.grid);
        assert_eq!(snapshot.cell(3, 0), None);
    }
}
