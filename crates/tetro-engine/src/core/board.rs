use super::piece::{Piece, PieceKind};

/// A single cell of the board or of a render snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Block {
    /// Empty cell.
    #[default]
    Empty,
    /// Permanent border cell (both side columns and the floor row).
    Wall,
    /// Row captured by a line clear, waiting to be removed.
    ///
    /// Only render snapshots carry this marker; the board itself never stores it.
    Clearing,
    /// Locked cell of a specific piece.
    Piece(PieceKind),
}

impl Block {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Block::Empty
    }

    /// Numeric cell code: 0 empty, 1..=7 piece color id, 8 clearing, 9 wall.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Block::Empty => 0,
            Block::Piece(kind) => kind.color_id(),
            Block::Clearing => 8,
            Block::Wall => 9,
        }
    }

    /// Glyph used by text renderings.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Block::Empty => ' ',
            Block::Piece(kind) => kind.as_char(),
            Block::Clearing => '=',
            Block::Wall => '#',
        }
    }
}

/// The playfield, including its wall ring.
///
/// The grid is `width × height` cells stored row-major. Column 0, column
/// `width - 1` and row `height - 1` are walls; the interior is
/// `(width - 2) × (height - 1)` cells and starts out empty. There is no wall
/// above row 0, so pieces enter from the top.
///
/// Wall cells never change. Interior cells change only through [`lock`],
/// [`clear_row`] and [`collapse_above`].
///
/// [`lock`]: Board::lock
/// [`clear_row`]: Board::clear_row
/// [`collapse_above`]: Board::collapse_above
///
/// # Example
///
/// ```
/// use tetro_engine::{Block, Board, Piece, PieceKind};
///
/// let mut board = Board::new(12, 21);
/// assert_eq!(board.get(0, 5), Some(Block::Wall));
/// assert_eq!(board.get(5, 5), Some(Block::Empty));
///
/// let piece = Piece::spawn(PieceKind::O, board.width());
/// assert!(board.fits(piece));
/// board.lock(piece);
/// assert!(!board.fits(piece));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Block>,
}

impl Board {
    /// Creates a board with an empty interior and a complete wall ring.
    ///
    /// # Panics
    ///
    /// Panics if the board has no interior (`width < 3` or `height < 2`).
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width >= 3 && height >= 2, "board {width}x{height} has no interior");
        let cells = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| {
                    if x == 0 || x == width - 1 || y == height - 1 {
                        Block::Wall
                    } else {
                        Block::Empty
                    }
                })
            })
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row indices that belong to the interior (every row but the floor).
    #[must_use]
    pub fn interior_rows(&self) -> std::ops::Range<usize> {
        0..self.height - 1
    }

    /// Column indices that belong to the interior (every column but the two walls).
    #[must_use]
    pub fn interior_columns(&self) -> std::ops::Range<usize> {
        1..self.width - 1
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }

    /// Returns the cell at `(x, y)`, or `None` outside the board.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Block> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Block] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Block]> {
        self.cells.chunks_exact(self.width)
    }

    /// Whether `piece` can occupy its current position.
    ///
    /// Fails when any occupied piece cell lands on a non-empty board cell.
    /// Piece cells outside the board are ignored, so the empty margin of a
    /// bounding box may extend past the board edges. Walls stop a piece from
    /// actually leaving the playfield.
    #[must_use]
    pub fn fits(&self, piece: Piece) -> bool {
        piece
            .occupied_positions()
            .all(|(x, y)| self.get(x, y).is_none_or(Block::is_empty))
    }

    /// Writes the piece's occupied cells into the board.
    ///
    /// The caller must have checked [`fits`](Self::fits) for this position;
    /// no collision check is repeated here.
    ///
    /// # Panics
    ///
    /// Panics if an occupied piece cell lies outside the board.
    pub fn lock(&mut self, piece: Piece) {
        for (x, y) in piece.occupied_positions() {
            let i = self
                .index(x, y)
                .unwrap_or_else(|| panic!("locking {piece:?} outside the board at ({x}, {y})"));
            self.cells[i] = Block::Piece(piece.kind());
        }
    }

    /// Whether every interior cell of row `y` is non-empty.
    ///
    /// The floor row and rows below the board are never full.
    #[must_use]
    pub fn is_row_full(&self, y: usize) -> bool {
        self.interior_rows().contains(&y) && self.interior_cells(y).iter().all(|b| !b.is_empty())
    }

    /// Empties the interior cells of row `y`.
    pub fn clear_row(&mut self, y: usize) {
        assert!(self.interior_rows().contains(&y), "row {y} is not an interior row");
        self.interior_cells_mut(y).fill(Block::Empty);
    }

    /// Moves every interior row above `y` down by one, discarding row `y`,
    /// and empties the interior of row 0.
    ///
    /// Rows below `y` and all wall cells are left untouched.
    pub fn collapse_above(&mut self, y: usize) {
        assert!(self.interior_rows().contains(&y), "row {y} is not an interior row");
        let columns = self.interior_columns();
        for row in (1..=y).rev() {
            let src = (row - 1) * self.width;
            let dst = row * self.width;
            self.cells
                .copy_within(src + columns.start..src + columns.end, dst + columns.start);
        }
        self.interior_cells_mut(0).fill(Block::Empty);
    }

    fn interior_cells(&self, y: usize) -> &[Block] {
        let start = y * self.width;
        &self.cells[start + 1..start + self.width - 1]
    }

    fn interior_cells_mut(&mut self, y: usize) -> &mut [Block] {
        let start = y * self.width;
        &mut self.cells[start + 1..start + self.width - 1]
    }

    /// Sets an interior cell directly, bypassing the piece contract.
    #[cfg(test)]
    pub(crate) fn set(&mut self, x: usize, y: usize, block: Block) {
        assert!(self.interior_columns().contains(&x) && self.interior_rows().contains(&y));
        let i = y * self.width + x;
        self.cells[i] = block;
    }

    /// Fills interior row `y` except the listed columns.
    #[cfg(test)]
    pub(crate) fn fill_row_except(&mut self, y: usize, holes: &[usize], kind: PieceKind) {
        for x in self.interior_columns() {
            if !holes.contains(&x) {
                self.set(x, y, Block::Piece(kind));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::{PiecePosition, PieceRotation};

    fn piece_at(kind: PieceKind, rotation: u8, x: i32, y: i32) -> Piece {
        Piece::new(kind, PieceRotation::new(rotation), PiecePosition::new(x, y))
    }

    #[test]
    fn test_initial_board() {
        let board = Board::new(12, 21);

        for y in 0..21 {
            for x in 0..12 {
                let cell = board.get(x, y).unwrap();
                let is_wall = x == 0 || x == 11 || y == 20;
                let expected = if is_wall { Block::Wall } else { Block::Empty };
                assert_eq!(cell, expected, "unexpected {cell:?} at ({x}, {y})");
            }
        }
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(12, 0), None);
        assert_eq!(board.get(0, 21), None);
    }

    #[test]
    fn test_fits_on_empty_board() {
        let board = Board::new(12, 21);
        for kind in PieceKind::ALL {
            for rotation in 0..4 {
                assert!(board.fits(piece_at(kind, rotation, 4, 5)), "{kind:?}/{rotation}");
            }
        }
    }

    #[test]
    fn test_fits_rejects_occupied_cell() {
        let mut board = Board::new(12, 21);
        board.set(6, 3, Block::Piece(PieceKind::O));

        // Vertical I at x=4 occupies column 6, rows 0..4.
        assert!(!board.fits(piece_at(PieceKind::I, 0, 4, 0)));
        assert!(board.fits(piece_at(PieceKind::I, 0, 3, 0)));
        // Same column, but entirely below the obstacle.
        assert!(board.fits(piece_at(PieceKind::I, 0, 4, 4)));
    }

    #[test]
    fn test_fits_rejects_walls() {
        let board = Board::new(12, 21);
        // Column 2 of the I box is the only occupied column.
        assert!(board.fits(piece_at(PieceKind::I, 0, -1, 0)));
        assert!(!board.fits(piece_at(PieceKind::I, 0, -2, 0)));
        assert!(board.fits(piece_at(PieceKind::I, 0, 8, 0)));
        assert!(!board.fits(piece_at(PieceKind::I, 0, 9, 0)));
        // Resting on the floor vs. entering it.
        assert!(board.fits(piece_at(PieceKind::I, 0, 4, 16)));
        assert!(!board.fits(piece_at(PieceKind::I, 0, 4, 17)));
    }

    #[test]
    fn test_fits_ignores_out_of_bounds_piece_cells() {
        let board = Board::new(12, 21);
        // Horizontal I lives in row 2 of its box; rows 0-1 hang above the board.
        assert!(board.fits(piece_at(PieceKind::I, 1, 4, -2)));
        // Occupied cells above the board are ignored as well.
        assert!(board.fits(piece_at(PieceKind::I, 0, 4, -3)));
    }

    #[test]
    fn test_fits_does_not_mutate() {
        let mut board = Board::new(12, 21);
        board.set(5, 10, Block::Piece(PieceKind::T));
        let before = board.clone();
        for x in -2..12 {
            for y in -3..21 {
                let _ = board.fits(piece_at(PieceKind::S, 1, x, y));
            }
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_lock_writes_color() {
        let mut board = Board::new(12, 21);
        let piece = piece_at(PieceKind::O, 0, 4, 17);
        board.lock(piece);

        // O occupies box cells (1,1) (2,1) (1,2) (2,2).
        for (x, y) in [(5, 18), (6, 18), (5, 19), (6, 19)] {
            let cell = board.get(x, y).unwrap();
            assert_eq!(cell, Block::Piece(PieceKind::O));
            assert_eq!(cell.code(), 3);
        }
        assert_eq!(board.get(4, 17), Some(Block::Empty));
    }

    #[test]
    fn test_is_row_full() {
        let mut board = Board::new(12, 21);
        board.fill_row_except(19, &[7], PieceKind::I);
        assert!(!board.is_row_full(19));
        board.set(7, 19, Block::Piece(PieceKind::J));
        assert!(board.is_row_full(19));

        // The floor is walls only and never counts as a full row.
        assert!(!board.is_row_full(20));
        assert!(!board.is_row_full(99));
    }

    #[test]
    fn test_clear_row_keeps_walls() {
        let mut board = Board::new(12, 21);
        board.fill_row_except(10, &[], PieceKind::Z);
        board.clear_row(10);
        assert_eq!(board.get(0, 10), Some(Block::Wall));
        assert_eq!(board.get(11, 10), Some(Block::Wall));
        for x in 1..11 {
            assert_eq!(board.get(x, 10), Some(Block::Empty));
        }
    }

    #[test]
    fn test_collapse_above_shifts_rows_down() {
        let mut board = Board::new(12, 21);
        board.set(3, 0, Block::Piece(PieceKind::I));
        board.set(4, 7, Block::Piece(PieceKind::T));
        board.fill_row_except(8, &[], PieceKind::L);
        board.set(5, 9, Block::Piece(PieceKind::S));

        board.collapse_above(8);

        assert_eq!(board.get(3, 0), Some(Block::Empty));
        assert_eq!(board.get(3, 1), Some(Block::Piece(PieceKind::I)));
        assert_eq!(board.get(4, 8), Some(Block::Piece(PieceKind::T)));
        assert!(!board.is_row_full(8));
        // Rows below the target are untouched.
        assert_eq!(board.get(5, 9), Some(Block::Piece(PieceKind::S)));
        for y in 0..20 {
            assert_eq!(board.get(0, y), Some(Block::Wall));
            assert_eq!(board.get(11, y), Some(Block::Wall));
        }
    }

    #[test]
    fn test_collapse_above_top_row() {
        let mut board = Board::new(12, 21);
        board.fill_row_except(0, &[], PieceKind::O);
        board.collapse_above(0);
        assert!(board.rows().next().unwrap()[1..11].iter().all(|b| b.is_empty()));
    }
}
