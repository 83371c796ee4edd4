//! Detection and removal of full rows after a piece locks.
//!
//! Clearing is split in two steps so the caller can show the captured rows
//! for one tick before they disappear:
//!
//! 1. [`find_full_rows`] captures every full row touched by the locked piece,
//!    from a single snapshot of the board.
//! 2. [`remove_rows`] removes the captured rows.
//!
//! Removal processes the captured indices top to bottom. Collapsing row `y`
//! only moves rows strictly above `y`, so every captured index below `y` still
//! names the same row when its turn comes, and no row is skipped or removed
//! twice.

use arrayvec::ArrayVec;

use super::{
    board::Board,
    piece::{PIECE_BOX, Piece},
};

/// Rows captured by a single lock, in ascending order.
///
/// A piece spans at most four rows, so a lock clears at most four.
pub type FullRows = ArrayVec<usize, PIECE_BOX>;

/// Collects the full rows among the four rows spanned by `piece`'s bounding
/// box, restricted to interior rows.
#[must_use]
pub fn find_full_rows(board: &Board, piece: Piece) -> FullRows {
    let top = piece.position().y();
    (0..PIECE_BOX)
        .filter_map(|dy| usize::try_from(top + i32::try_from(dy).ok()?).ok())
        .filter(|&y| board.is_row_full(y))
        .collect()
}

/// Removes every row in `rows` and shifts the rows above them down.
///
/// `rows` must be indices captured from one board state before any removal,
/// as returned by [`find_full_rows`].
///
/// # Example
///
/// ```
/// use tetro_engine::{Board, FullRows, line_clear};
///
/// let mut board = Board::new(12, 21);
/// let rows: FullRows = [3, 5].into_iter().collect();
/// line_clear::remove_rows(&mut board, &rows);
/// assert!(board.rows().take(20).all(|row| row[1..11].iter().all(|b| b.is_empty())));
/// ```
pub fn remove_rows(board: &mut Board, rows: &[usize]) {
    let mut ordered: FullRows = rows.iter().copied().collect();
    ordered.sort_unstable();
    for y in ordered {
        board.clear_row(y);
        board.collapse_above(y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        board::Block,
        piece::{PieceKind, PiecePosition, PieceRotation},
    };

    fn board_with_rows_3_and_5_full() -> Board {
        let mut board = Board::new(12, 21);
        board.fill_row_except(3, &[], PieceKind::I);
        board.fill_row_except(5, &[], PieceKind::I);
        board.set(2, 0, Block::Piece(PieceKind::T));
        board.set(4, 2, Block::Piece(PieceKind::O));
        board.set(6, 4, Block::Piece(PieceKind::Z));
        board.set(8, 6, Block::Piece(PieceKind::S));
        board
    }

    #[test]
    fn test_find_full_rows_only_in_piece_span() {
        let board = board_with_rows_3_and_5_full();
        let span = |y| Piece::new(PieceKind::I, PieceRotation::default(), PiecePosition::new(4, y));

        assert_eq!(find_full_rows(&board, span(2)).as_slice(), &[3, 5]);
        assert_eq!(find_full_rows(&board, span(4)).as_slice(), &[5]);
        assert!(find_full_rows(&board, span(6)).is_empty());
        // The floor row is never reported.
        assert!(find_full_rows(&board, span(17)).is_empty());
    }

    #[test]
    fn test_remove_two_separated_rows() {
        let mut board = board_with_rows_3_and_5_full();
        let rows: FullRows = [3, 5].into_iter().collect();

        remove_rows(&mut board, &rows);

        // Rows above 3 moved down by two.
        assert_eq!(board.get(2, 2), Some(Block::Piece(PieceKind::T)));
        assert_eq!(board.get(4, 4), Some(Block::Piece(PieceKind::O)));
        // Row 4, between the cleared rows, moved down by one.
        assert_eq!(board.get(6, 4), Some(Block::Empty));
        assert_eq!(board.get(6, 5), Some(Block::Piece(PieceKind::Z)));
        // Rows below 5 stay in place.
        assert_eq!(board.get(8, 6), Some(Block::Piece(PieceKind::S)));

        for y in 0..20 {
            assert!(!board.is_row_full(y), "row {y} still full");
        }
        assert!(board.rows().take(2).all(|row| row[1..11].iter().all(|b| b.is_empty())));
    }

    #[test]
    fn test_remove_adjacent_rows() {
        let mut board = Board::new(12, 21);
        for y in 16..20 {
            board.fill_row_except(y, &[], PieceKind::I);
        }
        board.set(5, 15, Block::Piece(PieceKind::L));

        let piece = Piece::new(PieceKind::I, PieceRotation::default(), PiecePosition::new(3, 16));
        let rows = find_full_rows(&board, piece);
        assert_eq!(rows.as_slice(), &[16, 17, 18, 19]);

        remove_rows(&mut board, &rows);

        assert_eq!(board.get(5, 19), Some(Block::Piece(PieceKind::L)));
        let occupied = board
            .cells()
            .iter()
            .filter(|b| matches!(b, Block::Piece(_)))
            .count();
        assert_eq!(occupied, 1);
    }

    #[test]
    fn test_remove_rows_accepts_any_order() {
        let mut in_order = board_with_rows_3_and_5_full();
        let mut reversed = in_order.clone();

        remove_rows(&mut in_order, &[3, 5]);
        remove_rows(&mut reversed, &[5, 3]);

        assert_eq!(in_order, reversed);
    }
}
