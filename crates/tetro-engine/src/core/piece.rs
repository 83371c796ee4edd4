use rand::{Rng, distr::StandardUniform, prelude::Distribution};

/// Side length of the square bounding box every tetromino is described in.
pub const PIECE_BOX: usize = 4;

/// A falling tetromino: kind, rotation state and the top-left corner of its
/// 4×4 bounding box in board coordinates.
///
/// Pieces are immutable values. Movement and rotation return new pieces and
/// never look at the board; whether the result is legal is decided by
/// [`Board::fits`](super::board::Board::fits).
///
/// The anchor is signed because the empty margin columns of a bounding box may
/// hang past the left wall (the vertical I piece sits in column 2 of its box).
///
/// # Example
///
/// ```
/// use tetro_engine::{Piece, PieceKind};
///
/// let piece = Piece::spawn(PieceKind::T, 12);
/// assert_eq!((piece.position().x(), piece.position().y()), (6, 0));
///
/// let moved = piece.left().rotated_right();
/// assert_eq!(moved.position().x(), 5);
/// assert_eq!(moved.rotation().as_u8(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    position: PiecePosition,
    rotation: PieceRotation,
    kind: PieceKind,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, rotation: PieceRotation, position: PiecePosition) -> Self {
        Self {
            position,
            rotation,
            kind,
        }
    }

    /// Creates a piece at the spawn point of a board `board_width` cells wide:
    /// horizontal center, row 0, rotation 0.
    #[must_use]
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        let x = i32::try_from(board_width / 2).expect("board width fits in i32");
        Self::new(kind, PieceRotation::default(), PiecePosition::new(x, 0))
    }

    #[must_use]
    pub fn position(&self) -> PiecePosition {
        self.position
    }

    #[must_use]
    pub fn rotation(&self) -> PieceRotation {
        self.rotation
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Absolute board coordinates of the four occupied cells.
    pub fn occupied_positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.kind
            .occupied_positions(self.rotation)
            .map(move |(dx, dy)| (self.position.x + dx, self.position.y + dy))
    }

    #[must_use]
    pub fn left(&self) -> Self {
        Self {
            position: self.position.offset(-1, 0),
            ..*self
        }
    }

    #[must_use]
    pub fn right(&self) -> Self {
        Self {
            position: self.position.offset(1, 0),
            ..*self
        }
    }

    #[must_use]
    pub fn down(&self) -> Self {
        Self {
            position: self.position.offset(0, 1),
            ..*self
        }
    }

    #[must_use]
    pub fn rotated_right(&self) -> Self {
        Self {
            rotation: self.rotation.rotated_right(),
            ..*self
        }
    }
}

/// Top-left corner of a piece's bounding box.
///
/// - X increases rightward (columns), Y increases downward (rows)
/// - (0, 0) is the top-left board cell, which is the left wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PiecePosition {
    x: i32,
    y: i32,
}

impl PiecePosition {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Rotation state of a piece.
///
/// - `0`: 0° (spawn orientation)
/// - `1`: 90°
/// - `2`: 180°
/// - `3`: 270°
///
/// Construction and rotation wrap modulo 4.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PieceRotation(u8);

impl PieceRotation {
    #[must_use]
    pub const fn new(turns: u8) -> Self {
        Self(turns % 4)
    }

    #[must_use]
    pub const fn rotated_right(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

/// Maps a local cell of the 4×4 box, seen in `rotation`, to the index of the
/// rotation-0 mask cell that lands there.
///
/// `x` and `y` must both be below 4.
#[must_use]
pub const fn rotated_index(x: usize, y: usize, rotation: PieceRotation) -> usize {
    assert!(x < PIECE_BOX && y < PIECE_BOX);
    match rotation.0 {
        0 => y * 4 + x,
        1 => 12 + y - 4 * x,
        2 => 15 - 4 * y - x,
        _ => 3 - y + 4 * x,
    }
}

/// The seven tetromino variants, in catalog order.
///
/// The discriminant is the variant index; the color id stored on the board is
/// the index plus one so that it never collides with an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    I = 0,
    T = 1,
    O = 2,
    Z = 3,
    S = 4,
    L = 5,
    J = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Returns the variant with the given catalog index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 7 or more.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color id written into the board when this piece locks (1..=7).
    #[must_use]
    pub const fn color_id(self) -> u8 {
        self as u8 + 1
    }

    /// Glyph used by text renderings of the board.
    ///
    /// ```
    /// use tetro_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'A');
    /// assert_eq!(PieceKind::J.as_char(), 'G');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Whether the local cell `(x, y)` of the 4×4 box is occupied in `rotation`.
    ///
    /// ```
    /// use tetro_engine::{PieceKind, PieceRotation};
    ///
    /// // The I piece stands vertically in column 2 at rotation 0...
    /// assert!(PieceKind::I.shape_cell(2, 0, PieceRotation::new(0)));
    /// // ...and lies horizontally in row 2 after a quarter turn.
    /// assert!(PieceKind::I.shape_cell(0, 2, PieceRotation::new(1)));
    /// assert!(!PieceKind::I.shape_cell(2, 0, PieceRotation::new(1)));
    /// ```
    #[must_use]
    pub const fn shape_cell(self, x: usize, y: usize, rotation: PieceRotation) -> bool {
        PIECE_MASKS[self as usize][rotated_index(x, y, rotation)]
    }

    /// Local `(x, y)` coordinates of the occupied cells in `rotation`.
    pub fn occupied_positions(self, rotation: PieceRotation) -> impl Iterator<Item = (i32, i32)> {
        (0..PIECE_BOX).flat_map(move |y| {
            (0..PIECE_BOX).filter_map(move |x| {
                self.shape_cell(x, y, rotation)
                    .then(|| (local(x), local(y)))
            })
        })
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn local(v: usize) -> i32 {
    v as i32
}

/// Occupancy of a piece's 4×4 box at rotation 0, row-major.
type PieceMask = [bool; PIECE_BOX * PIECE_BOX];

const PIECE_MASKS: [PieceMask; PieceKind::LEN] = {
    const fn m(rows: &[u8; 16]) -> PieceMask {
        let mut mask = [false; 16];
        let mut i = 0;
        while i < 16 {
            mask[i] = rows[i] == b'X';
            i += 1;
        }
        mask
    }

    [
        m(b"..X...X...X...X."), // I
        m(b"..X..XX...X....."), // T
        m(b".....XX..XX....."), // O
        m(b"..X..XX..X......"), // Z
        m(b".X...XX...X....."), // S
        m(b".X...X...XX....."), // L
        m(b"..X...X..XX....."), // J
    ]
};
