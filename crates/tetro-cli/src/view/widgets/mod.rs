use ratatui::{
    layout::{Rect, Size},
    widgets::Block as BlockWidget,
};

pub use self::{block_display::*, board_display::*, game_display::*, stats_display::*};

mod block_display;
mod board_display;
mod game_display;
mod stats_display;

pub mod style {
    use ratatui::style::{Color, Style};
    use tetro_engine::PieceKind;

    /// Indexed by [`PieceKind::index`].
    const PIECE_COLORS: [Color; PieceKind::LEN] = [
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
        Color::Red,
        Color::Green,
        Color::Rgb(255, 127, 0),
        Color::Blue,
    ];

    /// Paints symbol and background alike, so a cell reads as a solid square.
    const fn solid(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = Style::new().fg(Color::White).bg(Color::Black);
    pub const HELP: Style = Style::new().fg(Color::DarkGray).bg(Color::Black);
    pub const EMPTY: Style = solid(Color::Black);
    pub const WALL: Style = solid(Color::Gray);
    pub const CLEARING: Style = Style::new().fg(Color::Black).bg(Color::White);
    pub const GAME_OVER: Style = Style::new().fg(Color::White).bg(Color::Red);

    #[must_use]
    pub const fn piece(kind: PieceKind) -> Style {
        solid(PIECE_COLORS[kind.index()])
    }
}

/// Columns and rows taken by the borders and padding of `block`.
fn block_margin(block: Option<&BlockWidget>) -> Size {
    let outer = Rect::new(0, 0, 100, 100);
    let inner = block.map_or(outer, |block| block.inner(outer));
    Size::new(outer.width - inner.width, outer.height - inner.height)
}

/// Converts a cell count to terminal units, saturating on absurd sizes.
fn cells(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}
