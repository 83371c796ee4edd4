use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};
use tetro_engine::Block;

use super::style;

/// One board cell, two terminal columns wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDisplay {
    style: Style,
    symbol: &'static str,
}

impl BlockDisplay {
    pub const WIDTH: u16 = 2;
    pub const HEIGHT: u16 = 1;

    pub fn from_block(block: Block) -> Self {
        let (style, symbol) = match block {
            Block::Empty => (style::EMPTY, ""),
            Block::Wall => (style::WALL, ""),
            Block::Clearing => (style::CLEARING, "=="),
            Block::Piece(kind) => (style::piece(kind), ""),
        };
        Self { style, symbol }
    }
}

impl Widget for BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Paragraph fills the whole area, not just the cells under the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use tetro_engine::PieceKind;

    use super::*;

    #[test]
    fn test_clearing_cell_is_marked() {
        let area = Rect::new(0, 0, BlockDisplay::WIDTH, BlockDisplay::HEIGHT);
        let mut buf = Buffer::empty(area);
        BlockDisplay::from_block(Block::Clearing).render(area, &mut buf);
        let mut expected = Buffer::with_lines(["=="]);
        expected.set_style(area, style::CLEARING);
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_piece_cell_fills_its_area() {
        let area = Rect::new(0, 0, BlockDisplay::WIDTH, BlockDisplay::HEIGHT);
        let mut buf = Buffer::empty(area);
        BlockDisplay::from_block(Block::Piece(PieceKind::O)).render(area, &mut buf);
        let expected = style::piece(PieceKind::O).bg;
        assert!(buf.content().iter().all(|cell| Some(cell.bg) == expected));
    }
}
