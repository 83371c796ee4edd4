use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::Widget,
};
use tetro_engine::Snapshot;

use super::BlockDisplay;

/// The whole grid of a snapshot, walls included, with the active piece drawn
/// on top.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn width(&self) -> u16 {
        super::cells(self.snapshot.width) * BlockDisplay::WIDTH
    }

    pub fn height(&self) -> u16 {
        super::cells(self.snapshot.height) * BlockDisplay::HEIGHT
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = self.snapshot.width;
        let col_constraints = (0..width).map(|_| Constraint::Length(BlockDisplay::WIDTH));
        let row_constraints =
            (0..self.snapshot.height).map(|_| Constraint::Length(BlockDisplay::HEIGHT));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal));
        let composed = self.snapshot.composed();

        for (grid_row, row) in iter::zip(grid_cells, composed.chunks_exact(width)) {
            for (grid_cell, block) in iter::zip(grid_row, row) {
                BlockDisplay::from_block(*block).render(grid_cell, buf);
            }
        }
    }
}
