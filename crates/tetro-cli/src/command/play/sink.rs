use std::io;

use ratatui::DefaultTerminal;
use tetro_engine::{RenderSink, Snapshot};

use crate::view::widgets::GameDisplay;

/// Draws every snapshot to the terminal.
#[derive(Debug)]
pub(crate) struct TerminalSink<'a> {
    terminal: &'a mut DefaultTerminal,
}

impl<'a> TerminalSink<'a> {
    pub(crate) fn new(terminal: &'a mut DefaultTerminal) -> Self {
        Self { terminal }
    }
}

impl RenderSink for TerminalSink<'_> {
    type Error = io::Error;

    fn render(&mut self, snapshot: &Snapshot) -> Result<(), Self::Error> {
        self.terminal
            .draw(|frame| frame.render_widget(GameDisplay::new(snapshot), frame.area()))?;
        Ok(())
    }
}
