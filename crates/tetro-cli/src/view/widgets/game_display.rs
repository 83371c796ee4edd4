use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Color,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};
use tetro_engine::Snapshot;

use super::{BoardDisplay, StatsDisplay, style};

const HELP_PLAYING: &str = "Controls: ← → (Move) | ↓ (Soft Drop) | ↑ (Rotate) | Q (Quit)";
const HELP_GAME_OVER: &str = "Press any game key to exit";

/// Full game screen: board, statistics panel and key help.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> GameDisplay<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.snapshot.game_over {
            Color::Red
        } else {
            Color::White
        };

        let board = BoardDisplay::new(self.snapshot);
        let stats = StatsDisplay::new(self.snapshot).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(Padding::horizontal(1))
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let help = if self.snapshot.game_over {
            HELP_GAME_OVER
        } else {
            HELP_PLAYING
        };

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(board.height()), Constraint::Length(1)])
                .spacing(1)
                .areas(area);
        let [board_area, stats_area] = Layout::horizontal([
            Constraint::Length(board.width()),
            Constraint::Length(stats.width()),
        ])
        .flex(Flex::Center)
        .spacing(2)
        .areas(main_area);
        let [stats_area] =
            Layout::vertical([Constraint::Length(stats.height())]).areas(stats_area);

        board.render(board_area, buf);
        stats.render(stats_area, buf);
        Text::styled(help, style::HELP)
            .centered()
            .render(help_area, buf);

        if self.snapshot.game_over {
            let block = Block::new().style(style::GAME_OVER);
            let text = Text::styled("GAME OVER!!", style::GAME_OVER).centered();
            let area =
                board_area.centered(Constraint::Length(board_area.width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use tetro_engine::{EngineConfig, GameSession};

    use super::*;

    fn rendered_lines(snapshot: &Snapshot) -> (Buffer, Vec<String>) {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        GameDisplay::new(snapshot).render(area, &mut buf);
        let lines = (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect();
        (buf, lines)
    }

    fn snapshot() -> Snapshot {
        let config = EngineConfig {
            seed: Some(2),
            ..EngineConfig::default()
        };
        GameSession::new(config).unwrap().snapshot()
    }

    #[test]
    fn test_renders_board_and_stats() {
        let snapshot = snapshot();
        let (buf, lines) = rendered_lines(&snapshot);

        assert!(lines.iter().any(|line| line.contains("SCORE:")));
        assert!(lines.iter().any(|line| line.contains("Controls:")));
        assert!(!lines.iter().any(|line| line.contains("GAME OVER")));

        // The floor row is the last board row and is drawn in wall color.
        let floor_y = u16::try_from(snapshot.height - 1).unwrap();
        let wall_cells = (0..80).filter(|&x| buf[(x, floor_y)].bg == Color::Gray).count();
        assert_eq!(wall_cells, snapshot.width * 2);
    }

    #[test]
    fn test_renders_game_over_banner() {
        let mut snapshot = snapshot();
        snapshot.game_over = true;
        let (_, lines) = rendered_lines(&snapshot);

        assert!(lines.iter().any(|line| line.contains("GAME OVER!!")));
        assert!(lines.iter().any(|line| line.contains(HELP_GAME_OVER)));
    }
}
