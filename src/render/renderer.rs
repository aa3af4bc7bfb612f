use std::collections::HashSet;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameConfig, GameState, Point};
use crate::metrics::SessionStats;

pub struct Renderer {
    config: GameConfig,
}

impl Renderer {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status line
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let status = self.render_status(state, stats);
        frame.render_widget(status, chunks[0]);

        // Center the board horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        // The board gives way to the menu overlay when suspended
        if state.game_over {
            frame.render_widget(self.render_game_over(state, stats), game_area);
        } else if state.paused {
            frame.render_widget(self.render_paused(), game_area);
        } else {
            frame.render_widget(self.render_board(state), game_area);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Map a world position to its (column, row) cell, row 0 at the top
    fn cell_of(&self, p: Point) -> (i32, i32) {
        let cell = self.config.cell_size;
        let col = (p.x + self.config.grid_width / 2 * cell) / cell;
        let row_from_bottom = (p.y + self.config.grid_height / 2 * cell) / cell;
        (col, self.config.grid_height - 1 - row_from_bottom)
    }

    fn render_board(&self, state: &GameState) -> Paragraph<'_> {
        let head_cell = self.cell_of(state.snake.head());
        let body_cells: HashSet<(i32, i32)> =
            state.snake.segments().map(|p| self.cell_of(*p)).collect();
        let food_cell = self.cell_of(state.food);

        let mut lines = Vec::new();
        for row in 0..self.config.grid_height {
            let mut spans = Vec::new();
            for col in 0..self.config.grid_width {
                let cell = (col, row);
                let span = if cell == head_cell {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if body_cells.contains(&cell) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if cell == food_cell {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };
                spans.push(span);
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_status(&self, state: &GameState, stats: &SessionStats) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled(
                format!(
                    "Score: {}  Level: {}  Difficulty: {}",
                    state.score, state.level, state.difficulty
                ),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                format!(
                    "Best: {}  Time: {}",
                    stats.best_score(state.difficulty),
                    stats.format_time()
                ),
                Style::default().fg(Color::Yellow),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Left)
    }

    fn render_paused(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "P",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to continue", Style::default().fg(Color::Gray)),
            ]),
            Line::from(vec![
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart", Style::default().fg(Color::Gray)),
            ]),
            Line::from(vec![
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
    }

    fn render_game_over(&self, state: &GameState, stats: &SessionStats) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    stats.best_score(state.difficulty).to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" steer | "),
            Span::styled("P", Style::default().fg(Color::Cyan)),
            Span::raw(" pause | "),
            Span::styled("R", Style::default().fg(Color::Cyan)),
            Span::raw(" restart | "),
            Span::styled("1/2/3", Style::default().fg(Color::Cyan)),
            Span::raw(" difficulty | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_mapping() {
        let renderer = Renderer::new(GameConfig::default());

        // Top-left corner of the board
        assert_eq!(renderer.cell_of(Point::new(-200, 180)), (0, 0));
        // Bottom-right spawn column
        assert_eq!(renderer.cell_of(Point::new(180, -200)), (19, 19));
        // The half-cell start position floors onto a single cell
        assert_eq!(renderer.cell_of(Point::new(10, 0)), (10, 9));
    }
}
