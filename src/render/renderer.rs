use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Point, Snapshot};

pub const BACKGROUND: Color = Color::Rgb(0x22, 0x22, 0x22);
pub const HEAD_COLOR: Color = Color::Rgb(0x6a, 0xff, 0x6a);
pub const BODY_COLOR: Color = Color::Rgb(0x44, 0xcc, 0x44);
pub const FOOD_COLOR: Color = Color::Rgb(0xff, 0x52, 0x52);

/// Terminal columns per grid cell, so cells come out roughly square
const CELL_COLUMNS: u16 = 2;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Score
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Controls
            ])
            .split(frame.area());

        frame.render_widget(self.render_score(snapshot), chunks[0]);

        let board_area = centered(
            chunks[1],
            snapshot.grid_width.max(0) as u16 * CELL_COLUMNS + 2,
            snapshot.grid_height.max(0) as u16 + 2,
        );

        if snapshot.running {
            frame.render_widget(self.render_board(snapshot), board_area);
        } else {
            frame.render_widget(self.render_game_over(snapshot), board_area);
        }

        frame.render_widget(self.render_controls(snapshot), chunks[2]);
    }

    fn render_board(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let head = snapshot.head();
        let blank = " ".repeat(CELL_COLUMNS as usize);

        let lines: Vec<Line> = (0..snapshot.grid_height)
            .map(|y| {
                let spans: Vec<Span> = (0..snapshot.grid_width)
                    .map(|x| {
                        let pos = Point::new(x, y);
                        let color = if Some(pos) == head {
                            HEAD_COLOR
                        } else if snapshot.body.contains(&pos) {
                            BODY_COLOR
                        } else if pos == snapshot.food {
                            FOOD_COLOR
                        } else {
                            BACKGROUND
                        };
                        Span::styled(blank.clone(), Style::default().bg(color))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).style(Style::default().bg(BACKGROUND)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_score(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Game Over!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                format!("Score: {}", snapshot.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().bg(BACKGROUND))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
    }

    fn render_controls(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
        ];
        if !snapshot.running {
            spans.push(Span::styled("R", Style::default().fg(Color::Green)));
            spans.push(Span::raw(" to restart | "));
        }
        spans.push(Span::styled("Q", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" to quit"));

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` rect centered in `area`, clipped to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn snapshot(running: bool) -> Snapshot {
        Snapshot {
            body: vec![Point::new(6, 10), Point::new(5, 10), Point::new(4, 10)],
            food: Point::new(12, 3),
            score: 7,
            running,
            grid_width: 20,
            grid_height: 20,
        }
    }

    fn draw(snapshot: &Snapshot) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        let renderer = Renderer::new();
        terminal
            .draw(|frame| renderer.render(frame, snapshot))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer.cell((x, y)).map_or(" ", |cell| cell.symbol()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn count_bg(buffer: &Buffer, color: Color) -> usize {
        buffer.content().iter().filter(|cell| cell.bg == color).count()
    }

    #[test]
    fn test_board_colors() {
        let buffer = draw(&snapshot(true));

        assert_eq!(count_bg(&buffer, HEAD_COLOR), CELL_COLUMNS as usize);
        assert_eq!(count_bg(&buffer, BODY_COLOR), 2 * CELL_COLUMNS as usize);
        assert_eq!(count_bg(&buffer, FOOD_COLOR), CELL_COLUMNS as usize);
    }

    #[test]
    fn test_score_readout() {
        let buffer = draw(&snapshot(true));
        let text = text(&buffer);

        assert!(text.contains("Score: 7"));
        assert!(!text.contains("Game Over!"));
    }

    #[test]
    fn test_game_over_screen() {
        let buffer = draw(&snapshot(false));
        let text = text(&buffer);

        assert!(text.contains("Game Over!"));
        assert!(text.contains("Score: 7"));
        assert!(text.contains("to restart"));
        assert_eq!(count_bg(&buffer, HEAD_COLOR), 0);
        assert_eq!(count_bg(&buffer, FOOD_COLOR), 0);
    }

    #[test]
    fn test_centered_clips_to_area() {
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(centered(area, 4, 3), Rect::new(3, 1, 4, 3));
        assert_eq!(centered(area, 40, 30), area);
    }
}
