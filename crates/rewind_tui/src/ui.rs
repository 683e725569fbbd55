//! Stateless UI rendering.
//!
//! [`ScreenLayout`] is computed once per frame and shared by drawing and mouse
//! hit-testing, so a click always lands on what was drawn.

use ratatui::{
    Frame,
    layout::{self, Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Cell, Player, Position};

use crate::app::App;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const INFO_WIDTH: u16 = 34;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// The 3x3 grid including separators.
    pub board: Rect,
    /// One target per cell, row-major.
    pub cells: [Rect; 9],
    /// Key legend.
    pub hints: Rect,
    /// Status line.
    pub status: Rect,
    /// Order toggle button.
    pub toggle: Rect,
    /// Move list, including its border.
    pub moves: Rect,
}

impl ScreenLayout {
    /// Lays out the screen for a terminal of size `area`.
    pub fn new(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(BOARD_WIDTH + 2), Constraint::Length(INFO_WIDTH)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Min(BOARD_HEIGHT),    // Board
                Constraint::Length(1),            // Hints
            ])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Length(3), // Toggle
                Constraint::Min(3),    // Moves
            ])
            .split(columns[1]);

        let board = center_rect(left[1], BOARD_WIDTH, BOARD_HEIGHT);
        let cells = std::array::from_fn(|index| {
            let (col, row) = ((index % 3) as u16, (index / 3) as u16);
            Rect::new(
                board.x + col * (CELL_WIDTH + 1),
                board.y + row * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(area)
        });

        Self {
            title: left[0],
            board,
            cells,
            hints: left[2],
            status: right[0],
            toggle: right[1],
            moves: right[2],
        }
    }

    /// The cell under a screen coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = layout::Position::new(column, row);
        self.cells
            .iter()
            .position(|rect| rect.contains(point))
            .and_then(Position::from_index)
    }

    /// Whether a screen coordinate is on the order toggle.
    pub fn on_toggle(&self, column: u16, row: u16) -> bool {
        self.toggle.contains(layout::Position::new(column, row))
    }

    /// Line of the move list under a screen coordinate, counted from the top.
    pub fn move_line_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.moves_inner();
        inner
            .contains(layout::Position::new(column, row))
            .then(|| usize::from(row - inner.y))
    }

    fn moves_inner(&self) -> Rect {
        Rect::new(
            self.moves.x.saturating_add(1),
            self.moves.y.saturating_add(1),
            self.moves.width.saturating_sub(2),
            self.moves.height.saturating_sub(2),
        )
    }
}

/// Draws the whole screen and returns the layout it used.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let layout = ScreenLayout::new(frame.area());
    let game = app.game();
    let winning_line = game.winning_line();

    // Title
    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    // Board
    draw_grid(frame, &layout);
    for pos in Position::ALL {
        let highlighted = winning_line.is_some_and(|line| line.contains(pos));
        draw_cell(
            frame,
            layout.cells[pos.to_index()],
            game.current_board().get(pos),
            pos,
            pos == app.cursor(),
            highlighted,
            app.show_key_hints(),
        );
    }

    if app.show_key_hints() {
        let hints = Paragraph::new("arrows move  enter/1-9 play  t order  [ ] step  home/end  q quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hints, layout.hints);
    }

    // Status
    let status = Paragraph::new(game.current_status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    // Toggle
    let toggle = Paragraph::new(game.order_toggle_label())
        .alignment(Alignment::Center)
        .block(Block::default().title("Order").borders(Borders::ALL));
    frame.render_widget(toggle, layout.toggle);

    // Moves
    let lines: Vec<Line> = game
        .move_list()
        .into_iter()
        .map(|item| {
            let style = if item.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(item.label, style))
        })
        .collect();
    let moves = Paragraph::new(lines).block(Block::default().title("Moves").borders(Borders::ALL));
    frame.render_widget(moves, layout.moves);

    layout
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    cell: Cell,
    pos: Position,
    under_cursor: bool,
    highlighted: bool,
    show_key_hints: bool,
) {
    let (symbol, base_style) = match cell {
        Cell::Empty if show_key_hints => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (" ".to_string(), Style::default()),
        Cell::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.fg(Color::Red)
    } else {
        base_style
    };
    let style = if under_cursor {
        style.bg(Color::White)
    } else {
        style
    };

    let paragraph = Paragraph::new(vec![Line::raw(""), Line::from(Span::styled(symbol, style))])
        .style(if under_cursor {
            Style::default().bg(Color::White)
        } else {
            Style::default()
        })
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_grid(frame: &mut Frame, layout: &ScreenLayout) {
    let board = layout.board;
    let separator = Style::default().fg(Color::DarkGray);

    for row in 1..3u16 {
        let y = board.y + row * (CELL_HEIGHT + 1) - 1;
        let area = Rect::new(board.x, y, board.width, 1).intersection(board);
        let line = Paragraph::new("─".repeat(usize::from(board.width))).style(separator);
        frame.render_widget(line, area);
    }

    for col in 1..3u16 {
        let x = board.x + col * (CELL_WIDTH + 1) - 1;
        let area = Rect::new(x, board.y, 1, board.height).intersection(board);
        let lines: Vec<Line> = (0..board.height)
            .map(|y| {
                if (y + 1) % (CELL_HEIGHT + 1) == 0 {
                    Line::raw("┼")
                } else {
                    Line::raw("│")
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).style(separator), area);
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
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

    fn layout() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 100, 30))
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = layout();
        for (i, a) in layout.cells.iter().enumerate() {
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_cell_hit_testing() {
        let layout = layout();
        for pos in Position::ALL {
            let rect = layout.cells[pos.to_index()];
            assert_eq!(layout.cell_at(rect.x, rect.y), Some(pos));
            assert_eq!(
                layout.cell_at(rect.x + rect.width - 1, rect.y + rect.height - 1),
                Some(pos)
            );
        }
        // Separator between the first two cells.
        let first = layout.cells[0];
        assert_eq!(layout.cell_at(first.x + first.width, first.y), None);
    }

    #[test]
    fn test_cells_sit_inside_board() {
        let layout = layout();
        for rect in layout.cells {
            assert_eq!(rect.intersection(layout.board), rect);
        }
    }

    #[test]
    fn test_move_line_hit_testing() {
        let layout = layout();
        let moves = layout.moves;
        // Border rows are not list lines.
        assert_eq!(layout.move_line_at(moves.x + 1, moves.y), None);
        assert_eq!(layout.move_line_at(moves.x + 1, moves.y + 1), Some(0));
        assert_eq!(layout.move_line_at(moves.x + 1, moves.y + 3), Some(2));
        assert_eq!(layout.move_line_at(moves.x, moves.y + 1), None);
    }

    #[test]
    fn test_toggle_hit_testing() {
        let layout = layout();
        assert!(layout.on_toggle(layout.toggle.x, layout.toggle.y));
        assert!(!layout.on_toggle(layout.status.x, layout.status.y));
    }

    #[test]
    fn test_center_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 10, 4);
        assert_eq!(center_rect(area, 20, 20), area);
        assert_eq!(center_rect(area, 4, 2), Rect::new(8, 6, 4, 2));
    }
}
