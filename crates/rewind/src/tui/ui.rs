//! Stateless UI rendering for the game screen.
//!
//! [`draw`] renders the whole screen from an [`App`] and returns the
//! clickable regions it laid out, so mouse input can be resolved against
//! exactly what is on screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Player, Position, Square};

use super::app::{App, Focus};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Something the user can click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board square.
    Cell(Position),
    /// A move-list entry, by history index.
    Move(usize),
    /// The move-list pane outside any entry.
    MoveList,
    /// The sort-order toggle.
    SortToggle,
}

/// Clickable regions from the last draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
    list_offset: usize,
}

impl HitMap {
    /// First move-list row that was visible.
    pub fn list_offset(&self) -> usize {
        self.list_offset
    }

    /// Records a clickable region.
    pub fn push(&mut self, area: Rect, target: Target) {
        self.regions.push((area, target));
    }

    /// Finds the target under a terminal cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        self.regions
            .iter()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x.saturating_add(area.width)
                    && row >= area.y
                    && row < area.y.saturating_add(area.height)
            })
            .map(|(_, target)| *target)
    }

    /// The region recorded for `target`, if any.
    pub fn area_of(&self, target: Target) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(area, _)| *area)
    }
}

/// Draws the game screen and returns its clickable regions.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let mut hits = HitMap::default();
    let locale = app.locale();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT + 3),
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(locale.title())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(BOARD_HEIGHT), Constraint::Length(3)])
        .split(body[0]);

    draw_board(frame, left[0], app, &mut hits);

    let status = Paragraph::new(locale.status(&app.game().status()))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(locale.status_title()),
        );
    frame.render_widget(status, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(body[1]);

    let toggle = Paragraph::new(locale.toggle_label(app.game().sort_order()))
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, right[0]);
    hits.push(right[0], Target::SortToggle);

    draw_moves(frame, right[1], app, &mut hits);

    let help = Paragraph::new(locale.help())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    hits
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, row_area, app, row, hits);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize, hits: &mut HitMap) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cell_area, app, pos);
            hits.push(cell_area, Target::Cell(pos));
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, mark_style) = match app.game().board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let mut area_style = Style::default();
    let mut mark_style = mark_style;
    if app.game().is_highlighted(pos) {
        area_style = area_style.bg(Color::Green);
        mark_style = mark_style.fg(Color::Black).bg(Color::Green);
    }
    if app.focus() == Focus::Board && app.cursor() == pos {
        area_style = area_style.add_modifier(Modifier::REVERSED);
    }

    // Pad to the middle line of the cell.
    let text = Text::from(vec![Line::from(""), Line::from(Span::styled(symbol, mark_style))]);
    let paragraph = Paragraph::new(text)
        .style(area_style)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
    let locale = app.locale();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(locale.moves_title());
    let inner = block.inner(area);

    let list = app.game().move_list();
    let len = list.len();
    let ascending = app.game().sort_order().is_ascending();

    let items: Vec<ListItem> = list
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            // Numbered like an ordered list; counts down when reversed.
            let ordinal = if ascending { i + 1 } else { len - i };
            let style = if *entry.is_current() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED)
            };
            ListItem::new(format!("{:>2}. {}", ordinal, locale.move_entry(entry))).style(style)
        })
        .collect();

    // The list scrolls to keep the selection, or else the current move, in view.
    let (anchor, highlight) = match app.focus() {
        Focus::Moves => (
            app.selected(),
            Style::default().add_modifier(Modifier::REVERSED),
        ),
        Focus::Board => (
            list.iter().position(|e| *e.is_current()).unwrap_or(0),
            Style::default(),
        ),
    };
    let mut state = ListState::default()
        .with_offset(app.hit_map().list_offset())
        .with_selected(Some(anchor));

    let widget = List::new(items).block(block).highlight_style(highlight);
    frame.render_stateful_widget(widget, area, &mut state);

    let offset = state.offset();
    hits.list_offset = offset;
    for (row, entry) in list.iter().enumerate().skip(offset) {
        let Ok(line) = u16::try_from(row - offset) else {
            break;
        };
        if line >= inner.height {
            break;
        }
        let line_area = Rect {
            x: inner.x,
            y: inner.y + line,
            width: inner.width,
            height: 1,
        };
        hits.push(line_area, Target::Move(entry.number()));
    }
    hits.push(area, Target::MoveList);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
