//! Tests for the terminal UI against an in-memory backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};
use rewind::{App, AppAction, Focus, HitMap, Locale, Target, draw};
use rewind_tictactoe::{Game, Position, SortOrder};

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 30)).unwrap()
}

fn render(terminal: &mut Terminal<TestBackend>, app: &mut App) {
    let mut hits = HitMap::default();
    terminal.draw(|f| hits = draw(f, app)).unwrap();
    app.set_hit_map(hits);
}

fn screen_text(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn click(app: &mut App, target: Target) -> AppAction {
    let area = app
        .hit_map()
        .area_of(target)
        .unwrap_or_else(|| panic!("{:?} was not drawn", target));
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: area.x,
        row: area.y,
        modifiers: KeyModifiers::NONE,
    })
}

fn press(app: &mut App, code: KeyCode) -> AppAction {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn is_green(buf: &Buffer, app: &App, pos: Position) -> bool {
    let area = app.hit_map().area_of(Target::Cell(pos)).unwrap();
    buf[(area.x, area.y)].bg == Color::Green
}

#[test]
fn test_initial_screen() {
    let mut terminal = terminal();
    let mut app = App::new(Game::new(), Locale::English);
    render(&mut terminal, &mut app);

    let text = screen_text(terminal.backend().buffer());
    assert!(text.contains("Next player: X"));
    assert!(text.contains("Go to game start"));
    assert!(text.contains("Sort descending"));
    for i in 0..9 {
        let pos = Position::from_index(i).unwrap();
        assert!(app.hit_map().area_of(Target::Cell(pos)).is_some());
    }
}

#[test]
fn test_click_cell_plays() {
    let mut terminal = terminal();
    let mut app = App::new(Game::new(), Locale::English);
    render(&mut terminal, &mut app);

    assert_eq!(click(&mut app, Target::Cell(Position::Center)), AppAction::Continue);
    render(&mut terminal, &mut app);

    let text = screen_text(terminal.backend().buffer());
    assert_eq!(app.game().current_move(), 1);
    assert!(text.contains("Next player: O"));
    assert!(text.contains("You are at move #1 (1, 1)"));
}

#[test]
fn test_winning_line_cleared_by_jump_back() {
    let mut terminal = terminal();
    let mut app = App::new(Game::new(), Locale::English);
    // X 0, O 3, X 1, O 4, X 2
    for c in ['1', '4', '2', '5', '3'] {
        press(&mut app, KeyCode::Char(c));
    }
    render(&mut terminal, &mut app);

    let buf = terminal.backend().buffer().clone();
    assert!(screen_text(&buf).contains("Winner: X"));
    assert!(is_green(&buf, &app, Position::TopLeft));
    assert!(is_green(&buf, &app, Position::TopCenter));
    assert!(is_green(&buf, &app, Position::TopRight));
    assert!(!is_green(&buf, &app, Position::MiddleLeft));

    // Clicks on a finished game are ignored.
    click(&mut app, Target::Cell(Position::BottomRight));
    assert_eq!(app.game().history().len(), 6);

    click(&mut app, Target::Move(2));
    render(&mut terminal, &mut app);
    let buf = terminal.backend().buffer().clone();
    assert_eq!(app.focus(), Focus::Moves);
    assert!(screen_text(&buf).contains("Next player: X"));
    assert!(!is_green(&buf, &app, Position::TopLeft));
    // Jumping discards the later moves.
    assert_eq!(app.game().history().len(), 3);
    assert!(!screen_text(&buf).contains("Go to move #5"));

    click(&mut app, Target::Cell(Position::BottomRight));
    assert_eq!(app.game().history().len(), 4);
    assert_eq!(app.game().current_move(), 3);
}

#[test]
fn test_sort_toggle_reverses_list() {
    let mut terminal = terminal();
    let mut app = App::new(Game::new(), Locale::English);
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Char('1'));
    render(&mut terminal, &mut app);

    click(&mut app, Target::SortToggle);
    render(&mut terminal, &mut app);

    assert_eq!(app.game().sort_order(), SortOrder::Descending);
    let text = screen_text(terminal.backend().buffer());
    assert!(text.contains("Sort ascending"));
    let newest = text.find("You are at move #2").unwrap();
    let oldest = text.find("Go to game start").unwrap();
    assert!(newest < oldest);
}

#[test]
fn test_korean_labels() {
    let mut terminal = terminal();
    let mut app = App::new(Game::new(), Locale::Korean);
    press(&mut app, KeyCode::Char('5'));
    render(&mut terminal, &mut app);

    // Wide glyphs leave empty continuation cells, so compare without them.
    let text: String = screen_text(terminal.backend().buffer())
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    assert!(text.contains("다음플레이어:O"));
    assert!(text.contains("게임시작으로이동"));
}

#[test]
fn test_right_click_and_misses_do_nothing() {
    let mut terminal = terminal();
    let mut app = App::new(Game::new(), Locale::English);
    render(&mut terminal, &mut app);

    let area = app.hit_map().area_of(Target::Cell(Position::Center)).unwrap();
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: area.x,
        row: area.y,
        modifiers: KeyModifiers::NONE,
    });
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(app.game(), &Game::new());
}

fn scroll_down(app: &mut App, column: u16, row: u16) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

#[test]
fn test_move_list_scrolls_to_game_start_at_minimum_height() {
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
    let mut app = App::new(Game::with_sort_order(SortOrder::Descending), Locale::English);
    // A full-board draw: X 0, O 1, X 2, O 4, X 3, O 5, X 7, O 6, X 8
    for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        press(&mut app, KeyCode::Char(c));
    }
    render(&mut terminal, &mut app);

    // Newest first: the oldest row does not fit yet.
    assert!(app.hit_map().area_of(Target::Move(0)).is_none());
    let newest = app.hit_map().area_of(Target::Move(9)).unwrap();

    for _ in 0..9 {
        scroll_down(&mut app, newest.x, newest.y);
        render(&mut terminal, &mut app);
    }
    assert_eq!(app.focus(), Focus::Moves);
    assert!(screen_text(terminal.backend().buffer()).contains("Go to game start"));

    click(&mut app, Target::Move(0));
    assert_eq!(app.game().current_move(), 0);
    assert_eq!(app.game().history().len(), 1);
}

#[test]
fn test_keyboard_selection_stays_drawn() {
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
    let mut app = App::new(Game::new(), Locale::English);
    for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Tab);
    render(&mut terminal, &mut app);
    assert!(app.hit_map().area_of(Target::Move(9)).is_some());

    for _ in 0..10 {
        press(&mut app, KeyCode::Up);
        render(&mut terminal, &mut app);
        let selected = app.game().move_list()[app.selected()].number();
        assert!(app.hit_map().area_of(Target::Move(selected)).is_some());
    }
    assert_eq!(app.selected(), 0);
}
