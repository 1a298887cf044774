//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use rewind_tictactoe::{Event, Game, Position};
use tracing::{debug, instrument};

use super::input::{digit_position, move_cursor};
use super::ui::{HitMap, Target};
use crate::locale::Locale;

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board: arrows move the cursor, Enter plays.
    #[default]
    Board,
    /// The move list: arrows select, Enter jumps.
    Moves,
}

impl Focus {
    /// Toggles between `Board` and `Moves`.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
///
/// Game state lives in [`Game`]; everything here is presentation: the
/// keyboard cursor, focus, move-list selection and the regions drawn last.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    locale: Locale,
    cursor: Position,
    focus: Focus,
    selected: usize,
    hit_map: HitMap,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(game))]
    pub fn new(game: Game, locale: Locale) -> Self {
        Self {
            game,
            locale,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            hit_map: HitMap::default(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Label language.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Keyboard cursor on the board.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move-list row (display order).
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Regions recorded by the last draw.
    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    /// Stores the regions from the latest draw for mouse hit-testing.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Feeds one event to the game.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: Event) {
        let game = std::mem::take(&mut self.game);
        self.game = game.update(event);
        debug!(current = self.game.current_move(), "Event applied");
        self.select_current();
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('s') | KeyCode::Char('S') => self.dispatch(Event::ToggleSortOrder),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                if self.focus == Focus::Moves {
                    self.select_current();
                }
            }
            code if digit_position(code).is_some() => {
                if let Some(pos) = digit_position(code) {
                    self.cursor = pos;
                    self.dispatch(Event::ClickCell(pos));
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Event::ClickCell(self.cursor)),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(entry) = self.game.move_list().get(self.selected) {
                    self.dispatch(Event::JumpTo(entry.number()));
                }
            }
            _ => {}
        }
    }

    /// Handles a mouse event.
    ///
    /// Left presses act on what is under the pointer. The wheel over the
    /// move list moves its selection, scrolling rows into view.
    #[instrument(skip(self), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> AppAction {
        let target = self.hit_map.hit(mouse.column, mouse.row);
        let over_list = matches!(target, Some(Target::Move(_) | Target::MoveList));

        match mouse.kind {
            MouseEventKind::ScrollDown if over_list => {
                self.focus_moves();
                self.select_next();
                return AppAction::Continue;
            }
            MouseEventKind::ScrollUp if over_list => {
                self.focus_moves();
                self.select_previous();
                return AppAction::Continue;
            }
            MouseEventKind::Down(MouseButton::Left) => {}
            _ => return AppAction::Continue,
        }

        match target {
            Some(Target::Cell(pos)) => {
                self.cursor = pos;
                self.dispatch(Event::ClickCell(pos));
            }
            Some(Target::Move(mv)) => {
                self.focus = Focus::Moves;
                self.dispatch(Event::JumpTo(mv));
            }
            Some(Target::SortToggle) => self.dispatch(Event::ToggleSortOrder),
            Some(Target::MoveList) => self.focus_moves(),
            None => debug!("Click outside any target"),
        }
        AppAction::Continue
    }

    fn select_current(&mut self) {
        let current = self.game.current_move();
        self.selected = self
            .game
            .move_list()
            .iter()
            .position(|entry| entry.number() == current)
            .unwrap_or(0);
    }

    fn focus_moves(&mut self) {
        if self.focus != Focus::Moves {
            self.focus = Focus::Moves;
            self.select_current();
        }
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        let last = self.game.move_list().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use rewind_tictactoe::{Player, SortOrder, Square};

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn new_app() -> App {
        App::new(Game::new(), Locale::English)
    }

    #[test]
    fn test_digit_plays_square() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(
            app.game().board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = new_app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.game().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let mut app = new_app();
        let mut key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(app.handle_key(key), AppAction::Continue);
        assert_eq!(app.game().current_move(), 0);
    }

    #[test]
    fn test_move_list_navigation_jumps() {
        let mut app = new_app();
        for c in ['1', '4', '2'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.game().current_move(), 3);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.selected(), 3);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().current_move(), 2);
        assert_eq!(app.game().history().len(), 3);
        assert_eq!(app.selected(), 2);
    }

    #[test]
    fn test_sort_toggle_keeps_selection_on_current() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.game().sort_order(), SortOrder::Descending);
        assert_eq!(app.selected(), 0);
        assert_eq!(app.game().current_move(), 1);
    }

    #[test]
    fn test_new_move_takes_the_selection() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.selected(), 1);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.selected(), 2);

        let mut app = App::new(Game::with_sort_order(SortOrder::Descending), Locale::English);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.game().move_list()[app.selected()].number(), 1);

        // Newest first: the new move lands on row 0.
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.selected(), 0);
        assert_eq!(app.game().move_list()[0].number(), 3);
    }

    #[test]
    fn test_selection_stops_at_list_ends() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Tab);
        for _ in 0..5 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected(), 1);
        for _ in 0..5 {
            press(&mut app, KeyCode::Up);
        }
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), AppAction::Quit);
    }
}
