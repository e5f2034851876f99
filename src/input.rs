//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] actions.  Navigation is applied
//! directly; actions that need the store or the link opener are returned as a
//! [`Command`] for the main loop to carry out.
//!
//! ## For contributors
//!
//! To add a new keybinding:
//!
//! 1. Add a method on [`App`] for the action, or a [`Command`] variant if it
//!    needs something `App` does not own.
//! 2. Add a `KeyCode` match arm in [`handle_key_event`].
//! 3. Update the help text in `ui::draw_status_bar`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// Side effects requested by a keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a new fetch.
    Fetch,
    /// Open the selected article's link.
    OpenLink,
}

/// Process a single key event, updating app state accordingly.
///
/// Only reacts to key-press events (ignoring release / repeat) so that each
/// physical keypress triggers exactly one action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('r') | KeyCode::F(5) => return Some(Command::Fetch),
        KeyCode::Enter | KeyCode::Char('o') => return Some(Command::OpenLink),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, KeyModifiers};

    use super::*;
    use crate::source::{Article, NewsResult};
    use crate::store::FetchState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_app() -> App {
        let mut app = App::new("hu");
        app.apply(FetchState::Success(NewsResult {
            status: "ok".into(),
            total_results: 2,
            articles: vec![Article::default(), Article::default()],
        }));
        app
    }

    #[test]
    fn q_and_esc_quit() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = App::new("hu");
            assert_eq!(handle_key_event(&mut app, press(code)), None);
            assert!(app.quit);
        }
    }

    #[test]
    fn r_requests_fetch() {
        let mut app = App::new("hu");
        assert_eq!(handle_key_event(&mut app, press(KeyCode::Char('r'))), Some(Command::Fetch));
        assert_eq!(handle_key_event(&mut app, press(KeyCode::F(5))), Some(Command::Fetch));
    }

    #[test]
    fn enter_requests_open() {
        let mut app = loaded_app();
        assert_eq!(handle_key_event(&mut app, press(KeyCode::Enter)), Some(Command::OpenLink));
    }

    #[test]
    fn arrows_move_selection() {
        let mut app = loaded_app();
        handle_key_event(&mut app, press(KeyCode::Down));
        assert_eq!(app.list_state.selected(), Some(1));
        handle_key_event(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.list_state.selected(), Some(0));
        handle_key_event(&mut app, press(KeyCode::End));
        assert_eq!(app.list_state.selected(), Some(1));
        handle_key_event(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new("hu");
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        key.state = KeyEventState::NONE;
        assert_eq!(handle_key_event(&mut app, key), None);
        assert!(!app.quit);
    }
}
