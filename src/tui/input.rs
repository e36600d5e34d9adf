//! Key binding dispatch for the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveView, SandboxApp};

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut SandboxApp, key: KeyEvent) {
    // Some terminals report releases too
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Global bindings
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('1') => return app.select_view(ActiveView::Patterns),
        KeyCode::Char('2') => return app.select_view(ActiveView::Recognition),
        KeyCode::Char('3') => return app.select_view(ActiveView::Thoughts),
        KeyCode::Tab => return app.select_view(app.view.next()),
        KeyCode::BackTab => return app.select_view(app.view.prev()),
        _ => {}
    }

    // Panel-specific bindings
    match app.view {
        ActiveView::Patterns => {
            if let KeyCode::Char('r') | KeyCode::Enter = key.code {
                app.regenerate();
            }
        }
        ActiveView::Recognition => {}
        ActiveView::Thoughts => match key.code {
            KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Enter => {
                app.toggle_stream();
            }
            KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
            KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
            KeyCode::Char('G') | KeyCode::End => app.scroll_to_bottom(),
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SandboxConfig;
    use tokio::sync::mpsc;

    fn app() -> SandboxApp {
        let (tx, _rx) = mpsc::unbounded_channel();
        SandboxApp::new(&SandboxConfig::default(), tx)
    }

    fn press(app: &mut SandboxApp, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn number_keys_select_views() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.view, ActiveView::Thoughts);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.view, ActiveView::Recognition);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.view, ActiveView::Patterns);
    }

    #[test]
    fn tab_cycles_views() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, ActiveView::Recognition);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.view, ActiveView::Thoughts);
    }

    #[test]
    fn r_regenerates_only_on_pattern_panel() {
        let mut app = app();
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.generation_count, 1);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.generation_count, 1);
    }

    #[tokio::test]
    async fn space_toggles_on_thought_panel() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.stream.is_running(), "space is inert off the thought panel");

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.stream.is_running());
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.stream.is_running());
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);

        let mut app2 = self::app();
        press(&mut app2, KeyCode::Char('q'));
        assert!(app2.should_quit);
    }

    #[test]
    fn release_events_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit);
    }
}
