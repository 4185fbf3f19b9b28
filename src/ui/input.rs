use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press was turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Key not bound to anything.
    None,
    Edit,
    Submit,
    Refresh,
    ToggleTheme,
    ToggleNotifications,
    ResetPreferences,
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::Quit;
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return InputAction::None;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.request_quit();
            InputAction::Quit
        }
        KeyCode::Enter => {
            // Rejected input is already recorded on the app for display.
            let _ = app.submit();
            InputAction::Submit
        }
        KeyCode::Backspace => {
            app.delete_char();
            InputAction::Edit
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            app.insert_text(ch.encode_utf8(&mut [0; 4]));
            InputAction::Edit
        }
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'r' => {
                app.refresh();
                InputAction::Refresh
            }
            't' => {
                app.toggle_theme();
                InputAction::ToggleTheme
            }
            'n' => {
                app.toggle_notifications();
                InputAction::ToggleNotifications
            }
            'x' => {
                app.reset_preferences();
                InputAction::ResetPreferences
            }
            _ => InputAction::None,
        },
        _ => InputAction::None,
    }
}

/// Bracketed paste goes straight into the id buffer; submit validates it.
pub fn handle_paste(app: &mut App, text: &str) -> InputAction {
    app.insert_text(text);
    InputAction::Edit
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
