//! Keyboard input dispatch — overlays → global keys → field editing.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Field, Overlay};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome | Overlay::Notice { .. } => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys. Chords use Ctrl because plain characters belong to the
    //    text fields.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.running = false;
            }
            KeyCode::Char('y') => {
                app.copy_summary();
            }
            KeyCode::Char('x') => {
                app.clear_amounts();
            }
            _ => {}
        }
        return;
    }
    match key.code {
        KeyCode::Esc => {
            app.running = false;
            return;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.active_field = app.active_field.next();
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.active_field = app.active_field.prev();
            return;
        }
        _ => {}
    }

    // 3. Field-specific keys.
    if app.active_field == Field::IncludeFreight {
        if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
            app.inputs.include_freight = !app.inputs.include_freight;
        }
        return;
    }

    // Free-form text editing; nothing the user types is rejected.
    match key.code {
        KeyCode::Char(c) => {
            if let Some(text) = app.active_text_mut() {
                text.push(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(text) = app.active_text_mut() {
                text.pop();
            }
        }
        _ => {}
    }
}
