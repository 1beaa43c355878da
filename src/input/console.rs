//! Console input normalization
//!
//! Converts crossterm terminal events into [`InputEvent`]s.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as CtMouseButton, MouseEvent,
    MouseEventKind,
};

use super::{EventKind, InputEvent, KeySymbol, Modifiers, MouseButton};
use crate::core::Point;

/// Translate a terminal event. Returns `None` for events with no
/// counterpart (resize, focus, paste, mouse movement, button release).
pub fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => Some(translate_key(key)),
        Event::Mouse(mouse) => translate_mouse(mouse),
        _ => None,
    }
}

fn translate_key(event: KeyEvent) -> InputEvent {
    let kind = match event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => EventKind::KeyPress,
        KeyEventKind::Release => EventKind::KeyRelease,
    };
    InputEvent {
        kind,
        key: Some(key_symbol(event.code)),
        button: None,
        position: None,
        modifiers: modifiers(event.modifiers),
    }
}

fn translate_mouse(event: MouseEvent) -> Option<InputEvent> {
    let MouseEventKind::Down(button) = event.kind else {
        return None;
    };
    let button = match button {
        CtMouseButton::Left => MouseButton::Left,
        CtMouseButton::Middle => MouseButton::Middle,
        CtMouseButton::Right => MouseButton::Right,
    };
    Some(
        InputEvent::click(
            button,
            Point::new(i32::from(event.column), i32::from(event.row)),
        )
        .with_modifiers(modifiers(event.modifiers)),
    )
}

/// Map a crossterm key code to a key symbol
pub fn key_symbol(code: KeyCode) -> KeySymbol {
    match code {
        KeyCode::Char(c) => KeySymbol::Char(c),
        KeyCode::Enter => KeySymbol::Return,
        KeyCode::Backspace => KeySymbol::BackSpace,
        KeyCode::Tab | KeyCode::BackTab => KeySymbol::Tab,
        KeyCode::Esc => KeySymbol::Escape,
        KeyCode::Delete => KeySymbol::Delete,
        KeyCode::Insert => KeySymbol::Insert,
        KeyCode::Home => KeySymbol::Home,
        KeyCode::End => KeySymbol::End,
        KeyCode::PageUp => KeySymbol::Prior,
        KeyCode::PageDown => KeySymbol::Next,
        KeyCode::Up => KeySymbol::Up,
        KeyCode::Down => KeySymbol::Down,
        KeyCode::Left => KeySymbol::Left,
        KeyCode::Right => KeySymbol::Right,
        KeyCode::F(n) => KeySymbol::F(n),
        _ => KeySymbol::Unknown,
    }
}

fn modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        shift: mods.contains(KeyModifiers::SHIFT),
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        logo: mods.contains(KeyModifiers::SUPER),
    }
}
