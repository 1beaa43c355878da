//! Input Events Module
//!
//! Normalizes keyboard and mouse input into a single event record and
//! routes it to user handlers. Whatever produced the input (a console,
//! a test script), handlers see the same key names and button numbers.
//!
//! Key names follow the Tk keysym convention: `"Return"`, `"BackSpace"`,
//! `"Up"`, `"Prior"`/`"Next"` for page up/down, `"space"` for the space
//! bar and the character itself for other printable keys. Keys with no
//! mapping are named `"NoSymbol"`.

mod binder;
pub mod console;

pub use binder::{Handler, InputBinder};

use crate::core::Point;

/// Which kind of input an event reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyPress,
    KeyRelease,
    Click,
}

/// Keyboard modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub logo: bool,
}

impl Modifiers {
    /// Create new modifiers
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any modifier is pressed
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.logo
    }
}

/// A key, independent of the input technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySymbol {
    Char(char),
    Return,
    BackSpace,
    Tab,
    Escape,
    Delete,
    Insert,
    Home,
    End,
    /// Page up
    Prior,
    /// Page down
    Next,
    Up,
    Down,
    Left,
    Right,
    F(u8),
    Unknown,
}

impl KeySymbol {
    /// The symbolic key name
    pub fn name(&self) -> String {
        match self {
            KeySymbol::Char(' ') => "space".to_string(),
            KeySymbol::Char(c) => c.to_string(),
            KeySymbol::F(n) => format!("F{}", n),
            KeySymbol::Return => "Return".to_string(),
            KeySymbol::BackSpace => "BackSpace".to_string(),
            KeySymbol::Tab => "Tab".to_string(),
            KeySymbol::Escape => "Escape".to_string(),
            KeySymbol::Delete => "Delete".to_string(),
            KeySymbol::Insert => "Insert".to_string(),
            KeySymbol::Home => "Home".to_string(),
            KeySymbol::End => "End".to_string(),
            KeySymbol::Prior => "Prior".to_string(),
            KeySymbol::Next => "Next".to_string(),
            KeySymbol::Up => "Up".to_string(),
            KeySymbol::Down => "Down".to_string(),
            KeySymbol::Left => "Left".to_string(),
            KeySymbol::Right => "Right".to_string(),
            KeySymbol::Unknown => "NoSymbol".to_string(),
        }
    }

    /// Whether this is one of the four arrow keys
    pub fn is_arrow(&self) -> bool {
        matches!(
            self,
            KeySymbol::Up | KeySymbol::Down | KeySymbol::Left | KeySymbol::Right
        )
    }
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// Conventional button number: 1 left, 2 middle, 3 right
    pub fn number(self) -> u8 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Middle => 2,
            MouseButton::Right => 3,
        }
    }
}

/// A normalized input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub kind: EventKind,
    /// Set for key events
    pub key: Option<KeySymbol>,
    /// Set for click events
    pub button: Option<MouseButton>,
    /// Cell under the pointer, for click events
    pub position: Option<Point>,
    pub modifiers: Modifiers,
}

impl InputEvent {
    pub fn key_press(key: KeySymbol) -> Self {
        Self::key(EventKind::KeyPress, key)
    }

    pub fn key_release(key: KeySymbol) -> Self {
        Self::key(EventKind::KeyRelease, key)
    }

    pub fn click(button: MouseButton, position: impl Into<Point>) -> Self {
        Self {
            kind: EventKind::Click,
            key: None,
            button: Some(button),
            position: Some(position.into()),
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The symbolic key name, for key events
    pub fn key_name(&self) -> Option<String> {
        self.key.map(|k| k.name())
    }

    fn key(kind: EventKind, key: KeySymbol) -> Self {
        Self {
            kind,
            key: Some(key),
            button: None,
            position: None,
            modifiers: Modifiers::default(),
        }
    }
}
