//! Test utilities for exercising components and renders.
//!
//! - [`key`] builds a `KeyEvent` from a string such as `"enter"` or
//!   `"ctrl+d"`
//! - [`keys`] turns a text snippet into the key events that would type it
//! - [`RenderHarness`] renders into ratatui's `TestBackend` and returns the
//!   buffer as plain text for assertions
//! - [`ActionAssertions`] adds `assert_first`/`assert_count` helpers to the
//!   action lists components return

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Frame, Terminal};

use crate::dispatch::EventKind;

/// Parse a key string into a `KeyEvent`.
///
/// Accepts a single character (`"a"`), a named key (`"enter"`, `"esc"`,
/// `"tab"`, `"backspace"`, arrows, `"home"`, `"end"`, `"f5"`), optionally
/// prefixed with `ctrl+`, `alt+`, or `shift+`. `"shift+tab"` yields
/// `BackTab`, matching what terminals report.
fn parse_key(s: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let parts: Vec<&str> = s.split('+').collect();
    let (mods, last) = parts.split_at(parts.len() - 1);

    for part in mods {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let name = last[0].to_ascii_lowercase();
    let code = match name.as_str() {
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => {
            if modifiers.contains(KeyModifiers::SHIFT) {
                KeyCode::BackTab
            } else {
                KeyCode::Tab
            }
        }
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = last[0].chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => {
                    let n: u8 = name.strip_prefix('f')?.parse().ok()?;
                    KeyCode::F(n)
                }
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

/// Create a `KeyEvent` from a key string.
///
/// # Panics
///
/// Panics if the key string cannot be parsed, which is what tests want.
pub fn key(s: &str) -> KeyEvent {
    parse_key(s).unwrap_or_else(|| panic!("invalid key string: {s:?}"))
}

/// Create a key `EventKind` from a key string.
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

/// Key events that would type the given text, one per character.
pub fn keys(text: &str) -> Vec<EventKind> {
    text.chars()
        .map(|c| {
            let modifiers = if c.is_ascii_uppercase() {
                KeyModifiers::SHIFT
            } else {
                KeyModifiers::empty()
            };
            EventKind::Key(KeyEvent::new(KeyCode::Char(c), modifiers))
        })
        .collect()
}

/// Renders components into an in-memory terminal for assertions.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        Self { terminal }
    }

    /// Run a render closure and return the buffer contents as plain text,
    /// one line per row with trailing whitespace removed.
    pub fn render_to_string_plain(&mut self, render: impl FnOnce(&mut Frame)) -> String {
        self.terminal.draw(render).expect("draw to test backend");

        let buffer = self.terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            let mut line = String::new();
            for x in 0..buffer.area.width {
                line.push_str(buffer[(x, y)].symbol());
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Assertion helpers for the action lists components return.
pub trait ActionAssertions<A> {
    fn assert_empty(&self);
    fn assert_count(&self, expected: usize);
    fn assert_first(&self, expected: A);
}

impl<A: std::fmt::Debug + PartialEq> ActionAssertions<A> for Vec<A> {
    fn assert_empty(&self) {
        assert!(self.is_empty(), "expected no actions, got: {self:?}");
    }

    fn assert_count(&self, expected: usize) {
        assert_eq!(
            self.len(),
            expected,
            "expected {expected} actions, got: {self:?}"
        );
    }

    fn assert_first(&self, expected: A) {
        assert_eq!(
            self.first(),
            Some(&expected),
            "expected first action {expected:?}, got: {self:?}"
        );
    }
}
