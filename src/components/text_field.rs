//! Single-line labeled text input.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::dispatch::{Component, EventKind};

/// Props for [`TextField`].
pub struct TextFieldProps<'a, A> {
    /// Label rendered as the block title.
    pub label: &'a str,
    /// Current value, owned by the state.
    pub value: &'a str,
    /// Hint shown while the value is empty.
    pub placeholder: &'a str,
    pub is_focused: bool,
    /// Highlight the field as the cause of a validation failure.
    pub is_invalid: bool,
    /// Constructor for the action emitted on every edit.
    pub on_change: fn(String) -> A,
}

/// A labeled input with cursor editing.
///
/// Handles typing, backspace, delete, and cursor movement. The value lives
/// in the state; only the cursor position is internal UI state.
#[derive(Default)]
pub struct TextField {
    /// Cursor position as a byte index into the value.
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
    }

    fn move_left(&mut self, value: &str) {
        self.cursor = value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
    }

    fn move_right(&mut self, value: &str) {
        self.cursor = value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(value.len());
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut next = String::with_capacity(value.len() + c.len_utf8());
        next.push_str(&value[..self.cursor]);
        next.push(c);
        next.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        next
    }

    fn delete_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let start = value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        let next = format!("{}{}", &value[..start], &value[self.cursor..]);
        self.cursor = start;
        Some(next)
    }

    fn delete_at(&self, value: &str) -> Option<String> {
        let c = value[self.cursor..].chars().next()?;
        Some(format!(
            "{}{}",
            &value[..self.cursor],
            &value[self.cursor + c.len_utf8()..]
        ))
    }
}

impl<A> Component<A> for TextField {
    type Props<'a> = TextFieldProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }

        let EventKind::Key(key) = event else {
            return None;
        };

        // Ctrl/Alt chords belong to the form, not the field
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        self.clamp_cursor(props.value);

        match key.code {
            KeyCode::Char(c) => {
                let next = self.insert_char(props.value, c);
                Some((props.on_change)(next))
            }
            KeyCode::Backspace => self.delete_before(props.value).map(props.on_change),
            KeyCode::Delete => self.delete_at(props.value).map(props.on_change),
            KeyCode::Left => {
                self.move_left(props.value);
                None
            }
            KeyCode::Right => {
                self.move_right(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let border_color = if props.is_invalid {
            Color::Red
        } else if props.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", props.label));

        let (text, style) = if props.value.is_empty() {
            (props.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (props.value, Style::default())
        };

        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        if props.is_focused {
            let x = inner.x + self.cursor as u16;
            if x < inner.x + inner.width {
                frame.set_cursor_position((x, inner.y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::testing::{key, ActionAssertions, RenderHarness};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Change(String),
    }

    fn props(value: &str) -> TextFieldProps<'_, TestAction> {
        TextFieldProps {
            label: "Name",
            value,
            placeholder: "your first name",
            is_focused: true,
            is_invalid: false,
            on_change: TestAction::Change,
        }
    }

    fn collect(field: &mut TextField, s: &str, value: &str) -> Vec<TestAction> {
        field
            .handle_event(&EventKind::Key(key(s)), props(value))
            .into_iter()
            .collect()
    }

    #[test]
    fn typing_emits_change() {
        let mut field = TextField::new();
        collect(&mut field, "a", "").assert_first(TestAction::Change("a".into()));
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut field = TextField::new();
        field.cursor = 5;
        collect(&mut field, "!", "hello").assert_first(TestAction::Change("hello!".into()));
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut field = TextField::new();
        field.cursor = 5;
        collect(&mut field, "backspace", "hello")
            .assert_first(TestAction::Change("hell".into()));
        assert_eq!(field.cursor, 4);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut field = TextField::new();
        collect(&mut field, "backspace", "hello").assert_empty();
    }

    #[test]
    fn delete_removes_at_cursor() {
        let mut field = TextField::new();
        collect(&mut field, "delete", "hello")
            .assert_first(TestAction::Change("ello".into()));
    }

    #[test]
    fn cursor_movement_emits_nothing() {
        let mut field = TextField::new();
        field.cursor = 3;
        collect(&mut field, "left", "hello").assert_empty();
        assert_eq!(field.cursor, 2);
        collect(&mut field, "end", "hello").assert_empty();
        assert_eq!(field.cursor, 5);
    }

    #[test]
    fn ctrl_chords_pass_through() {
        let mut field = TextField::new();
        collect(&mut field, "ctrl+d", "hello").assert_empty();
    }

    #[test]
    fn unfocused_ignores_events() {
        let mut field = TextField::new();
        let mut p = props("");
        p.is_focused = false;
        let actions: Vec<_> = field
            .handle_event(&EventKind::Key(key("a")), p)
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn renders_value_and_label() {
        let mut harness = RenderHarness::new(30, 3);
        let mut field = TextField::new();

        let output = harness.render_to_string_plain(|frame| {
            field.render(frame, frame.area(), props("John"));
        });

        assert!(output.contains("Name"));
        assert!(output.contains("John"));
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let mut harness = RenderHarness::new(30, 3);
        let mut field = TextField::new();

        let output = harness.render_to_string_plain(|frame| {
            field.render(frame, frame.area(), props(""));
        });

        assert!(output.contains("your first name"));
    }
}
