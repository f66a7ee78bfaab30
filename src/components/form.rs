//! The reservation form.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{HelpBar, HelpBarProps, TextField, TextFieldProps};
use crate::action::Action;
use crate::dispatch::{Component, EventKind};
use crate::state::{AppState, Field};
use crate::validate::ValidationError;

/// Props for [`ReservationForm`].
pub struct ReservationFormProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Collects the reservation details.
///
/// Owns no data: field values, focus, and the validation outcome all live in
/// the state; the stay dates are read straight from the selection store.
/// Keys: Tab/Shift+Tab cycle focus, Ctrl+D opens the date picker, Enter
/// submits, Ctrl+R clears, Esc quits.
pub struct ReservationForm {
    inputs: [TextField; 4],
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self {
            inputs: [
                TextField::new(),
                TextField::new(),
                TextField::new(),
                TextField::new(),
            ],
        }
    }
}

impl ReservationForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn on_change(field: Field) -> fn(String) -> Action {
        match field {
            Field::Name => Action::FormNameChange,
            Field::LastName => Action::FormLastNameChange,
            Field::Email => Action::FormEmailChange,
            Field::Phone => Action::FormPhoneChange,
        }
    }

    fn field_props<'a>(&self, state: &'a AppState, field: Field, focused: bool) -> TextFieldProps<'a, Action> {
        let invalid = match state.form.error {
            Some(ValidationError::MissingField(f)) => f == field,
            Some(ValidationError::InvalidEmail) => field == Field::Email,
            None => false,
        };
        TextFieldProps {
            label: field.label(),
            value: state.form.field(field),
            placeholder: field.placeholder(),
            is_focused: focused && field == state.focus,
            is_invalid: invalid,
            on_change: Self::on_change(field),
        }
    }

    fn stay_line(state: &AppState) -> Line<'_> {
        let selection = &state.selection;
        if selection.selected_start_date.is_empty() && selection.selected_end_date.is_empty() {
            return Line::from(Span::styled(
                "press ctrl+d to pick your stay dates",
                Style::default().fg(Color::DarkGray),
            ));
        }
        let date = |s: &str| {
            if s.is_empty() {
                "…".to_string()
            } else {
                s.to_string()
            }
        };
        Line::from(vec![
            Span::styled("Check-in ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                date(&selection.selected_start_date),
                Style::default().fg(Color::Green),
            ),
            Span::raw("   "),
            Span::styled("Check-out ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                date(&selection.selected_end_date),
                Style::default().fg(Color::Green),
            ),
        ])
    }
}

impl Component<Action> for ReservationForm {
    type Props<'a> = ReservationFormProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('d') => vec![Action::DatepickerToggle],
                KeyCode::Char('r') => vec![Action::FormClear],
                _ => Vec::new(),
            };
        }

        match key.code {
            KeyCode::Tab => vec![Action::FormFocusNext],
            KeyCode::BackTab => vec![Action::FormFocusPrev],
            KeyCode::Enter => vec![Action::FormSubmit],
            KeyCode::Esc => vec![Action::Quit],
            _ => {
                let focus = props.state.focus;
                let field_props = self.field_props(props.state, focus, true);
                self.inputs[focus.index()]
                    .handle_event(event, field_props)
                    .into_iter()
                    .collect()
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Reservation ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .title_alignment(Alignment::Center);
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let chunks = Layout::vertical([
            Constraint::Length(2), // stay dates
            Constraint::Length(3), // name
            Constraint::Length(3), // last name
            Constraint::Length(3), // email
            Constraint::Length(3), // phone
            Constraint::Length(1), // error message
            Constraint::Min(0),
            Constraint::Length(1), // help
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(Self::stay_line(state)).alignment(Alignment::Center),
            chunks[0],
        );

        for field in Field::ALL {
            let field_props = self.field_props(state, field, props.is_focused);
            self.inputs[field.index()].render(frame, chunks[field.index() + 1], field_props);
        }

        if let Some(error) = &state.form.error {
            frame.render_widget(
                Paragraph::new(format!("⚠ {error}"))
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center),
                chunks[5],
            );
        }

        let mut help = HelpBar;
        help.render(
            frame,
            chunks[7],
            HelpBarProps {
                hints: &[
                    ("tab", "next field"),
                    ("ctrl+d", "dates"),
                    ("enter", "accept"),
                    ("ctrl+r", "clear"),
                    ("esc", "quit"),
                ],
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::testing::{key, ActionAssertions, RenderHarness};
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::new(NaiveDate::from_ymd_opt(2021, 12, 1).unwrap())
    }

    fn handle(form: &mut ReservationForm, state: &AppState, s: &str) -> Vec<Action> {
        let props = ReservationFormProps {
            state,
            is_focused: true,
        };
        form.handle_event(&EventKind::Key(key(s)), props)
            .into_iter()
            .collect()
    }

    #[test]
    fn datepicker_trigger_emits_exactly_one_toggle() {
        let mut form = ReservationForm::new();
        let state = state();

        let actions = handle(&mut form, &state, "ctrl+d");
        actions.assert_count(1);
        actions.assert_first(Action::DatepickerToggle);
    }

    #[test]
    fn enter_submits() {
        let mut form = ReservationForm::new();
        handle(&mut form, &state(), "enter").assert_first(Action::FormSubmit);
    }

    #[test]
    fn clear_control_emits_form_clear() {
        let mut form = ReservationForm::new();
        handle(&mut form, &state(), "ctrl+r").assert_first(Action::FormClear);
    }

    #[test]
    fn tab_cycles_focus() {
        let mut form = ReservationForm::new();
        handle(&mut form, &state(), "tab").assert_first(Action::FormFocusNext);
        handle(&mut form, &state(), "shift+tab").assert_first(Action::FormFocusPrev);
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut form = ReservationForm::new();
        let mut st = state();

        handle(&mut form, &st, "J").assert_first(Action::FormNameChange("J".into()));

        st.focus = Field::Email;
        st.form.email = "a".into();
        handle(&mut form, &st, "b").assert_first(Action::FormEmailChange("ab".into()));
    }

    #[test]
    fn unfocused_ignores_events() {
        let mut form = ReservationForm::new();
        let st = state();
        let props = ReservationFormProps {
            state: &st,
            is_focused: false,
        };
        let actions: Vec<Action> = form
            .handle_event(&EventKind::Key(key("enter")), props)
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn renders_labels_and_hint() {
        let mut harness = RenderHarness::new(60, 24);
        let mut form = ReservationForm::new();
        let st = state();

        let output = harness.render_to_string_plain(|frame| {
            let props = ReservationFormProps {
                state: &st,
                is_focused: true,
            };
            form.render(frame, frame.area(), props);
        });

        assert!(output.contains("Reservation"));
        assert!(output.contains("Name"));
        assert!(output.contains("Last name"));
        assert!(output.contains("Email"));
        assert!(output.contains("Phone"));
        assert!(output.contains("pick your stay dates"));
        assert!(output.contains("accept"));
    }

    #[test]
    fn renders_selected_dates_from_the_store() {
        let mut harness = RenderHarness::new(60, 24);
        let mut form = ReservationForm::new();
        let mut st = state();
        st.selection.selected_start_date = "2021-12-01".into();
        st.selection.selected_end_date = "2021-12-05".into();

        let output = harness.render_to_string_plain(|frame| {
            let props = ReservationFormProps {
                state: &st,
                is_focused: true,
            };
            form.render(frame, frame.area(), props);
        });

        assert!(output.contains("2021-12-01"));
        assert!(output.contains("2021-12-05"));
    }

    #[test]
    fn renders_validation_error() {
        let mut harness = RenderHarness::new(60, 24);
        let mut form = ReservationForm::new();
        let mut st = state();
        st.form.error = Some(ValidationError::InvalidEmail);

        let output = harness.render_to_string_plain(|frame| {
            let props = ReservationFormProps {
                state: &st,
                is_focused: true,
            };
            form.render(frame, frame.area(), props);
        });

        assert!(output.contains("valid email address"));
    }
}
