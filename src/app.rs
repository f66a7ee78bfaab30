//! Root view: routes events and composes the screens.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::components::{
    DatePicker, DatePickerProps, ReservationForm, ReservationFormProps, SentConfirmation,
    SentConfirmationProps,
};
use crate::dispatch::{Component, EventKind};
use crate::state::AppState;

/// Top-level router over the three screens: the editable form, the date
/// picker overlay, and the sent confirmation.
///
/// Owns no data; it decides which component receives events and draws them
/// from the same state every component reads.
#[derive(Default)]
pub struct App {
    form: ReservationForm,
    picker: DatePicker,
    sent: SentConfirmation,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map an event to actions based on which screen is active.
    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        if let EventKind::Key(key) = event {
            // Ctrl+C always quits, whatever has focus
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('c'))
            {
                return vec![Action::Quit];
            }
        }

        if state.selection.datepicker_open {
            let props = DatePickerProps {
                selection: &state.selection,
                cursor: state.picker_cursor,
            };
            return self.picker.handle_event(event, props).into_iter().collect();
        }

        if state.form.submitted {
            if let EventKind::Key(key) = event {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                    return vec![Action::Quit];
                }
            }
            return Vec::new();
        }

        let props = ReservationFormProps {
            state,
            is_focused: true,
        };
        self.form.handle_event(event, props).into_iter().collect()
    }

    /// Draw the active screen; the picker overlays the form.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if state.form.submitted {
            self.sent
                .render(frame, area, SentConfirmationProps { state });
            return;
        }

        let props = ReservationFormProps {
            state,
            is_focused: !state.selection.datepicker_open,
        };
        self.form.render(frame, area, props);

        if state.selection.datepicker_open {
            let props = DatePickerProps {
                selection: &state.selection,
                cursor: state.picker_cursor,
            };
            self.picker.render(frame, area, props);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::testing::{key, ActionAssertions};
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::new(NaiveDate::from_ymd_opt(2021, 12, 1).unwrap())
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let mut app = App::new();

        let mut st = state();
        app.map_event(&EventKind::Key(key("ctrl+c")), &st)
            .assert_first(Action::Quit);

        st.selection.datepicker_open = true;
        app.map_event(&EventKind::Key(key("ctrl+c")), &st)
            .assert_first(Action::Quit);

        st.selection.datepicker_open = false;
        st.form.submitted = true;
        app.map_event(&EventKind::Key(key("ctrl+c")), &st)
            .assert_first(Action::Quit);
    }

    #[test]
    fn events_route_to_the_picker_while_open() {
        let mut app = App::new();
        let mut st = state();
        st.selection.datepicker_open = true;

        app.map_event(&EventKind::Key(key("enter")), &st)
            .assert_first(Action::DateStartSet("2021-12-01".into()));
    }

    #[test]
    fn sent_state_only_accepts_quit() {
        let mut app = App::new();
        let mut st = state();
        st.form.submitted = true;

        app.map_event(&EventKind::Key(key("q")), &st)
            .assert_first(Action::Quit);
        app.map_event(&EventKind::Key(key("a")), &st).assert_empty();
    }

    #[test]
    fn editing_routes_to_the_form() {
        let mut app = App::new();
        let st = state();

        app.map_event(&EventKind::Key(key("J")), &st)
            .assert_first(Action::FormNameChange("J".into()));
    }
}
