//! Reducer - all state transitions in one place.

use chrono::{Duration, NaiveDate};

use crate::action::Action;
use crate::state::AppState;
use crate::validate::validate;

/// Handle one action against the state.
///
/// Returns `true` if the state changed and the UI should re-render.
pub fn reducer(state: &mut AppState, action: Action) -> bool {
    match action {
        // ===== Date selection =====
        Action::DateStartSet(date) => {
            state.selection.selected_start_date = date;
            true
        }

        Action::DateEndSet(date) => {
            state.selection.selected_end_date = date;
            true
        }

        Action::DateClear => {
            if state.selection.selected_start_date.is_empty()
                && state.selection.selected_end_date.is_empty()
            {
                return false;
            }
            state.selection.clear_dates();
            true
        }

        // ===== Date picker =====
        Action::DatepickerToggle => {
            state.selection.datepicker_open = !state.selection.datepicker_open;
            if state.selection.datepicker_open {
                // Resume from the picked start date when there is one
                if let Ok(start) =
                    NaiveDate::parse_from_str(&state.selection.selected_start_date, "%Y-%m-%d")
                {
                    state.picker_cursor = start;
                }
            }
            true
        }

        Action::DatepickerCursorMove(days) => {
            state.picker_cursor = state.picker_cursor + Duration::days(days);
            true
        }

        // ===== Form =====
        Action::FormNameChange(value) => {
            state.form.name = value;
            true
        }

        Action::FormLastNameChange(value) => {
            state.form.last_name = value;
            true
        }

        Action::FormEmailChange(value) => {
            state.form.email = value;
            true
        }

        Action::FormPhoneChange(value) => {
            state.form.phone = value;
            true
        }

        Action::FormFocusNext => {
            state.focus = state.focus.next();
            true
        }

        Action::FormFocusPrev => {
            state.focus = state.focus.prev();
            true
        }

        Action::FormSubmit => {
            match validate(&state.form) {
                Ok(()) => {
                    state.form.submitted = true;
                    state.form.error = None;
                }
                Err(error) => state.form.error = Some(error),
            }
            true
        }

        Action::FormClear => {
            state.form.clear();
            true
        }

        // Quit is handled in the main loop, not here
        Action::Quit => false,
    }
}
