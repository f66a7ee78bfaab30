//! Application actions.
//!
//! Naming: category prefix first (`Date`, `Datepicker`, `Form`), verb last.

/// Everything that can happen in the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    // ===== Date selection =====
    /// Set the start date, unconditionally. No format validation.
    DateStartSet(String),

    /// Set the end date, unconditionally.
    DateEndSet(String),

    /// Reset both dates to unset. Idempotent.
    DateClear,

    // ===== Date picker =====
    /// Flip the picker open/closed.
    DatepickerToggle,

    /// Move the picker cursor by a number of days.
    DatepickerCursorMove(i64),

    // ===== Form =====
    FormNameChange(String),
    FormLastNameChange(String),
    FormEmailChange(String),
    FormPhoneChange(String),
    FormFocusNext,
    FormFocusPrev,

    /// Validate and submit; moves to the sent state or records the error.
    FormSubmit,

    /// Reset the form fields and any pending error.
    FormClear,

    /// Exit the application.
    Quit,
}

impl crate::dispatch::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::DateStartSet(_) => "DateStartSet",
            Action::DateEndSet(_) => "DateEndSet",
            Action::DateClear => "DateClear",
            Action::DatepickerToggle => "DatepickerToggle",
            Action::DatepickerCursorMove(_) => "DatepickerCursorMove",
            Action::FormNameChange(_) => "FormNameChange",
            Action::FormLastNameChange(_) => "FormLastNameChange",
            Action::FormEmailChange(_) => "FormEmailChange",
            Action::FormPhoneChange(_) => "FormPhoneChange",
            Action::FormFocusNext => "FormFocusNext",
            Action::FormFocusPrev => "FormFocusPrev",
            Action::FormSubmit => "FormSubmit",
            Action::FormClear => "FormClear",
            Action::Quit => "Quit",
        }
    }
}
