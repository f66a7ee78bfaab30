//! Application state - single source of truth.

use chrono::NaiveDate;
use serde::Serialize;

use crate::validate::ValidationError;

/// Shared date-selection state.
///
/// Dates are ISO `YYYY-MM-DD` strings, empty when unset. The store performs
/// no format validation and enforces no ordering between the two dates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_start_date: String,
    pub selected_end_date: String,
    pub datepicker_open: bool,
}

impl SelectionState {
    pub fn clear_dates(&mut self) {
        self.selected_start_date.clear();
        self.selected_end_date.clear();
    }
}

/// The form field that currently has focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Name,
    LastName,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::LastName, Field::Email, Field::Phone];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Phone => "Phone",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "your first name",
            Field::LastName => "your last name",
            Field::Email => "name@example.com",
            Field::Phone => "+48 123 456 789",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::LastName => 1,
            Field::Email => 2,
            Field::Phone => 3,
        }
    }

    pub fn next(self) -> Field {
        Field::ALL[(self.index() + 1) % Field::ALL.len()]
    }

    pub fn prev(self) -> Field {
        Field::ALL[(self.index() + Field::ALL.len() - 1) % Field::ALL.len()]
    }
}

/// Reservation form state.
///
/// `submitted` flips once a valid submission went through; `error` carries
/// the outcome of the last failed submit attempt and is rendered inline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub submitted: bool,
    pub error: Option<ValidationError>,
}

impl FormState {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
        }
    }

    /// Reset the fields and any pending error. `submitted` is untouched;
    /// the confirmation view is terminal for the interaction cycle.
    pub fn clear(&mut self) {
        self.name.clear();
        self.last_name.clear();
        self.email.clear();
        self.phone.clear();
        self.error = None;
    }
}

/// Everything the UI needs to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    pub selection: SelectionState,
    pub form: FormState,
    pub focus: Field,
    /// Day under the date-picker cursor.
    pub picker_cursor: NaiveDate,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selection: SelectionState::default(),
            form: FormState::default(),
            focus: Field::default(),
            picker_cursor: today,
        }
    }

    /// The accepted reservation, once the form reached the sent state.
    ///
    /// This is the record handed off at the submission boundary.
    pub fn reservation(&self) -> Option<Reservation> {
        if !self.form.submitted {
            return None;
        }
        let date = |s: &String| (!s.is_empty()).then(|| s.clone());
        Some(Reservation {
            name: self.form.name.clone(),
            last_name: self.form.last_name.clone(),
            email: self.form.email.clone(),
            phone: self.form.phone.clone(),
            start_date: date(&self.selection.selected_start_date),
            end_date: date(&self.selection.selected_end_date),
        })
    }
}

/// Accepted reservation request, serialized for the external collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reservation {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut field = Field::Name;
        for expected in [Field::LastName, Field::Email, Field::Phone, Field::Name] {
            field = field.next();
            assert_eq!(field, expected);
        }
        assert_eq!(Field::Name.prev(), Field::Phone);
    }

    #[test]
    fn clear_resets_fields_not_submitted() {
        let mut form = FormState {
            name: "John".into(),
            submitted: true,
            error: Some(ValidationError::InvalidEmail),
            ..Default::default()
        };
        form.clear();
        assert_eq!(form.name, "");
        assert_eq!(form.error, None);
        assert!(form.submitted);
    }

    #[test]
    fn reservation_only_after_submit() {
        let today = NaiveDate::from_ymd_opt(2021, 12, 1).unwrap();
        let mut state = AppState::new(today);
        assert_eq!(state.reservation(), None);

        state.form.name = "John".into();
        state.form.submitted = true;
        state.selection.selected_start_date = "2021-12-01".into();

        let reservation = state.reservation().unwrap();
        assert_eq!(reservation.name, "John");
        assert_eq!(reservation.start_date.as_deref(), Some("2021-12-01"));
        assert_eq!(reservation.end_date, None);
    }
}
