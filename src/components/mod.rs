pub mod date_picker;
pub mod form;
pub mod help_bar;
pub mod sent_view;
pub mod text_field;

pub use date_picker::{DatePicker, DatePickerProps};
pub use form::{ReservationForm, ReservationFormProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use sent_view::{SentConfirmation, SentConfirmationProps};
pub use text_field::{TextField, TextFieldProps};
