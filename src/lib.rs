pub mod action;
pub mod app;
pub mod components;
pub mod dispatch;
pub mod reducer;
pub mod state;
pub mod validate;

pub use action::Action;
pub use app::App;
pub use reducer::reducer;
pub use state::{AppState, Field, FormState, Reservation, SelectionState};
pub use validate::ValidationError;
