//! Centralized state management primitives.
//!
//! The application follows a Redux/Elm-shaped loop:
//!
//! - **Actions** describe state changes as plain values
//! - the **Store** owns the state and feeds actions through a pure reducer
//! - **Components** render from borrowed props and emit actions, never
//!   mutating shared state directly
//! - terminal events arrive through an async poller and are mapped to
//!   actions in a single event-handling context
//!
//! State is mutated only inside the reducer; everything downstream reads it
//! through `&AppState` props on the next render (pull-based recomputation).

pub mod action;
pub mod component;
pub mod event;
pub mod store;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use store::{Reducer, Store};
