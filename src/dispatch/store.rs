//! State store with reducer pattern.

use std::marker::PhantomData;

use crate::dispatch::Action;

/// A reducer handles one action against the current state.
///
/// Returns `true` if the state changed and a re-render is needed.
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// Single source of truth for application state.
///
/// All mutations go through [`dispatch`](Store::dispatch); observers read the
/// state back through [`state`](Store::state) when they render. Every
/// dispatch is logged through `tracing` with the action name and whether the
/// state changed.
pub struct Store<S, A: Action> {
    state: S,
    reducer: Reducer<S, A>,
    _marker: PhantomData<A>,
}

impl<S, A: Action> Store<S, A> {
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Run an action through the reducer.
    ///
    /// Returns `true` if the state changed and a re-render is needed.
    pub fn dispatch(&mut self, action: A) -> bool {
        let name = action.name();
        let changed = (self.reducer)(&mut self.state, action);
        tracing::debug!(action = name, changed, "action dispatched");
        changed
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Mutable access to the state, for initialization only.
    ///
    /// Regular mutations must go through [`dispatch`](Store::dispatch).
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }
}
