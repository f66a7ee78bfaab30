//! Component trait for pure UI elements.

use ratatui::{layout::Rect, Frame};

use crate::dispatch::EventKind;

/// A UI element that renders from read-only props and emits actions.
///
/// Components follow three rules:
/// 1. Props carry all data needed for rendering, borrowed from the state
/// 2. `handle_event` returns actions and never mutates shared state
/// 3. `render` is a function of props plus internal UI state (a cursor
///    position, a scroll offset) kept in `&mut self`
///
/// Focus is passed through props; an unfocused component ignores events.
pub trait Component<A> {
    /// Read-only data required to render and handle events.
    type Props<'a>;

    /// Map an event to zero or more actions.
    ///
    /// The return type accepts `None`, `Some(action)`, or a `Vec` of
    /// actions. The default implementation emits nothing, which is what
    /// render-only components want.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Draw the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
