//! Key hints line.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::action::Action;
use crate::dispatch::Component;

pub struct HelpBarProps<'a> {
    /// `(key, description)` pairs.
    pub hints: &'a [(&'a str, &'a str)],
}

#[derive(Default)]
pub struct HelpBar;

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut spans = Vec::with_capacity(props.hints.len() * 3);
        for (i, (key, description)) in props.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {description}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }
}
