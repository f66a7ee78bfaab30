//! Confirmation view shown after a successful submission.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{HelpBar, HelpBarProps};
use crate::action::Action;
use crate::dispatch::Component;
use crate::state::AppState;

pub struct SentConfirmationProps<'a> {
    pub state: &'a AppState,
}

/// Render-only terminal state of the interaction cycle: the editable form
/// is gone and the summary is shown until the user quits.
#[derive(Default)]
pub struct SentConfirmation;

impl Component<Action> for SentConfirmation {
    type Props<'a> = SentConfirmationProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let form = &props.state.form;
        let selection = &props.state.selection;

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Reservation sent ")
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .title_alignment(Alignment::Center);
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled("✔", Style::default().fg(Color::Green))),
            Line::default(),
            Line::from(format!("Thank you, {} {}!", form.name, form.last_name)),
            Line::from(format!("We will contact you at {}.", form.email)),
        ];
        if !selection.selected_start_date.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(format!(
                "Your stay: {} to {}",
                selection.selected_start_date, selection.selected_end_date
            )));
        }

        let chunks =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            chunks[0],
        );

        let mut help = HelpBar;
        help.render(frame, chunks[1], HelpBarProps {
            hints: &[("esc", "quit")],
        });
    }
}
