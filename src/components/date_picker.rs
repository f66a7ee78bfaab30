//! Calendar overlay for picking the stay dates.

use chrono::{Datelike, NaiveDate};
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::action::Action;
use crate::dispatch::{Component, EventKind};
use crate::state::SelectionState;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Props for [`DatePicker`].
pub struct DatePickerProps<'a> {
    pub selection: &'a SelectionState,
    /// Day under the cursor, owned by the state.
    pub cursor: NaiveDate,
}

/// Modal month calendar.
///
/// Enter picks the start date first, then the end date; picking with both
/// already set starts a fresh range. All writes go through the selection
/// actions, so chronology stays unconstrained.
#[derive(Default)]
pub struct DatePicker;

impl DatePicker {
    pub fn new() -> Self {
        Self::default()
    }

    fn pick(props: &DatePickerProps<'_>) -> Vec<Action> {
        let picked = props.cursor.format(DATE_FORMAT).to_string();
        if props.selection.selected_start_date.is_empty() {
            vec![Action::DateStartSet(picked)]
        } else if props.selection.selected_end_date.is_empty() {
            vec![Action::DateEndSet(picked)]
        } else {
            vec![Action::DateClear, Action::DateStartSet(picked)]
        }
    }
}

impl Component<Action> for DatePicker {
    type Props<'a> = DatePickerProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('d') => vec![Action::DatepickerToggle],
                _ => Vec::new(),
            };
        }

        match key.code {
            KeyCode::Esc => vec![Action::DatepickerToggle],
            KeyCode::Enter => Self::pick(&props),
            KeyCode::Char('c') => vec![Action::DateClear],
            KeyCode::Left | KeyCode::Char('h') => vec![Action::DatepickerCursorMove(-1)],
            KeyCode::Right | KeyCode::Char('l') => vec![Action::DatepickerCursorMove(1)],
            KeyCode::Up | KeyCode::Char('k') => vec![Action::DatepickerCursorMove(-7)],
            KeyCode::Down | KeyCode::Char('j') => vec![Action::DatepickerCursorMove(7)],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width < 27 || area.height < 13 {
            return;
        }

        let modal = centered_rect(27, 13, area);
        frame.render_widget(Clear, modal);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", props.cursor.format("%B %Y")));
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let month_start = props.cursor.with_day(1).unwrap_or(props.cursor);
        let start = NaiveDate::parse_from_str(&props.selection.selected_start_date, DATE_FORMAT).ok();
        let end = NaiveDate::parse_from_str(&props.selection.selected_end_date, DATE_FORMAT).ok();

        let mut lines = vec![Line::from(Span::styled(
            " Mo Tu We Th Fr Sa Su",
            Style::default().fg(Color::DarkGray),
        ))];

        let lead = month_start.weekday().num_days_from_monday() as usize;
        let mut week: Vec<Span> = vec![Span::raw(" ")];
        week.extend(std::iter::repeat(Span::raw("   ")).take(lead));
        let mut weekday_col = lead;

        for day in 1..=days_in_month(month_start) {
            let date = month_start.with_day(day).unwrap_or(month_start);
            let mut style = Style::default();
            if start == Some(date) || end == Some(date) {
                style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
            }
            if date == props.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            week.push(Span::styled(format!("{day:>2} "), style));

            weekday_col += 1;
            if weekday_col == 7 {
                lines.push(Line::from(std::mem::take(&mut week)));
                week.push(Span::raw(" "));
                weekday_col = 0;
            }
        }
        if week.len() > 1 {
            lines.push(Line::from(week));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " enter pick  c clear  esc close",
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Centered rectangle within an area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

fn days_in_month(month_start: NaiveDate) -> u32 {
    let next = if month_start.month() == 12 {
        NaiveDate::from_ymd_opt(month_start.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(month_start.year(), month_start.month() + 1, 1)
    };
    next.map(|n| (n - month_start).num_days() as u32).unwrap_or(31)
}
