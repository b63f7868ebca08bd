//! Confirm step rendering

use crate::ui::schedule_wizard::ScheduleWizardDialog;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

impl ScheduleWizardDialog {
    pub(crate) fn render_confirm_step(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Length(2), // Check mark
                Constraint::Length(2), // Title
                Constraint::Length(2), // Description
                Constraint::Min(0),
            ])
            .split(area);

        let check = Paragraph::new(Span::styled(
            "✓",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(check, chunks[1]);

        let title = Paragraph::new(Line::from(Span::styled(
            "Interview Scheduled!",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[2]);

        let desc = Paragraph::new(Line::from(Span::styled(
            "The AI has successfully scheduled the interview.",
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(desc, chunks[3]);
    }
}
