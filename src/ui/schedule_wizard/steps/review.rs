//! Review step rendering

use crate::ui::badges::availability_span;
use crate::ui::schedule_wizard::ScheduleWizardDialog;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

impl ScheduleWizardDialog {
    /// Label/value pairs echoed on the Review step
    pub(crate) fn review_fields(&self) -> Vec<(&'static str, String)> {
        let draft = self.wizard.draft();
        let mut fields = vec![
            ("Interview Type", draft.interview_type().short_label().to_string()),
            (
                "Date",
                draft.dates().summary().unwrap_or_else(|| "—".to_string()),
            ),
        ];
        if self.wizard.options().recurring_slots {
            let recurring = if draft.recurring_slots { "Yes" } else { "No" };
            fields.push(("Recurring", recurring.to_string()));
        }
        fields.push(("Participants", draft.participants().len().to_string()));
        fields
    }

    pub(crate) fn render_review_step(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Review Details",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        lines.extend(
            self.review_fields()
                .into_iter()
                .map(|(label, value)| field(label, value)),
        );

        if let Some(days) = self.wizard.draft().dates().day_count().filter(|d| *d > 1) {
            lines.push(Line::from(Span::styled(
                format!("  {days} days"),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let participants = self.display_order();
        if !participants.is_empty() {
            lines.push(Line::from(""));
            for p in participants {
                lines.push(Line::from(vec![
                    Span::raw("  • "),
                    Span::raw(p.member.name.clone()),
                    Span::styled(
                        format!("  {}", p.role.label()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
        }

        if let Some(status) = self.wizard.draft().availability() {
            lines.push(Line::from(""));
            lines.push(Line::from(availability_span(status)));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }
}
