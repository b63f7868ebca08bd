//! Small colored labels used inside table rows and the wizard.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::scheduling::AvailabilityStatus;
use crate::types::{ConsentStatus, Stage};

const AMBER: Color = Color::Rgb(245, 158, 11);

/// Consent status badge: icon plus label
pub struct StatusBadge;

impl StatusBadge {
    pub fn icon(status: ConsentStatus) -> &'static str {
        match status {
            ConsentStatus::Available => "✓",
            ConsentStatus::ConsentExpiring => "⏱",
        }
    }

    pub fn color(status: ConsentStatus) -> Color {
        match status {
            ConsentStatus::Available => Color::Green,
            ConsentStatus::ConsentExpiring => AMBER,
        }
    }

    pub fn span(status: ConsentStatus) -> Span<'static> {
        Span::styled(
            format!("{} {}", Self::icon(status), status.label()),
            Style::default().fg(Self::color(status)),
        )
    }
}

/// Pipeline stage pill
pub fn stage_span(stage: Stage) -> Span<'static> {
    let color = match stage {
        Stage::ScheduleInterview => Color::Blue,
        Stage::ShortList => Color::Magenta,
        Stage::Screen => Color::Cyan,
        Stage::Hired => Color::Green,
        Stage::Rejected => Color::DarkGray,
    };
    Span::styled(format!(" {} ", stage.label()), Style::default().fg(color))
}

pub fn availability_color(status: AvailabilityStatus) -> Color {
    match status {
        AvailabilityStatus::AllAvailable => Color::Green,
        AvailabilityStatus::ObserversUnavailable => AMBER,
        AvailabilityStatus::InterviewersUnavailable => Color::Red,
    }
}

/// Aggregate availability line shown under the participant list
pub fn availability_span(status: AvailabilityStatus) -> Span<'static> {
    Span::styled(
        format!("● {}", status.label()),
        Style::default()
            .fg(availability_color(status))
            .add_modifier(Modifier::BOLD),
    )
}
