//! Transient title + description notices in the bottom-right corner.

use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::notifications::NotificationEvent;

const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 4;
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub is_error: bool,
    expires_at: Instant,
}

/// Stack of live toasts, newest last
pub struct ToastStack {
    toasts: Vec<Toast>,
    duration: Duration,
}

impl ToastStack {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
        }
    }

    pub fn push(&mut self, event: &NotificationEvent) {
        self.push_at(event, Instant::now());
    }

    fn push_at(&mut self, event: &NotificationEvent, now: Instant) {
        let (title, description) = event.to_toast();
        self.toasts.push(Toast {
            title,
            description,
            is_error: event.is_error(),
            expires_at: now + self.duration,
        });
    }

    /// Drop expired toasts; called on every tick
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    fn prune_at(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let width = TOAST_WIDTH.min(area.width);

        for (i, toast) in self.toasts.iter().rev().take(MAX_VISIBLE).enumerate() {
            let offset = (i as u16 + 1) * TOAST_HEIGHT + 1;
            if offset > area.height {
                break;
            }
            let rect = Rect {
                x: area.x + area.width - width,
                y: area.y + area.height - offset,
                width,
                height: TOAST_HEIGHT,
            };

            let accent = if toast.is_error {
                Color::Red
            } else {
                Color::Green
            };

            frame.render_widget(Clear, rect);
            let body = Paragraph::new(vec![
                Line::from(Span::styled(
                    toast.title.as_str(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                )),
                Line::from(toast.description.as_str()),
            ])
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent)),
            );
            frame.render_widget(body, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_uses_event_text() {
        let mut stack = ToastStack::new(Duration::from_secs(4));
        stack.push(&NotificationEvent::ManualScheduleRequested { candidate_id: 6 });

        let toast = &stack.toasts()[0];
        assert_eq!(toast.title, "Manual Schedule");
        assert_eq!(
            toast.description,
            "Opening manual scheduling for candidate 6"
        );
        assert!(!toast.is_error);
    }

    #[test]
    fn test_prune_removes_only_expired() {
        let mut stack = ToastStack::new(Duration::from_millis(100));
        let start = Instant::now();
        stack.push_at(&NotificationEvent::AiScheduleStarted { candidate_id: 1 }, start);
        stack.push_at(
            &NotificationEvent::AiScheduleStarted { candidate_id: 2 },
            start + Duration::from_millis(80),
        );

        stack.prune_at(start + Duration::from_millis(50));
        assert_eq!(stack.toasts().len(), 2);

        stack.prune_at(start + Duration::from_millis(120));
        assert_eq!(stack.toasts().len(), 1);
        assert!(stack.toasts()[0].description.ends_with('2'));

        stack.prune_at(start + Duration::from_millis(200));
        assert!(stack.is_empty());
    }
}
