//! Notification system for dashboard events.
//!
//! Every event becomes an in-app toast; integrations (currently the OS
//! notification center) can mirror it elsewhere.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::types::CandidateId;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "linux")]
pub mod linux;

mod integration;
mod os_integration;
mod service;

pub use integration::NotificationIntegration;
pub use os_integration::OsIntegration;
pub use service::NotificationService;

/// Send a notification using the platform-specific implementation.
/// This is a low-level function used by OsIntegration.
pub fn send_os_notification(title: &str, subtitle: &str, message: &str, sound: bool) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        macos::send_notification(title, subtitle, message, sound)
    }

    #[cfg(target_os = "linux")]
    {
        linux::send_notification(title, subtitle, message, sound)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        let _ = sound;
        tracing::info!("Notification: {} - {} - {}", title, subtitle, message);
        Ok(())
    }
}

/// All notification events the dashboard raises.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", content = "data")]
pub enum NotificationEvent {
    /// Manual scheduling chosen from a row's action menu
    #[serde(rename = "schedule.manual")]
    ManualScheduleRequested { candidate_id: CandidateId },

    /// AI scheduling wizard opened
    #[serde(rename = "schedule.ai_started")]
    AiScheduleStarted { candidate_id: CandidateId },

    /// Backend refused the request
    #[serde(rename = "schedule.failed")]
    ScheduleFailed {
        candidate_id: CandidateId,
        error: String,
    },
}

impl NotificationEvent {
    /// Get the event type string (e.g., "schedule.manual")
    pub fn event_type(&self) -> &'static str {
        match self {
            NotificationEvent::ManualScheduleRequested { .. } => "schedule.manual",
            NotificationEvent::AiScheduleStarted { .. } => "schedule.ai_started",
            NotificationEvent::ScheduleFailed { .. } => "schedule.failed",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, NotificationEvent::ScheduleFailed { .. })
    }

    /// Toast content as (title, description)
    pub fn to_toast(&self) -> (String, String) {
        match self {
            NotificationEvent::ManualScheduleRequested { candidate_id } => (
                "Manual Schedule".to_string(),
                format!("Opening manual scheduling for candidate {candidate_id}"),
            ),
            NotificationEvent::AiScheduleStarted { candidate_id } => (
                "AI Schedule".to_string(),
                format!("AI scheduling initiated for candidate {candidate_id}"),
            ),
            NotificationEvent::ScheduleFailed {
                candidate_id,
                error,
            } => (
                "Scheduling Failed".to_string(),
                format!("Candidate {candidate_id}: {error}"),
            ),
        }
    }

    /// Format for OS notification display.
    /// Returns (title, subtitle, message).
    pub fn to_os_notification(&self) -> (String, String, String) {
        let (title, message) = self.to_toast();
        (title, "hirepipe".to_string(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_strings() {
        let test_cases = vec![
            (
                NotificationEvent::ManualScheduleRequested { candidate_id: 1 },
                "schedule.manual",
            ),
            (
                NotificationEvent::AiScheduleStarted { candidate_id: 1 },
                "schedule.ai_started",
            ),
            (
                NotificationEvent::ScheduleFailed {
                    candidate_id: 1,
                    error: "offline".into(),
                },
                "schedule.failed",
            ),
        ];

        for (event, expected_type) in test_cases {
            assert_eq!(event.event_type(), expected_type);
        }
    }

    #[test]
    fn test_row_action_toasts() {
        let (title, message) =
            NotificationEvent::ManualScheduleRequested { candidate_id: 3 }.to_toast();
        assert_eq!(title, "Manual Schedule");
        assert_eq!(message, "Opening manual scheduling for candidate 3");

        let (title, message) = NotificationEvent::AiScheduleStarted { candidate_id: 4 }.to_toast();
        assert_eq!(title, "AI Schedule");
        assert_eq!(message, "AI scheduling initiated for candidate 4");
    }

    #[test]
    fn test_event_serialization() {
        let event = NotificationEvent::ScheduleFailed {
            candidate_id: 2,
            error: "calendar offline".into(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"schedule.failed\""));
        assert!(json.contains("\"candidate_id\":2"));
    }

    #[test]
    fn test_to_os_notification_uses_toast_text() {
        let event = NotificationEvent::ScheduleFailed {
            candidate_id: 5,
            error: "calendar offline".into(),
        };
        let (title, subtitle, message) = event.to_os_notification();
        assert_eq!(title, "Scheduling Failed");
        assert_eq!(subtitle, "hirepipe");
        assert_eq!(message, "Candidate 5: calendar offline");
        assert!(event.is_error());
    }
}
