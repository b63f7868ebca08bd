//! Central notification service that dispatches events to all integrations.

use super::integration::NotificationIntegration;
use super::os_integration::OsIntegration;
use super::NotificationEvent;
use crate::config::Config;

pub struct NotificationService {
    integrations: Vec<Box<dyn NotificationIntegration>>,
    enabled: bool,
}

impl NotificationService {
    pub fn from_config(config: &Config) -> Self {
        let integrations: Vec<Box<dyn NotificationIntegration>> =
            vec![Box::new(OsIntegration::new(&config.notifications))];

        Self {
            integrations,
            enabled: config.notifications.enabled,
        }
    }

    /// Service that never delivers anything (used by tests and the CLI)
    pub fn disabled() -> Self {
        Self {
            integrations: Vec::new(),
            enabled: false,
        }
    }

    #[cfg(test)]
    fn with_integration(integration: Box<dyn NotificationIntegration>) -> Self {
        Self {
            integrations: vec![integration],
            enabled: true,
        }
    }

    /// Whether in-app toasts should be shown
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn integration_count(&self) -> usize {
        self.integrations.len()
    }

    /// Mirror an event to every enabled integration. Errors are logged, not
    /// propagated.
    pub fn notify(&self, event: &NotificationEvent) {
        if !self.enabled {
            return;
        }

        for integration in self.integrations.iter().filter(|i| i.is_enabled()) {
            if let Err(e) = integration.send(event) {
                tracing::warn!(
                    integration = %integration.name(),
                    event = %event.event_type(),
                    error = %e,
                    "Notification delivery failed"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingIntegration {
        enabled: bool,
        fail: bool,
        sent: Rc<RefCell<Vec<String>>>,
    }

    impl NotificationIntegration for RecordingIntegration {
        fn name(&self) -> &str {
            "recording"
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn send(&self, event: &NotificationEvent) -> anyhow::Result<()> {
            self.sent.borrow_mut().push(event.event_type().to_string());
            if self.fail {
                anyhow::bail!("delivery refused");
            }
            Ok(())
        }
    }

    fn recording(enabled: bool, fail: bool) -> (NotificationService, Rc<RefCell<Vec<String>>>) {
        let sent = Rc::new(RefCell::new(Vec::new()));
        let service = NotificationService::with_integration(Box::new(RecordingIntegration {
            enabled,
            fail,
            sent: Rc::clone(&sent),
        }));
        (service, sent)
    }

    #[test]
    fn test_service_from_config() {
        let service = NotificationService::from_config(&Config::default());
        assert!(service.is_enabled());
        assert_eq!(service.integration_count(), 1);
    }

    #[test]
    fn test_service_disabled() {
        let service = NotificationService::disabled();
        assert!(!service.is_enabled());
        assert_eq!(service.integration_count(), 0);
    }

    #[test]
    fn test_notify_dispatches_to_enabled_integration() {
        let (service, sent) = recording(true, false);
        service.notify(&NotificationEvent::AiScheduleStarted { candidate_id: 1 });
        assert_eq!(*sent.borrow(), vec!["schedule.ai_started".to_string()]);
    }

    #[test]
    fn test_notify_skips_disabled_integration() {
        let (service, sent) = recording(false, false);
        service.notify(&NotificationEvent::AiScheduleStarted { candidate_id: 1 });
        assert!(sent.borrow().is_empty());
    }

    #[test]
    fn test_delivery_failure_is_swallowed() {
        let (service, sent) = recording(true, true);
        service.notify(&NotificationEvent::ManualScheduleRequested { candidate_id: 2 });
        assert_eq!(sent.borrow().len(), 1);
    }
}
