//! OS-native notification integration (macOS/Linux).

use anyhow::Result;

use super::integration::NotificationIntegration;
use super::NotificationEvent;
use crate::config::NotificationsConfig;

/// Mirrors events to the platform's notification center:
/// - macOS: `mac-notification-sys`
/// - Linux: `notify-rust` (freedesktop notifications)
pub struct OsIntegration {
    enabled: bool,
    sound: bool,
}

impl OsIntegration {
    pub fn new(config: &NotificationsConfig) -> Self {
        Self {
            enabled: config.desktop,
            sound: config.sound,
        }
    }
}

impl NotificationIntegration for OsIntegration {
    fn name(&self) -> &str {
        "os"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn send(&self, event: &NotificationEvent) -> Result<()> {
        let (title, subtitle, message) = event.to_os_notification();
        super::send_os_notification(&title, &subtitle, &message, self.sound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_integration_follows_desktop_flag() {
        let mut config = NotificationsConfig::default();
        assert!(!OsIntegration::new(&config).is_enabled());

        config.desktop = true;
        let integration = OsIntegration::new(&config);
        assert!(integration.is_enabled());
        assert_eq!(integration.name(), "os");
    }
}
