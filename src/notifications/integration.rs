//! Notification integration trait definition.

use anyhow::Result;

use super::NotificationEvent;

/// A destination that mirrors dashboard events.
///
/// Delivery is synchronous and best effort; the service logs failures.
pub trait NotificationIntegration {
    /// Integration name (for logging)
    fn name(&self) -> &str;

    fn is_enabled(&self) -> bool;

    fn send(&self, event: &NotificationEvent) -> Result<()>;
}
