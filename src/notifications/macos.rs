use anyhow::Result;
use mac_notification_sys::Notification;

pub fn send_notification(title: &str, subtitle: &str, message: &str, sound: bool) -> Result<()> {
    let mut notification = Notification::new();

    notification
        .title(title)
        .subtitle(subtitle)
        .message(message);

    if sound {
        notification.sound("default");
    }

    notification
        .send()
        .map_err(|e| anyhow::anyhow!("notification center error: {e:?}"))?;

    Ok(())
}
