use anyhow::Result;
use notify_rust::Notification;

pub fn send_notification(title: &str, subtitle: &str, message: &str, _sound: bool) -> Result<()> {
    // freedesktop has no subtitle field
    let body = if subtitle.is_empty() {
        message.to_string()
    } else {
        format!("{subtitle}\n{message}")
    };

    Notification::new()
        .summary(title)
        .body(&body)
        .appname("hirepipe")
        .show()?;

    Ok(())
}
