//! Plain-text output formatting helpers.

use awtrix3_shared::{Device, DeviceStatus};

/// One registry row for `device list`.
pub fn device_line(device: &Device, is_default: bool) -> String {
    let marker = if is_default { " (default)" } else { "" };
    format!(
        "{}  {}{}  [{}]",
        device.name,
        device.host,
        marker,
        status_word(device.last_status.as_ref())
    )
}

pub fn status_word(status: Option<&DeviceStatus>) -> &'static str {
    match status {
        Some(s) if s.online => "online",
        Some(_) => "offline",
        None => "unknown",
    }
}

/// Render an uptime in seconds as `1d 2h 3m 4s`, dropping leading zero units.
pub fn uptime(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 || !parts.is_empty() {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 || !parts.is_empty() {
        parts.push(format!("{minutes}m"));
    }
    parts.push(format!("{seconds}s"));
    parts.join(" ")
}
