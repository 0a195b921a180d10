//! HTTP calls against an AWTRIX3 display.
//!
//! Thin reqwest layer: build the base URL for a host, issue one request,
//! map non-2xx responses to errors. No retries; each CLI invocation performs
//! at most a handful of short requests.

use std::time::Duration;

use awtrix3_shared::{DeviceStats, Notification};
use reqwest::Url;
use tracing::debug;

use crate::error::{AwtrixError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the base URL for a device host.
///
/// Accepts a bare hostname/IP, `host:port`, or a full URL; bare hosts get an
/// `http://` prefix. Doubles as the registry's address validator.
pub fn device_base_url(host: &str) -> Result<Url> {
    let candidate = if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{host}")
    };

    let url = Url::parse(&candidate).map_err(|_| AwtrixError::InvalidAddress(host.to_string()))?;
    if url.host_str().is_none() {
        return Err(AwtrixError::InvalidAddress(host.to_string()));
    }
    Ok(url)
}

fn http_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(client)
}

fn endpoint(host: &str, path: &str) -> Result<Url> {
    let url = device_base_url(host)?
        .join(path)
        .map_err(|_| AwtrixError::InvalidAddress(host.to_string()))?;
    Ok(url)
}

/// Firmware version string from the device's `/version` endpoint.
pub async fn get_version(host: &str) -> Result<String> {
    let url = endpoint(host, "/version")?;
    debug!(%url, "GET");
    let res = http_client()?.get(url).send().await?.error_for_status()?;
    Ok(res.text().await?)
}

/// Current statistics from `/api/stats`.
pub async fn get_stats(host: &str) -> Result<DeviceStats> {
    let url = endpoint(host, "/api/stats")?;
    debug!(%url, "GET");
    let res = http_client()?.get(url).send().await?.error_for_status()?;
    Ok(res.json().await?)
}

/// Send a notification via `/api/notify`.
pub async fn send_notification(host: &str, notification: &Notification) -> Result<()> {
    let url = endpoint(host, "/api/notify")?;
    debug!(%url, "POST");
    http_client()?
        .post(url)
        .json(notification)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

/// Dismiss the notification currently on screen.
pub async fn dismiss_notification(host: &str) -> Result<()> {
    let url = endpoint(host, "/api/notify/dismiss")?;
    debug!(%url, "POST");
    http_client()?.post(url).send().await?.error_for_status()?;
    Ok(())
}

/// Switch the display on or off via `/api/power`.
pub async fn set_power(host: &str, on: bool) -> Result<()> {
    let url = endpoint(host, "/api/power")?;
    debug!(%url, on, "POST");
    http_client()?
        .post(url)
        .json(&serde_json::json!({ "power": on }))
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}
