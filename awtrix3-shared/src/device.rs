use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A configured AWTRIX3 display.
///
/// `name` is the unique identifier within the registry; `host` is the address
/// the CLI talks to (hostname, `host:port` or full URL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub host: String,
    pub added_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_status: Option<DeviceStatus>,
}

impl Device {
    pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
        Device {
            name: name.into(),
            host: host.into(),
            added_at: Utc::now(),
            last_status: None,
        }
    }
}

/// Result of the most recent connectivity check for a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub online: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware: Option<String>,
    pub checked_at: DateTime<Utc>,
}

impl DeviceStatus {
    pub fn online(firmware: impl Into<String>) -> Self {
        DeviceStatus {
            online: true,
            firmware: Some(firmware.into()),
            checked_at: Utc::now(),
        }
    }

    pub fn offline() -> Self {
        DeviceStatus {
            online: false,
            firmware: None,
            checked_at: Utc::now(),
        }
    }
}
