use serde::{Deserialize, Serialize};

/// Statistics reported by the display's `/api/stats` endpoint.
///
/// Every field is optional: firmware versions differ in what they report, and
/// unknown fields are ignored so newer firmware never breaks decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceStats {
    #[serde(default)]
    pub version: Option<String>,
    /// Seconds since boot.
    #[serde(default)]
    pub uptime: Option<u64>,
    /// Free heap in bytes.
    #[serde(default)]
    pub ram: Option<u64>,
    /// Battery charge in percent.
    #[serde(default)]
    pub bat: Option<u8>,
    /// Ambient light in lux.
    #[serde(default)]
    pub lux: Option<f64>,
    /// Temperature in degrees Celsius.
    #[serde(default)]
    pub temp: Option<f64>,
    /// Relative humidity in percent.
    #[serde(default)]
    pub hum: Option<f64>,
    /// WiFi RSSI in dBm.
    #[serde(default)]
    pub wifi_signal: Option<i32>,
    #[serde(default)]
    pub ip_address: Option<String>,
    /// Name of the app currently shown.
    #[serde(default)]
    pub app: Option<String>,
}
