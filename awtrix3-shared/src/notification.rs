use serde::{Deserialize, Serialize};

/// Payload for the display's `/api/notify` endpoint.
///
/// Field names follow the AWTRIX3 HTTP API. Unset options are omitted from the
/// JSON entirely so the display keeps its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub text: String,

    /// Icon ID from the device's icon database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<u32>,

    /// Text color, hex (`#RRGGBB`) or `r,g,b`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Display duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    /// Keep the notification on screen until dismissed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hold: bool,

    /// Wake the display if it is sleeping.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub wakeup: bool,
}

impl Notification {
    pub fn new(text: impl Into<String>) -> Self {
        Notification {
            text: text.into(),
            ..Notification::default()
        }
    }
}
