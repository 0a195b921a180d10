//! Shared data types for the AWTRIX3 CLI.
//!
//! Everything in here is plain serde structs: the device registry entries
//! persisted on disk and the JSON payloads exchanged with a display over HTTP.

pub mod device;
pub mod notification;
pub mod stats;

pub use device::{Device, DeviceStatus};
pub use notification::Notification;
pub use stats::DeviceStats;
