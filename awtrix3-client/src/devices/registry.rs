//! The persisted collection of known AWTRIX3 displays.

use awtrix3_shared::Device;
use serde::{Deserialize, Serialize};

use crate::error::{AwtrixError, Result};

/// Ordered device registry plus the name of the default device.
///
/// Invariants: device names are unique, insertion order is preserved, and
/// `default_device` always names an existing device when set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_device: Option<String>,
    #[serde(default)]
    devices: Vec<Device>,
}

impl Registry {
    pub fn list(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn find(&self, name: &str) -> Result<&Device> {
        self.devices
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| AwtrixError::NotFound(name.to_string()))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Device> {
        self.devices
            .iter_mut()
            .find(|d| d.name == name)
            .ok_or_else(|| AwtrixError::NotFound(name.to_string()))
    }

    /// Append a device. The first device added becomes the default.
    pub fn add(&mut self, device: Device) -> Result<()> {
        if self.devices.iter().any(|d| d.name == device.name) {
            return Err(AwtrixError::DuplicateName(device.name));
        }
        if self.default_device.is_none() {
            self.default_device = Some(device.name.clone());
        }
        self.devices.push(device);
        Ok(())
    }

    /// Remove a device by name. When the default device is removed, the first
    /// remaining device (if any) takes over as default.
    pub fn remove(&mut self, name: &str) -> Result<Device> {
        let idx = self
            .devices
            .iter()
            .position(|d| d.name == name)
            .ok_or_else(|| AwtrixError::NotFound(name.to_string()))?;
        let removed = self.devices.remove(idx);

        if self.default_device.as_deref() == Some(name) {
            self.default_device = self.devices.first().map(|d| d.name.clone());
        }
        Ok(removed)
    }

    pub fn set_default(&mut self, name: &str) -> Result<()> {
        self.find(name)?;
        self.default_device = Some(name.to_string());
        Ok(())
    }

    pub fn is_default(&self, name: &str) -> bool {
        self.default_device.as_deref() == Some(name)
    }
}
