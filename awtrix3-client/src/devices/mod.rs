//! Device registry command handlers.

pub mod registry;

use awtrix3_shared::{Device, DeviceStatus};

use crate::api;
use crate::config::ConfigStore;
use crate::error::{AwtrixError, Result};
use crate::util::format;

use registry::Registry;

/// `device list`. Initializes the config directory on first use.
pub fn list(store: &ConfigStore) -> Result<()> {
    store.ensure_initialized()?;
    let registry = store.load()?;

    if registry.is_empty() {
        println!("No devices configured.");
        println!("Add one with: awtrix3 device add <name> <host>");
        return Ok(());
    }

    for device in registry.list() {
        println!("{}", format::device_line(device, registry.is_default(&device.name)));
    }
    Ok(())
}

/// `device add`. Validates the address up front; does not contact the device.
pub fn add(store: &ConfigStore, name: &str, host: &str, default: bool) -> Result<()> {
    api::device_base_url(host)?;

    store.ensure_initialized()?;
    let mut registry = store.load()?;
    registry.add(Device::new(name, host))?;
    if default {
        registry.set_default(name)?;
    }
    store.save(&registry)?;

    println!("Added device '{name}' ({host})");
    if registry.is_default(name) {
        println!("'{name}' is now the default device");
    }
    Ok(())
}

/// `device remove`.
pub fn remove(store: &ConfigStore, name: &str) -> Result<()> {
    let mut registry = store.load()?;
    registry.remove(name)?;
    store.save(&registry)?;

    println!("Removed device '{name}'");
    if let Some(default) = &registry.default_device {
        println!("Default device is now '{default}'");
    }
    Ok(())
}

/// `device show`.
pub fn show(store: &ConfigStore, name: &str) -> Result<()> {
    let registry = store.load()?;
    let device = registry.find(name)?;

    println!("Name:    {}", device.name);
    println!("Host:    {}", device.host);
    println!("Added:   {}", device.added_at.to_rfc3339());
    println!("Default: {}", if registry.is_default(name) { "yes" } else { "no" });
    match &device.last_status {
        Some(status) => {
            println!("Status:  {} (checked {})", format::status_word(Some(status)), status.checked_at.to_rfc3339());
            if let Some(firmware) = &status.firmware {
                println!("Firmware: {firmware}");
            }
        }
        None => println!("Status:  unknown (run 'awtrix3 device test {name}')"),
    }
    Ok(())
}

/// `device set-default`.
pub fn set_default(store: &ConfigStore, name: &str) -> Result<()> {
    let mut registry = store.load()?;
    registry.set_default(name)?;
    store.save(&registry)?;
    println!("Default device is now '{name}'");
    Ok(())
}

/// `device test`. Probes the device and persists the refreshed status.
pub async fn test(store: &ConfigStore, name: Option<&str>) -> Result<()> {
    store.ensure_initialized()?;
    let mut registry = store.load()?;

    let name = match name {
        Some(name) => name.to_string(),
        None => registry
            .default_device
            .clone()
            .ok_or_else(|| AwtrixError::Usage("no default device configured; pass a device name".into()))?,
    };
    let host = registry.find(&name)?.host.clone();

    println!("Testing '{name}' at {host}...");
    let status = match api::get_version(&host).await {
        Ok(firmware) => {
            println!("Online, firmware {}", firmware.trim());
            DeviceStatus::online(firmware.trim().to_string())
        }
        Err(e) => {
            println!("Offline or unreachable ({e})");
            DeviceStatus::offline()
        }
    };

    registry.find_mut(&name)?.last_status = Some(status);
    store.save(&registry)?;
    Ok(())
}

/// Resolve the host a control command should talk to.
///
/// Priority: `--device` (registry name, else literal host) > the
/// `AWTRIX3_DEVICE` environment variable > the registry default.
pub fn resolve_host(registry: &Registry, selector: Option<&str>) -> Result<String> {
    if let Some(selector) = selector {
        return match registry.find(selector) {
            Ok(device) => Ok(device.host.clone()),
            Err(_) => {
                api::device_base_url(selector)?;
                Ok(selector.to_string())
            }
        };
    }
    if let Ok(host) = std::env::var("AWTRIX3_DEVICE") {
        return Ok(host);
    }
    if let Some(default) = &registry.default_device {
        return Ok(registry.find(default)?.host.clone());
    }
    Err(AwtrixError::Usage(
        "no device selected; use --device, set AWTRIX3_DEVICE, or add a default device".into(),
    ))
}
