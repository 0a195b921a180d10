//! Control commands that talk to a display: notify, power, stats.

use awtrix3_shared::Notification;

use crate::api;
use crate::config::ConfigStore;
use crate::devices;
use crate::error::Result;
use crate::util::format;

fn target_host(store: &ConfigStore, selector: Option<&str>) -> Result<String> {
    let registry = store.load()?;
    devices::resolve_host(&registry, selector)
}

/// `notify`: send a notification payload to the selected display.
pub async fn notify(store: &ConfigStore, selector: Option<&str>, notification: Notification) -> Result<()> {
    let host = target_host(store, selector)?;
    api::send_notification(&host, &notification).await?;
    println!("Notification sent to {host}");
    Ok(())
}

/// `notify --dismiss`: clear the notification currently on screen.
pub async fn dismiss(store: &ConfigStore, selector: Option<&str>) -> Result<()> {
    let host = target_host(store, selector)?;
    api::dismiss_notification(&host).await?;
    println!("Notification dismissed on {host}");
    Ok(())
}

/// `power on|off`.
pub async fn power(store: &ConfigStore, selector: Option<&str>, on: bool) -> Result<()> {
    let host = target_host(store, selector)?;
    api::set_power(&host, on).await?;
    println!("Display at {host} powered {}", if on { "on" } else { "off" });
    Ok(())
}

/// `stats`: print whatever the firmware reports.
pub async fn stats(store: &ConfigStore, selector: Option<&str>) -> Result<()> {
    let host = target_host(store, selector)?;
    let stats = api::get_stats(&host).await?;

    println!("Stats for {host}:");
    if let Some(version) = &stats.version {
        println!("  Firmware:     {version}");
    }
    if let Some(app) = &stats.app {
        println!("  Current app:  {app}");
    }
    if let Some(uptime) = stats.uptime {
        println!("  Uptime:       {}", format::uptime(uptime));
    }
    if let Some(ram) = stats.ram {
        println!("  Free RAM:     {ram} bytes");
    }
    if let Some(bat) = stats.bat {
        println!("  Battery:      {bat}%");
    }
    if let Some(lux) = stats.lux {
        println!("  Ambient:      {lux:.1} lux");
    }
    if let Some(temp) = stats.temp {
        println!("  Temperature:  {temp:.1} C");
    }
    if let Some(hum) = stats.hum {
        println!("  Humidity:     {hum:.0}%");
    }
    if let Some(signal) = stats.wifi_signal {
        println!("  WiFi signal:  {signal} dBm");
    }
    if let Some(ip) = &stats.ip_address {
        println!("  IP address:   {ip}");
    }
    Ok(())
}
