//! On-disk configuration for the CLI.
//!
//! A [`ConfigStore`] owns one configuration directory and the device registry
//! file inside it. The store is an explicit value handed to command handlers,
//! which keeps the dispatcher testable with injected temporary directories.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::devices::registry::Registry;
use crate::error::{AwtrixError, Result};

/// Environment override for the configuration directory.
pub const CONFIG_DIR_ENV: &str = "AWTRIX3_CONFIG_DIR";

const REGISTRY_FILE: &str = "devices.json";

#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ConfigStore { dir: dir.into() }
    }

    /// Resolve the store location: `$AWTRIX3_CONFIG_DIR` if set, otherwise
    /// the user config root plus `awtrix3` (`~/.config/awtrix3` on Linux).
    pub fn from_env() -> Result<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(ConfigStore::new(dir));
        }
        let base = dirs::config_dir().ok_or(AwtrixError::NoConfigDir)?;
        Ok(ConfigStore::new(base.join("awtrix3")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn registry_path(&self) -> PathBuf {
        self.dir.join(REGISTRY_FILE)
    }

    /// Create the configuration directory and an empty registry file if none
    /// exists yet. Idempotent.
    pub fn ensure_initialized(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| fs_error(e, &self.dir))?;
        if !self.registry_path().exists() {
            debug!(dir = %self.dir.display(), "initializing empty device registry");
            self.save(&Registry::default())?;
        }
        Ok(())
    }

    /// Read and decode the registry file. A missing file is the empty
    /// registry; malformed content is reported as corrupt, never a panic.
    pub fn load(&self) -> Result<Registry> {
        let path = self.registry_path();
        if !path.exists() {
            return Ok(Registry::default());
        }
        let contents = std::fs::read_to_string(&path).map_err(|e| fs_error(e, &path))?;
        serde_json::from_str(&contents).map_err(|e| AwtrixError::CorruptConfig {
            path,
            reason: e.to_string(),
        })
    }

    /// Persist the registry atomically: write to a temp file in the same
    /// directory, then rename over the registry file. An interrupted write
    /// never leaves a partial registry behind.
    pub fn save(&self, registry: &Registry) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| fs_error(e, &self.dir))?;

        let tmp = NamedTempFile::new_in(&self.dir).map_err(|e| fs_error(e, &self.dir))?;
        serde_json::to_writer_pretty(tmp.as_file(), registry)
            .map_err(|e| AwtrixError::Io(e.into()))?;
        tmp.persist(self.registry_path())
            .map_err(|e| AwtrixError::Io(e.error))?;

        debug!(path = %self.registry_path().display(), devices = registry.len(), "registry saved");
        Ok(())
    }
}

fn fs_error(source: io::Error, path: &Path) -> AwtrixError {
    if source.kind() == io::ErrorKind::PermissionDenied {
        AwtrixError::Permission {
            path: path.to_path_buf(),
            source,
        }
    } else {
        AwtrixError::Io(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awtrix3_shared::Device;
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> ConfigStore {
        ConfigStore::new(dir.join("awtrix3"))
    }

    #[test]
    fn test_ensure_initialized_creates_dir_and_registry() {
        let tmp = tempdir().unwrap();
        let store = store_in(tmp.path());

        assert!(!store.dir().exists());
        store.ensure_initialized().unwrap();
        assert!(store.dir().exists());
        assert!(store.registry_path().exists());

        let registry = store.load().unwrap();
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_ensure_initialized_is_idempotent() {
        let tmp = tempdir().unwrap();
        let store = store_in(tmp.path());

        store.ensure_initialized().unwrap();
        let mut registry = store.load().unwrap();
        registry.add(Device::new("foo", "1.2.3.4:80")).unwrap();
        store.save(&registry).unwrap();

        // A second init must not wipe existing state.
        store.ensure_initialized().unwrap();
        assert_eq!(store.load().unwrap(), registry);
    }

    #[test]
    fn test_load_missing_file_is_empty_registry() {
        let tmp = tempdir().unwrap();
        let store = store_in(tmp.path());
        assert!(store.load().unwrap().list().is_empty());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let tmp = tempdir().unwrap();
        let store = store_in(tmp.path());

        let mut registry = Registry::default();
        registry.add(Device::new("kitchen", "192.168.1.100")).unwrap();
        registry.add(Device::new("desk", "10.0.0.7:8080")).unwrap();
        registry.set_default("desk").unwrap();

        store.save(&registry).unwrap();
        assert_eq!(store.load().unwrap(), registry);
    }

    #[test]
    fn test_corrupt_registry_is_reported_not_panicked() {
        let tmp = tempdir().unwrap();
        let store = store_in(tmp.path());
        store.ensure_initialized().unwrap();
        std::fs::write(store.registry_path(), "{not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, AwtrixError::CorruptConfig { .. }));
        assert!(err.to_string().contains("delete it"));
    }

    #[test]
    fn test_save_overwrites_previous_registry() {
        let tmp = tempdir().unwrap();
        let store = store_in(tmp.path());

        let mut registry = Registry::default();
        registry.add(Device::new("foo", "1.2.3.4")).unwrap();
        store.save(&registry).unwrap();

        registry.remove("foo").unwrap();
        store.save(&registry).unwrap();

        assert!(store.load().unwrap().list().is_empty());
        // No temp files left behind next to the registry.
        let entries: Vec<_> = std::fs::read_dir(store.dir()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
