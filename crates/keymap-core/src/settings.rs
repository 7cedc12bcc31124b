// Keymap Settings Module
// Front-end settings: where bindings are stored, which keys capture refuses

use std::path::{Path, PathBuf};

use crate::storage::FileStorage;

/// Settings shared by the CLI and the TUI
///
/// Loaded from a TOML file (default: ~/.config/j2me-keymap/settings.toml).
/// A missing file means all defaults.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Directory for the bindings document (None = platform data dir)
    storage_dir: Option<PathBuf>,

    /// Keys capture refuses on top of the built-in ones
    reserved_keys: Vec<String>,

    /// File these settings were read from, None when built from defaults
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    storage: Option<StorageSettings>,

    #[serde(default)]
    capture: Option<CaptureSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct StorageSettings {
    #[serde(default)]
    dir: Option<PathBuf>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct CaptureSettings {
    #[serde(default)]
    reserved: Vec<String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let parsed: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(storage) = parsed.storage {
            if let Some(dir) = storage.dir {
                if dir.as_os_str().is_empty() {
                    return Err(SettingsError::InvalidValue(
                        "storage.dir must not be empty".to_string(),
                    ));
                }
                settings.storage_dir = Some(dir);
            }
        }

        if let Some(capture) = parsed.capture {
            for key in capture.reserved {
                let key = key.trim().to_string();
                if key.is_empty() {
                    return Err(SettingsError::InvalidValue(
                        "capture.reserved entries must not be empty".to_string(),
                    ));
                }
                settings.reserved_keys.push(key);
            }
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("j2me-keymap").join("settings.toml"))
    }

    /// Load from the default location, falling back to defaults if absent
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::new())
    }

    /// Load from an explicit path, or the default location when None
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load_default(),
        }
    }

    pub fn set_storage_dir(&mut self, dir: impl Into<PathBuf>) {
        self.storage_dir = Some(dir.into());
    }

    /// Directory the bindings file lives in
    pub fn storage_dir(&self) -> Result<PathBuf, SettingsError> {
        match &self.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => FileStorage::default_dir().ok_or_else(|| {
                SettingsError::InvalidValue(
                    "no data directory on this platform; set storage.dir".to_string(),
                )
            }),
        }
    }

    pub fn reserved_keys(&self) -> &[String] {
        &self.reserved_keys
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Write [`default_settings_content`] to `path`, creating parent dirs.
    /// An existing file is left alone unless `overwrite` is set.
    pub fn write_default(path: &Path, overwrite: bool) -> Result<(), SettingsError> {
        if path.exists() && !overwrite {
            return Err(SettingsError::InvalidValue(format!(
                "{} already exists",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, default_settings_content())?;
        log::debug!("Wrote default settings to {}", path.display());
        Ok(())
    }
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# j2me-keymap settings
# Place this file at: ~/.config/j2me-keymap/settings.toml

[storage]
# Directory holding the saved bindings (default: platform data dir)
# dir = "/home/me/.local/share/j2me-keymap"

[capture]
# Extra keys the capture prompt refuses, on top of Escape, F5, F12
# and modifier keys
reserved = []
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::new();
        assert!(settings.reserved_keys().is_empty());
        assert!(settings.source_path().is_none());
    }

    #[test]
    fn test_settings_from_toml() {
        let toml = r#"
[storage]
dir = "/tmp/keymap"

[capture]
reserved = ["F11", " Tab "]
"#;

        let settings = Settings::from_toml(toml).unwrap();
        assert_eq!(settings.storage_dir().unwrap(), PathBuf::from("/tmp/keymap"));
        assert_eq!(settings.reserved_keys(), &["F11".to_string(), "Tab".to_string()]);
    }

    #[test]
    fn test_write_default_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        Settings::write_default(&path, false).unwrap();
        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.source_path(), Some(path.as_path()));
        assert!(settings.reserved_keys().is_empty());
    }

    #[test]
    fn test_write_default_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[capture]\nreserved = [\"F11\"]\n").unwrap();

        assert!(matches!(
            Settings::write_default(&path, false),
            Err(SettingsError::InvalidValue(_))
        ));
        assert_eq!(Settings::from_file(&path).unwrap().reserved_keys(), &["F11".to_string()]);

        Settings::write_default(&path, true).unwrap();
        assert!(Settings::from_file(&path).unwrap().reserved_keys().is_empty());
    }

    #[test]
    fn test_default_content_parses() {
        let settings = Settings::from_toml(default_settings_content()).unwrap();
        assert!(settings.reserved_keys().is_empty());
    }

    #[test]
    fn test_unknown_section_rejected() {
        let err = Settings::from_toml("[features]\nfoo = true\n").unwrap_err();
        assert!(matches!(err, SettingsError::TomlParse(_)));
    }

    #[test]
    fn test_empty_values_rejected() {
        assert!(matches!(
            Settings::from_toml("[storage]\ndir = \"\"\n"),
            Err(SettingsError::InvalidValue(_))
        ));
        assert!(matches!(
            Settings::from_toml("[capture]\nreserved = [\"  \"]\n"),
            Err(SettingsError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_from_file_records_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[capture]\nreserved = [\"F10\"]\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.source_path(), Some(path.as_path()));
        assert_eq!(settings.reserved_keys(), &["F10".to_string()]);
    }

    #[test]
    fn test_storage_dir_override() {
        let mut settings = Settings::new();
        settings.set_storage_dir("/srv/keys");
        assert_eq!(settings.storage_dir().unwrap(), PathBuf::from("/srv/keys"));
    }
}
