use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::models::settings::{Settings, SettingsError, SettingsFile};

/// Environment variable that points at an explicit settings file.
pub const CONFIG_ENV_VAR: &str = "NEXUS_SUMMIT_CONFIG";
pub const CONFIG_FILE_NAME: &str = "summit.toml";

/// Loads `summit.toml` and validates it into [`Settings`].
pub struct SettingsService;

impl SettingsService {
    /// Where settings are looked up: the env var if set, otherwise the
    /// platform config dir. `None` when no home directory can be resolved.
    pub fn resolve_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()) {
            return Some(PathBuf::from(path));
        }

        ProjectDirs::from("in", "NexusVITC", "NexusSummit")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from the resolved path. A missing file means built-in defaults.
    pub fn load() -> Result<Settings, SettingsError> {
        match Self::resolve_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                log::warn!("Unable to resolve a config directory; using built-in settings");
                Ok(Settings::default())
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Settings, SettingsError> {
        if !path.exists() {
            log::info!(
                "No settings file at {}; using built-in settings",
                path.display()
            );
            return Ok(Settings::default());
        }

        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse_with_origin(&text, &path.display().to_string())?;
        log::info!(
            "Loaded settings from {} ({} milestone(s), zone {})",
            path.display(),
            settings.milestones.len(),
            settings.timezone.name()
        );
        Ok(settings)
    }

    pub fn parse(text: &str) -> Result<Settings, SettingsError> {
        Self::parse_with_origin(text, "<inline>")
    }

    fn parse_with_origin(text: &str, origin: &str) -> Result<Settings, SettingsError> {
        let file: SettingsFile = toml::from_str(text).map_err(|source| SettingsError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        Settings::try_from(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::ThemePreference;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = SettingsService::load_from_path(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn reads_overrides_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
theme = "dark"
tick_interval_ms = 500

[[milestones]]
label = "Doors"
target = "2025-09-19T12:30:00"
accent = true
"#
        )
        .unwrap();

        let settings = SettingsService::load_from_path(file.path()).unwrap();
        assert_eq!(settings.theme, ThemePreference::Dark);
        assert_eq!(settings.tick_interval_ms, 500);
        assert_eq!(settings.milestones.len(), 1);
        assert_eq!(settings.milestones[0].label, "Doors");
        assert!(settings.milestones[0].accent);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = SettingsService::parse("colour = \"teal\"").unwrap_err();
        assert!(matches!(err, SettingsError::Parse { ref origin, .. } if origin == "<inline>"));
    }
}
