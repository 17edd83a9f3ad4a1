// Settings module
// Startup configuration: milestones, time zone, theme and the registration portal

use std::collections::HashSet;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::countdown::Milestone;
use crate::utils::date::{parse_local_instant, LocalTimeError};

pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";
pub const DEFAULT_REGISTRATION_URL: &str = "https://eventhubcc.vit.ac.in/EventHub/";
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("unknown time zone '{0}'")]
    UnknownTimezone(String),
    #[error("unknown theme '{0}' (expected system, dark or light)")]
    UnknownTheme(String),
    #[error("milestone '{label}' has malformed target '{target}' (expected YYYY-MM-DDTHH:MM:SS)")]
    MalformedTarget { label: String, target: String },
    #[error("milestone '{label}' target '{target}' does not exist in {timezone}")]
    NonexistentTarget {
        label: String,
        target: String,
        timezone: String,
    },
    #[error("milestone label must not be empty")]
    EmptyLabel,
    #[error("duplicate milestone label '{0}'")]
    DuplicateLabel(String),
    #[error("at least one milestone is required")]
    NoMilestones,
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
    #[error("registration URL '{0}' must start with http:// or https://")]
    InvalidRegistrationUrl(String),
    #[error("guide video URL '{0}' must start with http:// or https://")]
    InvalidGuideVideoUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the desktop's dark/light mode
    #[default]
    System,
    Dark,
    Light,
}

impl FromStr for ThemePreference {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "system" => Ok(Self::System),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(SettingsError::UnknownTheme(value.to_string())),
        }
    }
}

/// A milestone as written in the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MilestoneSetting {
    pub label: String,
    /// Wall-clock time in the configured zone, `YYYY-MM-DDTHH:MM:SS`
    pub target: String,
    #[serde(default)]
    pub accent: bool,
}

impl MilestoneSetting {
    pub fn new(label: &str, target: &str, accent: bool) -> Self {
        Self {
            label: label.to_string(),
            target: target.to_string(),
            accent,
        }
    }
}

/// Raw, unvalidated contents of `summit.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub timezone: Option<String>,
    pub theme: Option<String>,
    pub tick_interval_ms: Option<u64>,
    pub registration_url: Option<String>,
    /// Where the registration walkthrough video is hosted. No default.
    pub guide_video_url: Option<String>,
    pub milestones: Option<Vec<MilestoneSetting>>,
}

pub fn default_milestone_settings() -> Vec<MilestoneSetting> {
    vec![
        MilestoneSetting::new("Registration Opens", "2025-09-08T10:00:00", false),
        MilestoneSetting::new("Registration Closes", "2025-09-18T23:59:59", true),
        MilestoneSetting::new("Event Day", "2025-09-19T10:00:00", false),
    ]
}

/// Validated settings. Targets are resolved to absolute instants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub timezone: Tz,
    pub theme: ThemePreference,
    pub tick_interval_ms: u64,
    pub registration_url: String,
    pub guide_video_url: Option<String>,
    pub milestones: Vec<Milestone>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::try_from(SettingsFile::default()).expect("built-in settings are valid")
    }
}

impl Settings {
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn tick_interval(&self) -> StdDuration {
        StdDuration::from_millis(self.tick_interval_ms)
    }
}

impl TryFrom<SettingsFile> for Settings {
    type Error = SettingsError;

    fn try_from(file: SettingsFile) -> Result<Self, Self::Error> {
        let timezone_name = file
            .timezone
            .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
        let timezone = Tz::from_str(timezone_name.trim())
            .map_err(|_| SettingsError::UnknownTimezone(timezone_name.clone()))?;

        let theme = match file.theme {
            Some(value) => value.parse()?,
            None => ThemePreference::default(),
        };

        let tick_interval_ms = file.tick_interval_ms.unwrap_or(DEFAULT_TICK_INTERVAL_MS);
        if tick_interval_ms == 0 {
            return Err(SettingsError::ZeroTickInterval);
        }

        let registration_url = file
            .registration_url
            .map(|url| url.trim().to_string())
            .unwrap_or_else(|| DEFAULT_REGISTRATION_URL.to_string());
        if !is_web_url(&registration_url) {
            return Err(SettingsError::InvalidRegistrationUrl(registration_url));
        }

        let guide_video_url = file
            .guide_video_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        if let Some(url) = guide_video_url.as_ref().filter(|url| !is_web_url(url)) {
            return Err(SettingsError::InvalidGuideVideoUrl(url.clone()));
        }

        let milestone_settings = file.milestones.unwrap_or_else(default_milestone_settings);
        let milestones = resolve_milestones(&milestone_settings, timezone)?;

        Ok(Self {
            timezone,
            theme,
            tick_interval_ms,
            registration_url,
            guide_video_url,
            milestones,
        })
    }
}

fn is_web_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

fn resolve_milestones(
    settings: &[MilestoneSetting],
    timezone: Tz,
) -> Result<Vec<Milestone>, SettingsError> {
    if settings.is_empty() {
        return Err(SettingsError::NoMilestones);
    }

    let mut seen = HashSet::new();
    let mut milestones = Vec::with_capacity(settings.len());

    for setting in settings {
        let label = setting.label.trim();
        if label.is_empty() {
            return Err(SettingsError::EmptyLabel);
        }
        if !seen.insert(label.to_string()) {
            return Err(SettingsError::DuplicateLabel(label.to_string()));
        }

        let target = parse_local_instant(&setting.target, timezone).map_err(|err| match err {
            LocalTimeError::Malformed(_) => SettingsError::MalformedTarget {
                label: label.to_string(),
                target: setting.target.clone(),
            },
            LocalTimeError::Nonexistent(_) => SettingsError::NonexistentTarget {
                label: label.to_string(),
                target: setting.target.clone(),
                timezone: timezone.name().to_string(),
            },
        })?;

        milestones.push(Milestone::new(label, target).with_accent(setting.accent));
    }

    Ok(milestones)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_describe_the_summit() {
        let settings = Settings::default();
        assert_eq!(settings.timezone, chrono_tz::Asia::Kolkata);
        assert_eq!(settings.theme, ThemePreference::System);
        assert_eq!(settings.tick_interval(), StdDuration::from_secs(1));
        assert_eq!(settings.registration_url, DEFAULT_REGISTRATION_URL);
        assert_eq!(settings.guide_video_url, None);

        let labels: Vec<&str> = settings.milestones().iter().map(|m| m.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Registration Opens", "Registration Closes", "Event Day"]
        );
        assert_eq!(
            settings.milestones()[2].target,
            Utc.with_ymd_and_hms(2025, 9, 19, 4, 30, 0).unwrap()
        );
        assert!(settings.milestones()[1].accent);
    }

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!("Dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
        assert_eq!(" light ".parse::<ThemePreference>().unwrap(), ThemePreference::Light);
        assert!(matches!(
            "sepia".parse::<ThemePreference>(),
            Err(SettingsError::UnknownTheme(_))
        ));
    }

    #[test]
    fn labels_are_trimmed_before_duplicate_check() {
        let file = SettingsFile {
            milestones: Some(vec![
                MilestoneSetting::new("Kickoff", "2025-09-19T10:00:00", false),
                MilestoneSetting::new(" Kickoff ", "2025-09-19T11:00:00", false),
            ]),
            ..SettingsFile::default()
        };
        assert!(matches!(
            Settings::try_from(file),
            Err(SettingsError::DuplicateLabel(label)) if label == "Kickoff"
        ));
    }

    #[test]
    fn blank_guide_video_url_means_none() {
        let file = SettingsFile {
            guide_video_url: Some("   ".to_string()),
            ..SettingsFile::default()
        };
        assert_eq!(Settings::try_from(file).unwrap().guide_video_url, None);
    }

    #[test]
    fn guide_video_url_must_be_a_web_link() {
        let file = SettingsFile {
            guide_video_url: Some("file:///tmp/guide.mp4".to_string()),
            ..SettingsFile::default()
        };
        assert!(matches!(
            Settings::try_from(file),
            Err(SettingsError::InvalidGuideVideoUrl(url)) if url == "file:///tmp/guide.mp4"
        ));
    }

    #[test]
    fn unknown_milestone_keys_are_rejected() {
        let text = r#"
[[milestones]]
label = "Kickoff"
target = "2025-09-19T10:00:00"
acent = true
"#;
        assert!(toml::from_str::<SettingsFile>(text).is_err());
    }
}
