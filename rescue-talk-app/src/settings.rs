//! Persistent application settings (JSON file in app data directory).

use std::fs;
use std::path::{Path, PathBuf};

use rescue_talk_core::speech::DEFAULT_SPEECH_RATE;
use rescue_talk_core::CategoryFilter;
use serde::{Deserialize, Serialize};

/// Overrides the data directory for both settings and the phrase database.
pub const DATA_DIR_ENV: &str = "RESCUE_TALK_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct AppSettings {
    /// `"all"` or a category id.
    pub selected_category: String,
    pub install_prompt_dismissed: bool,
    /// `"espeak"` or `"silent"`.
    pub speech_backend: String,
    pub speech_voice: String,
    pub speech_rate: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            selected_category: "all".into(),
            install_prompt_dismissed: false,
            speech_backend: "espeak".into(),
            speech_voice: "en-us".into(),
            speech_rate: DEFAULT_SPEECH_RATE,
        }
    }
}

impl AppSettings {
    pub fn normalize(&mut self) {
        self.selected_category = normalize_category(&self.selected_category);
        self.speech_backend = normalize_speech_backend(&self.speech_backend);
        self.speech_voice = normalize_speech_voice(&self.speech_voice);
        self.speech_rate = if self.speech_rate.is_finite() {
            self.speech_rate.clamp(0.5, 2.0)
        } else {
            DEFAULT_SPEECH_RATE
        };
    }

    /// The persisted category selection as a filter.
    pub fn category_filter(&self) -> CategoryFilter {
        self.selected_category.parse().unwrap_or_default()
    }
}

/// Unknown categories fall back to `"all"`.
pub fn normalize_category(raw: &str) -> String {
    raw.parse::<CategoryFilter>()
        .unwrap_or_default()
        .to_string()
}

pub fn normalize_speech_backend(raw: &str) -> String {
    match raw.trim().to_ascii_lowercase().as_str() {
        "silent" | "none" | "off" => "silent".into(),
        _ => "espeak".into(),
    }
}

pub fn normalize_speech_voice(raw: &str) -> String {
    let voice = raw.trim().to_ascii_lowercase();
    if voice.is_empty() {
        "en-us".into()
    } else {
        voice
    }
}

pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("RescueTalk")
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                std::env::var_os("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
                    .join(".local")
                    .join("share")
            })
            .join("rescue-talk")
    }
}

pub fn load_settings(path: &Path) -> AppSettings {
    let mut settings = fs::read_to_string(path)
        .ok()
        .and_then(|raw| serde_json::from_str::<AppSettings>(&raw).ok())
        .unwrap_or_default();
    settings.normalize();
    settings
}

pub fn save_settings(path: &Path, settings: &AppSettings) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings).map_err(std::io::Error::other)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rescue_talk_core::CategoryId;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("settings.json"));
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.category_filter(), CategoryFilter::All);
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_settings(&path), AppSettings::default());
    }

    #[test]
    fn saved_settings_use_fixed_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            selected_category: "medical".into(),
            install_prompt_dismissed: true,
            ..AppSettings::default()
        };
        save_settings(&path, &settings).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["selectedCategory"], "medical");
        assert_eq!(raw["installPromptDismissed"], true);

        let loaded = load_settings(&path);
        assert_eq!(loaded.category_filter(), CategoryFilter::Only(CategoryId::Medical));
        assert!(loaded.install_prompt_dismissed);
    }

    #[test]
    fn normalize_repairs_invalid_values() {
        let mut settings = AppSettings {
            selected_category: "Weather".into(),
            install_prompt_dismissed: false,
            speech_backend: "OFF".into(),
            speech_voice: "  ".into(),
            speech_rate: 9.0,
        };
        settings.normalize();
        assert_eq!(settings.selected_category, "all");
        assert_eq!(settings.speech_backend, "silent");
        assert_eq!(settings.speech_voice, "en-us");
        assert!((settings.speech_rate - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"selectedCategory":"EVACUATION"}"#).unwrap();
        let settings = load_settings(&path);
        assert_eq!(settings.selected_category, "evacuation");
        assert_eq!(settings.speech_backend, "espeak");
        assert!(!settings.install_prompt_dismissed);
    }
}
