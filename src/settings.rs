//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! The conjugation engines never read settings; they only shape how entries are
//! loaded and how paradigms are displayed.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::form::Form;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub display: DisplaySettings,
    pub vocab: VocabSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    pub forms: Vec<Form>,
    pub show_meaning: bool,
    pub json_pretty: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VocabSettings {
    pub require_hiragana_reading: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.display.forms.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "display.forms".to_string(),
            reason: "must list at least one form".to_string(),
        });
    }
    let mut seen = HashSet::new();
    for form in &s.display.forms {
        if !seen.insert(*form) {
            return Err(SettingsError::InvalidValue {
                field: "display.forms".to_string(),
                reason: format!("duplicate form {form}"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.display.forms, Form::ALL.to_vec());
        assert!(s.display.show_meaning);
        assert!(s.display.json_pretty);
        assert!(!s.vocab.require_hiragana_reading);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[display]
forms = ["te", "short-past-affirmative"]
show_meaning = false
json_pretty = false

[vocab]
require_hiragana_reading = true
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.display.forms, vec![Form::Te, Form::ShortPastAffirmative]);
        assert!(!s.display.show_meaning);
        assert!(s.vocab.require_hiragana_reading);
    }

    #[test]
    fn error_empty_forms() {
        let toml = r#"
[display]
forms = []
show_meaning = true
json_pretty = true

[vocab]
require_hiragana_reading = false
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("display.forms"));
    }

    #[test]
    fn error_duplicate_form() {
        let toml = r#"
[display]
forms = ["te", "te"]
show_meaning = true
json_pretty = true

[vocab]
require_hiragana_reading = false
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate form te"));
    }

    #[test]
    fn error_unknown_form() {
        let toml = r#"
[display]
forms = ["potential"]
show_meaning = true
json_pretty = true

[vocab]
require_hiragana_reading = false
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[display]
forms = ["te"]
show_meaning = true
json_pretty = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
