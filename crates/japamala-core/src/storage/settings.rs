//! User preferences.
//!
//! Settings belong to the presentation layer but live in the same key-value
//! store as the chanting state, under their own key. A full data reset
//! never touches them.

use serde::{Deserialize, Serialize};

use super::{keys, read_record, KeyValueStore};
use crate::audio::{self, DEFAULT_COMPLETION_SOUND_ID};
use crate::error::{ConfigError, CoreError, StoreError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_true")]
    pub sound_enabled: bool,
    #[serde(default = "default_true")]
    pub vibration_enabled: bool,
    #[serde(default = "default_completion_sound")]
    pub completion_sound_id: String,
    /// `None` means silence.
    #[serde(default)]
    pub ambient_sound_id: Option<String>,
    #[serde(default = "default_completion_volume")]
    pub completion_volume: f64,
    #[serde(default = "default_ambient_volume")]
    pub ambient_volume: f64,
}

fn default_true() -> bool {
    true
}
fn default_completion_sound() -> String {
    DEFAULT_COMPLETION_SOUND_ID.into()
}
fn default_completion_volume() -> f64 {
    0.7
}
fn default_ambient_volume() -> f64 {
    0.3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::En,
            dark_mode: false,
            sound_enabled: true,
            vibration_enabled: true,
            completion_sound_id: default_completion_sound(),
            ambient_sound_id: None,
            completion_volume: default_completion_volume(),
            ambient_volume: default_ambient_volume(),
        }
    }
}

impl Settings {
    /// # Errors
    /// Returns an error only if the store read fails.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self, StoreError> {
        read_record(store, keys::SETTINGS)
    }

    /// # Errors
    /// Returns an error if serialization or the store write fails.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), CoreError> {
        let json = serde_json::to_string(self)?;
        store.set(keys::SETTINGS, &json)?;
        Ok(())
    }

    /// Check ranges and sound references.
    ///
    /// # Errors
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_volume("completionVolume", self.completion_volume)?;
        check_volume("ambientVolume", self.ambient_volume)?;
        if audio::completion_sound(&self.completion_sound_id).is_none() {
            return Err(ValidationError::UnknownSound {
                id: self.completion_sound_id.clone(),
            });
        }
        if let Some(id) = &self.ambient_sound_id {
            if audio::ambient_track(id).is_none() {
                return Err(ValidationError::UnknownSound { id: id.clone() });
            }
        }
        Ok(())
    }

    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<f64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Number::from_f64(n)
                            .map(serde_json::Value::Number)
                            .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ if is_null_literal(value) => serde_json::Value::Null,
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Get a setting as a string by its (camelCase) key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a setting by key, parsing `value` according to the current type.
    /// `null` or `none` clears optional settings.
    ///
    /// The change is only applied when the result validates; the caller
    /// persists it with [`Settings::save`].
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the value does not parse, or
    /// the resulting settings fail validation.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Settings = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

fn is_null_literal(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "null" | "none")
}

fn check_volume(field: &str, value: f64) -> Result<(), ValidationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: field.into(),
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn default_values() {
        let s = Settings::default();
        assert_eq!(s.language, Language::En);
        assert!(!s.dark_mode);
        assert!(s.sound_enabled);
        assert!(s.vibration_enabled);
        assert_eq!(s.completion_sound_id, "temple-bell");
        assert_eq!(s.ambient_sound_id, None);
        assert_eq!(s.completion_volume, 0.7);
        assert_eq!(s.ambient_volume, 0.3);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn get_returns_string_for_all_types() {
        let s = Settings::default();
        assert_eq!(s.get("soundEnabled").as_deref(), Some("true"));
        assert_eq!(s.get("completionVolume").as_deref(), Some("0.7"));
        assert_eq!(s.get("language").as_deref(), Some("en"));
        assert_eq!(s.get("ambientSoundId").as_deref(), Some("null"));
        assert!(s.get("missingKey").is_none());
    }

    #[test]
    fn set_parses_by_existing_type() {
        let mut s = Settings::default();
        s.set("vibrationEnabled", "false").unwrap();
        s.set("ambientVolume", "0.55").unwrap();
        s.set("language", "hi").unwrap();
        s.set("completionSoundId", "shankh").unwrap();
        assert!(!s.vibration_enabled);
        assert_eq!(s.ambient_volume, 0.55);
        assert_eq!(s.language, Language::Hi);
        assert_eq!(s.completion_sound_id, "shankh");
    }

    #[test]
    fn set_and_clear_ambient_sound() {
        let mut s = Settings::default();
        s.set("ambientSoundId", "gentle-rain").unwrap();
        assert_eq!(s.ambient_sound_id.as_deref(), Some("gentle-rain"));
        s.set("ambientSoundId", "none").unwrap();
        assert_eq!(s.ambient_sound_id, None);
    }

    #[test]
    fn ambient_sound_must_be_an_ambient_track() {
        let mut s = Settings::default();
        for id in ["no-such-track", "temple-bell", "silence"] {
            let err = s.set("ambientSoundId", id).unwrap_err();
            assert!(matches!(
                err,
                CoreError::Validation(ValidationError::UnknownSound { .. })
            ));
        }
        assert_eq!(s.ambient_sound_id, None);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut s = Settings::default();
        assert!(matches!(
            s.set("nonexistent", "value"),
            Err(CoreError::Config(ConfigError::UnknownKey(_)))
        ));
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut s = Settings::default();
        assert!(s.set("darkMode", "not_a_bool").is_err());
        assert!(s.set("language", "fr").is_err());
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn set_rejects_out_of_range_volume() {
        let mut s = Settings::default();
        let err = s.set("completionVolume", "1.5").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
        assert_eq!(s.completion_volume, 0.7);
    }

    #[test]
    fn set_rejects_unknown_completion_sound() {
        let mut s = Settings::default();
        assert!(s.set("completionSoundId", "foghorn").is_err());
        assert!(s.set("completionSoundId", "gentle-rain").is_err());
    }

    #[test]
    fn store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(Settings::load(&store).unwrap(), Settings::default());

        let mut s = Settings::default();
        s.set("darkMode", "true").unwrap();
        s.save(&mut store).unwrap();
        assert_eq!(Settings::load(&store).unwrap(), s);
    }

    #[test]
    fn partial_stored_record_fills_defaults() {
        let mut store = MemoryStore::new();
        store.set(keys::SETTINGS, r#"{"language":"hi"}"#).unwrap();
        let s = Settings::load(&store).unwrap();
        assert_eq!(s.language, Language::Hi);
        assert!(s.sound_enabled);
        assert_eq!(s.completion_volume, 0.7);
    }
}
