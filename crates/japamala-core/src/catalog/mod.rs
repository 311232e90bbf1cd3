//! Mantra catalog.
//!
//! The catalog is the built-in seed list followed by the user's custom
//! mantras. Seed entries are permanent; custom entries are created and
//! removed through the chanting engine.

mod filter;
mod seed;

pub use filter::GalleryFilter;
pub use seed::{seed_mantras, DEFAULT_MANTRA_ID};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const DEFAULT_CUSTOM_MEANING: &str = "Custom mantra";
const DEFAULT_CUSTOM_MEANING_HINDI: &str = "कस्टम मंत्र";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MantraCategory {
    Shiva,
    Ram,
    Krishna,
    Goddess,
    Ganesh,
    Hanuman,
    Universal,
}

/// Display metadata for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: MantraCategory,
    pub name_en: &'static str,
    pub name_hi: &'static str,
    pub icon: &'static str,
}

impl MantraCategory {
    pub const ALL: [MantraCategory; 7] = [
        MantraCategory::Shiva,
        MantraCategory::Ram,
        MantraCategory::Krishna,
        MantraCategory::Goddess,
        MantraCategory::Ganesh,
        MantraCategory::Hanuman,
        MantraCategory::Universal,
    ];

    pub fn info(self) -> CategoryInfo {
        let (name_en, name_hi, icon) = match self {
            MantraCategory::Shiva => ("Shiva", "शिव", "🔱"),
            MantraCategory::Ram => ("Ram", "राम", "🏹"),
            MantraCategory::Krishna => ("Krishna", "कृष्ण", "🪈"),
            MantraCategory::Goddess => ("Goddess", "देवी", "🌺"),
            MantraCategory::Ganesh => ("Ganesh", "गणेश", "🐘"),
            MantraCategory::Hanuman => ("Hanuman", "हनुमान", "🙏"),
            MantraCategory::Universal => ("Universal", "सार्वभौमिक", "🕉️"),
        };
        CategoryInfo {
            id: self,
            name_en,
            name_hi,
            icon,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MantraCategory::Shiva => "shiva",
            MantraCategory::Ram => "ram",
            MantraCategory::Krishna => "krishna",
            MantraCategory::Goddess => "goddess",
            MantraCategory::Ganesh => "ganesh",
            MantraCategory::Hanuman => "hanuman",
            MantraCategory::Universal => "universal",
        }
    }
}

impl std::str::FromStr for MantraCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MantraCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// A chantable item.
///
/// Serialized with the same field names the app has always stored, so
/// existing custom-mantra lists load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mantra {
    pub id: String,
    /// Display text, usually Devanagari script.
    #[serde(rename = "devanagari")]
    pub text: String,
    pub transliteration: String,
    pub meaning: String,
    pub meaning_hindi: String,
    pub category: MantraCategory,
    #[serde(default)]
    pub is_custom: bool,
}

/// User input for a new custom mantra, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMantra {
    pub text: String,
    pub transliteration: String,
    pub meaning: Option<String>,
    pub meaning_hindi: Option<String>,
    pub category: Option<MantraCategory>,
}

impl NewMantra {
    pub fn new(text: impl Into<String>, transliteration: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            transliteration: transliteration.into(),
            meaning: None,
            meaning_hindi: None,
            category: None,
        }
    }

    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = Some(meaning.into());
        self
    }

    pub fn with_meaning_hindi(mut self, meaning: impl Into<String>) -> Self {
        self.meaning_hindi = Some(meaning.into());
        self
    }

    pub fn with_category(mut self, category: MantraCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Check the fields a caller must fill before handing this to the engine.
    ///
    /// # Errors
    /// Returns `EmptyField` when the display text or transliteration is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "text".into(),
            });
        }
        if self.transliteration.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "transliteration".into(),
            });
        }
        Ok(())
    }

    pub(crate) fn into_mantra(self, id: String) -> Mantra {
        Mantra {
            id,
            text: self.text,
            transliteration: self.transliteration,
            meaning: non_blank(self.meaning).unwrap_or_else(|| DEFAULT_CUSTOM_MEANING.into()),
            meaning_hindi: non_blank(self.meaning_hindi)
                .unwrap_or_else(|| DEFAULT_CUSTOM_MEANING_HINDI.into()),
            category: self.category.unwrap_or(MantraCategory::Universal),
            is_custom: true,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Read-only view over seed plus custom mantras.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    custom: &'a [Mantra],
}

impl<'a> Catalog<'a> {
    pub fn new(custom: &'a [Mantra]) -> Self {
        Self { custom }
    }

    /// Seeds first, then custom entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Mantra> + 'a {
        seed_mantras().iter().chain(self.custom.iter())
    }

    pub fn find(&self, id: &str) -> Option<&'a Mantra> {
        self.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Look up `id`, falling back to the default seed entry.
    pub fn resolve(&self, id: &str) -> &'a Mantra {
        self.find(id).unwrap_or_else(|| default_mantra())
    }

    pub fn to_vec(&self) -> Vec<Mantra> {
        self.iter().cloned().collect()
    }
}

pub fn default_mantra() -> &'static Mantra {
    &seed_mantras()[0]
}

pub fn is_seed(id: &str) -> bool {
    seed_mantras().iter().any(|m| m.id == id)
}
