//! Phrase catalog: records, categories and the phrase-store abstraction.
//!
//! Built-in phrases are compiled in and immutable. User phrases live in a
//! [`PhraseStore`] and are told apart by the [`CUSTOM_ID_PREFIX`] marker on
//! their ids.

mod builtin;
pub mod phrasebook;
pub mod store;

pub use phrasebook::Phrasebook;
pub use store::{MemoryStore, PhraseStore};

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::RescueTalkError;

/// Marker prefix carried by every user-added phrase id.
pub const CUSTOM_ID_PREFIX: &str = "custom-";

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// The fixed set of phrase categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Emergency,
    Medical,
    Evacuation,
    Basic,
    /// Everything the user added.
    Custom,
}

impl CategoryId {
    pub const ALL: [CategoryId; 5] = [
        CategoryId::Emergency,
        CategoryId::Medical,
        CategoryId::Evacuation,
        CategoryId::Basic,
        CategoryId::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::Emergency => "emergency",
            CategoryId::Medical => "medical",
            CategoryId::Evacuation => "evacuation",
            CategoryId::Basic => "basic",
            CategoryId::Custom => "custom",
        }
    }

    /// Display metadata for this category.
    pub fn info(self) -> &'static Category {
        &CATEGORIES[self as usize]
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = RescueTalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CategoryId::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RescueTalkError::UnknownCategory(s.to_string()))
    }
}

/// Display metadata for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    /// Russian display name.
    pub name: &'static str,
    /// Icon reference understood by the presentation layer.
    pub icon: &'static str,
    /// Color token understood by the presentation layer.
    pub color: &'static str,
}

/// Indexed by `CategoryId as usize`.
const CATEGORIES: [Category; 5] = [
    Category {
        id: CategoryId::Emergency,
        name: "Экстренные фразы",
        icon: "AlertCircle",
        color: "bg-destructive",
    },
    Category {
        id: CategoryId::Medical,
        name: "Медицинские термины",
        icon: "Heart",
        color: "bg-red-500",
    },
    Category {
        id: CategoryId::Evacuation,
        name: "Эвакуация и безопасность",
        icon: "Shield",
        color: "bg-accent",
    },
    Category {
        id: CategoryId::Basic,
        name: "Базовые фразы общения",
        icon: "MessageCircle",
        color: "bg-primary",
    },
    Category {
        id: CategoryId::Custom,
        name: "Мои добавленные слова",
        icon: "Plus",
        color: "bg-secondary",
    },
];

/// All categories in display order.
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// Category selection used when listing phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryId),
}

impl CategoryFilter {
    pub fn matches(&self, phrase: &Phrase) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => phrase.category == *id,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(id) => f.write_str(id.as_str()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = RescueTalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

// ---------------------------------------------------------------------------
// Phrases
// ---------------------------------------------------------------------------

/// One phrasebook entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    /// Unique across built-in and user phrases.
    pub id: String,
    pub russian: String,
    pub english: String,
    /// Bracketed pseudo-phonetic string, e.g. `"[steɪ kɑːm]"`.
    pub transcription: String,
    pub category: CategoryId,
}

impl Phrase {
    /// `true` for user-added phrases, the only ones that may be removed.
    pub fn is_custom(&self) -> bool {
        is_custom_id(&self.id)
    }
}

pub fn is_custom_id(id: &str) -> bool {
    id.starts_with(CUSTOM_ID_PREFIX)
}

/// Input of the add-phrase flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPhrase {
    pub russian: String,
    pub english: String,
    pub transcription: String,
}

/// The phrases shipped with the application, materialized once.
pub fn builtin_phrases() -> &'static [Phrase] {
    static PHRASES: OnceLock<Vec<Phrase>> = OnceLock::new();
    PHRASES.get_or_init(|| {
        builtin::BUILTIN_PHRASES
            .iter()
            .map(|p| Phrase {
                id: p.id.to_string(),
                russian: p.russian.to_string(),
                english: p.english.to_string(),
                transcription: p.transcription.to_string(),
                category: p.category,
            })
            .collect()
    })
}
