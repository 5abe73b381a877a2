//! Command handlers.
//!
//! Each function backs one CLI subcommand. Errors come back as user-facing
//! strings; the caller prints them and exits non-zero.

use rescue_talk_core::catalog::{categories, Category};
use rescue_talk_core::{generate, CategoryFilter, NewPhrase, Phrase, RescueTalkError, SpeechRequest};
use serde::Serialize;
use tracing::info;

use crate::settings::save_settings;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseListing {
    /// `"all"` or the category id the listing was narrowed to.
    pub category: String,
    pub query: Option<String>,
    pub phrases: Vec<Phrase>,
}

/// What to speak: a catalog phrase or free English text.
#[derive(Debug, Clone)]
pub enum SpeakTarget {
    Phrase(String),
    Text(String),
}

/// Return the fixed category list.
pub fn get_categories() -> Vec<Category> {
    categories().to_vec()
}

/// List phrases, using the persisted category selection unless one is given.
pub fn list_phrases(
    state: &AppState,
    category: Option<String>,
    query: Option<String>,
) -> Result<PhraseListing, String> {
    let filter = match category {
        Some(raw) => raw.parse::<CategoryFilter>().map_err(|e| e.to_string())?,
        None => state.settings.lock().category_filter(),
    };
    let phrases = state
        .phrasebook
        .filter(&filter, query.as_deref().unwrap_or(""));
    Ok(PhraseListing {
        category: filter.to_string(),
        query,
        phrases,
    })
}

/// Persist the category selection used by `list`.
pub fn set_selected_category(state: &AppState, category: &str) -> Result<String, String> {
    let filter = category
        .parse::<CategoryFilter>()
        .map_err(|e| e.to_string())?;
    let mut settings = state.settings.lock();
    settings.selected_category = filter.to_string();
    save_settings(&state.settings_path, &settings).map_err(|e| e.to_string())?;
    Ok(settings.selected_category.clone())
}

/// Add a user phrase. A missing transcription is generated from the English
/// text the same way the add dialog suggests one.
pub async fn add_phrase(
    state: &AppState,
    russian: String,
    english: String,
    transcription: Option<String>,
) -> Result<Phrase, String> {
    let transcription = match transcription.filter(|t| !t.trim().is_empty()) {
        Some(t) => t,
        None => state.draft.suggest(&english).await.unwrap_or_default(),
    };
    state
        .phrasebook
        .add_custom(NewPhrase {
            russian,
            english,
            transcription,
        })
        .map_err(|e| match e {
            RescueTalkError::MissingField(_) => {
                format!("{e} (Russian, English and transcription are all required)")
            }
            other => other.to_string(),
        })
}

/// Delete a user phrase. Built-in phrases are refused.
pub fn delete_phrase(state: &AppState, id: &str) -> Result<(), String> {
    state.phrasebook.remove(id).map_err(|e| e.to_string())
}

/// Speak a phrase's English text, or free text, and wait for playback.
pub fn speak(state: &AppState, target: SpeakTarget) -> Result<String, String> {
    let text = match target {
        SpeakTarget::Phrase(id) => {
            state
                .phrasebook
                .get(&id)
                .ok_or_else(|| RescueTalkError::PhraseNotFound { id }.to_string())?
                .english
        }
        SpeakTarget::Text(text) => text,
    };
    if text.trim().is_empty() {
        return Err(RescueTalkError::MissingField("text").to_string());
    }
    let rate = state.settings.lock().speech_rate;
    let request = SpeechRequest::english(text.clone()).with_rate(rate);
    state
        .speech
        .speak_and_wait(&request)
        .map_err(|e| e.to_string())?;
    info!(backend = state.speech.name(), "phrase spoken");
    Ok(text)
}

pub fn transcribe(text: &str) -> String {
    generate(text)
}

/// Whether the install hint should still be shown.
pub fn install_hint_visible(state: &AppState) -> bool {
    !state.settings.lock().install_prompt_dismissed
}

pub fn dismiss_install_prompt(state: &AppState) -> Result<(), String> {
    let mut settings = state.settings.lock();
    settings.install_prompt_dismissed = true;
    save_settings(&state.settings_path, &settings).map_err(|e| e.to_string())
}
