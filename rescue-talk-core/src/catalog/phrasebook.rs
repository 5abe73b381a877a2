use std::collections::HashSet;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, info};

use super::{
    builtin_phrases, is_custom_id, CategoryFilter, CategoryId, NewPhrase, Phrase, PhraseStore,
    CUSTOM_ID_PREFIX,
};
use crate::error::{RescueTalkError, Result};

/// Built-in phrases plus the user phrases of a [`PhraseStore`].
///
/// User phrases are cached in memory and refreshed after every mutation, so
/// listing and searching never touch the store.
pub struct Phrasebook<S: PhraseStore> {
    store: S,
    custom: RwLock<Vec<Phrase>>,
}

impl<S: PhraseStore> Phrasebook<S> {
    /// Open a phrasebook over `store`, loading its phrases.
    pub fn new(store: S) -> Result<Self> {
        let book = Self {
            store,
            custom: RwLock::new(Vec::new()),
        };
        book.refresh()?;
        Ok(book)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reload user phrases from the store.
    pub fn refresh(&self) -> Result<()> {
        let phrases = self.store.get_all()?;
        debug!(count = phrases.len(), "custom phrases loaded");
        *self.custom.write() = phrases;
        Ok(())
    }

    /// Built-ins first, then user phrases in the order they were added.
    pub fn all(&self) -> Vec<Phrase> {
        let custom = self.custom.read();
        builtin_phrases()
            .iter()
            .chain(custom.iter())
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<Phrase> {
        if let Some(p) = builtin_phrases().iter().find(|p| p.id == id) {
            return Some(p.clone());
        }
        self.custom.read().iter().find(|p| p.id == id).cloned()
    }

    /// Phrases in `filter`, narrowed to those whose Russian or English text
    /// contains `query` (case-insensitive). An empty query matches everything.
    pub fn filter(&self, filter: &CategoryFilter, query: &str) -> Vec<Phrase> {
        let query = query.to_lowercase();
        self.all()
            .into_iter()
            .filter(|p| filter.matches(p))
            .filter(|p| {
                query.is_empty()
                    || p.russian.to_lowercase().contains(&query)
                    || p.english.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Validate and persist a user phrase.
    ///
    /// All three fields must be non-empty. The phrase is filed under
    /// `custom` with a time-derived id carrying the custom marker.
    pub fn add_custom(&self, input: NewPhrase) -> Result<Phrase> {
        let russian = required("russian", &input.russian)?;
        let english = required("english", &input.english)?;
        let transcription = required("transcription", &input.transcription)?;

        let phrase = Phrase {
            id: self.next_custom_id(Utc::now().timestamp_millis()),
            russian,
            english,
            transcription,
            category: CategoryId::Custom,
        };
        self.store.add(&phrase)?;
        self.refresh()?;
        info!(id = %phrase.id, english = %phrase.english, "custom phrase added");
        Ok(phrase)
    }

    /// Delete a user phrase. Built-in phrases are protected.
    pub fn remove(&self, id: &str) -> Result<()> {
        if !is_custom_id(id) {
            return Err(RescueTalkError::ProtectedPhrase { id: id.to_string() });
        }
        if !self.store.remove(id)? {
            return Err(RescueTalkError::PhraseNotFound { id: id.to_string() });
        }
        self.refresh()?;
        info!(%id, "custom phrase removed");
        Ok(())
    }

    /// `custom-<millis>`, moved forward a millisecond at a time until unused.
    fn next_custom_id(&self, now_ms: i64) -> String {
        let taken: HashSet<String> = self.custom.read().iter().map(|p| p.id.clone()).collect();
        let mut ms = now_ms;
        loop {
            let id = format!("{CUSTOM_ID_PREFIX}{ms}");
            if !taken.contains(&id) {
                return id;
            }
            ms += 1;
        }
    }
}

fn required(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        Err(RescueTalkError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

impl<S: PhraseStore> std::fmt::Debug for Phrasebook<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Phrasebook")
            .field("custom", &self.custom.read().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryStore;

    fn book() -> Phrasebook<MemoryStore> {
        Phrasebook::new(MemoryStore::new()).expect("memory store never fails")
    }

    fn new_phrase(english: &str) -> NewPhrase {
        NewPhrase {
            russian: "Нужна вода".into(),
            english: english.into(),
            transcription: "[niːd ˈwɔːtər]".into(),
        }
    }

    #[test]
    fn lists_builtins_before_custom_phrases() {
        let book = book();
        let added = book.add_custom(new_phrase("Need water")).unwrap();
        let all = book.all();
        assert_eq!(all.len(), 21);
        assert_eq!(all[0].id, "1");
        assert_eq!(all.last().unwrap().id, added.id);
    }

    #[test]
    fn add_assigns_custom_marker_and_category() {
        let book = book();
        let added = book.add_custom(new_phrase("Need water")).unwrap();
        assert!(added.id.starts_with("custom-"));
        assert!(added.is_custom());
        assert_eq!(added.category, CategoryId::Custom);
        assert_eq!(book.get(&added.id), Some(added));
    }

    #[test]
    fn add_rejects_blank_fields() {
        let book = book();
        let mut input = new_phrase("Need water");
        input.transcription = "   ".into();
        let err = book.add_custom(input).unwrap_err();
        assert!(matches!(err, RescueTalkError::MissingField("transcription")));

        let err = book.add_custom(NewPhrase::default()).unwrap_err();
        assert!(matches!(err, RescueTalkError::MissingField("russian")));
        assert_eq!(book.all().len(), 20);
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let book = book();
        let first = book.add_custom(new_phrase("one")).unwrap();
        let ms: i64 = first.id.trim_start_matches(CUSTOM_ID_PREFIX).parse().unwrap();
        assert_eq!(book.next_custom_id(ms), format!("custom-{}", ms + 1));
    }

    #[test]
    fn builtins_cannot_be_removed() {
        let book = book();
        let err = book.remove("1").unwrap_err();
        assert!(matches!(err, RescueTalkError::ProtectedPhrase { .. }));
        assert!(book.get("1").is_some());
    }

    #[test]
    fn remove_deletes_custom_phrase() {
        let book = book();
        let added = book.add_custom(new_phrase("Need water")).unwrap();
        book.remove(&added.id).unwrap();
        assert!(book.get(&added.id).is_none());
        let err = book.remove(&added.id).unwrap_err();
        assert!(matches!(err, RescueTalkError::PhraseNotFound { .. }));
    }

    #[test]
    fn filter_by_category_then_query() {
        let book = book();
        let medical = book.filter(&CategoryFilter::Only(CategoryId::Medical), "");
        assert_eq!(medical.len(), 5);
        assert!(medical.iter().all(|p| p.category == CategoryId::Medical));

        let hits = book.filter(&CategoryFilter::All, "HELP");
        let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "18"]);

        let none = book.filter(&CategoryFilter::Only(CategoryId::Basic), "ambulance");
        assert!(none.is_empty());
    }

    #[test]
    fn query_matches_russian_text_case_insensitively() {
        let book = book();
        let hits = book.filter(&CategoryFilter::All, "ПОМОЩЬ");
        let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "10", "18"]);
    }

    #[test]
    fn custom_filter_shows_only_user_phrases() {
        let book = book();
        assert!(book.filter(&CategoryFilter::Only(CategoryId::Custom), "").is_empty());
        book.add_custom(new_phrase("Need water")).unwrap();
        assert_eq!(book.filter(&CategoryFilter::Only(CategoryId::Custom), "").len(), 1);
    }
}
