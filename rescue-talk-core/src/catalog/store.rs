//! Persistence seam for user-added phrases.

use parking_lot::Mutex;

use super::Phrase;
use crate::error::{RescueTalkError, Result};

/// Storage backend for user-added phrases.
///
/// Built-in phrases never pass through a store. Methods take `&self`;
/// implementations provide their own interior mutability.
pub trait PhraseStore {
    /// Every stored phrase, oldest first.
    fn get_all(&self) -> Result<Vec<Phrase>>;

    /// Persist a new phrase.
    ///
    /// # Errors
    /// `DuplicateId` if a phrase with the same id is already stored.
    fn add(&self, phrase: &Phrase) -> Result<()>;

    /// Delete by id. Returns `false` if nothing was stored under `id`.
    fn remove(&self, id: &str) -> Result<bool>;
}

/// Volatile store, for tests and for running without a data directory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    phrases: Mutex<Vec<Phrase>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PhraseStore for MemoryStore {
    fn get_all(&self) -> Result<Vec<Phrase>> {
        Ok(self.phrases.lock().clone())
    }

    fn add(&self, phrase: &Phrase) -> Result<()> {
        let mut guard = self.phrases.lock();
        if guard.iter().any(|p| p.id == phrase.id) {
            return Err(RescueTalkError::DuplicateId {
                id: phrase.id.clone(),
            });
        }
        guard.push(phrase.clone());
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<bool> {
        let mut guard = self.phrases.lock();
        let before = guard.len();
        guard.retain(|p| p.id != id);
        Ok(guard.len() != before)
    }
}

impl<S: PhraseStore + ?Sized> PhraseStore for std::sync::Arc<S> {
    fn get_all(&self) -> Result<Vec<Phrase>> {
        (**self).get_all()
    }

    fn add(&self, phrase: &Phrase) -> Result<()> {
        (**self).add(phrase)
    }

    fn remove(&self, id: &str) -> Result<bool> {
        (**self).remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryId;

    fn phrase(id: &str) -> Phrase {
        Phrase {
            id: id.into(),
            russian: "Вода".into(),
            english: "Water".into(),
            transcription: "[ˈwɔːtər]".into(),
            category: CategoryId::Custom,
        }
    }

    #[test]
    fn memory_store_keeps_insertion_order() {
        let store = MemoryStore::new();
        store.add(&phrase("custom-2")).unwrap();
        store.add(&phrase("custom-1")).unwrap();
        let ids: Vec<String> = store.get_all().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["custom-2", "custom-1"]);
    }

    #[test]
    fn memory_store_rejects_duplicates() {
        let store = MemoryStore::new();
        store.add(&phrase("custom-1")).unwrap();
        let err = store.add(&phrase("custom-1")).unwrap_err();
        assert!(matches!(err, RescueTalkError::DuplicateId { .. }));
    }

    #[test]
    fn memory_store_remove_reports_presence() {
        let store = MemoryStore::new();
        store.add(&phrase("custom-1")).unwrap();
        assert!(store.remove("custom-1").unwrap());
        assert!(!store.remove("custom-1").unwrap());
        assert!(store.get_all().unwrap().is_empty());
    }
}
