use std::path::{Path, PathBuf};

use chrono::Utc;
use rescue_talk_core::error::{RescueTalkError, Result};
use rescue_talk_core::{CategoryId, Phrase, PhraseStore};
use rusqlite::{params, Connection, ErrorCode};

/// SQLite-backed store for user-added phrases.
#[derive(Debug, Clone)]
pub struct LocalStore {
    db_path: PathBuf,
}

impl LocalStore {
    pub fn new(db_path: PathBuf) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let store = Self { db_path };
        store.init_schema()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn open(&self) -> Result<Connection> {
        Connection::open(&self.db_path).map_err(db_err)
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.open()?;
        conn.execute_batch(
            r#"
            PRAGMA journal_mode = WAL;
            CREATE TABLE IF NOT EXISTS custom_phrases (
              id TEXT PRIMARY KEY,
              russian TEXT NOT NULL,
              english TEXT NOT NULL,
              transcription TEXT NOT NULL,
              category TEXT NOT NULL,
              created_at INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_custom_phrases_created_at ON custom_phrases(created_at);
            "#,
        )
        .map_err(db_err)?;
        Ok(())
    }
}

impl PhraseStore for LocalStore {
    fn get_all(&self) -> Result<Vec<Phrase>> {
        let conn = self.open()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, russian, english, transcription, category
                 FROM custom_phrases ORDER BY created_at ASC, rowid ASC",
            )
            .map_err(db_err)?;
        let mut rows = stmt.query([]).map_err(db_err)?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(db_err)? {
            let category: String = row.get(4).map_err(db_err)?;
            out.push(Phrase {
                id: row.get(0).map_err(db_err)?,
                russian: row.get(1).map_err(db_err)?,
                english: row.get(2).map_err(db_err)?,
                transcription: row.get(3).map_err(db_err)?,
                category: category.parse().unwrap_or(CategoryId::Custom),
            });
        }
        Ok(out)
    }

    fn add(&self, phrase: &Phrase) -> Result<()> {
        let conn = self.open()?;
        conn.execute(
            r#"
            INSERT INTO custom_phrases (id, russian, english, transcription, category, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                phrase.id,
                phrase.russian,
                phrase.english,
                phrase.transcription,
                phrase.category.as_str(),
                Utc::now().timestamp_millis(),
            ],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(ref err, _)
                if err.code == ErrorCode::ConstraintViolation =>
            {
                RescueTalkError::DuplicateId {
                    id: phrase.id.clone(),
                }
            }
            other => db_err(other),
        })?;
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<bool> {
        let conn = self.open()?;
        let changed = conn
            .execute("DELETE FROM custom_phrases WHERE id = ?1", params![id])
            .map_err(db_err)?;
        Ok(changed > 0)
    }
}

fn db_err(e: rusqlite::Error) -> RescueTalkError {
    RescueTalkError::Storage(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rescue_talk_core::{NewPhrase, Phrasebook};

    fn phrase(id: &str, english: &str) -> Phrase {
        Phrase {
            id: id.into(),
            russian: "Держитесь".into(),
            english: english.into(),
            transcription: "[hoʊld ɒn]".into(),
            category: CategoryId::Custom,
        }
    }

    #[test]
    fn phrases_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("rescue-talk.db");

        let store = LocalStore::new(path.clone()).unwrap();
        store.add(&phrase("custom-1", "Hold on")).unwrap();
        store.add(&phrase("custom-2", "Hold tight")).unwrap();
        drop(store);

        let reopened = LocalStore::new(path).unwrap();
        let english: Vec<String> = reopened
            .get_all()
            .unwrap()
            .into_iter()
            .map(|p| p.english)
            .collect();
        assert_eq!(english, ["Hold on", "Hold tight"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("rescue-talk.db")).unwrap();
        store.add(&phrase("custom-1", "Hold on")).unwrap();
        let err = store.add(&phrase("custom-1", "Again")).unwrap_err();
        assert!(matches!(err, RescueTalkError::DuplicateId { id } if id == "custom-1"));
    }

    #[test]
    fn remove_reports_whether_a_row_was_deleted() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("rescue-talk.db")).unwrap();
        store.add(&phrase("custom-1", "Hold on")).unwrap();
        assert!(store.remove("custom-1").unwrap());
        assert!(!store.remove("custom-1").unwrap());
        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn phrasebook_persists_through_local_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rescue-talk.db");

        let book = Phrasebook::new(LocalStore::new(path.clone()).unwrap()).unwrap();
        let added = book
            .add_custom(NewPhrase {
                russian: "Держитесь".into(),
                english: "Hold on".into(),
                transcription: "[hɒld ɒn]".into(),
            })
            .unwrap();
        drop(book);

        let book = Phrasebook::new(LocalStore::new(path).unwrap()).unwrap();
        assert_eq!(book.get(&added.id), Some(added));
    }
}
