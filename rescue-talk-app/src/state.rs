//! Application state shared by every command handler.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use rescue_talk_core::error::Result;
use rescue_talk_core::speech::{EspeakSynthesizer, SilentSynthesizer};
use rescue_talk_core::{Phrasebook, SpeechHandle, SpeechSynthesizer, TranscriptionDraft};
use tracing::{debug, warn};

use crate::settings::{load_settings, AppSettings};
use crate::storage::LocalStore;

pub struct AppState {
    /// Built-in phrases plus the user's phrases from SQLite.
    pub phrasebook: Arc<Phrasebook<LocalStore>>,
    /// Persisted app settings cache.
    pub settings: Arc<Mutex<AppSettings>>,
    /// Absolute path to `settings.json`.
    pub settings_path: PathBuf,
    /// Playback backend chosen from settings.
    pub speech: SpeechHandle,
    /// Transcription suggestions for the add flow.
    pub draft: Arc<TranscriptionDraft>,
}

impl AppState {
    /// Load settings and open the phrase database under `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join("settings.json");
        let settings = load_settings(&settings_path);
        let store = LocalStore::new(data_dir.join("rescue-talk.db"))?;
        debug!(db = %store.path().display(), "phrase store opened");

        let speech = speech_from_settings(&settings);
        Ok(Self {
            phrasebook: Arc::new(Phrasebook::new(store)?),
            settings: Arc::new(Mutex::new(settings)),
            settings_path,
            speech,
            draft: Arc::new(TranscriptionDraft::new()),
        })
    }
}

/// espeak-ng when configured and installed, the silent backend otherwise.
pub fn speech_from_settings(settings: &AppSettings) -> SpeechHandle {
    if settings.speech_backend == "silent" {
        return SpeechHandle::new(SilentSynthesizer::new());
    }
    let espeak = EspeakSynthesizer::new().with_voice(settings.speech_voice.clone());
    if espeak.is_available() {
        SpeechHandle::new(espeak)
    } else {
        warn!("espeak-ng unavailable; falling back to silent playback");
        SpeechHandle::new(SilentSynthesizer::new())
    }
}
