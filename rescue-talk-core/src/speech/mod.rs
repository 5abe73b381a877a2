//! Speech playback abstraction.
//!
//! The `SpeechSynthesizer` trait decouples the phrasebook from any specific
//! engine (espeak-ng, a silent recorder, a platform service). Playback is
//! independent of transcription: the synthesizer receives the English text.
//!
//! `&mut self` on `speak`/`cancel` reflects that engines own a playback
//! process or stream. All access is serialised through `SpeechHandle`'s
//! `parking_lot::Mutex`.

pub mod espeak;
pub mod silent;

pub use espeak::EspeakSynthesizer;
pub use silent::SilentSynthesizer;

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RescueTalkError, Result};

/// Language tag used for every utterance.
pub const SPEECH_LANG: &str = "en-US";

/// Playback rate relative to the engine's normal speed.
pub const DEFAULT_SPEECH_RATE: f32 = 0.9;

/// One utterance to play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRequest {
    pub text: String,
    /// BCP 47 language tag.
    pub lang: String,
    /// 1.0 is the engine's normal speed.
    pub rate: f32,
}

impl SpeechRequest {
    /// English utterance at the default rate.
    pub fn english(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: SPEECH_LANG.to_string(),
            rate: DEFAULT_SPEECH_RATE,
        }
    }

    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }
}

/// Contract for speech playback backends.
pub trait SpeechSynthesizer: Send + 'static {
    /// Short backend name for logs and error messages.
    fn name(&self) -> &'static str;

    /// Whether the backend can produce audio on this machine.
    fn is_available(&self) -> bool;

    /// Start speaking `request`. May return before playback ends.
    ///
    /// # Errors
    /// Returns an error if the engine could not be started.
    fn speak(&mut self, request: &SpeechRequest) -> Result<()>;

    /// Stop the utterance in progress, if any.
    fn cancel(&mut self);

    /// Block until the utterance in progress has finished.
    fn wait(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Thread-safe reference-counted handle to any `SpeechSynthesizer`.
#[derive(Clone)]
pub struct SpeechHandle(pub Arc<Mutex<dyn SpeechSynthesizer>>);

impl SpeechHandle {
    /// Wrap any `SpeechSynthesizer` in a `SpeechHandle`.
    pub fn new<S: SpeechSynthesizer>(synth: S) -> Self {
        Self(Arc::new(Mutex::new(synth)))
    }

    pub fn name(&self) -> &'static str {
        self.0.lock().name()
    }

    /// Speak `request`, cutting off whatever is currently playing.
    pub fn speak(&self, request: &SpeechRequest) -> Result<()> {
        let mut synth = self.0.lock();
        if !synth.is_available() {
            return Err(RescueTalkError::SpeechUnavailable(synth.name().to_string()));
        }
        synth.cancel();
        debug!(backend = synth.name(), text = %request.text, "speaking");
        synth.speak(request)
    }

    /// Speak and block until playback ends.
    pub fn speak_and_wait(&self, request: &SpeechRequest) -> Result<()> {
        self.speak(request)?;
        self.0.lock().wait()
    }

    pub fn cancel(&self) {
        self.0.lock().cancel();
    }
}

impl std::fmt::Debug for SpeechHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechHandle").finish_non_exhaustive()
    }
}
