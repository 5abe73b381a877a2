//! `SilentSynthesizer` — backend that records utterances without audio.
//!
//! Used when no speech engine is installed and in tests. Every request is
//! logged at `info` so the user still sees what would have been spoken.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use super::{SpeechRequest, SpeechSynthesizer};
use crate::error::Result;

/// What a `SilentSynthesizer` has been asked to do.
#[derive(Debug, Default)]
pub struct SilentLog {
    pub spoken: Vec<SpeechRequest>,
    pub cancels: usize,
}

#[derive(Debug, Default)]
pub struct SilentSynthesizer {
    log: Arc<Mutex<SilentLog>>,
}

impl SilentSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared view of the recorded requests, usable after the synthesizer
    /// has been moved into a `SpeechHandle`.
    pub fn log(&self) -> Arc<Mutex<SilentLog>> {
        Arc::clone(&self.log)
    }
}

impl SpeechSynthesizer for SilentSynthesizer {
    fn name(&self) -> &'static str {
        "silent"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn speak(&mut self, request: &SpeechRequest) -> Result<()> {
        info!(text = %request.text, lang = %request.lang, "silent playback");
        self.log.lock().spoken.push(request.clone());
        Ok(())
    }

    fn cancel(&mut self) {
        self.log.lock().cancels += 1;
    }
}
