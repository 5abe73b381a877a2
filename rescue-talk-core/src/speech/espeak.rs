//! espeak-ng playback backend.
//!
//! Runs the system `espeak-ng` command and feeds it the text on stdin.
//! Requires espeak-ng to be installed:
//! - macOS: `brew install espeak-ng`
//! - Linux: `apt-get install espeak-ng`

use std::io::Write;
use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;

use tracing::{debug, warn};

use super::{SpeechRequest, SpeechSynthesizer};
use crate::error::{RescueTalkError, Result};

/// espeak-ng's default speed in words per minute.
const BASE_WPM: f32 = 175.0;
const MIN_WPM: u32 = 80;
const MAX_WPM: u32 = 450;

pub struct EspeakSynthesizer {
    program: String,
    /// Voice override; `None` derives the voice from the request language.
    voice: Option<String>,
    available: OnceLock<bool>,
    child: Option<Child>,
}

impl EspeakSynthesizer {
    pub fn new() -> Self {
        Self::with_program("espeak-ng")
    }

    /// Use a different executable (e.g. `espeak`).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            voice: None,
            available: OnceLock::new(),
            child: None,
        }
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        let voice = voice.into();
        self.voice = Some(voice).filter(|v| !v.trim().is_empty());
        self
    }

    fn reap(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Default for EspeakSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechSynthesizer for EspeakSynthesizer {
    fn name(&self) -> &'static str {
        "espeak-ng"
    }

    fn is_available(&self) -> bool {
        *self.available.get_or_init(|| {
            let ok = Command::new(&self.program)
                .arg("--version")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map(|s| s.success())
                .unwrap_or(false);
            if !ok {
                warn!(program = %self.program, "speech engine not found");
            }
            ok
        })
    }

    fn speak(&mut self, request: &SpeechRequest) -> Result<()> {
        let voice = self
            .voice
            .clone()
            .unwrap_or_else(|| voice_for_lang(&request.lang));
        let wpm = words_per_minute(request.rate);
        debug!(%voice, wpm, "spawning espeak-ng");

        let mut child = Command::new(&self.program)
            .arg("-v")
            .arg(&voice)
            .arg("-s")
            .arg(wpm.to_string())
            .arg("--stdin")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| RescueTalkError::Speech(format!("failed to start {}: {e}", self.program)))?;

        let stdin = child.stdin.take();
        self.child = Some(child);
        if let Some(mut stdin) = stdin {
            if let Err(e) = stdin.write_all(request.text.as_bytes()) {
                warn!(error = %e, "failed to feed text to espeak-ng");
                self.reap();
                return Err(e.into());
            }
            // Dropping stdin closes the pipe so espeak-ng starts speaking.
        }
        Ok(())
    }

    fn cancel(&mut self) {
        self.reap();
    }

    fn wait(&mut self) -> Result<()> {
        if let Some(mut child) = self.child.take() {
            let status = child.wait()?;
            if !status.success() {
                return Err(RescueTalkError::Speech(format!(
                    "{} exited with {status}",
                    self.program
                )));
            }
        }
        Ok(())
    }
}

impl Drop for EspeakSynthesizer {
    fn drop(&mut self) {
        self.reap();
    }
}

/// `"en-US"` → `"en-us"`.
fn voice_for_lang(lang: &str) -> String {
    let voice = lang.trim().to_ascii_lowercase();
    if voice.is_empty() {
        "en-us".into()
    } else {
        voice
    }
}

/// Map a relative rate to espeak-ng's words-per-minute scale.
fn words_per_minute(rate: f32) -> u32 {
    let rate = if rate.is_finite() && rate > 0.0 { rate } else { 1.0 };
    ((BASE_WPM * rate).round() as u32).clamp(MIN_WPM, MAX_WPM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_maps_to_words_per_minute() {
        assert_eq!(words_per_minute(1.0), 175);
        assert_eq!(words_per_minute(0.8), 140);
        assert_eq!(words_per_minute(0.1), MIN_WPM);
        assert_eq!(words_per_minute(10.0), MAX_WPM);
        assert_eq!(words_per_minute(f32::NAN), 175);
    }

    #[test]
    fn voice_follows_request_language() {
        assert_eq!(voice_for_lang("en-US"), "en-us");
        assert_eq!(voice_for_lang(""), "en-us");
    }

    #[cfg(unix)]
    #[test]
    fn failed_write_reaps_the_child() {
        // `true` exits without reading stdin, so a large write hits a closed pipe.
        let mut synth = EspeakSynthesizer::with_program("true");
        let request = SpeechRequest::english("stay calm ".repeat(100_000));
        assert!(synth.speak(&request).is_err());
        assert!(synth.child.is_none());
    }

    #[test]
    fn missing_program_is_unavailable() {
        let synth = EspeakSynthesizer::with_program("rescue-talk-no-such-speech-engine");
        assert!(!synth.is_available());
    }
}
