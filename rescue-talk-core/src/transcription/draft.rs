//! `TranscriptionDraft` — suggestion helper for the add-phrase flow.
//!
//! Wraps [`generate_after`] with the call-site rules of the add flow:
//!
//! - nothing is suggested until the English text is longer than two characters
//! - every request gets a sequence number; a request that resolves after a
//!   newer one was issued is discarded (last write wins)
//!
//! The generator itself stays stateless; all bookkeeping lives here.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::debug;

use super::{generate_after, SUGGESTION_DELAY};
use crate::events::{SuggestionEvent, SuggestionStatus};

/// Inputs of this many characters or fewer get no suggestion.
pub const MIN_SUGGESTION_CHARS: usize = 2;

const EVENT_CAP: usize = 32;

pub struct TranscriptionDraft {
    delay: Duration,
    /// Sequence number of the most recent request.
    seq: AtomicU64,
    events_tx: broadcast::Sender<SuggestionEvent>,
}

impl TranscriptionDraft {
    pub fn new() -> Self {
        Self::with_delay(SUGGESTION_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        let (events_tx, _) = broadcast::channel(EVENT_CAP);
        Self {
            delay,
            seq: AtomicU64::new(0),
            events_tx,
        }
    }

    /// Subscribe to suggestion lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<SuggestionEvent> {
        self.events_tx.subscribe()
    }

    /// Sequence number of the most recent request (0 before the first).
    pub fn latest_seq(&self) -> u64 {
        self.seq.load(Ordering::SeqCst)
    }

    /// Suggest a transcription for `english`.
    ///
    /// Returns `None` when the text is too short or when a newer request was
    /// issued while this one was pending.
    pub async fn suggest(&self, english: &str) -> Option<String> {
        if english.chars().count() <= MIN_SUGGESTION_CHARS {
            return None;
        }

        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.emit(seq, SuggestionStatus::Generating, None);

        let transcription = generate_after(english, self.delay).await;

        if self.latest_seq() != seq {
            debug!(seq, latest = self.latest_seq(), "stale suggestion discarded");
            self.emit(seq, SuggestionStatus::Discarded, None);
            return None;
        }

        self.emit(seq, SuggestionStatus::Ready, Some(transcription.clone()));
        Some(transcription)
    }

    fn emit(&self, seq: u64, status: SuggestionStatus, transcription: Option<String>) {
        // No subscribers is fine.
        let _ = self.events_tx.send(SuggestionEvent {
            seq,
            status,
            transcription,
        });
    }
}

impl Default for TranscriptionDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TranscriptionDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscriptionDraft")
            .field("delay", &self.delay)
            .field("seq", &self.latest_seq())
            .finish_non_exhaustive()
    }
}
