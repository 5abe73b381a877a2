//! # rescue-talk-core
//!
//! Phrasebook engine for emergency responders working across Russian and
//! English.
//!
//! ## Architecture
//!
//! ```text
//! "Hello World" ──► transcription::generate ──► "[hellɒ wɔːld]"
//!                          │
//!                  TranscriptionDraft (delay + last-write-wins)
//!                          │
//! NewPhrase ──► Phrasebook::add_custom ──► PhraseStore (memory / SQLite)
//!
//! Phrase.english ──► SpeechHandle::speak ──► espeak-ng | silent
//! ```
//!
//! The transcription tables are process-wide constants; nothing in the
//! generator holds mutable state.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod catalog;
pub mod error;
pub mod events;
pub mod speech;
pub mod transcription;

// Convenience re-exports for downstream crates
pub use catalog::{
    Category, CategoryFilter, CategoryId, MemoryStore, NewPhrase, Phrase, PhraseStore, Phrasebook,
};
pub use error::RescueTalkError;
pub use events::{SuggestionEvent, SuggestionStatus};
pub use speech::{SpeechHandle, SpeechRequest, SpeechSynthesizer};
pub use transcription::{generate, generate_delayed, TranscriptionDraft};
