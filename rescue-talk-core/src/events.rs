//! Events broadcast while a transcription suggestion is being prepared.
//!
//! A presentation layer subscribes via [`TranscriptionDraft::subscribe`] and
//! shows a "generating…" state between `Generating` and `Ready`.
//!
//! [`TranscriptionDraft::subscribe`]: crate::transcription::TranscriptionDraft::subscribe

use serde::{Deserialize, Serialize};

/// Emitted once per state change of a suggestion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionEvent {
    /// Sequence number of the request; later requests have larger numbers.
    pub seq: u64,
    pub status: SuggestionStatus,
    /// Generated transcription. Only set on `Ready`.
    pub transcription: Option<String>,
}

/// Lifecycle of one suggestion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    /// Request accepted; the result is pending.
    Generating,
    /// Result available and still the most recent request.
    Ready,
    /// A newer request superseded this one before it resolved.
    Discarded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_event_serializes_with_camel_case_and_lowercase_status() {
        let event = SuggestionEvent {
            seq: 4,
            status: SuggestionStatus::Ready,
            transcription: Some("[θe]".into()),
        };

        let json = serde_json::to_value(&event).expect("serialize suggestion event");
        assert_eq!(json["seq"], 4);
        assert_eq!(json["status"], "ready");
        assert_eq!(json["transcription"], "[θe]");

        let back: SuggestionEvent =
            serde_json::from_value(json).expect("deserialize suggestion event");
        assert_eq!(back, event);
    }

    #[test]
    fn pending_event_has_null_transcription() {
        let event = SuggestionEvent {
            seq: 1,
            status: SuggestionStatus::Generating,
            transcription: None,
        };
        let json = serde_json::to_value(&event).expect("serialize suggestion event");
        assert_eq!(json["status"], "generating");
        assert!(json["transcription"].is_null());
    }

    #[test]
    fn suggestion_status_rejects_non_lowercase_values() {
        let err = serde_json::from_str::<SuggestionStatus>(r#""Ready""#);
        assert!(err.is_err(), "expected invalid casing to fail");
    }
}
