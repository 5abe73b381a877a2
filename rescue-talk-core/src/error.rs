use thiserror::Error;

/// All errors produced by rescue-talk-core.
///
/// Transcription never fails; these cover the catalog, storage and speech glue.
#[derive(Debug, Error)]
pub enum RescueTalkError {
    #[error("field `{0}` must not be empty")]
    MissingField(&'static str),

    #[error("phrase {id} is built in and cannot be removed")]
    ProtectedPhrase { id: String },

    #[error("phrase not found: {id}")]
    PhraseNotFound { id: String },

    #[error("phrase id already exists: {id}")]
    DuplicateId { id: String },

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("no speech engine available ({0})")]
    SpeechUnavailable(String),

    #[error("speech error: {0}")]
    Speech(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RescueTalkError>;
