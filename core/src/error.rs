use crate::speech::SpeechError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Invalid {field}: cannot parse {value:?} as a number")]
    InvalidInput { field: &'static str, value: String },

    #[error("Ideal cover is zero: adequacy ratio is indeterminate (current cover {current_cover})")]
    IndeterminateAdequacy { current_cover: f64 },

    #[error("Transcript yielded {found} numbers, need {needed}")]
    TranscriptTooSparse { found: usize, needed: usize },

    #[error("Speech backend error: {0}")]
    Speech(#[from] SpeechError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;
