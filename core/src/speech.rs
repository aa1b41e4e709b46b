//! Speech collaborator seams — narration and transcription.
//!
//! RULE: the core never talks to an audio device or a TTS engine
//! directly. Both sides of the voice interface are opaque collaborators
//! behind these two traits, with one call-in/call-out contract each.
//! Narration is best-effort: the session logs a failed speak() and moves
//! on, it never affects evaluation results.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Backend failure: {0}")]
    Backend(String),

    #[error("Backend unavailable")]
    Unavailable,
}

pub type SpeechResult<T> = Result<T, SpeechError>;

/// Text-to-speech collaborator. `speak` blocks until the backend has
/// accepted the text; failure is reported, not retried.
pub trait Speaker: Send {
    /// Unique stable name for this backend, used in logs.
    fn name(&self) -> &'static str;

    fn speak(&self, text: &str) -> SpeechResult<()>;
}

/// Speech-to-text collaborator. Takes a recorded audio buffer and
/// returns the recognized text verbatim.
pub trait Transcriber: Send {
    fn name(&self) -> &'static str;

    fn transcribe(&self, audio: &[u8]) -> SpeechResult<String>;
}

/// Console narration backend for the headless runner.
pub struct StdoutSpeaker;

impl Speaker for StdoutSpeaker {
    fn name(&self) -> &'static str {
        "stdout"
    }

    fn speak(&self, text: &str) -> SpeechResult<()> {
        println!("[voice] {text}");
        Ok(())
    }
}

/// Silent backend: narration disabled.
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn name(&self) -> &'static str {
        "null"
    }

    fn speak(&self, _text: &str) -> SpeechResult<()> {
        Ok(())
    }
}

/// Backend that fails every call. Used by tests to prove narration
/// failures never disturb the session.
pub struct FailingSpeaker;

impl Speaker for FailingSpeaker {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn speak(&self, _text: &str) -> SpeechResult<()> {
        Err(SpeechError::Unavailable)
    }
}

/// Transcriber that ignores the audio buffer and returns a fixed
/// transcript. Used by tests and demo tooling.
pub struct ScriptedTranscriber {
    transcript: String,
}

impl ScriptedTranscriber {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

impl Transcriber for ScriptedTranscriber {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn transcribe(&self, _audio: &[u8]) -> SpeechResult<String> {
        Ok(self.transcript.clone())
    }
}
