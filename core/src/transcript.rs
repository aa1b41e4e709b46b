//! Voice-input token extraction.
//!
//! The transcriber hands back free text; the advisor only needs the five
//! spoken numbers. Extraction is deliberately naive: split on whitespace,
//! keep tokens made purely of ASCII digits, in spoken order. Anything
//! fancier (number words, locale grouping) belongs to the speech engine,
//! not here.
//!
//! The five-number guard lives in this layer so the evaluator is never
//! invoked on a malformed transcript.

use crate::{
    error::{AdvisorError, AdvisorResult},
    evaluator::FinancialProfile,
    speech::Transcriber,
};

/// A profile needs exactly this many spoken numbers, in order:
/// age, annual income, dependents, assets, current cover.
pub const PROFILE_FIELD_COUNT: usize = 5;

/// Pull all digit-only tokens out of a transcript, in order.
pub fn extract_numbers(text: &str) -> Vec<u64> {
    text.split_whitespace()
        .filter(|tok| tok.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|tok| tok.parse().ok())
        .collect()
}

/// Build a profile from the first five recognized numbers of a
/// transcript. Fails with `TranscriptTooSparse` when fewer than five are
/// present — the evaluator is never called in that case.
pub fn profile_from_transcript(text: &str) -> AdvisorResult<FinancialProfile> {
    let numbers = extract_numbers(text);

    if numbers.len() < PROFILE_FIELD_COUNT {
        return Err(AdvisorError::TranscriptTooSparse {
            found: numbers.len(),
            needed: PROFILE_FIELD_COUNT,
        });
    }

    let age = u32::try_from(numbers[0]).map_err(|_| AdvisorError::InvalidInput {
        field: "age",
        value: numbers[0].to_string(),
    })?;
    let dependents = u32::try_from(numbers[2]).map_err(|_| AdvisorError::InvalidInput {
        field: "dependents",
        value: numbers[2].to_string(),
    })?;

    Ok(FinancialProfile {
        age,
        annual_income: numbers[1] as f64,
        dependents,
        assets: numbers[3] as f64,
        current_cover: numbers[4] as f64,
    })
}

/// Run the transcriber on a recorded buffer and build a profile from
/// whatever it recognized. Transcription failures surface as speech
/// errors; the sparse-transcript guard applies afterwards.
pub fn profile_from_audio(
    transcriber: &dyn Transcriber,
    audio: &[u8],
) -> AdvisorResult<FinancialProfile> {
    let text = transcriber.transcribe(audio)?;
    log::debug!(
        "transcribed {} bytes via {}: {text:?}",
        audio.len(),
        transcriber.name()
    );
    profile_from_transcript(&text)
}
