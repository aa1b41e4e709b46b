//! Session events — everything observable about an advisory session.
//!
//! RULE: the session communicates outcomes ONLY through events. The UI
//! layer renders them; the narration layer reads the spoken strings off
//! them. Nothing reads the session's internals directly.

use crate::{
    config::{PlanCategory, PlanListing},
    evaluator::VerdictTier,
    session::Stage,
    types::SessionId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every event a session can emit.
/// Variants are added as the wizard grows — never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AdvisorEvent {
    // ── Session lifecycle ──────────────────────────
    SessionStarted {
        session_id: SessionId,
    },
    SessionRestarted,
    StageChanged {
        from: Stage,
        to: Stage,
    },

    // ── Evaluation ─────────────────────────────────
    VerdictIssued {
        sufficiency_ratio: f64,
        tier: VerdictTier,
        message: String,
        recommendation: String,
    },
    TranscriptAccepted {
        recognized_numbers: usize,
    },

    // ── Suggestions ────────────────────────────────
    PlanSuggestionsOffered {
        category: PlanCategory,
        plans: Vec<PlanListing>,
    },

    // ── Rejections and degraded paths ──────────────
    CommandRejected {
        command: String,
        stage: Stage,
        reason: String,
    },
    NarrationFailed {
        text: String,
        reason: String,
    },
}

/// Extract a stable string name from an AdvisorEvent variant.
/// Used for the event_type field of the session log.
pub fn event_type_name(event: &AdvisorEvent) -> &'static str {
    match event {
        AdvisorEvent::SessionStarted { .. } => "session_started",
        AdvisorEvent::SessionRestarted => "session_restarted",
        AdvisorEvent::StageChanged { .. } => "stage_changed",
        AdvisorEvent::VerdictIssued { .. } => "verdict_issued",
        AdvisorEvent::TranscriptAccepted { .. } => "transcript_accepted",
        AdvisorEvent::PlanSuggestionsOffered { .. } => "plan_suggestions_offered",
        AdvisorEvent::CommandRejected { .. } => "command_rejected",
        AdvisorEvent::NarrationFailed { .. } => "narration_failed",
    }
}

/// One row of a session's append-only event log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub session_id: SessionId,
    pub seq: u64,
    pub issued_at: DateTime<Utc>,
    pub event_type: String,
    pub payload: String,
}
