//! Advisory session — the wizard state machine.
//!
//! This module:
//!   1. Owns the current stage (start, calculate, health, life)
//!   2. Processes caller commands and enforces stage transitions
//!   3. Invokes the adequacy evaluator on submitted profiles
//!   4. Offers plan suggestion catalogs from config
//!   5. Narrates outcomes best-effort through the Speaker seam
//!   6. Keeps an append-only event log for the session
//!
//! RULES:
//!   - A command invalid for the current stage is rejected with an
//!     event, never a panic.
//!   - Evaluation errors propagate immediately; no partial result is
//!     recorded.
//!   - Narration failures are logged and downgraded to an event.

use crate::{
    command::AdvisorCommand,
    config::{AdvisorConfig, PlanCategory},
    error::AdvisorResult,
    evaluator::{self, FinancialProfile},
    event::{event_type_name, AdvisorEvent, EventLogEntry},
    speech::Speaker,
    transcript,
    types::SessionId,
};
use serde::{Deserialize, Serialize};

/// The four stages of the advisory wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Start,
    Calculate,
    HealthSuggest,
    LifeSuggest,
}

pub struct AdvisorSession {
    session_id: SessionId,
    stage: Stage,
    config: AdvisorConfig,
    speaker: Box<dyn Speaker>,
    event_log: Vec<EventLogEntry>,
    seq: u64,
}

impl AdvisorSession {
    /// Open a session at the start stage and narrate the greeting.
    pub fn new(
        session_id: SessionId,
        config: AdvisorConfig,
        speaker: Box<dyn Speaker>,
    ) -> AdvisorResult<Self> {
        let mut session = Self {
            session_id: session_id.clone(),
            stage: Stage::Start,
            config,
            speaker,
            event_log: Vec::new(),
            seq: 0,
        };

        let mut events = vec![AdvisorEvent::SessionStarted { session_id }];
        let greeting = session.config.narration.greeting.clone();
        session.narrate(&greeting, &mut events);
        session.record(&events)?;

        log::info!(
            "session={} opened (speaker={})",
            session.session_id,
            session.speaker.name()
        );
        Ok(session)
    }

    /// Open a session with a fresh random identifier.
    pub fn open(config: AdvisorConfig, speaker: Box<dyn Speaker>) -> AdvisorResult<Self> {
        Self::new(uuid::Uuid::new_v4().to_string(), config, speaker)
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The append-only log of everything this session has emitted.
    pub fn event_log(&self) -> &[EventLogEntry] {
        &self.event_log
    }

    /// Process one command. Returns the events it produced, already
    /// appended to the session log. Errors from the evaluator and the
    /// transcript guard propagate unrecorded — no partial result.
    pub fn handle(&mut self, command: AdvisorCommand) -> AdvisorResult<Vec<AdvisorEvent>> {
        log::debug!(
            "session={} stage={:?} command={}",
            self.session_id,
            self.stage,
            command.name()
        );

        let mut events = Vec::new();

        match (self.stage, &command) {
            (_, AdvisorCommand::Restart) => {
                events.push(AdvisorEvent::SessionRestarted);
                if self.stage != Stage::Start {
                    self.transition(Stage::Start, &mut events);
                }
            }

            (Stage::Start, AdvisorCommand::BeginCalculation) => {
                self.transition(Stage::Calculate, &mut events);
                let prompt = self.config.narration.profile_prompt.clone();
                self.narrate(&prompt, &mut events);
            }

            (Stage::Start, AdvisorCommand::RequestHealthPlans) => {
                self.transition(Stage::HealthSuggest, &mut events);
                self.offer_plans(PlanCategory::Health, &mut events);
            }

            (Stage::Start, AdvisorCommand::RequestLifePlans) => {
                self.transition(Stage::LifeSuggest, &mut events);
                self.offer_plans(PlanCategory::Life, &mut events);
            }

            (
                Stage::Calculate,
                AdvisorCommand::SubmitProfile {
                    age,
                    annual_income,
                    dependents,
                    assets,
                    current_cover,
                },
            ) => {
                let profile = FinancialProfile::from_fields(
                    age,
                    annual_income,
                    dependents,
                    assets,
                    current_cover,
                )?;
                self.evaluate_and_report(&profile, &mut events)?;
            }

            (Stage::Calculate, AdvisorCommand::SubmitTranscript { text }) => {
                let recognized = transcript::extract_numbers(text).len();
                let profile = transcript::profile_from_transcript(text)?;
                events.push(AdvisorEvent::TranscriptAccepted {
                    recognized_numbers: recognized,
                });
                self.evaluate_and_report(&profile, &mut events)?;
            }

            (stage, command) => {
                let reason = format!("{} is not available in this stage", command.name());
                log::warn!(
                    "session={} rejected {} in stage {:?}",
                    self.session_id,
                    command.name(),
                    stage
                );
                events.push(AdvisorEvent::CommandRejected {
                    command: command.name().to_string(),
                    stage,
                    reason,
                });
            }
        }

        self.record(&events)?;
        Ok(events)
    }

    fn transition(&mut self, to: Stage, events: &mut Vec<AdvisorEvent>) {
        let from = self.stage;
        self.stage = to;
        events.push(AdvisorEvent::StageChanged { from, to });
        log::info!("session={} stage {from:?} -> {to:?}", self.session_id);
    }

    fn offer_plans(&mut self, category: PlanCategory, events: &mut Vec<AdvisorEvent>) {
        let plans = self.config.plans_for(category).to_vec();
        log::info!(
            "session={} offering {} {category:?} plans",
            self.session_id,
            plans.len()
        );
        events.push(AdvisorEvent::PlanSuggestionsOffered { category, plans });

        let leadin = match category {
            PlanCategory::Health => self.config.narration.health_leadin.clone(),
            PlanCategory::Life => self.config.narration.life_leadin.clone(),
        };
        self.narrate(&leadin, events);
    }

    fn evaluate_and_report(
        &mut self,
        profile: &FinancialProfile,
        events: &mut Vec<AdvisorEvent>,
    ) -> AdvisorResult<()> {
        let verdict = evaluator::evaluate(profile)?;

        log::info!(
            "session={} verdict: ratio={:.4} tier={:?}",
            self.session_id,
            verdict.sufficiency_ratio,
            verdict.tier
        );

        events.push(AdvisorEvent::VerdictIssued {
            sufficiency_ratio: verdict.sufficiency_ratio,
            tier: verdict.tier,
            message: verdict.message.clone(),
            recommendation: verdict.recommendation,
        });

        self.narrate(&verdict.message, events);
        Ok(())
    }

    /// Narrate best-effort. A failed speak() becomes a warning and an
    /// event; it never fails the command that triggered it.
    fn narrate(&self, text: &str, events: &mut Vec<AdvisorEvent>) {
        if let Err(e) = self.speaker.speak(text) {
            log::warn!(
                "session={} narration via {} failed: {e}. Continuing without voice.",
                self.session_id,
                self.speaker.name()
            );
            events.push(AdvisorEvent::NarrationFailed {
                text: text.to_string(),
                reason: e.to_string(),
            });
        }
    }

    fn record(&mut self, events: &[AdvisorEvent]) -> AdvisorResult<()> {
        for event in events {
            self.seq += 1;
            self.event_log.push(EventLogEntry {
                session_id: self.session_id.clone(),
                seq: self.seq,
                issued_at: chrono::Utc::now(),
                event_type: event_type_name(event).to_string(),
                payload: serde_json::to_string(event)?,
            });
        }
        Ok(())
    }
}
