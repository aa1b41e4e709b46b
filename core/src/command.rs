use serde::{Deserialize, Serialize};

/// All caller-issued session commands.
/// Variants added as the wizard grows — never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum AdvisorCommand {
    // ── Navigation ────────────────────────────────
    BeginCalculation,
    RequestHealthPlans,
    RequestLifePlans,
    Restart,

    // ── Evaluation inputs ─────────────────────────
    /// Five textual form fields, converted to numbers by the core.
    SubmitProfile {
        age: String,
        annual_income: String,
        dependents: String,
        assets: String,
        current_cover: String,
    },
    /// Raw transcript text from the speech-to-text collaborator.
    SubmitTranscript { text: String },
}

impl AdvisorCommand {
    /// Stable string name, used for logs and rejection events.
    pub fn name(&self) -> &'static str {
        match self {
            AdvisorCommand::BeginCalculation => "begin_calculation",
            AdvisorCommand::RequestHealthPlans => "request_health_plans",
            AdvisorCommand::RequestLifePlans => "request_life_plans",
            AdvisorCommand::Restart => "restart",
            AdvisorCommand::SubmitProfile { .. } => "submit_profile",
            AdvisorCommand::SubmitTranscript { .. } => "submit_transcript",
        }
    }
}
