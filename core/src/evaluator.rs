//! Adequacy evaluator — the single piece of business logic in the core.
//!
//! Maps five financial inputs to a qualitative sufficiency verdict:
//!   1. Pick an income multiplier from the applicant's age
//!   2. Compute the ideal cover target
//!   3. Divide current cover by the target to get the sufficiency ratio
//!   4. Classify the ratio into one of four ordered tiers
//!
//! RULES:
//!   - No state, no randomness, no I/O. Calling evaluate() twice with
//!     identical inputs yields identical output.
//!   - A zero ideal cover is an explicit error, never a float-division
//!     fault. A negative ideal cover is legal and flows into the ratio.

use crate::{
    error::{AdvisorError, AdvisorResult},
    types::Money,
};
use serde::{Deserialize, Serialize};

/// Fixed per-dependent allowance added to the ideal cover target.
pub const DEPENDENT_ALLOWANCE: Money = 500_000.0;

/// Income multiplier for applicants younger than 40.
pub const MULTIPLIER_UNDER_40: f64 = 15.0;

/// Income multiplier at age 40 and above.
pub const MULTIPLIER_40_PLUS: f64 = 10.0;

/// The five inputs of one evaluation request. Transient: constructed per
/// request, never stored, never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub age: u32,
    pub annual_income: Money,
    pub dependents: u32,
    pub assets: Money,
    pub current_cover: Money,
}

impl FinancialProfile {
    /// Build a profile from textual field values, as collected by a form
    /// or a transcription front end. Fails on the first field that does
    /// not parse as the required numeric type; no partial evaluation.
    pub fn from_fields(
        age: &str,
        annual_income: &str,
        dependents: &str,
        assets: &str,
        current_cover: &str,
    ) -> AdvisorResult<Self> {
        Ok(Self {
            age: parse_field("age", age)?,
            annual_income: parse_field("annual_income", annual_income)?,
            dependents: parse_field("dependents", dependents)?,
            assets: parse_field("assets", assets)?,
            current_cover: parse_field("current_cover", current_cover)?,
        })
    }
}

fn parse_field<T: std::str::FromStr>(field: &'static str, value: &str) -> AdvisorResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AdvisorError::InvalidInput {
            field,
            value: value.to_string(),
        })
}

/// One of four ordered qualitative adequacy bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictTier {
    Sufficient,
    AlmostSufficient,
    Inadequate,
    SeverelyInsufficient,
}

impl VerdictTier {
    /// Classify a sufficiency ratio. Half-open intervals, first match
    /// wins: the shared boundaries 1.0, 0.7 and 0.4 each belong to the
    /// higher tier.
    pub fn classify(ratio: f64) -> Self {
        if ratio >= 1.0 {
            VerdictTier::Sufficient
        } else if ratio >= 0.7 {
            VerdictTier::AlmostSufficient
        } else if ratio >= 0.4 {
            VerdictTier::Inadequate
        } else {
            VerdictTier::SeverelyInsufficient
        }
    }

    /// Display string narrated to the user.
    pub fn message(&self) -> &'static str {
        match self {
            VerdictTier::Sufficient => "Your current insurance is sufficient.",
            VerdictTier::AlmostSufficient => "Almost sufficient. You may increase it.",
            VerdictTier::Inadequate => "Not adequate. Consider increasing it.",
            VerdictTier::SeverelyInsufficient => {
                "Severely insufficient. Take immediate action."
            }
        }
    }

    /// Action advice paired with the tier.
    pub fn recommendation(&self) -> &'static str {
        match self {
            VerdictTier::Sufficient => {
                "Keep reviewing every 5 years and ensure inflation adjustment."
            }
            VerdictTier::AlmostSufficient => {
                "Consider topping up your term insurance by 20-30%."
            }
            VerdictTier::Inadequate => "You should buy an additional term plan immediately.",
            VerdictTier::SeverelyInsufficient => {
                "Act now by getting a large term cover (e.g., 20x income) and reduce liabilities."
            }
        }
    }
}

/// The structured outcome of one evaluation. The tier is always the
/// classification of the ratio; message and recommendation are the tier's
/// fixed strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdequacyVerdict {
    pub sufficiency_ratio: f64,
    pub tier: VerdictTier,
    pub message: String,
    pub recommendation: String,
}

/// The ideal cover target: income scaled by the age multiplier, plus the
/// per-dependent allowance, minus existing assets. May be negative when
/// assets dwarf income — callers must not reject that.
pub fn ideal_cover(profile: &FinancialProfile) -> Money {
    let multiplier = if profile.age < 40 {
        MULTIPLIER_UNDER_40
    } else {
        MULTIPLIER_40_PLUS
    };
    profile.annual_income * multiplier + f64::from(profile.dependents) * DEPENDENT_ALLOWANCE
        - profile.assets
}

/// Evaluate one profile. Pure and total except for the one documented
/// failure: a zero ideal cover makes the ratio indeterminate and returns
/// `AdvisorError::IndeterminateAdequacy` instead of dividing by zero.
pub fn evaluate(profile: &FinancialProfile) -> AdvisorResult<AdequacyVerdict> {
    let ideal = ideal_cover(profile);

    if ideal == 0.0 {
        return Err(AdvisorError::IndeterminateAdequacy {
            current_cover: profile.current_cover,
        });
    }

    let ratio = profile.current_cover / ideal;
    let tier = VerdictTier::classify(ratio);

    Ok(AdequacyVerdict {
        sufficiency_ratio: ratio,
        tier,
        message: tier.message().to_string(),
        recommendation: tier.recommendation().to_string(),
    })
}
