//! Adequacy formula tests: exact scenarios, boundary exactness,
//! multiplier switch, purity, and the documented failure modes.

use advisor_core::{
    error::AdvisorError,
    evaluator::{evaluate, ideal_cover, FinancialProfile, VerdictTier},
};

fn profile(age: u32, income: f64, dependents: u32, assets: f64, cover: f64) -> FinancialProfile {
    FinancialProfile {
        age,
        annual_income: income,
        dependents,
        assets,
        current_cover: cover,
    }
}

/// Young family, big gap: ideal = 600000*15 + 2*500000 - 500000 = 9.5M,
/// ratio = 2M / 9.5M ~ 0.2105.
#[test]
fn young_family_severely_insufficient() {
    let verdict = evaluate(&profile(30, 600_000.0, 2, 500_000.0, 2_000_000.0)).unwrap();

    assert_eq!(verdict.tier, VerdictTier::SeverelyInsufficient);
    let expected = 2_000_000.0 / 9_500_000.0;
    assert!(
        (verdict.sufficiency_ratio - expected).abs() < 1e-12,
        "ratio {} should be {expected}",
        verdict.sufficiency_ratio
    );
    assert_eq!(
        verdict.message,
        "Severely insufficient. Take immediate action."
    );
}

/// Ratio of exactly 1.0 lands in the sufficient tier, not below it.
#[test]
fn ratio_exactly_one_is_sufficient() {
    // age 45 -> multiplier 10 -> ideal = 10M; cover = 10M
    let verdict = evaluate(&profile(45, 1_000_000.0, 0, 0.0, 10_000_000.0)).unwrap();

    assert_eq!(verdict.sufficiency_ratio, 1.0);
    assert_eq!(verdict.tier, VerdictTier::Sufficient);
    assert_eq!(
        verdict.recommendation,
        "Keep reviewing every 5 years and ensure inflation adjustment."
    );
}

/// ideal = 500000*15 + 500000 = 8M; ratio = 5M / 8M = 0.625.
#[test]
fn mid_band_ratio_is_inadequate() {
    let verdict = evaluate(&profile(39, 500_000.0, 1, 0.0, 5_000_000.0)).unwrap();

    assert_eq!(verdict.sufficiency_ratio, 0.625);
    assert_eq!(verdict.tier, VerdictTier::Inadequate);
    assert_eq!(
        verdict.recommendation,
        "You should buy an additional term plan immediately."
    );
}

/// Age 40 exactly uses the lower multiplier: ideal = 500000*10 + 500000
/// = 5.5M, so a 5.6M cover is sufficient. The same profile one year
/// younger targets 8M instead.
#[test]
fn multiplier_switches_at_exactly_forty() {
    let at_forty = evaluate(&profile(40, 500_000.0, 1, 0.0, 5_600_000.0)).unwrap();
    assert_eq!(at_forty.tier, VerdictTier::Sufficient);
    assert!(at_forty.sufficiency_ratio > 1.0);

    let at_thirty_nine = evaluate(&profile(39, 500_000.0, 1, 0.0, 5_600_000.0)).unwrap();
    assert_eq!(ideal_cover(&profile(39, 500_000.0, 1, 0.0, 5_600_000.0)), 8_000_000.0);
    assert_eq!(at_thirty_nine.sufficiency_ratio, 0.7);
    assert_eq!(at_thirty_nine.tier, VerdictTier::AlmostSufficient);
}

/// The shared boundaries 1.0, 0.7 and 0.4 each belong to the higher
/// tier; just below each boundary drops to the lower tier.
#[test]
fn tier_boundaries_are_exact() {
    // ideal is exactly 10M for all of these (age 45, income 1M)
    let at = |cover: f64| evaluate(&profile(45, 1_000_000.0, 0, 0.0, cover)).unwrap();

    assert_eq!(at(10_000_000.0).tier, VerdictTier::Sufficient);
    assert_eq!(at(9_999_999.0).tier, VerdictTier::AlmostSufficient);
    assert_eq!(at(7_000_000.0).tier, VerdictTier::AlmostSufficient);
    assert_eq!(at(6_999_999.0).tier, VerdictTier::Inadequate);
    assert_eq!(at(4_000_000.0).tier, VerdictTier::Inadequate);
    assert_eq!(at(3_999_999.0).tier, VerdictTier::SeverelyInsufficient);
}

/// Pure function: identical inputs, identical output, every time.
#[test]
fn evaluation_is_idempotent() {
    let p = profile(33, 750_000.0, 3, 200_000.0, 4_000_000.0);
    let first = evaluate(&p).unwrap();
    let second = evaluate(&p).unwrap();
    assert_eq!(first, second);
}

/// Very high assets push the ideal cover negative. That is legal and
/// flows straight into the ratio, which then classifies as the lowest
/// tier.
#[test]
fn negative_ideal_cover_propagates_into_ratio() {
    let p = profile(45, 100_000.0, 0, 5_000_000.0, 2_000_000.0);
    assert_eq!(ideal_cover(&p), -4_000_000.0);

    let verdict = evaluate(&p).unwrap();
    assert!(verdict.sufficiency_ratio < 0.0);
    assert_eq!(verdict.tier, VerdictTier::SeverelyInsufficient);
}

/// Zero ideal cover is the one documented failure: a dedicated error,
/// never a float-division fault.
#[test]
fn zero_ideal_cover_is_indeterminate() {
    let err = evaluate(&profile(50, 0.0, 0, 0.0, 1_000_000.0)).unwrap_err();
    assert!(
        matches!(err, AdvisorError::IndeterminateAdequacy { current_cover } if current_cover == 1_000_000.0),
        "expected IndeterminateAdequacy, got {err:?}"
    );
}

#[test]
fn non_numeric_age_rejected() {
    let err =
        FinancialProfile::from_fields("thirty", "600000", "2", "500000", "2000000").unwrap_err();
    assert!(
        matches!(err, AdvisorError::InvalidInput { field: "age", .. }),
        "expected InvalidInput on age, got {err:?}"
    );
}

#[test]
fn non_numeric_income_rejected_before_evaluation() {
    let err = FinancialProfile::from_fields("30", "six lakh", "2", "500000", "2000000").unwrap_err();
    assert!(matches!(
        err,
        AdvisorError::InvalidInput {
            field: "annual_income",
            ..
        }
    ));
}

/// Age and dependents are unsigned; a negative value fails conversion.
#[test]
fn negative_count_fields_rejected() {
    let err = FinancialProfile::from_fields("30", "600000", "-1", "500000", "2000000").unwrap_err();
    assert!(matches!(
        err,
        AdvisorError::InvalidInput {
            field: "dependents",
            ..
        }
    ));
}

#[test]
fn surrounding_whitespace_tolerated() {
    let p = FinancialProfile::from_fields(" 30 ", "600000", "2", " 500000", "2000000 ").unwrap();
    assert_eq!(p.age, 30);
    assert_eq!(p.current_cover, 2_000_000.0);
}
