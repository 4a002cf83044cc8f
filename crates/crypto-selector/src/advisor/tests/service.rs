use super::common::*;
use crate::advisor::{
    ComparisonSet, ExploreFilters, KindFilter, ProhibitionPolicy, RequirementsError,
    RequirementsProfile, ScoreFactor, ScoringConfig, DISPLAY_SCORE_CAP,
};

#[test]
fn report_marks_best_match_and_caps_display_score() {
    let service = service();
    let profile = password_profile(service.catalog());

    let report = service.recommend(&profile).expect("valid profile");

    assert!(!report.no_strong_match);
    let best = &report.recommendations[0];
    assert_eq!(best.key, key("FORTIS"));
    assert_eq!(best.score, 119);
    assert_eq!(best.display_score, DISPLAY_SCORE_CAP);
    assert!(best.best_match);
    assert!(best.reasoning.starts_with("This algorithm supports text data encryption"));
    assert_eq!(best.strengths.len(), 3);
    assert_eq!(best.weaknesses.len(), 3);

    let runner_up = &report.recommendations[1];
    assert_eq!(runner_up.key, key("SWIFT"));
    assert_eq!(runner_up.display_score, 92);
    assert!(!runner_up.best_match);
}

#[test]
fn report_flags_when_nothing_matches() {
    let service = service();
    let profile = profile_with_priorities(1, 1);

    let report = service.recommend(&profile).expect("valid profile");

    assert!(report.recommendations.is_empty());
    assert!(report.no_strong_match);
}

#[test]
fn invalid_profile_is_rejected() {
    let service = service();
    let profile = RequirementsProfile {
        performance_priority: 11,
        ..RequirementsProfile::default()
    };

    match service.recommend(&profile) {
        Err(RequirementsError::PriorityOutOfRange { field, value }) => {
            assert_eq!(field, "performancePriority");
            assert_eq!(value, 11);
        }
        other => panic!("expected priority error, got {other:?}"),
    }
}

#[test]
fn assessment_pairs_score_card_with_reasoning() {
    let service = service();
    let profile = password_profile(service.catalog());

    let assessment = service
        .assess(&key("FORTIS"), &profile)
        .expect("valid profile")
        .expect("known algorithm");

    assert_eq!(assessment.card.score, 119);
    assert_eq!(assessment.reasons.len(), 5);
    assert!(assessment.reasoning.ends_with("and is compliant with FIPS."));
    assert!(service
        .assess(&key("ROT13"), &profile)
        .expect("valid profile")
        .is_none());
}

#[test]
fn configured_policy_flows_into_scoring() {
    let service = service_with(ScoringConfig {
        prohibition: ProhibitionPolicy::Disqualify,
        ..ScoringConfig::default()
    });
    let mut profile = RequirementsProfile::default();
    profile.set_compliance(standard("FIPS"), true);
    profile.set_compliance(standard("GDPR"), true);

    let assessment = service
        .assess(&key("TRIPLE"), &profile)
        .expect("valid profile")
        .expect("known algorithm");

    assert_eq!(assessment.card.score, 0);
    assert!(assessment.card.disqualification.is_some());
    assert!(assessment.card.points_for(ScoreFactor::ComplianceProhibition) < 0.0);
}

#[test]
fn explorer_summaries_flag_deprecated_algorithms() {
    let service = service();

    let summaries = service.explore(&ExploreFilters {
        kind: KindFilter::Symmetric,
        ..ExploreFilters::default()
    });

    let deprecated: Vec<&str> = summaries
        .iter()
        .filter(|summary| summary.deprecated)
        .map(|summary| summary.key.as_str())
        .collect();
    assert_eq!(summaries.len(), 6);
    assert_eq!(deprecated, vec!["RELIC", "TRIPLE"]);
}

#[test]
fn compare_builds_a_table_for_the_set() {
    let service = service();
    let set = ComparisonSet::from_keys(["LATTICE", "FORTIS"].map(key));

    let table = service.compare(&set);

    assert_eq!(keys_of(&table.algorithms), vec!["LATTICE", "FORTIS"]);
    assert!(table.rows.iter().all(|row| row.values.len() == 2));
}
