use super::super::requirements::RequirementsProfile;
use super::config::{ProhibitionPolicy, ScoringConfig};
use super::{ScoreComponent, ScoreFactor};
use crate::catalog::{AlgorithmKey, AlgorithmRecord, Catalog, StandardKey};

pub(crate) struct ScoreSignals {
    pub prohibited_by: Vec<StandardKey>,
}

/// Additive part of the rubric: data type, weighted ratings, use case, and the compliance pass.
pub(crate) fn accumulate(
    key: &AlgorithmKey,
    algorithm: &AlgorithmRecord,
    profile: &RequirementsProfile,
    catalog: &Catalog,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, f64, ScoreSignals) {
    let mut components = Vec::new();
    let mut total = 0.0_f64;

    if let Some(data_type) = profile.data_type {
        if algorithm.supports(data_type) {
            components.push(ScoreComponent {
                factor: ScoreFactor::DataType,
                points: config.data_type_bonus,
                notes: format!("supports {data_type} data"),
            });
            total += config.data_type_bonus;
        }
    }

    let security_weight = f64::from(profile.security_priority) / config.priority_scale;
    let security_points =
        f64::from(algorithm.security_level) * security_weight * config.rating_multiplier;
    components.push(ScoreComponent {
        factor: ScoreFactor::Security,
        points: security_points,
        notes: format!(
            "security level {} weighted by priority {}",
            algorithm.security_level, profile.security_priority
        ),
    });
    total += security_points;

    let performance_weight = f64::from(profile.performance_priority) / config.priority_scale;
    let performance_points =
        f64::from(algorithm.performance_score) * performance_weight * config.rating_multiplier;
    components.push(ScoreComponent {
        factor: ScoreFactor::Performance,
        points: performance_points,
        notes: format!(
            "performance score {} weighted by priority {}",
            algorithm.performance_score, profile.performance_priority
        ),
    });
    total += performance_points;

    if let Some(use_case) = &profile.use_case {
        if algorithm.suits(use_case) {
            components.push(ScoreComponent {
                factor: ScoreFactor::UseCase,
                points: config.use_case_bonus,
                notes: format!("listed for {}", use_case.spaced()),
            });
            total += config.use_case_bonus;
        }
    }

    let mut prohibited_by = Vec::new();
    for standard_key in &profile.compliance {
        let Some(standard) = catalog.standard(standard_key) else {
            continue;
        };

        if standard.recommends(key) {
            components.push(ScoreComponent {
                factor: ScoreFactor::ComplianceRecommendation,
                points: config.compliance_bonus,
                notes: format!("recommended by {standard_key}"),
            });
            total += config.compliance_bonus;
        }

        if standard.prohibits(key) {
            prohibited_by.push(standard_key.clone());
            if config.prohibition == ProhibitionPolicy::ResetAndContinue {
                // Only this standard stops here; later standards still contribute.
                components.push(ScoreComponent {
                    factor: ScoreFactor::ComplianceProhibition,
                    points: -total,
                    notes: format!("prohibited by {standard_key}, score reset"),
                });
                total = 0.0;
            }
        }
    }

    (components, total, ScoreSignals { prohibited_by })
}
