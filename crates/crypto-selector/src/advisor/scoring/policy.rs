use serde::{Deserialize, Serialize};

use super::super::requirements::RequirementsProfile;
use super::config::{ProhibitionPolicy, ScoringConfig};
use super::rules::ScoreSignals;
use super::{ScoreComponent, ScoreFactor};
use crate::catalog::{AlgorithmRecord, StandardKey};

/// Reason an algorithm was forced to a zero score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Disqualification {
    ProhibitedByStandard { standards: Vec<StandardKey> },
    BelowSecurityFloor { security_level: u8, floor: u8 },
}

impl Disqualification {
    pub fn summary(&self) -> String {
        match self {
            Disqualification::ProhibitedByStandard { standards } => {
                let names: Vec<&str> = standards.iter().map(StandardKey::as_str).collect();
                format!("prohibited by {}", names.join(", "))
            }
            Disqualification::BelowSecurityFloor {
                security_level,
                floor,
            } => format!("security level {security_level} is below the floor of {floor}"),
        }
    }
}

/// Late-stage adjustments, in order: prohibition (disqualify policy only), security floor,
/// quantum penalty. Returns the adjusted total and the disqualification that zeroed it, if any.
pub(crate) fn apply_adjustments(
    algorithm: &AlgorithmRecord,
    profile: &RequirementsProfile,
    config: &ScoringConfig,
    signals: &ScoreSignals,
    components: &mut Vec<ScoreComponent>,
    mut total: f64,
) -> (f64, Option<Disqualification>) {
    let mut disqualification = None;

    if config.prohibition == ProhibitionPolicy::Disqualify && !signals.prohibited_by.is_empty() {
        components.push(ScoreComponent {
            factor: ScoreFactor::ComplianceProhibition,
            points: -total,
            notes: "prohibited by a selected standard".to_string(),
        });
        total = 0.0;
        disqualification = Some(Disqualification::ProhibitedByStandard {
            standards: signals.prohibited_by.clone(),
        });
    }

    if algorithm.security_level < config.security_floor {
        components.push(ScoreComponent {
            factor: ScoreFactor::SecurityFloor,
            points: -total,
            notes: format!(
                "security level {} below floor {}",
                algorithm.security_level, config.security_floor
            ),
        });
        total = 0.0;
        disqualification = Some(Disqualification::BelowSecurityFloor {
            security_level: algorithm.security_level,
            floor: config.security_floor,
        });
    }

    if profile.quantum_concern && !algorithm.quantum_resistant {
        let penalized = total * config.quantum_penalty_factor;
        components.push(ScoreComponent {
            factor: ScoreFactor::QuantumPenalty,
            points: penalized - total,
            notes: "not quantum resistant".to_string(),
        });
        total = penalized;
    }

    (total, disqualification)
}
