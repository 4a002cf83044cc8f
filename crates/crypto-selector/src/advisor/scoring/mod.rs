mod config;
mod policy;
mod rules;

pub use config::{ProhibitionPolicy, RankingConfig, ScoringConfig};
pub use policy::Disqualification;

use super::requirements::RequirementsProfile;
use crate::catalog::{AlgorithmKey, Catalog};
use policy::apply_adjustments;
use serde::{Deserialize, Serialize};

/// Stateless scorer that applies the rubric configuration to one algorithm at a time.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Full breakdown for a catalog algorithm, or `None` when the key is unknown.
    pub fn score_card(
        &self,
        key: &AlgorithmKey,
        profile: &RequirementsProfile,
        catalog: &Catalog,
    ) -> Option<ScoreCard> {
        let algorithm = catalog.algorithm(key)?;

        let (mut components, total, signals) =
            rules::accumulate(key, algorithm, profile, catalog, &self.config);
        let (raw_score, disqualification) = apply_adjustments(
            algorithm,
            profile,
            &self.config,
            &signals,
            &mut components,
            total,
        );

        Some(ScoreCard {
            algorithm: key.clone(),
            score: round_score(raw_score),
            raw_score,
            components,
            disqualification,
        })
    }

    /// Rounded match score; unknown keys score zero.
    pub fn score(
        &self,
        key: &AlgorithmKey,
        profile: &RequirementsProfile,
        catalog: &Catalog,
    ) -> u32 {
        self.score_card(key, profile, catalog)
            .map(|card| card.score)
            .unwrap_or(0)
    }
}

fn round_score(raw: f64) -> u32 {
    // Scores are never negative, so rounding half away from zero is rounding half up.
    raw.max(0.0).round() as u32
}

/// Rubric factor behind a score component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    DataType,
    Security,
    Performance,
    UseCase,
    ComplianceRecommendation,
    ComplianceProhibition,
    SecurityFloor,
    QuantumPenalty,
}

/// Discrete contribution to a score so a ranking can be audited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: f64,
    pub notes: String,
}

/// Score of one algorithm together with its audit trail. The component points sum to
/// `raw_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub algorithm: AlgorithmKey,
    pub score: u32,
    pub raw_score: f64,
    pub components: Vec<ScoreComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disqualification: Option<Disqualification>,
}

impl ScoreCard {
    pub fn points_for(&self, factor: ScoreFactor) -> f64 {
        self.components
            .iter()
            .filter(|component| component.factor == factor)
            .map(|component| component.points)
            .sum()
    }
}
