use std::sync::Arc;

use serde::Serialize;

use super::comparison::{ComparisonSet, ComparisonTable};
use super::explore::{explore, ExploreFilters};
use super::reasoning;
use super::recommendation::{rank, Recommendation};
use super::requirements::{RequirementsError, RequirementsProfile};
use super::scoring::{RankingConfig, ScoreCard, ScoringConfig, ScoringEngine};
use crate::catalog::{AlgorithmKey, AlgorithmKind, AlgorithmRecord, Catalog};

/// Scores above this value are shown as 100.
pub const DISPLAY_SCORE_CAP: u32 = 100;
const HEADLINE_POINTS: usize = 3;

/// Facade composing the shared catalog, scoring engine, and ranking cut-offs.
pub struct AdvisorService {
    catalog: Arc<Catalog>,
    engine: ScoringEngine,
    ranking: RankingConfig,
}

impl AdvisorService {
    pub fn new(catalog: Arc<Catalog>, scoring: ScoringConfig) -> Self {
        Self::with_ranking(catalog, scoring, RankingConfig::default())
    }

    pub fn with_ranking(
        catalog: Arc<Catalog>,
        scoring: ScoringConfig,
        ranking: RankingConfig,
    ) -> Self {
        Self {
            catalog,
            engine: ScoringEngine::new(scoring),
            ranking,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ranked, explained recommendations for a profile.
    pub fn recommend(
        &self,
        profile: &RequirementsProfile,
    ) -> Result<RecommendationReport, RequirementsError> {
        profile.validate()?;

        let ranked = rank(&self.engine, &self.ranking, profile, &self.catalog);
        let recommendations: Vec<RecommendationView> = ranked
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| self.view(index, entry, profile))
            .collect();

        Ok(RecommendationReport {
            no_strong_match: recommendations.is_empty(),
            recommendations,
        })
    }

    /// Score breakdown plus reasoning for one algorithm, or `None` for an unknown key.
    pub fn assess(
        &self,
        key: &AlgorithmKey,
        profile: &RequirementsProfile,
    ) -> Result<Option<AlgorithmAssessment>, RequirementsError> {
        profile.validate()?;

        Ok(self
            .engine
            .score_card(key, profile, &self.catalog)
            .map(|card| AlgorithmAssessment {
                reasons: reasoning::reasons(key, profile, &self.catalog),
                reasoning: reasoning::explain(key, profile, &self.catalog),
                card,
            }))
    }

    pub fn explore(&self, filters: &ExploreFilters) -> Vec<AlgorithmSummary> {
        explore(&self.catalog, filters)
            .into_iter()
            .map(|(key, algorithm)| AlgorithmSummary::from_record(key, algorithm))
            .collect()
    }

    pub fn compare(&self, set: &ComparisonSet) -> ComparisonTable {
        ComparisonTable::build(set, &self.catalog)
    }

    fn view(
        &self,
        index: usize,
        entry: &Recommendation,
        profile: &RequirementsProfile,
    ) -> Option<RecommendationView> {
        let algorithm = self.catalog.algorithm(&entry.key)?;

        Some(RecommendationView {
            key: entry.key.clone(),
            name: algorithm.name.clone(),
            kind: algorithm.kind,
            security_level: algorithm.security_level,
            performance_score: algorithm.performance_score,
            score: entry.score,
            display_score: entry.score.min(DISPLAY_SCORE_CAP),
            best_match: index == 0,
            description: algorithm.description.clone(),
            reasoning: reasoning::explain(&entry.key, profile, &self.catalog),
            strengths: algorithm.headline_strengths(HEADLINE_POINTS),
            weaknesses: algorithm.headline_weaknesses(HEADLINE_POINTS),
        })
    }
}

/// Result-card payload for one recommended algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView {
    pub key: AlgorithmKey,
    pub name: String,
    pub kind: AlgorithmKind,
    pub security_level: u8,
    pub performance_score: u8,
    pub score: u32,
    pub display_score: u32,
    pub best_match: bool,
    pub description: String,
    pub reasoning: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationReport {
    pub recommendations: Vec<RecommendationView>,
    /// Set when nothing scored above the cut-off.
    pub no_strong_match: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmAssessment {
    pub card: ScoreCard,
    pub reasons: Vec<String>,
    pub reasoning: String,
}

/// Browsing card for the catalog explorer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmSummary {
    pub key: AlgorithmKey,
    pub name: String,
    pub kind: AlgorithmKind,
    pub security_level: u8,
    pub performance_score: u8,
    pub year_introduced: u16,
    pub deprecated: bool,
}

impl AlgorithmSummary {
    fn from_record(key: &AlgorithmKey, algorithm: &AlgorithmRecord) -> Self {
        Self {
            key: key.clone(),
            name: algorithm.name.clone(),
            kind: algorithm.kind,
            security_level: algorithm.security_level,
            performance_score: algorithm.performance_score,
            year_introduced: algorithm.year_introduced,
            deprecated: algorithm.is_deprecated(),
        }
    }
}
