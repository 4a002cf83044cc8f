//! Requirements capture, scoring, ranking, and explanation of cryptographic algorithms.
//!
//! Everything here is a pure function of a [`RequirementsProfile`] and a read-only
//! [`Catalog`]; the free functions below use the default scoring weights and cut-offs.

pub mod comparison;
pub mod explore;
pub mod reasoning;
pub mod recommendation;
pub mod requirements;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use comparison::{
    ComparedProperty, ComparisonHighlights, ComparisonRow, ComparisonSet, ComparisonTable,
    COMPARISON_CAPACITY,
};
pub use explore::{ExploreFilters, KindFilter, SortOrder};
pub use recommendation::{rank, Recommendation};
pub use requirements::{
    RequirementsError, RequirementsProfile, DEFAULT_PRIORITY, MAX_PRIORITY, MIN_PRIORITY,
};
pub use router::advisor_router;
pub use scoring::{
    Disqualification, ProhibitionPolicy, RankingConfig, ScoreCard, ScoreComponent, ScoreFactor,
    ScoringConfig, ScoringEngine,
};
pub use service::{
    AdvisorService, AlgorithmAssessment, AlgorithmSummary, RecommendationReport,
    RecommendationView, DISPLAY_SCORE_CAP,
};

use crate::catalog::{AlgorithmKey, Catalog};

/// Match score of one algorithm under the default rubric; zero for unknown keys.
pub fn score(key: &AlgorithmKey, profile: &RequirementsProfile, catalog: &Catalog) -> u32 {
    ScoringEngine::default().score(key, profile, catalog)
}

/// Up to five algorithms scoring above 30, best first.
pub fn recommend(profile: &RequirementsProfile, catalog: &Catalog) -> Vec<Recommendation> {
    rank(
        &ScoringEngine::default(),
        &RankingConfig::default(),
        profile,
        catalog,
    )
}

pub fn explain(key: &AlgorithmKey, profile: &RequirementsProfile, catalog: &Catalog) -> String {
    reasoning::explain(key, profile, catalog)
}
