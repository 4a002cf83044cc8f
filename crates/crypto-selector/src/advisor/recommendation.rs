use serde::{Deserialize, Serialize};
use tracing::debug;

use super::requirements::RequirementsProfile;
use super::scoring::{RankingConfig, ScoringEngine};
use crate::catalog::{AlgorithmKey, Catalog};

/// One ranked entry of a recommendation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub key: AlgorithmKey,
    pub score: u32,
}

/// Score every catalog algorithm, keep those above the cut-off, and return the best ones.
///
/// Ties keep catalog order because the sort is stable. An empty list means nothing matched
/// strongly enough; it is not an error.
pub fn rank(
    engine: &ScoringEngine,
    ranking: &RankingConfig,
    profile: &RequirementsProfile,
    catalog: &Catalog,
) -> Vec<Recommendation> {
    let mut scored: Vec<Recommendation> = catalog
        .iter_algorithms()
        .map(|(key, _)| Recommendation {
            key: key.clone(),
            score: engine.score(key, profile, catalog),
        })
        .filter(|entry| entry.score > ranking.minimum_score)
        .collect();

    let eligible = scored.len();
    scored.sort_by(|left, right| right.score.cmp(&left.score));
    scored.truncate(ranking.limit);

    debug!(
        candidates = catalog.len(),
        eligible,
        returned = scored.len(),
        top = scored.first().map(|entry| entry.key.as_str()),
        "ranked recommendations"
    );

    scored
}
