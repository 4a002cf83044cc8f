//! Human-readable justification of a recommendation.
//!
//! The clauses recompute their own qualitative bands from the same inputs the scoring rules
//! read, and never look at the numeric score.

mod bands;
mod sentence;

pub use bands::{band, Band};
pub use sentence::{compose, NO_REASONS};

use super::requirements::RequirementsProfile;
use crate::catalog::{AlgorithmKey, Catalog};

/// Reason clauses for an algorithm; empty for unknown keys.
pub fn reasons(
    key: &AlgorithmKey,
    profile: &RequirementsProfile,
    catalog: &Catalog,
) -> Vec<String> {
    catalog
        .algorithm(key)
        .map(|algorithm| bands::clauses(algorithm, profile))
        .unwrap_or_default()
}

/// One-sentence explanation of why an algorithm fits the requirements.
pub fn explain(key: &AlgorithmKey, profile: &RequirementsProfile, catalog: &Catalog) -> String {
    compose(&reasons(key, profile, catalog))
}
