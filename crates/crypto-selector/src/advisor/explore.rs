use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{AlgorithmKey, AlgorithmKind, AlgorithmRecord, Catalog};

/// Which algorithm family to show while browsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Symmetric,
    Asymmetric,
}

impl KindFilter {
    fn admits(self, kind: AlgorithmKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Symmetric => kind == AlgorithmKind::Symmetric,
            KindFilter::Asymmetric => kind == AlgorithmKind::Asymmetric,
        }
    }
}

impl FromStr for KindFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "symmetric" => Ok(Self::Symmetric),
            "asymmetric" => Ok(Self::Asymmetric),
            other => Err(format!("unknown algorithm type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    NameAsc,
    NameDesc,
    SecurityDesc,
    PerformanceDesc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "name-asc" => Ok(Self::NameAsc),
            "name-desc" => Ok(Self::NameDesc),
            "security-desc" => Ok(Self::SecurityDesc),
            "performance-desc" => Ok(Self::PerformanceDesc),
            other => Err(format!("unknown sort order '{other}'")),
        }
    }
}

/// Catalog browsing criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreFilters {
    pub search: String,
    #[serde(rename = "type")]
    pub kind: KindFilter,
    pub sort: SortOrder,
}

impl ExploreFilters {
    fn matches(&self, key: &AlgorithmKey, algorithm: &AlgorithmRecord) -> bool {
        let term = self.search.trim().to_lowercase();
        let search_match = term.is_empty()
            || key.as_str().to_lowercase().contains(&term)
            || algorithm.name.to_lowercase().contains(&term);

        search_match && self.kind.admits(algorithm.kind)
    }
}

/// Filter and sort the catalog for browsing. Sorting is stable, so equal ratings keep catalog
/// order.
pub fn explore<'a>(
    catalog: &'a Catalog,
    filters: &ExploreFilters,
) -> Vec<(&'a AlgorithmKey, &'a AlgorithmRecord)> {
    let mut entries: Vec<_> = catalog
        .iter_algorithms()
        .filter(|(key, algorithm)| filters.matches(key, algorithm))
        .collect();

    entries.sort_by(|(left_key, left), (right_key, right)| match filters.sort {
        SortOrder::NameAsc => compare_names(left_key, right_key),
        SortOrder::NameDesc => compare_names(right_key, left_key),
        SortOrder::SecurityDesc => right.security_level.cmp(&left.security_level),
        SortOrder::PerformanceDesc => right.performance_score.cmp(&left.performance_score),
    });

    entries
}

fn compare_names(left: &AlgorithmKey, right: &AlgorithmKey) -> Ordering {
    left.as_str()
        .to_lowercase()
        .cmp(&right.as_str().to_lowercase())
        .then_with(|| left.cmp(right))
}
