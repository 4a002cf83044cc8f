use serde::{Deserialize, Serialize};

use super::super::requirements::RequirementsProfile;
use crate::catalog::{AlgorithmRecord, StandardKey};

const HIGH_THRESHOLD: u8 = 8;
const LOW_PRIORITY_CEILING: u8 = 4;
const LOW_RATING_CEILING: u8 = 5;
const APPROPRIATE_DISTANCE: u8 = 2;

/// Qualitative agreement between a priority slider and an algorithm rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    High,
    Lower,
    Appropriate,
}

/// First matching band, checked in the order high, lower, appropriate.
pub fn band(priority: u8, rating: u8) -> Option<Band> {
    if priority >= HIGH_THRESHOLD && rating >= HIGH_THRESHOLD {
        Some(Band::High)
    } else if priority <= LOW_PRIORITY_CEILING && rating <= LOW_RATING_CEILING {
        Some(Band::Lower)
    } else if priority.abs_diff(rating) <= APPROPRIATE_DISTANCE {
        Some(Band::Appropriate)
    } else {
        None
    }
}

/// Ordered reason clauses for one algorithm, each a standalone capitalized phrase.
pub(crate) fn clauses(algorithm: &AlgorithmRecord, profile: &RequirementsProfile) -> Vec<String> {
    let mut reasons = Vec::new();

    if let Some(data_type) = profile.data_type {
        if algorithm.supports(data_type) {
            reasons.push(format!("Supports {data_type} data encryption"));
        }
    }

    let security = match band(profile.security_priority, algorithm.security_level) {
        Some(Band::High) => Some("Provides high security suitable for sensitive data"),
        Some(Band::Lower) => Some("Matches your lower security requirement"),
        Some(Band::Appropriate) => Some("Offers an appropriate security level"),
        None => None,
    };
    reasons.extend(security.map(String::from));

    let performance = match band(profile.performance_priority, algorithm.performance_score) {
        Some(Band::High) => Some("Offers excellent performance for high-throughput applications"),
        Some(Band::Lower) => Some("Fits your less demanding performance needs"),
        Some(Band::Appropriate) => Some("Provides suitable performance"),
        None => None,
    };
    reasons.extend(performance.map(String::from));

    if let Some(use_case) = &profile.use_case {
        if algorithm.suits(use_case) {
            reasons.push(format!("Is well-suited for {}", use_case.spaced()));
        }
    }

    if let Some(clause) = compliance_clause(algorithm, profile) {
        reasons.push(clause);
    }

    reasons
}

/// Selected standards the algorithm itself claims, in the algorithm's order.
fn compliance_clause(algorithm: &AlgorithmRecord, profile: &RequirementsProfile) -> Option<String> {
    let compliant_with: Vec<&str> = algorithm
        .compliance
        .iter()
        .filter(|standard| profile.compliance.contains(*standard))
        .map(StandardKey::as_str)
        .collect();

    (!compliant_with.is_empty())
        .then(|| format!("Is compliant with {}", compliant_with.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_band_requires_both_sides_high() {
        assert_eq!(band(8, 8), Some(Band::High));
        assert_eq!(band(10, 9), Some(Band::High));
        assert_eq!(band(8, 7), Some(Band::Appropriate));
    }

    #[test]
    fn lower_band_uses_asymmetric_ceilings() {
        assert_eq!(band(4, 5), Some(Band::Lower));
        assert_eq!(band(1, 1), Some(Band::Lower));
        assert_eq!(band(4, 6), Some(Band::Appropriate));
        assert_eq!(band(5, 5), Some(Band::Appropriate));
    }

    #[test]
    fn distant_values_fall_outside_every_band() {
        assert_eq!(band(9, 3), None);
        assert_eq!(band(2, 9), None);
        assert_eq!(band(5, 8), None);
    }
}
