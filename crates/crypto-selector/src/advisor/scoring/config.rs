use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Point weights and cut-offs applied by the scoring rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub data_type_bonus: f64,
    pub use_case_bonus: f64,
    pub compliance_bonus: f64,
    /// Priorities are divided by this value to form the security/performance weights.
    pub priority_scale: f64,
    pub rating_multiplier: f64,
    /// Algorithms rated below this security level always score zero.
    pub security_floor: u8,
    pub quantum_penalty_factor: f64,
    pub prohibition: ProhibitionPolicy,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            data_type_bonus: 20.0,
            use_case_bonus: 15.0,
            compliance_bonus: 10.0,
            priority_scale: 5.0,
            rating_multiplier: 4.0,
            security_floor: 3,
            quantum_penalty_factor: 0.5,
            prohibition: ProhibitionPolicy::default(),
        }
    }
}

/// How a compliance standard that prohibits an algorithm affects its score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProhibitionPolicy {
    /// Zero the running score and keep evaluating the remaining standards, which may still add
    /// recommendation points.
    #[default]
    ResetAndContinue,
    /// Any prohibition zeroes the score once the whole compliance pass has run.
    Disqualify,
}

impl ProhibitionPolicy {
    pub const fn label(self) -> &'static str {
        match self {
            ProhibitionPolicy::ResetAndContinue => "reset",
            ProhibitionPolicy::Disqualify => "disqualify",
        }
    }
}

impl fmt::Display for ProhibitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProhibitionPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reset" | "reset_and_continue" => Ok(Self::ResetAndContinue),
            "disqualify" => Ok(Self::Disqualify),
            other => Err(format!(
                "unknown prohibition policy '{other}' (expected 'reset' or 'disqualify')"
            )),
        }
    }
}

/// Cut-offs used when turning per-algorithm scores into a recommendation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Only scores strictly above this value are recommended.
    pub minimum_score: u32,
    pub limit: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            minimum_score: 30,
            limit: 5,
        }
    }
}
