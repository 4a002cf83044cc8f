use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{Catalog, DataType, StandardKey, UseCaseKey};

pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 10;
pub const DEFAULT_PRIORITY: u8 = 5;

/// The user's stated priorities and constraints for one recommendation flow.
///
/// The sliders and the use-case selection are two sources of truth for the same values, so
/// they are only changed through the transition methods below: selecting a use case overwrites
/// both sliders with its preset, moving either slider clears the use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequirementsProfile {
    #[serde(deserialize_with = "deserialize_data_type")]
    pub data_type: Option<DataType>,
    pub security_priority: u8,
    pub performance_priority: u8,
    #[serde(deserialize_with = "deserialize_use_case")]
    pub use_case: Option<UseCaseKey>,
    pub compliance: IndexSet<StandardKey>,
    pub quantum_concern: bool,
}

impl Default for RequirementsProfile {
    fn default() -> Self {
        Self {
            data_type: None,
            security_priority: DEFAULT_PRIORITY,
            performance_priority: DEFAULT_PRIORITY,
            use_case: None,
            compliance: IndexSet::new(),
            quantum_concern: false,
        }
    }
}

impl RequirementsProfile {
    /// Restart the flow with default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_data_type(&mut self, data_type: Option<DataType>) {
        self.data_type = data_type;
    }

    /// Manual slider change; clears any selected use case.
    pub fn set_security_priority(&mut self, value: u8) {
        self.security_priority = clamp_priority(value);
        self.use_case = None;
    }

    /// Manual slider change; clears any selected use case.
    pub fn set_performance_priority(&mut self, value: u8) {
        self.performance_priority = clamp_priority(value);
        self.use_case = None;
    }

    /// Select (or clear with `None`) a use case. A known use case overwrites both sliders with
    /// its preset; an unknown key is recorded but leaves the sliders untouched.
    pub fn select_use_case(&mut self, use_case: Option<UseCaseKey>, catalog: &Catalog) {
        let use_case = use_case.filter(|key| !key.as_str().trim().is_empty());

        if let Some(preset) = use_case
            .as_ref()
            .and_then(|key| catalog.use_case(key))
            .map(|record| record.requirements)
        {
            self.security_priority = clamp_priority(preset.security);
            self.performance_priority = clamp_priority(preset.performance);
        }

        self.use_case = use_case;
    }

    /// Check or uncheck a compliance standard, keeping selection order.
    pub fn set_compliance(&mut self, standard: StandardKey, selected: bool) {
        if selected {
            self.compliance.insert(standard);
        } else {
            self.compliance.shift_remove(&standard);
        }
    }

    pub fn toggle_compliance(&mut self, standard: StandardKey) {
        let selected = !self.compliance.contains(&standard);
        self.set_compliance(standard, selected);
    }

    pub fn set_quantum_concern(&mut self, concern: bool) {
        self.quantum_concern = concern;
    }

    /// Reject slider values outside 1-10, e.g. from a deserialized request body.
    pub fn validate(&self) -> Result<(), RequirementsError> {
        for (field, value) in [
            ("securityPriority", self.security_priority),
            ("performancePriority", self.performance_priority),
        ] {
            if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&value) {
                return Err(RequirementsError::PriorityOutOfRange { field, value });
            }
        }
        Ok(())
    }
}

fn clamp_priority(value: u8) -> u8 {
    value.clamp(MIN_PRIORITY, MAX_PRIORITY)
}

// Clients send an empty string for "not selected".
fn deserialize_data_type<'de, D>(deserializer: D) -> Result<Option<DataType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => DataType::parse(value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown data type '{value}'"))),
    }
}

fn deserialize_use_case<'de, D>(deserializer: D) -> Result<Option<UseCaseKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(UseCaseKey))
}

/// Invalid requirement values supplied from outside the transition methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequirementsError {
    #[error("{field} must be between 1 and 10, got {value}")]
    PriorityOutOfRange { field: &'static str, value: u8 },
}
