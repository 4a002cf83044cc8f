use serde::{Deserialize, Serialize};

use crate::catalog::{AlgorithmKey, AlgorithmRecord, Catalog, StandardKey};

pub const COMPARISON_CAPACITY: usize = 4;
const HEADLINE_POINTS: usize = 2;

/// Bounded, insertion-ordered working set of algorithms chosen for side-by-side comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComparisonSet {
    keys: Vec<AlgorithmKey>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from arbitrary keys, dropping duplicates and anything past capacity.
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = AlgorithmKey>,
    {
        let mut set = Self::new();
        for key in keys {
            set.add(key);
        }
        set
    }

    /// Add a key; a no-op (returning `false`) when it is already present or the set is full.
    pub fn add(&mut self, key: AlgorithmKey) -> bool {
        if self.contains(&key) || self.is_full() {
            return false;
        }
        self.keys.push(key);
        true
    }

    pub fn remove(&mut self, key: &AlgorithmKey) -> bool {
        let before = self.keys.len();
        self.keys.retain(|existing| existing != key);
        self.keys.len() != before
    }

    /// Remove the key when present (even at capacity), otherwise add it if there is room.
    /// Returns whether the key is in the set afterwards.
    pub fn toggle(&mut self, key: AlgorithmKey) -> bool {
        if self.remove(&key) {
            false
        } else {
            self.add(key)
        }
    }

    pub fn contains(&self, key: &AlgorithmKey) -> bool {
        self.keys.contains(key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.keys.len() >= COMPARISON_CAPACITY
    }

    pub fn keys(&self) -> &[AlgorithmKey] {
        &self.keys
    }
}

/// Property compared across the selected algorithms, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparedProperty {
    Name,
    Kind,
    SecurityLevel,
    PerformanceScore,
    KeyLengths,
    BlockSize,
    YearIntroduced,
    QuantumResistant,
    Compliance,
}

impl ComparedProperty {
    pub const ALL: [ComparedProperty; 9] = [
        ComparedProperty::Name,
        ComparedProperty::Kind,
        ComparedProperty::SecurityLevel,
        ComparedProperty::PerformanceScore,
        ComparedProperty::KeyLengths,
        ComparedProperty::BlockSize,
        ComparedProperty::YearIntroduced,
        ComparedProperty::QuantumResistant,
        ComparedProperty::Compliance,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ComparedProperty::Name => "Full Name",
            ComparedProperty::Kind => "Type",
            ComparedProperty::SecurityLevel => "Security Level",
            ComparedProperty::PerformanceScore => "Performance Score",
            ComparedProperty::KeyLengths => "Key Lengths (bits)",
            ComparedProperty::BlockSize => "Block Size (bits)",
            ComparedProperty::YearIntroduced => "Year Introduced",
            ComparedProperty::QuantumResistant => "Quantum Resistant",
            ComparedProperty::Compliance => "Compliance",
        }
    }

    fn render(self, algorithm: &AlgorithmRecord) -> String {
        match self {
            ComparedProperty::Name => algorithm.name.clone(),
            ComparedProperty::Kind => algorithm.kind.label().to_string(),
            ComparedProperty::SecurityLevel => format!("{}/10", algorithm.security_level),
            ComparedProperty::PerformanceScore => format!("{}/10", algorithm.performance_score),
            ComparedProperty::KeyLengths => join_or_none(&algorithm.key_lengths),
            ComparedProperty::BlockSize => match algorithm.block_size {
                Some(bits) => bits.to_string(),
                None => "Stream Cipher".to_string(),
            },
            ComparedProperty::YearIntroduced => algorithm.year_introduced.to_string(),
            ComparedProperty::QuantumResistant => {
                String::from(if algorithm.quantum_resistant { "Yes" } else { "No" })
            }
            ComparedProperty::Compliance => join_or_none(
                &algorithm
                    .compliance
                    .iter()
                    .map(StandardKey::as_str)
                    .collect::<Vec<_>>(),
            ),
        }
    }
}

fn join_or_none<T: ToString>(values: &[T]) -> String {
    if values.is_empty() {
        "None".to_string()
    } else {
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub property: ComparedProperty,
    pub label: String,
    /// One cell per compared algorithm, in set order.
    pub values: Vec<String>,
}

/// Headline strengths and weaknesses for one compared algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonHighlights {
    pub algorithm: AlgorithmKey,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub algorithms: Vec<AlgorithmKey>,
    pub rows: Vec<ComparisonRow>,
    pub highlights: Vec<ComparisonHighlights>,
}

impl ComparisonTable {
    /// Keys missing from the catalog render as `N/A` and have no highlights.
    pub fn build(set: &ComparisonSet, catalog: &Catalog) -> Self {
        let records: Vec<Option<&AlgorithmRecord>> =
            set.keys().iter().map(|key| catalog.algorithm(key)).collect();

        let rows = ComparedProperty::ALL
            .into_iter()
            .map(|property| ComparisonRow {
                property,
                label: property.label().to_string(),
                values: records
                    .iter()
                    .map(|record| match record {
                        Some(algorithm) => property.render(algorithm),
                        None => "N/A".to_string(),
                    })
                    .collect(),
            })
            .collect();

        let highlights = set
            .keys()
            .iter()
            .zip(&records)
            .filter_map(|(key, record)| {
                record.map(|algorithm| ComparisonHighlights {
                    algorithm: key.clone(),
                    strengths: algorithm.headline_strengths(HEADLINE_POINTS),
                    weaknesses: algorithm.headline_weaknesses(HEADLINE_POINTS),
                })
            })
            .collect();

        Self {
            algorithms: set.keys().to_vec(),
            rows,
            highlights,
        }
    }

    pub fn row(&self, property: ComparedProperty) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.property == property)
    }
}
