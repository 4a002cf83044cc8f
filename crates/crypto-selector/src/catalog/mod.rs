//! Read-only catalog of algorithms, use-case presets, and compliance standards.
//!
//! Records are loaded once (see [`loader`]) and never mutated afterwards. Every map keeps
//! document order, which the recommendation ranking relies on to break score ties.

mod loader;

pub use loader::CatalogError;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an algorithm record (e.g. `AES`, `3DES`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlgorithmKey(pub String);

/// Identifier of a use-case preset (e.g. `password-storage`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UseCaseKey(pub String);

/// Identifier of a compliance standard (e.g. `PCI-DSS`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StandardKey(pub String);

macro_rules! key_impls {
    ($($key:ident),+) => {
        $(
            impl $key {
                pub fn new(value: impl Into<String>) -> Self {
                    Self(value.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $key {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<&str> for $key {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }
        )+
    };
}

key_impls!(AlgorithmKey, UseCaseKey, StandardKey);

impl UseCaseKey {
    /// Human readable form with `-` separators rendered as spaces.
    pub fn spaced(&self) -> String {
        self.0.replace('-', " ")
    }
}

/// Symmetric vs. public-key algorithm family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Symmetric,
    Asymmetric,
}

impl AlgorithmKind {
    pub const fn label(self) -> &'static str {
        match self {
            AlgorithmKind::Symmetric => "symmetric",
            AlgorithmKind::Asymmetric => "asymmetric",
        }
    }
}

/// Kind of payload a user wants to protect.
///
/// The set is closed: catalog documents naming any other tag fail to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Text,
    Image,
    Video,
    Audio,
    Binary,
    Keys,
}

impl DataType {
    pub const ALL: [DataType; 6] = [
        DataType::Text,
        DataType::Image,
        DataType::Video,
        DataType::Audio,
        DataType::Binary,
        DataType::Keys,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            DataType::Text => "text",
            DataType::Image => "image",
            DataType::Video => "video",
            DataType::Audio => "audio",
            DataType::Binary => "binary",
            DataType::Keys => "keys",
        }
    }

    /// Short description shown next to the data-type choice.
    pub const fn examples(self) -> &'static str {
        match self {
            DataType::Text => "Documents, messages, passwords",
            DataType::Image => "Photos, graphics, scanned documents",
            DataType::Video => "Video files, streaming content",
            DataType::Audio => "Voice recordings, music files",
            DataType::Binary => "Compiled code, databases, archives",
            DataType::Keys => "Cryptographic keys, certificates",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|data_type| data_type.label().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable description of one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AlgorithmKind,
    pub data_types: Vec<DataType>,
    pub security_level: u8,
    pub performance_score: u8,
    #[serde(default)]
    pub use_cases: Vec<UseCaseKey>,
    #[serde(default)]
    pub compliance: Vec<StandardKey>,
    #[serde(default)]
    pub quantum_resistant: bool,
    #[serde(default)]
    pub key_lengths: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_size: Option<u32>,
    pub year_introduced: u16,
    #[serde(default)]
    pub complexity: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub real_world_use: String,
    #[serde(default)]
    pub implementation: String,
}

impl AlgorithmRecord {
    pub fn supports(&self, data_type: DataType) -> bool {
        self.data_types.contains(&data_type)
    }

    pub fn suits(&self, use_case: &UseCaseKey) -> bool {
        self.use_cases.contains(use_case)
    }

    /// A record without a block size is a stream cipher.
    pub fn is_stream_cipher(&self) -> bool {
        self.block_size.is_none()
    }

    /// Records below security level 5 are shown with an insecure/deprecated marker.
    pub fn is_deprecated(&self) -> bool {
        self.security_level < 5
    }

    pub fn headline_strengths(&self, count: usize) -> Vec<String> {
        self.strengths.iter().take(count).cloned().collect()
    }

    pub fn headline_weaknesses(&self, count: usize) -> Vec<String> {
        self.weaknesses.iter().take(count).cloned().collect()
    }
}

/// Canonical security/performance slider values for a use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityPreset {
    pub security: u8,
    pub performance: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCaseRecord {
    pub title: String,
    pub requirements: PriorityPreset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceStandardRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommended_algorithms: Vec<AlgorithmKey>,
    #[serde(default)]
    pub prohibited_algorithms: Vec<AlgorithmKey>,
}

impl ComplianceStandardRecord {
    pub fn recommends(&self, key: &AlgorithmKey) -> bool {
        self.recommended_algorithms.contains(key)
    }

    pub fn prohibits(&self, key: &AlgorithmKey) -> bool {
        self.prohibited_algorithms.contains(key)
    }
}

/// The three read-only collections consumed by scoring, ranking, and reasoning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub algorithms: IndexMap<AlgorithmKey, AlgorithmRecord>,
    pub use_cases: IndexMap<UseCaseKey, UseCaseRecord>,
    pub standards: IndexMap<StandardKey, ComplianceStandardRecord>,
}

impl Catalog {
    pub fn algorithm(&self, key: &AlgorithmKey) -> Option<&AlgorithmRecord> {
        self.algorithms.get(key)
    }

    pub fn use_case(&self, key: &UseCaseKey) -> Option<&UseCaseRecord> {
        self.use_cases.get(key)
    }

    pub fn standard(&self, key: &StandardKey) -> Option<&ComplianceStandardRecord> {
        self.standards.get(key)
    }

    /// Algorithms in catalog (insertion) order.
    pub fn iter_algorithms(&self) -> impl Iterator<Item = (&AlgorithmKey, &AlgorithmRecord)> {
        self.algorithms.iter()
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}
