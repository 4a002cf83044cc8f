use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use super::{Catalog, PriorityPreset};

pub(crate) const ALGORITHMS_FILE: &str = "algorithms.json";
pub(crate) const STANDARDS_FILE: &str = "compliance_standards.json";
pub(crate) const USE_CASES_FILE: &str = "use_cases.json";

const EMBEDDED_ALGORITHMS: &str = include_str!("../../data/algorithms.json");
const EMBEDDED_STANDARDS: &str = include_str!("../../data/compliance_standards.json");
const EMBEDDED_USE_CASES: &str = include_str!("../../data/use_cases.json");

const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Failures raised while loading or validating catalog documents.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{document} is not a valid catalog document: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{document} contains no records")]
    Empty { document: &'static str },
    #[error("algorithm {key} has {field} {value}, expected 1-10")]
    RatingOutOfRange {
        key: String,
        field: &'static str,
        value: u8,
    },
    #[error("use case {key} has preset {field} {value}, expected 1-10")]
    PresetOutOfRange {
        key: String,
        field: &'static str,
        value: u8,
    },
}

impl Catalog {
    /// Catalog compiled into the binary from `data/`.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_ALGORITHMS, EMBEDDED_STANDARDS, EMBEDDED_USE_CASES)
    }

    /// Load the three catalog documents from a directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let algorithms = read_document(&dir.join(ALGORITHMS_FILE))?;
        let standards = read_document(&dir.join(STANDARDS_FILE))?;
        let use_cases = read_document(&dir.join(USE_CASES_FILE))?;

        let catalog = Self::from_json(&algorithms, &standards, &use_cases)?;
        info!(dir = %dir.display(), "catalog loaded from directory");
        Ok(catalog)
    }

    /// Parse and validate catalog documents already held in memory.
    pub fn from_json(
        algorithms: &str,
        standards: &str,
        use_cases: &str,
    ) -> Result<Self, CatalogError> {
        let catalog = Catalog {
            algorithms: parse_document(ALGORITHMS_FILE, algorithms)?,
            standards: parse_document(STANDARDS_FILE, standards)?,
            use_cases: parse_document(USE_CASES_FILE, use_cases)?,
        };

        if catalog.algorithms.is_empty() {
            return Err(CatalogError::Empty {
                document: ALGORITHMS_FILE,
            });
        }

        catalog.validate()?;
        catalog.warn_dangling_references();

        info!(
            algorithms = catalog.algorithms.len(),
            use_cases = catalog.use_cases.len(),
            standards = catalog.standards.len(),
            "catalog ready"
        );

        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (key, record) in &self.algorithms {
            for (field, value) in [
                ("securityLevel", record.security_level),
                ("performanceScore", record.performance_score),
            ] {
                if !RATING_RANGE.contains(&value) {
                    return Err(CatalogError::RatingOutOfRange {
                        key: key.to_string(),
                        field,
                        value,
                    });
                }
            }
        }

        for (key, record) in &self.use_cases {
            let PriorityPreset {
                security,
                performance,
            } = record.requirements;
            for (field, value) in [("security", security), ("performance", performance)] {
                if !RATING_RANGE.contains(&value) {
                    return Err(CatalogError::PresetOutOfRange {
                        key: key.to_string(),
                        field,
                        value,
                    });
                }
            }
        }

        Ok(())
    }

    // Dangling keys are tolerated because every lookup during scoring is defensive.
    fn warn_dangling_references(&self) {
        for (standard_key, standard) in &self.standards {
            for key in standard
                .recommended_algorithms
                .iter()
                .chain(&standard.prohibited_algorithms)
            {
                if !self.algorithms.contains_key(key) {
                    warn!(
                        standard = %standard_key,
                        algorithm = %key,
                        "standard references unknown algorithm"
                    );
                }
            }
        }

        for (key, record) in &self.algorithms {
            for standard in &record.compliance {
                if !self.standards.contains_key(standard) {
                    warn!(
                        algorithm = %key,
                        %standard,
                        "algorithm lists unknown compliance standard"
                    );
                }
            }
            for use_case in &record.use_cases {
                if !self.use_cases.contains_key(use_case) {
                    warn!(
                        algorithm = %key,
                        use_case = %use_case,
                        "algorithm lists unknown use case"
                    );
                }
            }
        }
    }
}

fn read_document(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_document<K, V>(
    document: &'static str,
    raw: &str,
) -> Result<IndexMap<K, V>, CatalogError>
where
    K: DeserializeOwned + std::hash::Hash + Eq,
    V: DeserializeOwned,
{
    serde_json::from_str(raw).map_err(|source| CatalogError::Parse { document, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AlgorithmKey, StandardKey, UseCaseKey};

    const ONE_ALGORITHM: &str = r#"{
        "ZED": {
            "name": "Zed Cipher",
            "type": "symmetric",
            "dataTypes": ["text"],
            "securityLevel": 6,
            "performanceScore": 6,
            "yearIntroduced": 2020
        }
    }"#;

    #[test]
    fn embedded_catalog_loads_in_document_order() {
        let catalog = Catalog::embedded().expect("embedded catalog is valid");

        let keys: Vec<&str> = catalog.algorithms.keys().map(AlgorithmKey::as_str).collect();
        assert_eq!(keys.first(), Some(&"AES"));
        assert_eq!(keys.get(1), Some(&"ChaCha20"));
        assert!(catalog.standard(&StandardKey::from("PCI-DSS")).is_some());
        assert!(catalog
            .use_case(&UseCaseKey::from("password-storage"))
            .is_some());
    }

    #[test]
    fn embedded_stream_ciphers_have_no_block_size() {
        let catalog = Catalog::embedded().expect("embedded catalog is valid");
        let chacha = catalog
            .algorithm(&AlgorithmKey::from("ChaCha20"))
            .expect("ChaCha20 present");
        assert!(chacha.is_stream_cipher());
        let aes = catalog
            .algorithm(&AlgorithmKey::from("AES"))
            .expect("AES present");
        assert_eq!(aes.block_size, Some(128));
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let catalog = Catalog::from_json(ONE_ALGORITHM, "{}", "{}").expect("minimal catalog");
        let record = catalog
            .algorithm(&AlgorithmKey::from("ZED"))
            .expect("record present");
        assert!(record.use_cases.is_empty());
        assert!(!record.quantum_resistant);
        assert!(record.strengths.is_empty());
    }

    #[test]
    fn rejects_empty_algorithm_document() {
        match Catalog::from_json("{}", "{}", "{}") {
            Err(CatalogError::Empty { document }) => assert_eq!(document, ALGORITHMS_FILE),
            other => panic!("expected empty catalog error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_ratings() {
        let raw = ONE_ALGORITHM.replace("\"securityLevel\": 6", "\"securityLevel\": 11");
        match Catalog::from_json(&raw, "{}", "{}") {
            Err(CatalogError::RatingOutOfRange { key, field, value }) => {
                assert_eq!(key, "ZED");
                assert_eq!(field, "securityLevel");
                assert_eq!(value, 11);
            }
            other => panic!("expected rating error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_presets() {
        let use_cases =
            r#"{ "bulk": { "title": "Bulk", "requirements": { "security": 0, "performance": 5 } } }"#;
        match Catalog::from_json(ONE_ALGORITHM, "{}", use_cases) {
            Err(CatalogError::PresetOutOfRange { key, field, .. }) => {
                assert_eq!(key, "bulk");
                assert_eq!(field, "security");
            }
            other => panic!("expected preset error, got {other:?}"),
        }
    }

    #[test]
    fn reports_malformed_document_by_name() {
        let error = Catalog::from_json(ONE_ALGORITHM, "[", "{}").expect_err("malformed json");
        assert!(error.to_string().contains(STANDARDS_FILE));
    }

    #[test]
    fn rejects_data_type_tags_outside_the_known_set() {
        let raw = ONE_ALGORITHM.replace("[\"text\"]", "[\"document\"]");
        match Catalog::from_json(&raw, "{}", "{}") {
            Err(CatalogError::Parse { document, source }) => {
                assert_eq!(document, ALGORITHMS_FILE);
                assert!(source.to_string().contains("document"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let error = Catalog::from_dir("/nonexistent/crypto-selector-catalog")
            .expect_err("directory does not exist");
        assert!(matches!(error, CatalogError::Io { .. }));
    }
}
