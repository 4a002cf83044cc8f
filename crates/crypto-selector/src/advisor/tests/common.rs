use std::sync::Arc;

use axum::response::Response;
use indexmap::IndexMap;
use serde_json::Value;

use crate::advisor::{AdvisorService, RequirementsProfile, ScoringConfig};
use crate::catalog::{
    AlgorithmKey, AlgorithmKind, AlgorithmRecord, Catalog, ComplianceStandardRecord, DataType,
    PriorityPreset, StandardKey, UseCaseKey, UseCaseRecord,
};

pub(super) fn key(value: &str) -> AlgorithmKey {
    AlgorithmKey::from(value)
}

pub(super) fn standard(value: &str) -> StandardKey {
    StandardKey::from(value)
}

fn record(
    name: &str,
    kind: AlgorithmKind,
    data_types: &[DataType],
    security_level: u8,
    performance_score: u8,
    use_cases: &[&str],
    compliance: &[&str],
) -> AlgorithmRecord {
    AlgorithmRecord {
        name: name.to_string(),
        kind,
        data_types: data_types.to_vec(),
        security_level,
        performance_score,
        use_cases: use_cases.iter().map(|value| UseCaseKey::from(*value)).collect(),
        compliance: compliance.iter().map(|value| StandardKey::from(*value)).collect(),
        quantum_resistant: false,
        key_lengths: vec![128, 256],
        block_size: Some(128),
        year_introduced: 2001,
        complexity: "Medium".to_string(),
        strengths: Vec::new(),
        weaknesses: Vec::new(),
        description: format!("{name} fixture"),
        real_world_use: String::new(),
        implementation: String::new(),
    }
}

fn standard_record(
    name: &str,
    recommended: &[&str],
    prohibited: &[&str],
) -> ComplianceStandardRecord {
    ComplianceStandardRecord {
        name: name.to_string(),
        description: String::new(),
        recommended_algorithms: recommended.iter().map(|value| key(value)).collect(),
        prohibited_algorithms: prohibited.iter().map(|value| key(value)).collect(),
    }
}

fn use_case(title: &str, security: u8, performance: u8) -> UseCaseRecord {
    UseCaseRecord {
        title: title.to_string(),
        requirements: PriorityPreset {
            security,
            performance,
        },
    }
}

/// Seven algorithms in a fixed order:
/// FORTIS (9/4), SWIFT (7/9, stream), LATTICE (9/6, quantum resistant), RELIC (2/8),
/// TRIPLE (4/3), TWIN-A and TWIN-B (6/6, identical).
pub(super) fn catalog() -> Catalog {
    let mut algorithms = IndexMap::new();

    let mut fortis = record(
        "Fortis Block Cipher",
        AlgorithmKind::Symmetric,
        &[DataType::Text],
        9,
        4,
        &["password-storage"],
        &["FIPS"],
    );
    fortis.strengths = vec![
        "Vetted design".to_string(),
        "Hardware acceleration".to_string(),
        "Large key space".to_string(),
        "Widely deployed".to_string(),
    ];
    fortis.weaknesses = vec![
        "Slow key schedule".to_string(),
        "Not quantum resistant".to_string(),
        "Timing leaks in naive code".to_string(),
    ];
    algorithms.insert(key("FORTIS"), fortis);

    let mut swift = record(
        "Swift Stream Cipher",
        AlgorithmKind::Symmetric,
        &[DataType::Text, DataType::Video],
        7,
        9,
        &["streaming-media"],
        &["GDPR"],
    );
    swift.block_size = None;
    swift.key_lengths = vec![256];
    algorithms.insert(key("SWIFT"), swift);

    let mut lattice = record(
        "Lattice KEM",
        AlgorithmKind::Asymmetric,
        &[DataType::Keys],
        9,
        6,
        &["key-exchange"],
        &["NIST-PQC"],
    );
    lattice.quantum_resistant = true;
    lattice.block_size = None;
    lattice.key_lengths = Vec::new();
    lattice.year_introduced = 2017;
    algorithms.insert(key("LATTICE"), lattice);

    algorithms.insert(
        key("RELIC"),
        record(
            "Relic Cipher",
            AlgorithmKind::Symmetric,
            &[DataType::Text],
            2,
            8,
            &["legacy-compatibility"],
            &[],
        ),
    );
    algorithms.insert(
        key("TRIPLE"),
        record(
            "Triple Relic",
            AlgorithmKind::Symmetric,
            &[DataType::Text],
            4,
            3,
            &["legacy-compatibility"],
            &[],
        ),
    );
    for name in ["TWIN-A", "TWIN-B"] {
        algorithms.insert(
            key(name),
            record(
                name,
                AlgorithmKind::Symmetric,
                &[DataType::Binary],
                6,
                6,
                &[],
                &[],
            ),
        );
    }

    let mut standards = IndexMap::new();
    standards.insert(
        standard("FIPS"),
        standard_record("FIPS", &["FORTIS"], &["RELIC", "TRIPLE"]),
    );
    standards.insert(
        standard("GDPR"),
        standard_record("GDPR", &["FORTIS", "SWIFT", "TRIPLE"], &["RELIC"]),
    );
    standards.insert(
        standard("NIST-PQC"),
        standard_record("NIST-PQC", &["LATTICE"], &[]),
    );

    let mut use_cases = IndexMap::new();
    use_cases.insert(
        UseCaseKey::from("password-storage"),
        use_case("Password Storage", 9, 3),
    );
    use_cases.insert(
        UseCaseKey::from("streaming-media"),
        use_case("Streaming Media", 5, 10),
    );
    use_cases.insert(UseCaseKey::from("key-exchange"), use_case("Key Exchange", 9, 5));
    use_cases.insert(
        UseCaseKey::from("legacy-compatibility"),
        use_case("Legacy Compatibility", 4, 5),
    );

    Catalog {
        algorithms,
        use_cases,
        standards,
    }
}

/// Text data, security 9 / performance 3 via the password-storage preset, FIPS selected.
pub(super) fn password_profile(catalog: &Catalog) -> RequirementsProfile {
    let mut profile = RequirementsProfile::default();
    profile.set_data_type(Some(DataType::Text));
    profile.select_use_case(Some(UseCaseKey::from("password-storage")), catalog);
    profile.set_compliance(standard("FIPS"), true);
    profile
}

pub(super) fn profile_with_priorities(security: u8, performance: u8) -> RequirementsProfile {
    let mut profile = RequirementsProfile::default();
    profile.set_security_priority(security);
    profile.set_performance_priority(performance);
    profile
}

pub(super) fn service() -> AdvisorService {
    service_with(ScoringConfig::default())
}

pub(super) fn service_with(config: ScoringConfig) -> AdvisorService {
    AdvisorService::new(Arc::new(catalog()), config)
}

pub(super) fn keys_of<'a, I>(keys: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a AlgorithmKey>,
{
    keys.into_iter().map(AlgorithmKey::as_str).collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
