use crypto_selector::advisor::{AdvisorService, ScoringConfig};
use crypto_selector::catalog::{Catalog, CatalogError, DataType};
use crypto_selector::config::AdvisorConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog from `dir` when given, otherwise the copy embedded in the library.
pub(crate) fn load_catalog(dir: Option<&Path>) -> Result<Catalog, CatalogError> {
    match dir {
        Some(dir) => Catalog::from_dir(dir),
        None => Catalog::embedded(),
    }
}

/// Advisor wired from configuration; `catalog_dir` takes precedence over `APP_CATALOG_DIR`.
pub(crate) fn advisor_service(
    config: &AdvisorConfig,
    catalog_dir: Option<&Path>,
) -> Result<AdvisorService, CatalogError> {
    let catalog = load_catalog(catalog_dir.or(config.catalog_dir.as_deref()))?;
    let scoring = ScoringConfig {
        prohibition: config.prohibition,
        ..ScoringConfig::default()
    };
    Ok(AdvisorService::new(Arc::new(catalog), scoring))
}

pub(crate) fn parse_data_type(raw: &str) -> Result<DataType, String> {
    DataType::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = DataType::ALL.iter().map(|data_type| data_type.label()).collect();
        format!("unknown data type '{raw}' (expected one of {})", known.join(", "))
    })
}
