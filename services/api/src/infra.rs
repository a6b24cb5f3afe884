use metrics_exporter_prometheus::PrometheusHandle;
use sme_credit::error::AppError;
use sme_credit::workflows::scoring::ScoringProfile;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read a borrower profile saved as JSON, using the same field names as the HTTP API.
pub(crate) fn load_profile(path: &Path) -> Result<ScoringProfile, AppError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
