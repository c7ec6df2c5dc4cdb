use bxs_api::{ApiError, BxsClient};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::metrics;
use crate::state::{HealthSnapshot, ViewState};

/// Startup health fetch failure, as shown to the user.
#[derive(Debug, thiserror::Error)]
#[error("Failed to reach backend: {0}")]
pub struct HealthError(#[from] pub ApiError);

/// Fetch `/health` once and record the outcome.
///
/// Any decodable body counts as success, whatever the status code. Transport
/// and decode failures set `health_error`; the snapshot stays absent.
pub async fn check_health(api: &BxsClient, state: &watch::Sender<ViewState>) {
    match api.health().await {
        Ok(body) => {
            info!(base_url = %api.base_url(), "backend health received");
            metrics::increment_health_checks("ok");
            state.send_modify(|s| s.health = Some(HealthSnapshot::new(body)));
        }
        Err(e) => {
            let err = HealthError::from(e);
            warn!(base_url = %api.base_url(), %err, "backend health check failed");
            metrics::increment_health_checks("error");
            state.send_modify(|s| s.health_error = Some(err.to_string()));
        }
    }
}
