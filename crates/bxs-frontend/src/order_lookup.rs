use std::time::Instant;

use bxs_api::{ApiError, BxsClient};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::metrics;
use crate::state::{RecordData, ViewState};

/// Failure of a single order lookup attempt.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The service answered with a non-success status. The status and body
    /// are dropped; a 500 reads the same as a 404.
    #[error("Order {order_id} not found")]
    NotFound { order_id: String },
    #[error(transparent)]
    Api(ApiError),
}

impl LookupError {
    pub fn from_api(order_id: &str, err: ApiError) -> Self {
        match err {
            ApiError::ApiResponse { status, .. } => {
                debug!(%order_id, status, "order lookup returned non-success status");
                Self::NotFound {
                    order_id: order_id.to_string(),
                }
            }
            other => Self::Api(other),
        }
    }

    fn metric_label(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Api(_) => "error",
        }
    }
}

/// Start a new attempt: clear the previous record and lookup error and claim
/// the next attempt number. Returns the attempt number and the identifier
/// to request.
pub(crate) fn begin_attempt(state: &watch::Sender<ViewState>) -> (u64, String) {
    let mut started = (0, String::new());
    state.send_modify(|s| {
        s.attempt += 1;
        s.order = None;
        s.lookup_error = None;
        started = (s.attempt, s.order_id.clone());
    });
    started
}

/// Request `/orders/{order_id}` and record the outcome if `attempt` is still
/// the current attempt. Exactly one of `order` or `lookup_error` is set.
pub(crate) async fn run_attempt(
    api: &BxsClient,
    state: &watch::Sender<ViewState>,
    attempt: u64,
    order_id: String,
) {
    let start = Instant::now();
    let outcome = api
        .order(&order_id)
        .await
        .map_err(|e| LookupError::from_api(&order_id, e));
    metrics::observe_order_lookup_duration(start.elapsed().as_secs_f64());

    let label = match &outcome {
        Ok(_) => "found",
        Err(err) => err.metric_label(),
    };
    if let Err(err) = &outcome {
        warn!(%order_id, attempt, %err, "order lookup failed");
    }

    let applied = state.send_if_modified(move |s| {
        if s.attempt != attempt {
            return false;
        }
        match outcome {
            Ok(body) => s.order = Some(RecordData::new(body)),
            Err(err) => s.lookup_error = Some(err.to_string()),
        }
        true
    });

    if applied {
        info!(%order_id, attempt, result = label, "order lookup resolved");
        metrics::increment_order_lookups(label);
    } else {
        debug!(%order_id, attempt, "discarding superseded order lookup");
        metrics::increment_order_lookups("superseded");
    }
}
