use serde_json::Value;

use crate::client::{ApiError, HttpClient};
use crate::health::HealthCheck;

const HEALTH_PATH: &str = "health";
const ORDERS_PATH: &str = "orders";

/// Client for the BXS ETL API.
///
/// Read-only: `GET /health` reports liveness and `GET /orders/{id}` returns
/// the summary row for a single order. Both bodies are kept as raw JSON.
#[derive(Debug, Clone)]
pub struct BxsClient {
    http: HttpClient,
}

impl BxsClient {
    /// Create a new BXS API client.
    ///
    /// `base_url` should be the root URL (e.g. `http://localhost:8000`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            http: HttpClient::new(base_url)?,
        })
    }

    /// GET `/health`. The body is accepted regardless of status code.
    pub async fn health(&self) -> Result<Value, ApiError> {
        self.http.get_any_status(HEALTH_PATH).await
    }

    /// GET `/orders/{order_id}`.
    ///
    /// `order_id` is joined into the path as given; the URL parser applies
    /// its usual percent-encoding and nothing else.
    pub async fn order(&self, order_id: &str) -> Result<Value, ApiError> {
        self.http
            .get(&format!("{ORDERS_PATH}/{order_id}"))
            .await
    }

    pub fn base_url(&self) -> &url::Url {
        self.http.base_url()
    }
}

impl HealthCheck for BxsClient {
    async fn is_healthy(&self) -> Result<bool, ApiError> {
        let body = self.health().await?;
        Ok(body.get("status").and_then(Value::as_str) == Some("ok"))
    }
}
