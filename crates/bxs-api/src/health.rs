use crate::client::ApiError;

/// Uniform health-check interface for service clients.
pub trait HealthCheck: Send + Sync {
    /// Returns `Ok(true)` if the service is healthy, `Ok(false)` if it
    /// responded but reported an unhealthy state, or `Err` on connection failure.
    fn is_healthy(&self) -> impl std::future::Future<Output = Result<bool, ApiError>> + Send;
}
