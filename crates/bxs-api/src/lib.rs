mod bxs;
mod client;
mod health;

pub use bxs::BxsClient;
pub use client::{ApiError, HttpClient};
pub use health::HealthCheck;
