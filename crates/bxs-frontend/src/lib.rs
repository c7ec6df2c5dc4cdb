pub mod cli;
pub mod dashboard;
pub mod health_monitor;
pub mod metrics;
pub mod order_lookup;
pub mod render;
pub mod session;
pub mod state;
pub mod telemetry;

pub use dashboard::Dashboard;
pub use state::{HealthSnapshot, RecordData, ViewState};
