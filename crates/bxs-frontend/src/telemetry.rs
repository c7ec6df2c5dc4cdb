use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber: JSON lines on stderr, so stdout carries
/// only the rendered view.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bxs_frontend=warn,bxs_api=warn")),
        )
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .init();
}
