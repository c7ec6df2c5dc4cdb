use anyhow::{Context, Result};
use bxs_api::{BxsClient, HealthCheck};
use bxs_frontend::cli::{Cli, Commands};
use bxs_frontend::state::ViewState;
use bxs_frontend::{Dashboard, session, telemetry};
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();

    let cli = Cli::parse();
    let api = BxsClient::new(&cli.api_url)
        .with_context(|| format!("invalid --api-url {:?}", cli.api_url))?;
    info!(base_url = %api.base_url(), "using BXS API");

    if let Some(Commands::Health) = cli.command {
        match api.is_healthy().await {
            Ok(true) => {
                println!("ok");
                return Ok(());
            }
            Ok(false) => eprintln!("backend responded but is not healthy"),
            Err(e) => {
                error!(%e, "health probe failed");
                eprintln!("Failed to reach backend: {e}");
            }
        }
        std::process::exit(1);
    }

    let dashboard = Dashboard::with_state(api, ViewState::with_order_id(cli.order_id));

    if cli.order_ids.is_empty() {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        session::run_interactive(&dashboard, stdin).await
    } else {
        let mut stdout = std::io::stdout().lock();
        session::run_batch(&dashboard, &cli.order_ids, cli.json, &mut stdout).await
    }
}
