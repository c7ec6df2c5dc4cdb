use clap::{Parser, Subcommand};

use crate::state::DEFAULT_ORDER_ID;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Parser)]
#[command(
    name = "bxs-frontend",
    about = "Terminal frontend for the BXS ETL API: backend health and order lookup"
)]
pub struct Cli {
    /// Base URL of the BXS ETL API.
    #[arg(long, env = "BXS_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Identifier the lookup starts with in interactive mode.
    #[arg(long, default_value = DEFAULT_ORDER_ID)]
    pub order_id: String,

    /// Print the final state as JSON instead of text (batch mode only).
    #[arg(long)]
    pub json: bool,

    /// Look these orders up one after another, print the result and exit.
    /// Without any, read identifiers interactively from stdin.
    #[arg(value_name = "ORDER_ID")]
    pub order_ids: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe the backend; exit 0 when it reports `"status": "ok"`.
    Health,
}
