//! Drivers that connect a [`Dashboard`] to a terminal.

use std::io::Write;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info};

use crate::dashboard::Dashboard;
use crate::{metrics, render};

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Look up the current identifier.
    Fetch,
    /// Replace the identifier, then look it up.
    FetchId(String),
    Show,
    Metrics,
    Quit,
}

impl Input {
    /// Commands are matched on the trimmed line; an identifier is kept
    /// exactly as typed.
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "" => Self::Fetch,
            ":show" => Self::Show,
            ":metrics" => Self::Metrics,
            ":quit" | ":q" => Self::Quit,
            _ => Self::FetchId(line.to_string()),
        }
    }
}

/// Outcome of a flow task. A superseded lookup is cancelled, which is not a
/// failure; a panic is.
fn flow_result(result: Result<(), JoinError>, flow: &str) -> anyhow::Result<()> {
    match result {
        Err(e) if e.is_cancelled() => {
            debug!(flow, "task was superseded");
            Ok(())
        }
        other => other.with_context(|| format!("{flow} task failed")),
    }
}

/// Wait for the health fetch, look each identifier up in turn, then write
/// the final view to `out`.
pub async fn run_batch<W: Write>(
    dashboard: &Dashboard,
    order_ids: &[String],
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    if let Some(health) = dashboard.start() {
        health.await.context("health check task failed")?;
    }
    for order_id in order_ids {
        dashboard.set_order_id(order_id.as_str());
        // Each attempt is awaited, so none is ever superseded here.
        dashboard
            .fetch_order()
            .await
            .context("order lookup task failed")?;
        info!(%order_id, "batch lookup done");
    }

    let state = dashboard.snapshot();
    if json {
        serde_json::to_writer_pretty(&mut *out, &state)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render::render(&state))?;
    }
    Ok(())
}

/// Read commands from `input` until EOF or `:quit`, re-rendering to stdout
/// after every state change.
///
/// Before returning, the health fetch and the latest lookup are awaited and
/// their final state change is rendered.
pub async fn run_interactive<R>(dashboard: &Dashboard, input: R) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut rx = dashboard.subscribe();
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
    let renderer = tokio::spawn(async move {
        print_view(&render::render(&rx.borrow_and_update()));
        loop {
            tokio::select! {
                biased;
                changed = rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let view = render::render(&rx.borrow_and_update());
                    println!();
                    print_view(&view);
                }
                _ = &mut stop_rx => break,
            }
        }
    });

    let health = dashboard.start();
    let mut pending: Option<JoinHandle<()>> = None;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match Input::parse(&line) {
            Input::Fetch => {
                pending = Some(dashboard.fetch_order());
            }
            Input::FetchId(order_id) => {
                dashboard.set_order_id(order_id);
                pending = Some(dashboard.fetch_order());
            }
            Input::Show => println!("\n{}", render::render(&dashboard.snapshot())),
            Input::Metrics => print!("{}", metrics::gather_text()),
            Input::Quit => break,
        }
    }

    debug!("interactive session ended, waiting for in-flight requests");
    if let Some(health) = health {
        flow_result(health.await, "health check")?;
    }
    if let Some(pending) = pending {
        flow_result(pending.await, "order lookup")?;
    }

    let _ = stop_tx.send(());
    renderer.await.context("renderer task failed")?;
    Ok(())
}

fn print_view(view: &str) {
    print!("{view}");
    let _ = std::io::stdout().flush();
}
