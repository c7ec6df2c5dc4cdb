use std::fmt::Write;

use crate::state::ViewState;

const CHECKING_PLACEHOLDER: &str = "Checking...";

/// Render the view as plain text.
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();

    out.push_str("== Backend Health ==\n");
    match &state.health {
        Some(snapshot) => out.push_str(&snapshot.to_pretty_json()),
        None => out.push_str(CHECKING_PLACEHOLDER),
    }
    out.push_str("\n\n== Order Lookup ==\n");
    let _ = writeln!(out, "Order ID: {}", state.order_id);

    if let Some(error) = state.error() {
        let _ = writeln!(out, "Error: {error}");
    }

    if let Some(record) = &state.order {
        out.push_str("\n-- Order Details --\n");
        let rows = record.rows();
        let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
        for (key, value) in rows {
            let _ = writeln!(out, "{key:<width$}  {value}");
        }
    }

    out
}
