//! CSV export CLI command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use roster_core::export::csv::{export_file_name, to_csv};
use roster_core::view;

use crate::cli::ViewArgs;
use crate::state::AppState;

/// Write the projected view as CSV to `output`, or to
/// `<prefix>_<YYYY-MM-DD>.csv` in the current directory.
pub async fn export_csv(
    state: &AppState,
    args: &ViewArgs,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let query = args.to_query()?;
    let (csv, rows) = {
        let registry = state.registry.lock().await;
        let shown = view::project(registry.records(), &query);
        (to_csv(shown.iter().copied()), shown.len())
    };

    let path = output.unwrap_or_else(|| {
        let today = chrono::Utc::now().date_naive();
        PathBuf::from(export_file_name(&state.config.export.file_prefix, today))
    });

    tokio::fs::write(&path, &csv)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), rows, "contractors exported");

    if json {
        println!(
            "{}",
            serde_json::json!({"path": path.display().to_string(), "rows": rows})
        );
    } else {
        println!(
            "  {} Exported {} contractor{} to {}",
            style("✓").green().bold(),
            style(rows).bold(),
            if rows == 1 { "" } else { "s" },
            style(path.display()).cyan()
        );
    }

    Ok(())
}
