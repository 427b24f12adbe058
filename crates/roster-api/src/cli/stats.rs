//! Summary counters for the contractor list.

use anyhow::Result;
use console::style;

use roster_core::view;

use crate::cli::ViewArgs;
use crate::state::AppState;

/// Print total / displayed / with-remarks counters and the remark categories.
pub async fn show_stats(state: &AppState, args: &ViewArgs, json: bool) -> Result<()> {
    let query = args.to_query()?;
    let registry = state.registry.lock().await;
    let records = registry.records();
    let displayed = view::project(records, &query).len();
    let stats = view::stats(records, displayed);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!();
    println!("  {}", style("Contractors").cyan().bold());
    println!();
    println!("  {}       {}", style("Total:").bold(), stats.total);
    println!("  {}   {}", style("Displayed:").bold(), stats.displayed);
    println!("  {} {}", style("With remarks:").bold(), stats.with_remarks);
    println!(
        "  {}     {}",
        style("Backend:").bold(),
        style(&state.config.storage.backend).dim()
    );
    println!(
        "  {}    {}",
        style("Data dir:").bold(),
        style(state.data_dir.display()).dim()
    );
    if registry.is_dirty() {
        println!(
            "  {} unsaved changes",
            style("!").yellow().bold()
        );
    }
    println!();

    if !stats.remark_categories.is_empty() {
        println!("  {}", style("── Remark categories ──").dim());
        for category in &stats.remark_categories {
            println!("    {} {}", style("•").dim(), category);
        }
        println!();
    }

    Ok(())
}
