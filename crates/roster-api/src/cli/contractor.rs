//! Contractor CLI commands: add, edit, delete, list, show.

use anyhow::{Context, Result};
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};

use roster_core::view;
use roster_types::contractor::{Contractor, ContractorId, ContractorInput};
use roster_types::error::ContractorError;

use crate::cli::{FieldArgs, ViewArgs};
use crate::state::{AppState, ConcreteRegistry};

/// Add a new contractor via prompts or one-shot flags.
///
/// # Examples
///
/// ```bash
/// # Prompt for name and contact number
/// roster add
///
/// # One-shot with flags
/// roster add --name "Harbor Steel" --contact "+880 15 0000 1111" --remarks "Steel work"
/// ```
pub async fn add_contractor(state: &AppState, fields: FieldArgs, json: bool) -> Result<()> {
    let name = match fields.name {
        Some(n) => n,
        None if json => String::new(),
        None => Input::<String>::new()
            .with_prompt("Name")
            .interact_text()?,
    };

    let contact_number = match fields.contact {
        Some(c) => c,
        None if json => String::new(),
        None => Input::<String>::new()
            .with_prompt("Contact number")
            .interact_text()?,
    };

    let input = ContractorInput::new(
        name,
        contact_number,
        fields.address.unwrap_or_default(),
        fields.remarks.unwrap_or_default(),
    );

    let spinner = spinner("Saving contractor...", json)?;
    let mut registry = state.registry.lock().await;
    let result = registry.add(input).await.map(|records| records.last().cloned());
    spinner.finish_and_clear();

    let created = match result {
        Ok(Some(created)) => created,
        Ok(None) => anyhow::bail!("contractor list is empty after add"),
        Err(e) => return Err(report_validation(e, json)),
    };
    ensure_saved(&mut registry).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&created)?);
        return Ok(());
    }

    println!();
    println!("  {} Contractor added successfully!", style("✓").green().bold());
    println!();
    print_details(&created);
    println!();

    Ok(())
}

/// Edit an existing contractor. Flags that are not given keep the stored value.
pub async fn edit_contractor(state: &AppState, id: &str, fields: FieldArgs, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    let mut registry = state.registry.lock().await;

    let input = merged_input(registry.get(id)?, fields);

    let spinner = spinner("Updating contractor...", json)?;
    let result = registry.update(id, input).await.map(|_| ());
    spinner.finish_and_clear();

    if let Err(e) = result {
        return Err(report_validation(e, json));
    }
    ensure_saved(&mut registry).await?;
    let updated = registry.get(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(updated)?);
        return Ok(());
    }

    println!();
    println!("  {} Contractor updated.", style("✓").green().bold());
    println!();
    print_details(updated);
    println!();

    Ok(())
}

/// Delete a contractor with confirmation. A missing id removes nothing.
pub async fn delete_contractor(state: &AppState, id: &str, force: bool, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    let mut registry = state.registry.lock().await;

    let Ok(existing) = registry.get(id) else {
        if json {
            println!("{}", serde_json::json!({"deleted": false, "id": id}));
        } else {
            println!(
                "  {} No contractor with id {}, nothing removed.",
                style("i").blue().bold(),
                style(id).yellow()
            );
        }
        return Ok(());
    };
    let name = existing.name.clone();

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete contractor '{}'?",
                style(&name).red().bold()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    let spinner = spinner(&format!("Deleting {name}..."), json)?;
    let remaining = registry.remove(id).await.len();
    spinner.finish_and_clear();
    ensure_saved(&mut registry).await?;

    if json {
        println!("{}", serde_json::json!({"deleted": true, "id": id, "remaining": remaining}));
    } else {
        println!(
            "  {} Contractor '{}' deleted. {} remaining.",
            style("✓").red().bold(),
            name,
            style(remaining).bold()
        );
    }

    Ok(())
}

/// List contractors in a table, honoring search, filter and sort flags.
pub async fn list_contractors(state: &AppState, args: &ViewArgs, json: bool) -> Result<()> {
    let query = args.to_query()?;
    let registry = state.registry.lock().await;
    let records = registry.records();

    let shown = view::project(records, &query);
    let stats = view::stats(records, shown.len());

    if json {
        let out = serde_json::json!({
            "contractors": shown,
            "stats": stats,
            "sort": query.sort,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!();
        if records.is_empty() {
            println!(
                "  {} No contractors yet. Add one with: {}",
                style("i").blue().bold(),
                style("roster add").yellow()
            );
        } else {
            println!(
                "  {} No contractors match the current search or filter.",
                style("i").blue().bold()
            );
        }
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("S.No").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Contact No").fg(Color::White),
        Cell::new("Address").fg(Color::White),
        Cell::new("Remarks").fg(Color::White),
        Cell::new("ID").fg(Color::White),
    ]);

    for contractor in &shown {
        let remarks_cell = if contractor.has_remarks() {
            Cell::new(&contractor.remarks)
        } else {
            Cell::new("-").fg(Color::DarkGrey)
        };

        table.add_row(vec![
            Cell::new(contractor.serial),
            Cell::new(&contractor.name).fg(Color::Cyan),
            Cell::new(&contractor.contact_number),
            Cell::new(&contractor.address),
            remarks_cell,
            Cell::new(contractor.id).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  Showing {} of {} contractors  {}",
        style(stats.displayed).bold(),
        style(stats.total).bold(),
        style(format!("sorted by {} {}", query.sort.field, query.sort.direction)).dim()
    );
    println!();

    Ok(())
}

/// Show every field of one contractor.
pub async fn show_contractor(state: &AppState, id: &str, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    let registry = state.registry.lock().await;
    let contractor = registry.get(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(contractor)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(&contractor.name).cyan().bold());
    println!();
    println!("  {}", style("── Details ──").dim());
    print_details(contractor);
    println!();

    Ok(())
}

/// Overlay the given flags on the stored record's content fields.
fn merged_input(current: &Contractor, fields: FieldArgs) -> ContractorInput {
    let stored = ContractorInput::from(current);
    ContractorInput {
        name: fields.name.unwrap_or(stored.name),
        contact_number: fields.contact.unwrap_or(stored.contact_number),
        address: fields.address.unwrap_or(stored.address),
        remarks: fields.remarks.unwrap_or(stored.remarks),
    }
}

pub(crate) fn parse_id(raw: &str) -> Result<ContractorId> {
    raw.parse::<ContractorId>()
        .with_context(|| format!("invalid contractor id '{raw}'"))
}

/// Spinner shown around registry commits; hidden in JSON mode.
pub(crate) fn spinner(message: &str, json: bool) -> Result<ProgressBar> {
    if json {
        return Ok(ProgressBar::hidden());
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    Ok(spinner)
}

/// Retry a failed slot write; the command fails if the list is still unsaved.
async fn ensure_saved(registry: &mut ConcreteRegistry) -> Result<()> {
    if registry.is_dirty() {
        registry
            .flush()
            .await
            .context("contractor list could not be saved")?;
    }
    Ok(())
}

/// Print per-field validation messages before handing the error back.
fn report_validation(err: ContractorError, json: bool) -> anyhow::Error {
    let fields = err.field_errors();
    if !fields.is_empty() {
        if json {
            println!("{}", serde_json::json!({ "errors": fields }));
        } else {
            println!();
            for field in fields {
                println!(
                    "  {} {}  {}",
                    style("✗").red().bold(),
                    style(format!("{}:", field.field)).bold(),
                    field.message
                );
            }
            println!();
        }
    }
    err.into()
}

fn print_details(contractor: &Contractor) {
    println!("  {}       {}", style("S.No:").bold(), contractor.serial);
    println!("  {}       {}", style("Name:").bold(), style(&contractor.name).cyan());
    println!("  {}    {}", style("Contact:").bold(), contractor.contact_number);
    println!("  {}    {}", style("Address:").bold(), or_dash(&contractor.address));
    println!("  {}    {}", style("Remarks:").bold(), or_dash(&contractor.remarks));
    println!(
        "  {}         {}",
        style("ID:").bold(),
        style(contractor.id).dim()
    );
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_trims() {
        assert_eq!(parse_id(" 7 ").unwrap(), ContractorId(7));
    }

    #[test]
    fn test_parse_id_rejects_text() {
        let err = parse_id("seven").unwrap_err();
        assert!(err.to_string().contains("invalid contractor id 'seven'"));
    }

    fn stored() -> Contractor {
        Contractor {
            id: ContractorId(12),
            serial: 3,
            name: "Harbor Steel".to_string(),
            contact_number: "+880 15 0000 1111".to_string(),
            address: "Chittagong".to_string(),
            remarks: "Steel work".to_string(),
        }
    }

    #[test]
    fn test_merged_input_keeps_fields_not_given() {
        let fields = FieldArgs {
            remarks: Some("Welding".to_string()),
            ..Default::default()
        };
        let input = merged_input(&stored(), fields);
        assert_eq!(
            input,
            ContractorInput::new("Harbor Steel", "+880 15 0000 1111", "Chittagong", "Welding")
        );
    }

    #[test]
    fn test_merged_input_without_flags_is_unchanged() {
        let input = merged_input(&stored(), FieldArgs::default());
        assert_eq!(input, ContractorInput::from(&stored()));
    }

    #[test]
    fn test_merged_input_allows_clearing_with_empty_value() {
        let fields = FieldArgs {
            name: Some("Harbor Steel Ltd".to_string()),
            address: Some(String::new()),
            ..Default::default()
        };
        let input = merged_input(&stored(), fields);
        assert_eq!(input.name, "Harbor Steel Ltd");
        assert_eq!(input.address, "");
        assert_eq!(input.contact_number, "+880 15 0000 1111");
        assert_eq!(input.remarks, "Steel work");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash("  "), "-");
        assert_eq!(or_dash("Mirpur"), "Mirpur");
    }
}
