//! CLI command definitions for the `roster` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod contractor;
pub mod export;
pub mod stats;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use roster_types::view::{RemarksFilter, SortDirection, SortField, SortState, ViewQuery};

/// Keep track of your contractors.
#[derive(Parser)]
#[command(name = "roster", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding the contractor slot and config.toml.
    #[arg(long, global = true, env = "ROSTER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new contractor.
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit an existing contractor. Omitted fields keep their current value.
    Edit {
        /// Contractor id.
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a contractor.
    #[command(alias = "rm")]
    Delete {
        /// Contractor id.
        id: String,

        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },

    /// List contractors.
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show details of a contractor.
    Show {
        /// Contractor id.
        id: String,
    },

    /// Export the listed contractors as CSV.
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// Output file (defaults to `<prefix>_<date>.csv` in the current directory).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summary counters and remark categories.
    Stats {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Content fields accepted by `add` and `edit`.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Contractor name.
    #[arg(long)]
    pub name: Option<String>,

    /// Contact number, e.g. "+880 17 1128 4718".
    #[arg(long)]
    pub contact: Option<String>,

    /// Address.
    #[arg(long)]
    pub address: Option<String>,

    /// Free-form remarks (work category, referrer, ...).
    #[arg(long)]
    pub remarks: Option<String>,
}

/// Search, filter and sort flags shared by `list`, `export` and `stats`.
#[derive(Args, Debug, Default)]
pub struct ViewArgs {
    /// Case-insensitive text matched against every field.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Remarks filter: `all`, `empty`, or text the remarks must contain.
    #[arg(short, long, default_value = "all")]
    pub filter: String,

    /// Sort column (serial, name, contact, address, remarks).
    #[arg(long, default_value = "serial")]
    pub sort: String,

    /// Sort descending.
    #[arg(long)]
    pub desc: bool,
}

impl ViewArgs {
    pub fn to_query(&self) -> anyhow::Result<ViewQuery> {
        let field = self.sort.parse::<SortField>().map_err(|e| anyhow::anyhow!(e))?;
        let direction = if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        let Ok(remarks) = self.filter.parse::<RemarksFilter>();

        Ok(ViewQuery {
            search: self.search.clone(),
            remarks,
            sort: SortState::new(field, direction),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_flags_build_query() {
        let cli = Cli::parse_from(["roster", "ls", "--search", "Ahmed", "--filter", "empty", "--sort", "name", "--desc"]);
        let Commands::List { view } = cli.command else {
            panic!("expected list command");
        };
        let query = view.to_query().unwrap();
        assert_eq!(query.search, "Ahmed");
        assert_eq!(query.remarks, RemarksFilter::Empty);
        assert_eq!(query.sort, SortState::new(SortField::Name, SortDirection::Desc));
    }

    #[test]
    fn test_default_view_args() {
        let cli = Cli::parse_from(["roster", "list"]);
        let Commands::List { view } = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(view.to_query().unwrap(), ViewQuery::default());
    }

    #[test]
    fn test_unknown_sort_field_is_rejected() {
        let view = ViewArgs {
            sort: "rating".to_string(),
            ..Default::default()
        };
        assert!(view.to_query().is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["roster", "show", "3", "--json", "--data-dir", "/tmp/r"]);
        assert!(cli.json);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/r")));
    }
}
