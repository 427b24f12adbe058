//! Roster CLI and REST API entry point.
//!
//! Binary name: `roster`
//!
//! Parses CLI arguments, opens the configured storage backend and the
//! contractor registry, then dispatches to the appropriate command handler
//! or starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use roster_observe::tracing_setup::{init_tracing, otel_requested, shutdown_tracing, verbosity_filter};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), otel_requested())
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "roster", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.data_dir.clone()).await?;

    match cli.command {
        Commands::Add { fields } => {
            cli::contractor::add_contractor(&state, fields, cli.json).await?;
        }

        Commands::Edit { id, fields } => {
            cli::contractor::edit_contractor(&state, &id, fields, cli.json).await?;
        }

        Commands::Delete { id, force } => {
            cli::contractor::delete_contractor(&state, &id, force, cli.json).await?;
        }

        Commands::List { view } => {
            cli::contractor::list_contractors(&state, &view, cli.json).await?;
        }

        Commands::Show { id } => {
            cli::contractor::show_contractor(&state, &id, cli.json).await?;
        }

        Commands::Export { view, output } => {
            cli::export::export_csv(&state, &view, output, cli.json).await?;
        }

        Commands::Stats { view } => {
            cli::stats::show_stats(&state, &view, cli.json).await?;
        }

        Commands::Serve { port, host } => {
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} Roster API listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let registry = state.registry.clone();
            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            let mut registry = registry.lock().await;
            if registry.is_dirty() {
                tracing::warn!("unsaved changes at shutdown, retrying write");
                registry.flush().await?;
            }

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
