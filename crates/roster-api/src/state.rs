//! Application state wiring the registry to its storage backend.
//!
//! AppState holds the concrete registry used by both CLI and REST API. The
//! registry is generic over the slot store; AppState pins it to the
//! configured infra backend.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use roster_core::registry::ContractorRegistry;
use roster_infra::config::load_config;
use roster_infra::filesystem::resolve_data_dir;
use roster_infra::slot::SlotBackend;
use roster_types::config::RosterConfig;

/// Concrete registry type pinned to the runtime-selected backend.
pub type ConcreteRegistry = ContractorRegistry<SlotBackend>;

/// Shared application state.
///
/// The registry sits behind an async mutex so every request runs its
/// registry operation to completion before the next one starts.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Mutex<ConcreteRegistry>>,
    pub config: Arc<RosterConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve the data directory, load `config.toml`, open the configured
    /// backend and load (or seed) the contractor list.
    pub async fn init(data_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let data_dir = data_dir.unwrap_or_else(resolve_data_dir);
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;
        let backend = SlotBackend::open(&data_dir, &config.storage).await?;

        Self::with_backend(backend, config, data_dir).await
    }

    /// Wire state around an already opened backend.
    pub async fn with_backend(
        backend: SlotBackend,
        config: RosterConfig,
        data_dir: PathBuf,
    ) -> anyhow::Result<Self> {
        let registry = ContractorRegistry::open(backend, config.storage.slot_key.clone()).await?;
        tracing::debug!(
            dir = %data_dir.display(),
            backend = %config.storage.backend,
            count = registry.records().len(),
            "application state ready"
        );

        Ok(Self {
            registry: Arc::new(Mutex::new(registry)),
            config: Arc::new(config),
            data_dir,
        })
    }
}
