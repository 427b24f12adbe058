//! Configuration loader for Roster.
//!
//! Reads `config.toml` from the data directory (`~/.roster/` by default) and
//! deserializes it into [`RosterConfig`]. Falls back to defaults when the
//! file is missing, malformed, or names an unusable slot key.

use std::path::Path;

use roster_types::config::RosterConfig;

pub const CONFIG_FILE: &str = "config.toml";

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`RosterConfig::default()`].
/// - If the file exists but fails to parse (including an unknown
///   `storage.backend`) or its `storage.slot_key` is not a plain name, logs a
///   warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_config(data_dir: &Path) -> RosterConfig {
    let config_path = data_dir.join(CONFIG_FILE);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return RosterConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return RosterConfig::default();
        }
    };

    match toml::from_str::<RosterConfig>(&content) {
        Ok(config) => match config.storage.validate() {
            Ok(()) => config,
            Err(reason) => {
                tracing::warn!("Ignoring {}: {reason}, using defaults", config_path.display());
                RosterConfig::default()
            }
        },
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            RosterConfig::default()
        }
    }
}
