//! Build the settings of an endorser binary.
//!
//! ---
//! The configuration is layered, each step overriding the previous one:
//!
//! 1. the file at the path given by the `ENDORSER_CONFIG_PATH` environment
//!    variable, `base_config/config.toml` by default. This file is required.
//! 2. the file at `ENDORSER_CONFIG_OVERRIDE_PATH` (`config/config.toml` by
//!    default), if it exists.
//! 3. the per-user configuration directory of the application, if it exists.
//! 4. environment variables prefixed with `env_prefix`, nested keys separated
//!    by `__` (for example `ENDORSER_NODE_LEDGER__RPC_URL`).
//!
use crate::error::{ModelsError, ModelsResult};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Merge the settings, see the module documentation for the order.
pub fn build_endorser_settings<T: DeserializeOwned>(
    app_name: &str,
    env_prefix: &str,
) -> ModelsResult<T> {
    let config_path = std::env::var("ENDORSER_CONFIG_PATH")
        .unwrap_or_else(|_| "base_config/config.toml".to_string());
    build_endorser_settings_from(Path::new(&config_path), app_name, env_prefix)
}

/// Same as [`build_endorser_settings`] with an explicit base file.
pub fn build_endorser_settings_from<T: DeserializeOwned>(
    config_path: &Path,
    app_name: &str,
    env_prefix: &str,
) -> ModelsResult<T> {
    let mut builder = config::Config::builder()
        .add_source(config::File::from(config_path.to_path_buf()).required(true));

    let config_override_path = std::env::var("ENDORSER_CONFIG_OVERRIDE_PATH")
        .unwrap_or_else(|_| "config/config.toml".to_string());
    if Path::new(&config_override_path).is_file() {
        builder = builder.add_source(config::File::with_name(&config_override_path));
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "Endorser", app_name) {
        // Portable user config loading
        let user_config_path = proj_dirs.config_dir().join("config.toml");
        if user_config_path.is_file() {
            builder = builder.add_source(config::File::from(user_config_path));
        }
    }

    builder
        .add_source(
            config::Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .and_then(|settings| settings.try_deserialize())
        .map_err(|e| ModelsError::SettingsError(e.to_string()))
}
