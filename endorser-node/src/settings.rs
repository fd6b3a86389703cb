//! Build here the node settings from the configuration files, see
//! `endorser_models::config::build_endorser_settings` for the layering.

use endorser_api::APIConfig;
use endorser_endorsement_exports::EndorsementConfig;
use endorser_models::account::AccountName;
use endorser_models::config::{build_endorser_settings, build_endorser_settings_from};
use endorser_models::error::ModelsResult;
use endorser_time::EndorserTime;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application name, used for the per-user configuration directory.
pub const APP_NAME: &str = "endorser-node";
/// Prefix of the environment variables overriding the configuration files.
pub const ENV_PREFIX: &str = "ENDORSER_NODE";

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct LoggingSettings {
    pub level: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AccountSettings {
    pub name: AccountName,
    pub keystore_path: PathBuf,
    /// 0 for unbounded
    pub password_attempts: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BitcoinSettings {
    pub rpc_url: String,
    pub request_timeout: EndorserTime,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LedgerSettings {
    pub rpc_url: String,
    pub endorse_contract: AccountName,
    pub request_timeout: EndorserTime,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EndorsementSettings {
    pub endorse_interval: EndorserTime,
    pub check_interval: EndorserTime,
    pub retry_interval: EndorserTime,
    pub resume_window: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub account: AccountSettings,
    pub bitcoin: BitcoinSettings,
    pub ledger: LedgerSettings,
    pub endorsement: EndorsementSettings,
    pub api: APIConfig,
}

impl Settings {
    /// Loads the settings, from `config_path` instead of `ENDORSER_CONFIG_PATH` when given.
    pub fn load(config_path: Option<&Path>) -> ModelsResult<Settings> {
        match config_path {
            Some(path) => build_endorser_settings_from(path, APP_NAME, ENV_PREFIX),
            None => build_endorser_settings(APP_NAME, ENV_PREFIX),
        }
    }

    pub fn endorsement_config(&self) -> EndorsementConfig {
        EndorsementConfig {
            account: self.account.name.clone(),
            endorse_contract: self.ledger.endorse_contract.clone(),
            endorse_interval: self.endorsement.endorse_interval,
            check_interval: self.endorsement.check_interval,
            retry_interval: self.endorsement.retry_interval,
            resume_window: self.endorsement.resume_window,
        }
    }
}
