use crate::level_filter;
use crate::settings::Settings;
use endorser_models::config::{CATCH_UP_RESUME_WINDOW, ENDORSE_CONTRACT};
use endorser_time::EndorserTime;
use serial_test::serial;
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;

const BASE_CONFIG: &str = "base_config/config.toml";

#[test]
#[serial]
fn base_config_loads() {
    let settings = Settings::load(Some(Path::new(BASE_CONFIG))).unwrap();

    assert_eq!(settings.logging.level, 2);
    assert_eq!(settings.ledger.endorse_contract.as_str(), ENDORSE_CONTRACT);
    assert_eq!(settings.endorsement.resume_window, CATCH_UP_RESUME_WINDOW);
    let cfg = settings.endorsement_config();
    assert_eq!(cfg.account, settings.account.name);
    assert_eq!(cfg.endorse_interval, EndorserTime::from_millis(5_000));
    assert_eq!(cfg.check_interval, EndorserTime::from_millis(10_000));
    assert_eq!(cfg.retry_interval, EndorserTime::from_millis(3_000));
    assert!(settings.api.enabled);
}

#[test]
#[serial]
fn environment_overrides_files() {
    std::env::set_var("ENDORSER_NODE_LEDGER__RPC_URL", "http://10.0.0.2:8888");
    std::env::set_var("ENDORSER_NODE_ENDORSEMENT__ENDORSE_INTERVAL", "2500");
    let settings = Settings::load(Some(Path::new(BASE_CONFIG)));
    std::env::remove_var("ENDORSER_NODE_LEDGER__RPC_URL");
    std::env::remove_var("ENDORSER_NODE_ENDORSEMENT__ENDORSE_INTERVAL");

    let settings = settings.unwrap();
    assert_eq!(settings.ledger.rpc_url, "http://10.0.0.2:8888");
    assert_eq!(
        settings.endorsement.endorse_interval,
        EndorserTime::from_millis(2_500)
    );
}

#[test]
#[serial]
fn invalid_account_name_is_rejected() {
    std::env::set_var("ENDORSER_NODE_ACCOUNT__NAME", "Not.Valid");
    let settings = Settings::load(Some(Path::new(BASE_CONFIG)));
    std::env::remove_var("ENDORSER_NODE_ACCOUNT__NAME");

    assert!(settings.is_err());
}

#[test]
fn logging_levels() {
    assert_eq!(level_filter(0), LevelFilter::ERROR);
    assert_eq!(level_filter(2), LevelFilter::INFO);
    assert_eq!(level_filter(4), LevelFilter::TRACE);
    assert_eq!(level_filter(9), LevelFilter::TRACE);
}
