//! Endorser node: endorses upstream chain blocks on the ledger with a validator account.
#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

use crate::credentials::{
    unlock_account, CredentialProvider, InteractiveCredentials, PreconfiguredCredentials,
};
use crate::settings::Settings;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use crossbeam_channel::bounded;
use dialoguer::Password;
use endorser_api::API;
use endorser_endorsement_exports::{EndorsementChannels, LedgerApi};
use endorser_endorsement_worker::start_endorsement_worker;
use endorser_keystore::{KeyPair, Keystore};
use endorser_models::account::AccountName;
use endorser_sdk::{BitcoinRpcClient, BlockingBitcoinClient, BlockingLedgerClient, LedgerRpcClient};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::filter::{filter_fn, LevelFilter};

mod credentials;
mod settings;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Base configuration file, overrides `ENDORSER_CONFIG_PATH`
    #[arg(long)]
    config: Option<PathBuf>,
    /// Read the keystore password from this environment variable instead of prompting
    #[arg(long, value_name = "VAR")]
    password_env: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the endorser (default)
    Run,
    /// Generate a key pair and write it to a new encrypted keystore
    NewKeystore {
        /// Validator account the key belongs to
        #[arg(long)]
        account: AccountName,
        /// Keystore file to create, `account.keystore_path` by default
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Maps the `logging.level` setting to a tracing level filter.
pub(crate) fn level_filter(level: usize) -> LevelFilter {
    match level {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn setup_logging(level: usize) {
    use tracing_subscriber::prelude::*;
    let tracing_layer = tracing_subscriber::fmt::layer()
        .with_filter(filter_fn(|metadata| metadata.target().starts_with("endorser")))
        .with_filter(level_filter(level));
    tracing_subscriber::registry().with(tracing_layer).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref()).context("could not load settings")?;
    setup_logging(settings.logging.level);

    // Setup panic handlers,
    // and when a panic occurs,
    // run default handler,
    // and then shutdown.
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        default_panic(info);
        std::process::exit(1);
    }));

    match args.command.unwrap_or(Command::Run) {
        Command::Run => run(settings, args.password_env),
        Command::NewKeystore { account, output } => new_keystore(
            account,
            output.unwrap_or_else(|| settings.account.keystore_path.clone()),
        ),
    }
}

fn new_keystore(account: AccountName, path: PathBuf) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    let password = Password::new()
        .with_prompt("Enter new keystore password")
        .with_confirmation("Confirm password", "Passwords mismatching")
        .interact()
        .context("password reading failed")?;
    let keypair = KeyPair::generate();
    Keystore::create(account.clone(), &keypair, &password)
        .and_then(|keystore| keystore.save(&path))
        .with_context(|| format!("could not write keystore {}", path.display()))?;
    println!(
        "keystore for {} written to {}\npublic key: {}",
        account,
        path.display(),
        keypair.get_public_key()
    );
    Ok(())
}

fn run(settings: Settings, password_env: Option<String>) -> Result<()> {
    info!("endorser node starting for {}", settings.account.name);

    // interrupt signal listener
    let stop_requested = Arc::new(AtomicBool::new(false));
    let (stop_tx, stop_rx) = bounded::<()>(1);
    {
        let stop_requested = stop_requested.clone();
        ctrlc::set_handler(move || {
            stop_requested.store(true, Ordering::SeqCst);
            // a second signal finds the channel full
            let _ = stop_tx.try_send(());
        })
        .context("could not set the interrupt handler")?;
    }

    let mut provider: Box<dyn CredentialProvider> = match &password_env {
        Some(var_name) => Box::new(PreconfiguredCredentials::from_env(var_name)),
        None => Box::new(InteractiveCredentials),
    };
    let identity = unlock_account(
        provider.as_mut(),
        &settings.account.keystore_path,
        settings.account.password_attempts,
        &stop_requested,
    )?;
    if identity.account_name != settings.account.name {
        bail!(
            "keystore holds the key of {}, configured account is {}",
            identity.account_name,
            settings.account.name
        );
    }

    let tokio_rt = tokio::runtime::Builder::new_multi_thread()
        .thread_name_fn(|| {
            static ATOMIC_ID: AtomicUsize = AtomicUsize::new(0);
            let id = ATOMIC_ID.fetch_add(1, Ordering::SeqCst);
            format!("tokio-endorser-{}", id)
        })
        .enable_all()
        .build()
        .context("could not build the tokio runtime")?;

    let (block_source, ledger) = {
        let _guard = tokio_rt.enter();
        let block_source = BitcoinRpcClient::from_url(
            &settings.bitcoin.rpc_url,
            settings.bitcoin.request_timeout,
        )
        .context("could not create the upstream chain RPC client")?;
        let ledger = LedgerRpcClient::from_url(
            &settings.ledger.rpc_url,
            settings.ledger.request_timeout,
            identity,
        )
        .context("could not create the ledger RPC client")?;
        (
            BlockingBitcoinClient::new(block_source, tokio_rt.handle().clone()),
            BlockingLedgerClient::new(
                ledger,
                settings.ledger.endorse_contract.clone(),
                tokio_rt.handle().clone(),
            ),
        )
    };

    let chain_state = ledger
        .get_chain_state()
        .context("ledger unreachable at startup")?;
    info!(
        "ledger reachable, irreversible height {}",
        chain_state.irreversible_height
    );

    let (mut endorsement_manager, endorsement_controller) = start_endorsement_worker(
        settings.endorsement_config(),
        EndorsementChannels {
            block_source: Arc::new(block_source),
            ledger: Arc::new(ledger),
        },
    );

    let api_handle = if settings.api.enabled {
        let served = tokio_rt.block_on(API::new(endorsement_controller.clone()).serve(&settings.api));
        match served {
            Ok(handle) => Some(handle),
            Err(err) => {
                endorsement_manager.stop();
                return Err(err).context("could not start the API");
            }
        }
    } else {
        None
    };

    if stop_rx.recv().is_err() {
        warn!("interrupt handler dropped, stopping");
    }
    info!("interrupt signal received, stopping");

    if let Some(handle) = api_handle {
        tokio_rt.block_on(handle.stop());
    }
    endorsement_manager.stop();
    let status = endorsement_controller.get_status();
    match status.last_submission_time {
        Some(time) => info!(
            "endorser node stopped, last endorsement at height {} on {}",
            status.last_endorse_height,
            time.format_instant()
        ),
        None => info!("endorser node stopped, nothing endorsed"),
    }
    Ok(())
}
