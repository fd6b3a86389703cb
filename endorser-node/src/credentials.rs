//! Keystore password sources and the unlock loop.

use anyhow::{bail, Context};
use dialoguer::Password;
use endorser_keystore::{load_account_identity, AccountIdentity};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};
use zeroize::Zeroizing;

/// Source of the keystore password.
pub trait CredentialProvider {
    /// Password for unlock attempt number `attempt` (starting at 1).
    /// `None` means no more password is available.
    fn password(&mut self, attempt: u32) -> anyhow::Result<Option<Zeroizing<String>>>;
}

/// Asks the operator on the terminal.
pub struct InteractiveCredentials;

impl CredentialProvider for InteractiveCredentials {
    fn password(&mut self, attempt: u32) -> anyhow::Result<Option<Zeroizing<String>>> {
        let prompt = if attempt == 1 {
            "Enter keystore password".to_string()
        } else {
            format!("Wrong password, enter keystore password (attempt {})", attempt)
        };
        let password = Password::new()
            .with_prompt(prompt)
            .interact()
            .context("password reading failed")?;
        Ok(Some(Zeroizing::new(password)))
    }
}

/// Reads the password from an environment variable, once.
pub struct PreconfiguredCredentials {
    var_name: String,
    used: bool,
}

impl PreconfiguredCredentials {
    pub fn from_env(var_name: &str) -> Self {
        PreconfiguredCredentials {
            var_name: var_name.to_string(),
            used: false,
        }
    }
}

impl CredentialProvider for PreconfiguredCredentials {
    fn password(&mut self, _attempt: u32) -> anyhow::Result<Option<Zeroizing<String>>> {
        if std::mem::replace(&mut self.used, true) {
            return Ok(None);
        }
        let password = std::env::var(&self.var_name)
            .with_context(|| format!("could not read password from ${}", self.var_name))?;
        Ok(Some(Zeroizing::new(password)))
    }
}

/// Decrypts the keystore, asking `provider` for passwords until one works.
///
/// Gives up after `max_attempts` wrong passwords (0 for unbounded), when the
/// provider has no more passwords, or once `stop` is raised. Errors other than
/// a wrong password are returned immediately.
pub fn unlock_account(
    provider: &mut dyn CredentialProvider,
    keystore_path: &Path,
    max_attempts: u32,
    stop: &AtomicBool,
) -> anyhow::Result<AccountIdentity> {
    let mut attempt = 0;
    loop {
        if stop.load(Ordering::SeqCst) {
            bail!("interrupted while unlocking the keystore");
        }
        if max_attempts != 0 && attempt >= max_attempts {
            bail!("keystore not unlocked after {} attempts", attempt);
        }
        attempt += 1;
        let Some(password) = provider.password(attempt)? else {
            bail!("no password available to unlock the keystore");
        };
        match load_account_identity(keystore_path, &password) {
            Ok(identity) => {
                info!(
                    "keystore unlocked for {} ({})",
                    identity.account_name,
                    identity.keypair.get_public_key()
                );
                return Ok(identity);
            }
            Err(err) if err.is_wrong_password() => {
                warn!("could not decrypt keystore: wrong password");
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("could not load keystore {}", keystore_path.display())
                })
            }
        }
    }
}
