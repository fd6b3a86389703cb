//! Keystore helpers for tests of dependent crates.

use crate::{AccountIdentity, KeyPair, Keystore};
use endorser_models::account::AccountName;
use std::str::FromStr;
use tempfile::TempDir;

/// Password used by [`create_test_keystore`].
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Writes a keystore for `account` in a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn create_test_keystore(account: &str) -> (TempDir, std::path::PathBuf, AccountIdentity) {
    let dir = tempfile::tempdir().expect("could not create temp dir");
    let path = dir.path().join("keystore.yaml");
    let account = AccountName::from_str(account).expect("invalid test account name");
    let keypair = KeyPair::generate();
    Keystore::create(account.clone(), &keypair, TEST_PASSWORD)
        .and_then(|keystore| keystore.save(&path))
        .expect("could not write test keystore");
    (
        dir,
        path,
        AccountIdentity {
            account_name: account,
            keypair,
        },
    )
}
