use displaydoc::Display;
use endorser_models::account::AccountName;
use thiserror::Error;

/// keystore result
pub type KeystoreResult<T, E = KeystoreError> = core::result::Result<T, E>;

/// keystore error
#[non_exhaustive]
#[derive(Display, Error, Debug)]
pub enum KeystoreError {
    /// IO error: {0}
    IOError(#[from] std::io::Error),
    /// YAML error: {0}
    YAMLError(#[from] serde_yaml::Error),
    /// cipher error: {0}
    CipherError(#[from] endorser_cipher::CipherError),
    /// key parsing error: {0}
    ParsingError(String),
    /// unsupported keystore version {0}
    VersionError(u64),
    /// keystore of account {0} is corrupted: {1}
    CorruptedKeystore(AccountName, String),
}

impl KeystoreError {
    /// Whether retrying with another password may succeed.
    pub fn is_wrong_password(&self) -> bool {
        matches!(
            self,
            KeystoreError::CipherError(endorser_cipher::CipherError::DecryptionError(_))
        )
    }
}
