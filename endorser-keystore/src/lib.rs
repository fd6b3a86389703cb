//! Validator key material: ed25519 key pair and its password-protected keystore file.
#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod error;
mod keypair;
mod keystore;

pub use error::{KeystoreError, KeystoreResult};
pub use keypair::{KeyPair, PublicKey, Signature};
pub use keystore::{load_account_identity, AccountIdentity, Keystore};

#[cfg(feature = "test-exports")]
pub mod test_exports;

#[cfg(test)]
mod tests;
