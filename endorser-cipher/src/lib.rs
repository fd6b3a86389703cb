//! Password-based encryption of the validator key material.
//!
//! A 256-bit key is derived from the password with PBKDF2-HMAC-SHA256
//! (`PBKDF2_ROUNDS` iterations, random `SALT_SIZE` bytes of salt), then the
//! payload is sealed with AES-256-GCM under a random `NONCE_SIZE` bytes nonce.
//! Salt and nonce are not secret and are stored next to the ciphertext.
#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod constants;
mod decrypt;
mod encrypt;
mod error;

pub use constants::{NONCE_SIZE, SALT_SIZE};
pub use decrypt::decrypt;
pub use encrypt::{encrypt, CipherData};
pub use error::CipherError;

use constants::{KEY_SIZE, PBKDF2_ROUNDS};
use sha2::Sha256;
use zeroize::Zeroizing;

fn derive_key(password: &str, salt: &[u8]) -> Zeroizing<[u8; KEY_SIZE]> {
    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ROUNDS, &mut key[..]);
    key
}

#[cfg(test)]
mod tests;
