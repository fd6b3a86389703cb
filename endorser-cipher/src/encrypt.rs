use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::{thread_rng, RngCore};

use crate::constants::{NONCE_SIZE, SALT_SIZE};
use crate::derive_key;
use crate::error::CipherError;

/// Salt, nonce and ciphertext produced by [`encrypt`], stored side by side in a keystore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherData {
    /// PBKDF2 salt
    pub salt: [u8; SALT_SIZE],
    /// AES-GCM nonce
    pub nonce: [u8; NONCE_SIZE],
    /// encrypted data followed by the authentication tag
    pub encrypted_bytes: Vec<u8>,
}

/// Encryption function using AES-256-GCM with a PBKDF2-HMAC-SHA256 derived key.
///
/// Read `lib.rs` module documentation for more information.
pub fn encrypt(password: &str, data: &[u8]) -> Result<CipherData, CipherError> {
    let mut salt = [0u8; SALT_SIZE];
    thread_rng().fill_bytes(&mut salt);
    let key = derive_key(password, &salt);
    let cipher = Aes256Gcm::new_from_slice(&key[..])
        .map_err(|e| CipherError::EncryptionError(e.to_string()))?;

    let mut nonce = [0u8; NONCE_SIZE];
    thread_rng().fill_bytes(&mut nonce);
    let encrypted_bytes = cipher
        .encrypt(Nonce::from_slice(&nonce), data)
        .map_err(|e| CipherError::EncryptionError(e.to_string()))?;

    Ok(CipherData {
        salt,
        nonce,
        encrypted_bytes,
    })
}
