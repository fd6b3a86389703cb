use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use zeroize::Zeroizing;

use crate::derive_key;
use crate::encrypt::CipherData;
use crate::error::CipherError;

/// Decryption function using AES-256-GCM.
///
/// A wrong password and tampered data are indistinguishable: both fail the
/// authentication tag check.
pub fn decrypt(password: &str, data: &CipherData) -> Result<Zeroizing<Vec<u8>>, CipherError> {
    let key = derive_key(password, &data.salt);
    let cipher = Aes256Gcm::new_from_slice(&key[..])
        .map_err(|e| CipherError::DecryptionError(e.to_string()))?;
    let decrypted_bytes = cipher
        .decrypt(Nonce::from_slice(&data.nonce), data.encrypted_bytes.as_ref())
        .map_err(|_| {
            CipherError::DecryptionError("wrong password or corrupted data".to_string())
        })?;
    Ok(Zeroizing::new(decrypted_bytes))
}
