//! ed25519 key material of the validator account.

use crate::error::{KeystoreError, KeystoreResult};
use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;
use zeroize::Zeroizing;

/// Size of a secret key, in bytes.
pub const SECRET_KEY_SIZE_BYTES: usize = ed25519_dalek::SECRET_KEY_LENGTH;
/// Size of a public key, in bytes.
pub const PUBLIC_KEY_SIZE_BYTES: usize = ed25519_dalek::PUBLIC_KEY_LENGTH;
/// Size of a signature, in bytes.
pub const SIGNATURE_SIZE_BYTES: usize = ed25519_dalek::SIGNATURE_LENGTH;

/// Signing key pair. The secret part is wiped from memory on drop.
#[derive(Clone)]
pub struct KeyPair(SigningKey);

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeyPair({})", self.get_public_key())
    }
}

impl KeyPair {
    /// Generates a new random key pair from the OS entropy source.
    pub fn generate() -> KeyPair {
        KeyPair(SigningKey::generate(&mut rand::rngs::OsRng))
    }

    /// Rebuilds a key pair from its secret bytes.
    pub fn from_secret_bytes(data: &[u8]) -> KeystoreResult<KeyPair> {
        let secret: &[u8; SECRET_KEY_SIZE_BYTES] = data.try_into().map_err(|_| {
            KeystoreError::ParsingError(format!(
                "secret key must be {} bytes, got {}",
                SECRET_KEY_SIZE_BYTES,
                data.len()
            ))
        })?;
        Ok(KeyPair(SigningKey::from_bytes(secret)))
    }

    /// Secret bytes, for encryption into a keystore.
    pub fn to_secret_bytes(&self) -> Zeroizing<[u8; SECRET_KEY_SIZE_BYTES]> {
        Zeroizing::new(self.0.to_bytes())
    }

    /// Public part of the key pair.
    pub fn get_public_key(&self) -> PublicKey {
        PublicKey(self.0.verifying_key())
    }

    /// Signs a message.
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature(self.0.sign(message))
    }
}

/// ed25519 public key, displayed in bs58 with checksum.
#[derive(Clone, Copy, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub struct PublicKey(VerifyingKey);

impl PublicKey {
    /// Checks that `signature` was produced over `message` by the matching key pair.
    pub fn verify_signature(&self, message: &[u8], signature: &Signature) -> KeystoreResult<()> {
        self.0
            .verify(message, &signature.0)
            .map_err(|e| KeystoreError::ParsingError(format!("invalid signature: {}", e)))
    }

    /// Raw bytes of the key.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE_BYTES] {
        self.0.to_bytes()
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", bs58::encode(self.to_bytes()).with_check().into_string())
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for PublicKey {
    type Err = KeystoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; PUBLIC_KEY_SIZE_BYTES] = decode_bs58_check(s, "public key")?
            .try_into()
            .map_err(|_| KeystoreError::ParsingError("public key has a wrong size".into()))?;
        VerifyingKey::from_bytes(&bytes)
            .map(PublicKey)
            .map_err(|e| KeystoreError::ParsingError(format!("public key: {}", e)))
    }
}

/// ed25519 signature, displayed in bs58 with checksum.
#[derive(Clone, Copy, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub struct Signature(ed25519_dalek::Signature);

impl Signature {
    /// Raw bytes of the signature.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE_BYTES] {
        self.0.to_bytes()
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", bs58::encode(self.to_bytes()).with_check().into_string())
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Signature {
    type Err = KeystoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; SIGNATURE_SIZE_BYTES] = decode_bs58_check(s, "signature")?
            .try_into()
            .map_err(|_| KeystoreError::ParsingError("signature has a wrong size".into()))?;
        Ok(Signature(ed25519_dalek::Signature::from_bytes(&bytes)))
    }
}

pub(crate) fn decode_bs58_check(data: &str, what: &str) -> KeystoreResult<Vec<u8>> {
    bs58::decode(data)
        .with_check(None)
        .into_vec()
        .map_err(|err| KeystoreError::ParsingError(format!("{} bs58_check parsing error: {}", what, err)))
}
