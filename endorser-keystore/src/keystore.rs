use crate::error::{KeystoreError, KeystoreResult};
use crate::keypair::{decode_bs58_check, KeyPair, PublicKey};
use endorser_cipher::{decrypt, encrypt, CipherData, NONCE_SIZE, SALT_SIZE};
use endorser_models::account::AccountName;
use endorser_models::config::KEYSTORE_VERSION;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk keystore: one validator account and its encrypted secret key.
///
/// Stored as YAML. Binary fields are bs58 with checksum.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Keystore {
    /// file format version
    pub version: u64,
    /// ledger account the key belongs to
    pub account: AccountName,
    /// public key, kept in clear to detect a corrupted secret
    pub public_key: PublicKey,
    /// PBKDF2 salt
    pub salt: String,
    /// AES-GCM nonce
    pub nonce: String,
    /// encrypted secret key
    pub ciphered_secret: String,
}

impl Keystore {
    /// Encrypts `keypair` with `password` into a new keystore.
    pub fn create(
        account: AccountName,
        keypair: &KeyPair,
        password: &str,
    ) -> KeystoreResult<Keystore> {
        let secret = keypair.to_secret_bytes();
        let cipher_data = encrypt(password, &secret[..])?;
        Ok(Keystore {
            version: KEYSTORE_VERSION,
            account,
            public_key: keypair.get_public_key(),
            salt: encode(&cipher_data.salt),
            nonce: encode(&cipher_data.nonce),
            ciphered_secret: encode(&cipher_data.encrypted_bytes),
        })
    }

    /// Reads a keystore file without decrypting it.
    pub fn from_file(path: &Path) -> KeystoreResult<Keystore> {
        let keystore: Keystore = serde_yaml::from_str(&std::fs::read_to_string(path)?)?;
        if keystore.version != KEYSTORE_VERSION {
            return Err(KeystoreError::VersionError(keystore.version));
        }
        Ok(keystore)
    }

    /// Writes the keystore. Refuses to overwrite an existing file.
    pub fn save(&self, path: &Path) -> KeystoreResult<()> {
        let content = serde_yaml::to_string(self)?;
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;
        std::io::Write::write_all(&mut file, content.as_bytes())?;
        Ok(())
    }

    /// Decrypts the secret key and checks it against the stored public key.
    pub fn unlock(&self, password: &str) -> KeystoreResult<AccountIdentity> {
        let salt: [u8; SALT_SIZE] = self.decode_field(&self.salt, "salt")?;
        let nonce: [u8; NONCE_SIZE] = self.decode_field(&self.nonce, "nonce")?;
        let cipher_data = CipherData {
            salt,
            nonce,
            encrypted_bytes: decode_bs58_check(&self.ciphered_secret, "ciphered secret")?,
        };
        let secret = decrypt(password, &cipher_data)?;
        let keypair = KeyPair::from_secret_bytes(&secret)?;
        if keypair.get_public_key() != self.public_key {
            return Err(KeystoreError::CorruptedKeystore(
                self.account.clone(),
                "decrypted key does not match the public key".to_string(),
            ));
        }
        Ok(AccountIdentity {
            account_name: self.account.clone(),
            keypair,
        })
    }

    fn decode_field<const N: usize>(&self, data: &str, what: &str) -> KeystoreResult<[u8; N]> {
        decode_bs58_check(data, what)?.try_into().map_err(|_| {
            KeystoreError::CorruptedKeystore(self.account.clone(), format!("{} has a wrong size", what))
        })
    }
}

fn encode(data: &[u8]) -> String {
    bs58::encode(data).with_check().into_string()
}

/// The unlocked validator identity, owned by the process for its lifetime.
#[derive(Clone, Debug)]
pub struct AccountIdentity {
    /// ledger account
    pub account_name: AccountName,
    /// signing key of the account
    pub keypair: KeyPair,
}

/// Loads and decrypts the keystore at `path`.
///
/// A wrong password surfaces as [`KeystoreError::CipherError`], see
/// [`KeystoreError::is_wrong_password`].
pub fn load_account_identity(path: &Path, password: &str) -> KeystoreResult<AccountIdentity> {
    Keystore::from_file(path)?.unlock(password)
}
