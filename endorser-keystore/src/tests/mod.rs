use crate::{load_account_identity, KeyPair, Keystore, KeystoreError, PublicKey, Signature};
use endorser_models::account::AccountName;
use std::str::FromStr;

fn account() -> AccountName {
    AccountName::from_str("alice").unwrap()
}

#[test]
fn test_keystore_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keystore.yaml");
    let keypair = KeyPair::generate();
    Keystore::create(account(), &keypair, "pwd")
        .unwrap()
        .save(&path)
        .unwrap();

    let identity = load_account_identity(&path, "pwd").unwrap();
    assert_eq!(identity.account_name, account());
    assert_eq!(identity.keypair.get_public_key(), keypair.get_public_key());
}

#[test]
fn test_wrong_password() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keystore.yaml");
    Keystore::create(account(), &KeyPair::generate(), "pwd")
        .unwrap()
        .save(&path)
        .unwrap();

    let err = load_account_identity(&path, "not the password").unwrap_err();
    assert!(err.is_wrong_password(), "unexpected error {}", err);
}

#[test]
fn test_save_does_not_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keystore.yaml");
    let keystore = Keystore::create(account(), &KeyPair::generate(), "pwd").unwrap();
    keystore.save(&path).unwrap();
    assert!(matches!(keystore.save(&path), Err(KeystoreError::IOError(_))));
}

#[test]
fn test_swapped_public_key_is_detected() {
    let mut keystore = Keystore::create(account(), &KeyPair::generate(), "pwd").unwrap();
    keystore.public_key = KeyPair::generate().get_public_key();
    assert!(matches!(
        keystore.unlock("pwd"),
        Err(KeystoreError::CorruptedKeystore(_, _))
    ));
}

#[test]
fn test_missing_file() {
    let err = load_account_identity(std::path::Path::new("nope/keystore.yaml"), "pwd").unwrap_err();
    assert!(matches!(err, KeystoreError::IOError(_)));
    assert!(!err.is_wrong_password());
}

#[test]
fn test_signature_text_forms() {
    let keypair = KeyPair::generate();
    let signature = keypair.sign(b"endorse");
    let public_key = PublicKey::from_str(&keypair.get_public_key().to_string()).unwrap();
    let signature = Signature::from_str(&signature.to_string()).unwrap();
    public_key.verify_signature(b"endorse", &signature).unwrap();
    assert!(public_key.verify_signature(b"other", &signature).is_err());
}
