use crate::constants::{NONCE_SIZE, SALT_SIZE};
use crate::{decrypt, encrypt, CipherError};

#[test]
fn test_encrypt() {
    let cipher_data = encrypt("password", b"data").unwrap();
    // 4 bytes of payload + 16 bytes of GCM tag
    assert_eq!(cipher_data.encrypted_bytes.len(), 4 + 16);
    assert_eq!(cipher_data.salt.len(), SALT_SIZE);
    assert_eq!(cipher_data.nonce.len(), NONCE_SIZE);
}

#[test]
fn test_encrypt_decrypt() {
    let cipher_data = encrypt("password", b"data").unwrap();
    let decrypted_data = decrypt("password", &cipher_data).unwrap();
    assert_eq!(decrypted_data.as_slice(), b"data");
}

#[test]
fn test_encrypt_decrypt_bad_password() {
    let cipher_data = encrypt("password", b"data").unwrap();
    let err = decrypt("wrong", &cipher_data).expect_err("Wrong password should fail");
    assert!(matches!(err, CipherError::DecryptionError(_)));
}

#[test]
fn test_tampered_ciphertext_is_rejected() {
    let mut cipher_data = encrypt("password", b"data").unwrap();
    cipher_data.encrypted_bytes[0] ^= 0xff;
    assert!(decrypt("password", &cipher_data).is_err());
}

#[test]
fn test_salts_are_random() {
    let a = encrypt("password", b"data").unwrap();
    let b = encrypt("password", b"data").unwrap();
    assert_ne!(a.salt, b.salt);
    assert_ne!(a.encrypted_bytes, b.encrypted_bytes);
}
