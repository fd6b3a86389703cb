/// AES-GCM nonce size.
///
/// Read `lib.rs` module documentation for more information.
pub const NONCE_SIZE: usize = 12;

/// PBKDF2 salt size.
///
/// Read `lib.rs` module documentation for more information.
pub const SALT_SIZE: usize = 16;

/// PBKDF2 iteration count.
pub const PBKDF2_ROUNDS: u32 = 600_000;

/// Derived key size (AES-256).
pub const KEY_SIZE: usize = 32;
