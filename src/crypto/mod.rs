//! # Password-based authenticated encryption
//!
//! The processor only sees the [`PasswordCipher`] trait. [`Vault`] is the
//! production implementation: Argon2id for the key, AES-256-GCM for the
//! payload, and a self-describing [`Header`](crate::header::Header) in front.

use crate::error::CryptoError;
use crate::secret::Password;

mod aes;
mod derive;
mod vault;

pub use aes::AesCipher;
pub use derive::{derive_key, random_bytes};
pub use vault::Vault;

/// Seals and opens whole buffers with a password.
pub trait PasswordCipher {
    /// Encrypts `plaintext`. The output carries everything needed to
    /// decrypt it again except the password.
    ///
    /// # Errors
    /// Fails on an empty password or when key derivation fails.
    fn encrypt(&self, plaintext: &[u8], password: &Password) -> Result<Vec<u8>, CryptoError>;

    /// Decrypts the output of [`PasswordCipher::encrypt`].
    ///
    /// # Errors
    /// Fails on a wrong password or on truncated, tampered or
    /// unsupported input.
    fn decrypt(&self, ciphertext: &[u8], password: &Password) -> Result<Vec<u8>, CryptoError>;
}
