use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Key, Nonce};

use crate::config::{AES_NONCE_SIZE, KEY_SIZE};
use crate::error::CryptoError;

/// AES-256-GCM with the nonce and associated data supplied by the caller.
pub struct AesCipher {
    aead: Aes256Gcm,
}

impl AesCipher {
    pub fn new(key: &[u8; KEY_SIZE]) -> Self {
        let aead = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
        Self { aead }
    }

    /// Returns the ciphertext with the 16-byte tag appended.
    pub fn seal(&self, nonce: &[u8; AES_NONCE_SIZE], aad: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.aead.encrypt(Nonce::from_slice(nonce), Payload { msg: plaintext, aad }).map_err(|_| CryptoError::Encryption)
    }

    pub fn open(&self, nonce: &[u8; AES_NONCE_SIZE], aad: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.aead.decrypt(Nonce::from_slice(nonce), Payload { msg: ciphertext, aad }).map_err(|_| CryptoError::Authentication)
    }
}
