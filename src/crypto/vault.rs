use tracing::debug;

use crate::config::{AES_TAG_SIZE, HEADER_SIZE};
use crate::crypto::PasswordCipher;
use crate::crypto::aes::AesCipher;
use crate::crypto::derive::{derive_key, random_bytes};
use crate::error::CryptoError;
use crate::header::{Header, KdfParams};
use crate::secret::Password;

/// Argon2id + AES-256-GCM sealed-file cipher.
///
/// Every call to [`Vault::encrypt`](PasswordCipher::encrypt) draws a fresh
/// salt and nonce. The KDF cost used is the one configured on the vault;
/// decryption uses whatever cost the header records.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vault {
    params: KdfParams,
}

impl Vault {
    pub const fn new(params: KdfParams) -> Self {
        Self { params }
    }
}

impl PasswordCipher for Vault {
    fn encrypt(&self, plaintext: &[u8], password: &Password) -> Result<Vec<u8>, CryptoError> {
        if password.is_empty() {
            return Err(CryptoError::EmptyPassword);
        }
        self.params.validate()?;

        let header = Header::new(self.params, random_bytes(), random_bytes());
        let header_bytes = header.serialize();

        let key = derive_key(password.expose_secret().as_bytes(), header.salt(), header.params())?;
        let body = AesCipher::new(&key).seal(header.nonce(), &header_bytes, plaintext)?;

        debug!(plaintext = plaintext.len(), sealed = header_bytes.len() + body.len(), "sealed buffer");

        let mut out = header_bytes;
        out.extend_from_slice(&body);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8], password: &Password) -> Result<Vec<u8>, CryptoError> {
        if password.is_empty() {
            return Err(CryptoError::EmptyPassword);
        }

        if ciphertext.len() < HEADER_SIZE + AES_TAG_SIZE {
            return Err(CryptoError::Truncated(ciphertext.len()));
        }

        let (header_bytes, body) = ciphertext.split_at(HEADER_SIZE);
        let header = Header::deserialize(header_bytes)?;
        debug!(version = header.version(), memory = header.params().memory, time = header.params().time, "opening sealed buffer");

        let key = derive_key(password.expose_secret().as_bytes(), header.salt(), header.params())?;
        AesCipher::new(&key).open(header.nonce(), header_bytes, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault() -> Vault {
        Vault::new(KdfParams { memory: 64, time: 1, parallelism: 1 })
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let password = Password::new("test_password_123");
        let plaintext = b"Hello, World! This is a test buffer for encryption.";

        let sealed = vault().encrypt(plaintext, &password).unwrap();
        assert_eq!(sealed.len(), HEADER_SIZE + plaintext.len() + AES_TAG_SIZE);
        assert_ne!(&sealed[HEADER_SIZE..HEADER_SIZE + plaintext.len()], &plaintext[..]);

        assert_eq!(vault().decrypt(&sealed, &password).unwrap(), plaintext);
    }

    #[test]
    fn test_empty_plaintext_roundtrip() {
        let password = Password::new("pw");
        let sealed = vault().encrypt(b"", &password).unwrap();
        assert!(vault().decrypt(&sealed, &password).unwrap().is_empty());
    }

    #[test]
    fn test_fresh_salt_and_nonce() {
        let password = Password::new("pw");
        let a = vault().encrypt(b"same", &password).unwrap();
        let b = vault().encrypt(b"same", &password).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_decrypt_wrong_password() {
        let sealed = vault().encrypt(b"Test content", &Password::new("correct_password")).unwrap();
        assert!(matches!(vault().decrypt(&sealed, &Password::new("wrong_password")), Err(CryptoError::Authentication)));
    }

    #[test]
    fn test_decrypt_uses_header_params() {
        let password = Password::new("pw");
        let sealed = Vault::new(KdfParams { memory: 128, time: 2, parallelism: 2 }).encrypt(b"data", &password).unwrap();
        assert_eq!(vault().decrypt(&sealed, &password).unwrap(), b"data");
    }

    #[test]
    fn test_decrypt_truncated() {
        let password = Password::new("pw");
        let sealed = vault().encrypt(b"data", &password).unwrap();
        assert!(matches!(vault().decrypt(&sealed[..HEADER_SIZE + AES_TAG_SIZE - 1], &password), Err(CryptoError::Truncated(_))));
        assert!(vault().decrypt(&sealed[..sealed.len() - 1], &password).is_err());
    }

    #[test]
    fn test_decrypt_tampered_header_and_body() {
        let password = Password::new("pw");
        let sealed = vault().encrypt(b"some payload", &password).unwrap();

        // salt, nonce and ciphertext bytes are only caught by the tag
        for index in [12, 50, HEADER_SIZE, sealed.len() - 1] {
            let mut tampered = sealed.clone();
            tampered[index] ^= 0x01;
            assert!(matches!(vault().decrypt(&tampered, &password), Err(CryptoError::Authentication)), "byte {index}");
        }
    }

    #[test]
    fn test_decrypt_not_a_sealed_file() {
        let garbage = vec![0xAB; 200];
        assert!(matches!(vault().decrypt(&garbage, &Password::new("pw")), Err(CryptoError::BadMagic)));
    }

    #[test]
    fn test_empty_password_rejected() {
        let empty = Password::new("");
        assert!(matches!(vault().encrypt(b"x", &empty), Err(CryptoError::EmptyPassword)));
        assert!(matches!(vault().decrypt(&[0u8; 100], &empty), Err(CryptoError::EmptyPassword)));
    }
}
