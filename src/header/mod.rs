//! Fixed-size header at the front of every sealed file.
//!
//! Layout, all integers big-endian:
//!
//! | field           | size |
//! |-----------------|------|
//! | magic           | 4    |
//! | version         | 2    |
//! | kdf memory KiB  | 4    |
//! | kdf time        | 1    |
//! | kdf parallelism | 1    |
//! | salt            | 32   |
//! | nonce           | 12   |
//!
//! The serialized header is bound to the ciphertext as AES-GCM associated
//! data, so any change to it fails authentication.

use crate::config::{AES_NONCE_SIZE, ARGON_SALT_LEN, CURRENT_VERSION, HEADER_SIZE, MAGIC_BYTES};
use crate::error::CryptoError;

mod parameter;

pub use parameter::KdfParams;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    version: u16,
    params: KdfParams,
    salt: [u8; ARGON_SALT_LEN],
    nonce: [u8; AES_NONCE_SIZE],
}

impl Header {
    pub fn new(params: KdfParams, salt: [u8; ARGON_SALT_LEN], nonce: [u8; AES_NONCE_SIZE]) -> Self {
        Self { version: CURRENT_VERSION, params, salt, nonce }
    }

    pub const fn version(&self) -> u16 {
        self.version
    }

    pub const fn params(&self) -> &KdfParams {
        &self.params
    }

    pub const fn salt(&self) -> &[u8; ARGON_SALT_LEN] {
        &self.salt
    }

    pub const fn nonce(&self) -> &[u8; AES_NONCE_SIZE] {
        &self.nonce
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE);
        out.extend_from_slice(&MAGIC_BYTES.to_be_bytes());
        out.extend_from_slice(&self.version.to_be_bytes());
        out.extend_from_slice(&self.params.memory.to_be_bytes());
        out.push(self.params.time);
        out.push(self.params.parallelism);
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.nonce);
        out
    }

    /// Parses and validates a header.
    ///
    /// # Errors
    /// - `Truncated` if `bytes` is shorter than the header
    /// - `BadMagic` if the magic number does not match
    /// - `UnsupportedVersion` for any version but the current one
    /// - `InvalidParameters` if the KDF cost is out of bounds
    pub fn deserialize(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() < HEADER_SIZE {
            return Err(CryptoError::Truncated(bytes.len()));
        }

        let mut reader = Reader { bytes, offset: 0 };

        if u32::from_be_bytes(reader.take()?) != MAGIC_BYTES {
            return Err(CryptoError::BadMagic);
        }

        let version = u16::from_be_bytes(reader.take()?);
        if version != CURRENT_VERSION {
            return Err(CryptoError::UnsupportedVersion(version));
        }

        let memory = u32::from_be_bytes(reader.take()?);
        let [time, parallelism] = reader.take()?;
        let params = KdfParams { memory, time, parallelism };
        params.validate()?;

        let salt = reader.take()?;
        let nonce = reader.take()?;

        Ok(Self { version, params, salt, nonce })
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl Reader<'_> {
    fn take<const N: usize>(&mut self) -> Result<[u8; N], CryptoError> {
        let chunk = self.bytes.get(self.offset..self.offset + N).and_then(|s| <[u8; N]>::try_from(s).ok()).ok_or(CryptoError::Truncated(self.bytes.len()))?;
        self.offset += N;
        Ok(chunk)
    }
}
