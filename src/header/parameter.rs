//! Argon2 cost parameters for sealed files.
//!
//! The parameters a file was sealed with travel in its header, so
//! decryption always uses the cost chosen at encryption time. Values read
//! from a header are untrusted and are checked against fixed bounds before
//! any key derivation runs.

use crate::config::{ARGON_MEMORY, ARGON_MEMORY_MAX, ARGON_THREADS, ARGON_THREADS_MAX, ARGON_TIME, ARGON_TIME_MAX};
use crate::error::CryptoError;

/// Argon2id cost: memory in KiB, passes, lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    pub memory: u32,
    pub time: u8,
    pub parallelism: u8,
}

impl KdfParams {
    /// Checks the parameters against the accepted bounds.
    ///
    /// # Errors
    /// - time or parallelism is zero or above its maximum
    /// - memory is below the Argon2 minimum of 8 KiB per lane or above the maximum
    pub fn validate(&self) -> Result<(), CryptoError> {
        if self.time == 0 || self.time > ARGON_TIME_MAX {
            return Err(CryptoError::InvalidParameters(format!("time cost {} outside 1..={ARGON_TIME_MAX}", self.time)));
        }

        if self.parallelism == 0 || self.parallelism > ARGON_THREADS_MAX {
            return Err(CryptoError::InvalidParameters(format!("parallelism {} outside 1..={ARGON_THREADS_MAX}", self.parallelism)));
        }

        let min_memory = 8 * u32::from(self.parallelism);
        if self.memory < min_memory || self.memory > ARGON_MEMORY_MAX {
            return Err(CryptoError::InvalidParameters(format!("memory cost {} KiB outside {min_memory}..={ARGON_MEMORY_MAX}", self.memory)));
        }

        Ok(())
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self { memory: ARGON_MEMORY, time: ARGON_TIME, parallelism: ARGON_THREADS }
    }
}
