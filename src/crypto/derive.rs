use argon2::{Algorithm, Argon2, Params, Version};
use rand::Rng;
use secrecy::zeroize::Zeroizing;

use crate::config::KEY_SIZE;
use crate::error::CryptoError;
use crate::header::KdfParams;

/// Derives the AES-256 key from a password with Argon2id v1.3.
pub fn derive_key(password: &[u8], salt: &[u8], params: &KdfParams) -> Result<Zeroizing<[u8; KEY_SIZE]>, CryptoError> {
    if password.is_empty() {
        return Err(CryptoError::EmptyPassword);
    }

    let params = Params::new(params.memory, u32::from(params.time), u32::from(params.parallelism), Some(KEY_SIZE))
        .map_err(|e| CryptoError::InvalidParameters(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    argon2.hash_password_into(password, salt, &mut key[..]).map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;

    Ok(key)
}

pub fn random_bytes<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    rand::rng().fill(&mut bytes);
    bytes
}
