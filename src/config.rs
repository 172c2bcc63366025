//! Global Configuration Constants
//!
//! Everything the tool treats as fixed policy lives here: default output
//! paths, process exit codes, the sealed-file layout and the Argon2 cost
//! defaults and bounds.

/// Application name used in user-facing output.
pub const APP_NAME: &str = "filecrypt";

/// Environment variable read at startup to pick the tracing level.
///
/// Accepts `error`, `warn`, `info`, `debug` or `trace`. Defaults to `warn`.
pub const LOG_LEVEL_ENV: &str = "FILECRYPT_LOG";

// === Destinations ===

/// Output path used by encryption when `-o` is not given.
pub const DEFAULT_ENCRYPT_DESTINATION: &str = "./encrypted.file";

/// Output path used by decryption when `-o` is not given.
pub const DEFAULT_DECRYPT_DESTINATION: &str = "./decrypted.file";

// === Exit codes ===

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_USAGE: u8 = 1;
pub const EXIT_IO: u8 = 2;
pub const EXIT_CRYPTO: u8 = 3;

// === Argon2 Key Derivation Parameters ===
// The defaults are what new files are sealed with. The bounds are checked
// against the values read back from a header before any derivation runs,
// so a crafted file cannot make us allocate arbitrary memory.

/// Argon2 memory cost in KiB (64 MiB).
pub const ARGON_MEMORY: u32 = 64 * 1024;

/// Argon2 time cost (passes over memory).
pub const ARGON_TIME: u8 = 3;

/// Argon2 parallelism (lanes).
pub const ARGON_THREADS: u8 = 4;

/// Upper bound for the memory cost accepted from a header (1 GiB).
pub const ARGON_MEMORY_MAX: u32 = 1024 * 1024;

/// Upper bound for the time cost accepted from a header.
pub const ARGON_TIME_MAX: u8 = 16;

/// Upper bound for the parallelism accepted from a header.
pub const ARGON_THREADS_MAX: u8 = 16;

/// Length of the Argon2 salt in bytes.
pub const ARGON_SALT_LEN: usize = 32;

// === Cipher ===

/// AES-256 key size in bytes; also the Argon2 output length.
pub const KEY_SIZE: usize = 32;

/// AES-GCM nonce size in bytes.
pub const AES_NONCE_SIZE: usize = 12;

/// AES-GCM authentication tag size in bytes.
pub const AES_TAG_SIZE: usize = 16;

// === Sealed file format ===

/// Magic number at the start of every sealed file ("FCRY").
pub const MAGIC_BYTES: u32 = 0x4643_5259;

/// Current sealed file format version.
pub const CURRENT_VERSION: u16 = 0x0001;

/// Size of the serialized header: magic, version, kdf memory, kdf time,
/// kdf parallelism, salt, nonce.
pub const HEADER_SIZE: usize = 4 + 2 + 4 + 1 + 1 + ARGON_SALT_LEN + AES_NONCE_SIZE;
