//! # Error Types
//!
//! Usage problems, operation failures and crypto failures each get their own
//! enum so the boundary in [`crate::cli::run_with`] can pick an exit code
//! without string matching.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{EXIT_CRYPTO, EXIT_IO, EXIT_USAGE};
use crate::types::FlagKind;

/// The command line does not describe a runnable operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Odd number of tokens: some flag has no value.
    #[error("some parameter doesn't have a value")]
    Malformed,

    #[error("the parameter {0} is required")]
    MissingRequired(FlagKind),

    #[error("the parameter {0} must specify a value")]
    MissingValue(FlagKind),

    #[error("missing credential: specify a password with -p or a secret file with -k")]
    MissingCredential,

    #[error("unknown parameter: {0}")]
    UnknownFlag(String),

    #[error("unknown mode `{0}`: expected `encrypt` or `decrypt`")]
    UnknownMode(String),

    #[error("the password cannot be empty")]
    EmptyPassword,

    /// Only paths may carry bytes that are not valid UTF-8.
    #[error("the value of {0} must be valid UTF-8")]
    NonUtf8Value(FlagKind),
}

/// Errors raised by the password-based cipher.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("input is too short to be a sealed file: {0} bytes")]
    Truncated(usize),

    #[error("input is not a sealed file")]
    BadMagic,

    #[error("unsupported sealed file version: {0}")]
    UnsupportedVersion(u16),

    #[error("invalid key derivation parameters: {0}")]
    InvalidParameters(String),

    #[error("password cannot be empty")]
    EmptyPassword,

    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("encryption failed")]
    Encryption,

    #[error("authentication failed")]
    Authentication,
}

/// Failure while running a resolved operation.
#[derive(Error, Debug)]
pub enum OperationError {
    #[error("the source file does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("failed to read the source file {}: {source}", .path.display())]
    SourceReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("the secret key file does not exist: {}", .0.display())]
    KeyFileNotFound(PathBuf),

    #[error("failed to read the secret key file {}: {source}", .path.display())]
    KeyFileReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("the secret key file is empty: {}", .0.display())]
    EmptyKeyFile(PathBuf),

    #[error("failed to write {}: {source}", .path.display())]
    DestinationWriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("encryption failed: {0}")]
    EncryptionFailed(#[source] CryptoError),

    /// Wrong password and damaged input are reported the same way.
    #[error("decryption failed, please check the password and the input file")]
    DecryptionFailed,
}

impl OperationError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::SourceNotFound(_)
            | Self::SourceReadError { .. }
            | Self::KeyFileNotFound(_)
            | Self::KeyFileReadError { .. }
            | Self::EmptyKeyFile(_)
            | Self::DestinationWriteError { .. } => EXIT_IO,
            Self::EncryptionFailed(_) | Self::DecryptionFailed => EXIT_CRYPTO,
        }
    }
}

/// Anything that can stop an invocation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => EXIT_USAGE,
            Self::Operation(e) => e.exit_code(),
        }
    }
}
