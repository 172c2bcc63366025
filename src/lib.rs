//! filecrypt - encrypt or decrypt a file with a password or a key file.
//!
//! The command line is tokenized by [`cli::parser`], turned into an
//! [`types::OperationRequest`] by [`cli::resolver`] and executed by
//! [`processor::Processor`], which seals files with Argon2id and
//! AES-256-GCM through [`crypto::Vault`].

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod file;
pub mod header;
pub mod processor;
pub mod secret;
pub mod types;
pub mod ui;

pub use error::{CryptoError, Error, OperationError, UsageError};
