//! Common type definitions for filecrypt.
//!
//! # Overview
//!
//! - [`FlagKind`] / [`FlagToken`]: one classified command-line token
//! - [`Mode`]: encryption or decryption
//! - [`Credential`]: inline password or key file path
//! - [`OperationRequest`] / [`ResolvedOp`]: what the resolver hands to the processor

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use strum::{Display, EnumString};

use crate::config::{DEFAULT_DECRYPT_DESTINATION, DEFAULT_ENCRYPT_DESTINATION};
use crate::secret::Password;

/// The role a command-line token plays when it sits in a flag position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FlagKind {
    #[strum(to_string = "-s")]
    SourcePath,

    #[strum(to_string = "-k")]
    SecretKeyPath,

    #[strum(to_string = "-p")]
    Password,

    #[strum(to_string = "-o")]
    DestinationPath,

    #[strum(to_string = "-m")]
    Mode,

    #[strum(to_string = "-h")]
    Help,

    /// Anything else. Whether that is an error depends on where the token sits.
    #[strum(to_string = "unknown")]
    Unknown,
}

impl FlagKind {
    /// Classifies a raw token. Only exact two-character flags are recognized;
    /// a token that is not valid UTF-8 is never a flag.
    pub fn from_token(token: &OsStr) -> Self {
        match token.to_str() {
            Some("-s") => Self::SourcePath,
            Some("-k") => Self::SecretKeyPath,
            Some("-p") => Self::Password,
            Some("-o") => Self::DestinationPath,
            Some("-m") => Self::Mode,
            Some("-h") => Self::Help,
            _ => Self::Unknown,
        }
    }
}

/// A single command-line token together with its classification.
///
/// The raw token is kept as the OS gave it, so paths with bytes that are not
/// valid UTF-8 reach the filesystem unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagToken {
    pub kind: FlagKind,
    pub raw: OsString,
}

impl FlagToken {
    pub fn new(raw: impl Into<OsString>) -> Self {
        let raw = raw.into();
        Self { kind: FlagKind::from_token(&raw), raw }
    }
}

/// Direction of the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    #[default]
    #[strum(to_string = "encrypt", serialize = "e")]
    Encrypt,

    #[strum(to_string = "decrypt", serialize = "d")]
    Decrypt,
}

impl Mode {
    /// Output path used when the user does not pass `-o`.
    #[inline]
    pub fn default_destination(self) -> &'static str {
        match self {
            Self::Encrypt => DEFAULT_ENCRYPT_DESTINATION,
            Self::Decrypt => DEFAULT_DECRYPT_DESTINATION,
        }
    }

    /// Operation name used in user messages.
    #[inline]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Encrypt => "Encryption",
            Self::Decrypt => "Decryption",
        }
    }
}

/// Secret material the key is derived from.
#[derive(Debug)]
pub enum Credential {
    /// Password given inline with `-p`.
    Password(Password),

    /// Path given with `-k`; the full text of the file is the password.
    KeyFile(PathBuf),
}

/// The four transform shapes a request can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TransformKind {
    EncryptWithPassword,
    EncryptWithKeyFile,
    DecryptWithPassword,
    DecryptWithKeyFile,
}

/// A fully validated request, ready for the processor.
#[derive(Debug)]
pub struct OperationRequest {
    pub mode: Mode,
    pub source: PathBuf,
    pub credential: Credential,
    pub destination: PathBuf,
}

impl OperationRequest {
    pub fn kind(&self) -> TransformKind {
        match (self.mode, &self.credential) {
            (Mode::Encrypt, Credential::Password(_)) => TransformKind::EncryptWithPassword,
            (Mode::Encrypt, Credential::KeyFile(_)) => TransformKind::EncryptWithKeyFile,
            (Mode::Decrypt, Credential::Password(_)) => TransformKind::DecryptWithPassword,
            (Mode::Decrypt, Credential::KeyFile(_)) => TransformKind::DecryptWithKeyFile,
        }
    }

    #[inline]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[inline]
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// Outcome of resolving the command line.
#[derive(Debug)]
pub enum ResolvedOp {
    Transform(OperationRequest),
    ShowHelp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_kind_from_token() {
        let kind = |token: &str| FlagKind::from_token(OsStr::new(token));
        assert_eq!(kind("-s"), FlagKind::SourcePath);
        assert_eq!(kind("-k"), FlagKind::SecretKeyPath);
        assert_eq!(kind("-p"), FlagKind::Password);
        assert_eq!(kind("-o"), FlagKind::DestinationPath);
        assert_eq!(kind("-m"), FlagKind::Mode);
        assert_eq!(kind("-h"), FlagKind::Help);
        assert_eq!(kind("--help"), FlagKind::Unknown);
        assert_eq!(kind("-S"), FlagKind::Unknown);
        assert_eq!(kind("in.txt"), FlagKind::Unknown);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_token_is_unknown() {
        use std::os::unix::ffi::OsStrExt;

        let token = FlagToken::new(OsStr::from_bytes(b"-s\xff"));
        assert_eq!(token.kind, FlagKind::Unknown);
        assert_eq!(token.raw.as_encoded_bytes(), b"-s\xff");
    }

    #[test]
    fn test_flag_kind_display() {
        assert_eq!(FlagKind::SourcePath.to_string(), "-s");
        assert_eq!(FlagKind::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("encrypt".parse::<Mode>().unwrap(), Mode::Encrypt);
        assert_eq!("E".parse::<Mode>().unwrap(), Mode::Encrypt);
        assert_eq!("Decrypt".parse::<Mode>().unwrap(), Mode::Decrypt);
        assert_eq!("d".parse::<Mode>().unwrap(), Mode::Decrypt);
        assert!("x".parse::<Mode>().is_err());
        assert_eq!(Mode::Decrypt.to_string(), "decrypt");
    }

    #[test]
    fn test_request_kind() {
        let request = OperationRequest {
            mode: Mode::Decrypt,
            source: PathBuf::from("a"),
            credential: Credential::KeyFile(PathBuf::from("k")),
            destination: PathBuf::from("b"),
        };
        assert_eq!(request.kind(), TransformKind::DecryptWithKeyFile);
    }
}
