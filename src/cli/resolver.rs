//! Decides which transform a parsed command line asks for.

use std::ffi::OsStr;
use std::path::PathBuf;

use tracing::debug;

use crate::cli::parser::{Parsed, ParsedArguments};
use crate::error::UsageError;
use crate::secret::Password;
use crate::types::{Credential, FlagKind, Mode, OperationRequest, ResolvedOp};

/// Resolves parsed arguments into a runnable operation.
///
/// `-h` in any flag position short-circuits to [`ResolvedOp::ShowHelp`].
/// A password given with `-p` wins over a key file given with `-k`.
///
/// # Errors
/// - `UnknownFlag` for an unrecognized token in flag position
/// - `MissingRequired(SourcePath)` without `-s`
/// - `MissingCredential` without `-p` or `-k`
/// - `EmptyPassword` for `-p ""`
/// - `UnknownMode` for a `-m` value other than encrypt/decrypt
/// - `NonUtf8Value` for a `-p` or `-m` value that is not valid UTF-8
pub fn resolve(parsed: &Parsed) -> Result<ResolvedOp, UsageError> {
    let arguments = match parsed {
        Parsed::Help => return Ok(ResolvedOp::ShowHelp),
        Parsed::Arguments(arguments) => arguments,
    };

    for flag in arguments.flags() {
        match flag.kind {
            FlagKind::Help => return Ok(ResolvedOp::ShowHelp),
            FlagKind::Unknown => return Err(UsageError::UnknownFlag(flag.raw.to_string_lossy().into_owned())),
            FlagKind::SourcePath | FlagKind::SecretKeyPath | FlagKind::Password | FlagKind::DestinationPath | FlagKind::Mode => {}
        }
    }

    let request = resolve_request(arguments)?;
    debug!(kind = %request.kind(), source = %request.source.display(), destination = %request.destination.display(), "resolved operation");

    Ok(ResolvedOp::Transform(request))
}

fn resolve_request(arguments: &ParsedArguments) -> Result<OperationRequest, UsageError> {
    let source = arguments.extract_value(FlagKind::SourcePath, true)?.ok_or(UsageError::MissingRequired(FlagKind::SourcePath))?;

    let mode = match arguments.extract_value(FlagKind::Mode, false)? {
        Some(raw) => {
            let raw = utf8(raw, FlagKind::Mode)?;
            raw.parse::<Mode>().map_err(|_| UsageError::UnknownMode(raw.to_owned()))?
        }
        None => Mode::default(),
    };

    let credential = if let Some(password) = arguments.extract_value(FlagKind::Password, false)? {
        let password = utf8(password, FlagKind::Password)?;
        if password.is_empty() {
            return Err(UsageError::EmptyPassword);
        }
        Credential::Password(Password::new(password))
    } else if let Some(key_path) = arguments.extract_value(FlagKind::SecretKeyPath, false)? {
        Credential::KeyFile(PathBuf::from(key_path))
    } else {
        return Err(UsageError::MissingCredential);
    };

    let destination = arguments.extract_value(FlagKind::DestinationPath, false)?.unwrap_or_else(|| OsStr::new(mode.default_destination()));

    Ok(OperationRequest { mode, source: PathBuf::from(source), credential, destination: PathBuf::from(destination) })
}

fn utf8(value: &OsStr, kind: FlagKind) -> Result<&str, UsageError> {
    value.to_str().ok_or(UsageError::NonUtf8Value(kind))
}
