//! Turns the raw argument vector into flag/value pairs.
//!
//! The grammar is strictly positional: tokens come in pairs, the first of
//! each pair names a role and the second is an opaque literal. A value that
//! happens to look like a flag (`-p -k`) is still just a value. Tokens stay
//! `OsString` so paths are passed through byte for byte.

use std::ffi::{OsStr, OsString};

use tracing::debug;

use crate::error::UsageError;
use crate::types::{FlagKind, FlagToken};

/// Result of tokenizing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// `-h` on its own, or no arguments at all.
    Help,

    Arguments(ParsedArguments),
}

/// Flag/value tokens in command-line order, program name excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArguments {
    tokens: Vec<FlagToken>,
}

/// Tokenizes a full argument vector. The first element is the program name
/// and is skipped.
///
/// # Errors
/// `UsageError::Malformed` when the remaining token count is odd.
pub fn parse<I, S>(raw_args: I) -> Result<Parsed, UsageError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let tokens: Vec<FlagToken> = raw_args.into_iter().skip(1).map(FlagToken::new).collect();
    debug!(count = tokens.len(), "tokenized arguments");

    match tokens.as_slice() {
        [] => return Ok(Parsed::Help),
        [only] if only.kind == FlagKind::Help => return Ok(Parsed::Help),
        _ => {}
    }

    if tokens.len() % 2 != 0 {
        return Err(UsageError::Malformed);
    }

    Ok(Parsed::Arguments(ParsedArguments { tokens }))
}

impl ParsedArguments {
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn tokens(&self) -> &[FlagToken] {
        &self.tokens
    }

    /// Tokens in flag position (every other token, starting with the first).
    pub fn flags(&self) -> impl Iterator<Item = &FlagToken> {
        self.tokens.iter().step_by(2)
    }

    /// Looks up the value paired with the first `kind` flag.
    ///
    /// # Errors
    /// - `MissingRequired(kind)` if the flag is absent and `required` is set
    /// - `MissingValue(kind)` if the flag is the last token; only reachable for
    ///   arguments built with `From<Vec<FlagToken>>`, since `parse` rejects odd counts
    pub fn extract_value(&self, kind: FlagKind, required: bool) -> Result<Option<&OsStr>, UsageError> {
        let Some(index) = self.tokens.iter().step_by(2).position(|token| token.kind == kind).map(|pair| pair * 2) else {
            return if required { Err(UsageError::MissingRequired(kind)) } else { Ok(None) };
        };

        self.tokens.get(index + 1).map(|value| Some(value.raw.as_os_str())).ok_or(UsageError::MissingValue(kind))
    }
}

impl From<Vec<FlagToken>> for ParsedArguments {
    /// Wraps tokens without the even-length check `parse` performs.
    fn from(tokens: Vec<FlagToken>) -> Self {
        Self { tokens }
    }
}
