//! Command-line entry point.
//!
//! ```text
//! filecrypt -s SourceFilePath (-p Password | -k SecretKeyFilePath) [-o DestinationPath] [-m encrypt|decrypt]
//! filecrypt -h
//! ```
//!
//! [`run_with`] is the only place where errors turn into user messages and
//! exit codes.

use std::ffi::OsString;

use tracing::debug;

use crate::config::EXIT_SUCCESS;
use crate::crypto::{PasswordCipher, Vault};
use crate::error::Error;
use crate::processor::Processor;
use crate::types::ResolvedOp;
use crate::ui::Sink;
use crate::ui::display::{print_usage, program_name, show_error};

pub mod parser;
pub mod resolver;

pub use parser::{Parsed, ParsedArguments, parse};
pub use resolver::resolve;

/// Runs one invocation with the default cipher and returns the exit code.
pub fn run<I, S>(raw_args: I, sink: &mut dyn Sink) -> u8
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    run_with(raw_args, &Processor::new(Vault::default()), sink)
}

/// Runs one invocation with the given processor and returns the exit code.
pub fn run_with<I, S, C>(raw_args: I, processor: &Processor<C>, sink: &mut dyn Sink) -> u8
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    C: PasswordCipher,
{
    let raw_args: Vec<OsString> = raw_args.into_iter().map(Into::into).collect();
    let program = program_name(raw_args.first().map(OsString::as_os_str));

    match execute(raw_args, processor, sink, &program) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            debug!(error = ?e, "invocation failed");
            show_error(sink, &e.to_string());
            if matches!(e, Error::Usage(_)) {
                print_usage(sink, &program);
            }
            e.exit_code()
        }
    }
}

fn execute<C: PasswordCipher>(raw_args: Vec<OsString>, processor: &Processor<C>, sink: &mut dyn Sink, program: &str) -> Result<(), Error> {
    let parsed = parse(raw_args)?;

    match resolve(&parsed)? {
        ResolvedOp::ShowHelp => print_usage(sink, program),
        ResolvedOp::Transform(request) => processor.transform(&request, sink)?,
    }

    Ok(())
}
