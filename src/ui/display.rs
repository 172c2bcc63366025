//! Usage text and status messages.

use std::ffi::OsStr;
use std::path::Path;

use bytesize::ByteSize;

use crate::config::{DEFAULT_DECRYPT_DESTINATION, DEFAULT_ENCRYPT_DESTINATION};
use crate::types::Mode;
use crate::ui::{Severity, Sink};

/// Prints the usage text, naming the executable as it was invoked.
pub fn print_usage(sink: &mut dyn Sink, program: &str) {
    let lines = [
        format!("Usage: {program} -s SourceFilePath (-p Password | -k SecretKeyFilePath) [-o DestinationPath] [-m encrypt|decrypt]"),
        "Or".to_owned(),
        format!("{program} -h to show usage information"),
        String::new(),
        "-s specify the path of the source file.".to_owned(),
        "-p specify the password text.".to_owned(),
        "-k specify the path of a secret file; its whole content is used as the password.".to_owned(),
        format!("-o specify the path of the output file (default {DEFAULT_ENCRYPT_DESTINATION}, or {DEFAULT_DECRYPT_DESTINATION} when decrypting)."),
        "-m specify the operation, encrypt (default) or decrypt.".to_owned(),
    ];

    for line in &lines {
        sink.emit(Severity::Info, line);
    }
}

/// Reports a finished transform.
pub fn show_success(sink: &mut dyn Sink, mode: Mode, destination: &Path, written: usize) {
    sink.emit(Severity::Info, &format!("{} is successful. The output path is {} ({}).", mode.noun(), destination.display(), ByteSize::b(written as u64)));
}

/// Reports an error message.
pub fn show_error(sink: &mut dyn Sink, message: &str) {
    sink.emit(Severity::Error, message);
}

/// Extracts the executable's file name from `argv[0]`.
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .map(Path::new)
        .and_then(Path::file_name)
        .map_or_else(|| crate::config::APP_NAME.to_owned(), |name| name.to_string_lossy().into_owned())
}
