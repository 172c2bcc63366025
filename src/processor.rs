//! Runs a resolved operation: credential -> read -> transform -> write.

use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::crypto::{PasswordCipher, Vault};
use crate::error::OperationError;
use crate::file::File;
use crate::secret::Password;
use crate::types::{Credential, Mode, OperationRequest};
use crate::ui::Sink;
use crate::ui::display::show_success;

/// Executes transforms with a given cipher.
///
/// All four variants (encrypt/decrypt with a password or a key file) share
/// one path. The destination is only written once the whole output is in
/// memory, and then atomically, so a failure never leaves a partial file.
pub struct Processor<C = Vault> {
    cipher: C,
}

impl<C: PasswordCipher> Processor<C> {
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    /// Runs `request` and reports success on `sink`.
    ///
    /// # Errors
    /// - `KeyFileNotFound`, `KeyFileReadError`, `EmptyKeyFile` for the `-k` credential
    /// - `SourceNotFound`, `SourceReadError` for the input
    /// - `EncryptionFailed`, `DecryptionFailed` from the cipher
    /// - `DestinationWriteError` for the output
    pub fn transform(&self, request: &OperationRequest, sink: &mut dyn Sink) -> Result<(), OperationError> {
        let started = Instant::now();

        let loaded;
        let password = match &request.credential {
            Credential::Password(password) => password,
            Credential::KeyFile(path) => {
                loaded = read_key_file(path)?;
                &loaded
            }
        };

        let source = File::new(request.source());
        if !source.exists() {
            return Err(OperationError::SourceNotFound(source.path().to_path_buf()));
        }
        let input = source.read_all().map_err(|e| OperationError::SourceReadError { path: source.path().to_path_buf(), source: e })?;

        let output = match request.mode {
            Mode::Encrypt => self.cipher.encrypt(&input, password).map_err(OperationError::EncryptionFailed)?,
            Mode::Decrypt => self.cipher.decrypt(&input, password).map_err(|e| {
                warn!(error = %e, "decryption rejected");
                OperationError::DecryptionFailed
            })?,
        };

        let destination = File::new(request.destination());
        destination
            .write_atomic(&output)
            .map_err(|e| OperationError::DestinationWriteError { path: destination.path().to_path_buf(), source: e })?;

        info!(kind = %request.kind(), read = input.len(), written = output.len(), elapsed_ms = started.elapsed().as_millis(), "transform finished");
        show_success(sink, request.mode, destination.path(), output.len());

        Ok(())
    }
}

/// Loads a key file; its entire text is the password.
fn read_key_file(path: &Path) -> Result<Password, OperationError> {
    let file = File::new(path);
    let contents = file.read_to_string().map_err(|e| match e.kind() {
        ErrorKind::NotFound => OperationError::KeyFileNotFound(path.to_path_buf()),
        _ => OperationError::KeyFileReadError { path: path.to_path_buf(), source: e },
    })?;

    if contents.is_empty() {
        return Err(OperationError::EmptyKeyFile(path.to_path_buf()));
    }

    debug!(path = %path.display(), "loaded key file");
    Ok(Password::from_string(contents))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;
    use crate::header::KdfParams;
    use crate::ui::{MemorySink, Severity};

    fn processor() -> Processor {
        Processor::new(Vault::new(KdfParams { memory: 64, time: 1, parallelism: 1 }))
    }

    fn request(mode: Mode, source: &Path, credential: Credential, destination: &Path) -> OperationRequest {
        OperationRequest { mode, source: source.to_path_buf(), credential, destination: destination.to_path_buf() }
    }

    fn password(text: &str) -> Credential {
        Credential::Password(Password::new(text))
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("source.txt");
        let enc = dir.path().join("encrypted.file");
        let dec = dir.path().join("decrypted.txt");
        fs::write(&src, b"Hello, World! This is a test file for encryption.").unwrap();

        let mut sink = MemorySink::new();
        processor().transform(&request(Mode::Encrypt, &src, password("test_password_123"), &enc), &mut sink).unwrap();
        processor().transform(&request(Mode::Decrypt, &enc, password("test_password_123"), &dec), &mut sink).unwrap();

        assert_ne!(fs::read(&enc).unwrap(), fs::read(&src).unwrap());
        assert_eq!(fs::read(&dec).unwrap(), fs::read(&src).unwrap());
        assert!(sink.contains(Severity::Info, "Encryption is successful"));
        assert!(sink.contains(Severity::Info, "Decryption is successful"));
    }

    #[test]
    fn test_key_file_matches_password() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("source.txt");
        let key = dir.path().join("key.txt");
        let enc = dir.path().join("enc");
        let dec = dir.path().join("dec");
        fs::write(&src, b"payload").unwrap();
        fs::write(&key, "  key with spaces\n").unwrap();

        let mut sink = MemorySink::new();
        processor().transform(&request(Mode::Encrypt, &src, Credential::KeyFile(key.clone()), &enc), &mut sink).unwrap();

        // the whole file is the password, trailing newline included
        let err = processor().transform(&request(Mode::Decrypt, &enc, password("  key with spaces"), &dec), &mut sink).unwrap_err();
        assert!(matches!(err, OperationError::DecryptionFailed));

        processor().transform(&request(Mode::Decrypt, &enc, password("  key with spaces\n"), &dec), &mut sink).unwrap();
        assert_eq!(fs::read(&dec).unwrap(), b"payload");
    }

    #[test]
    fn test_source_not_found() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("out");
        let err = processor().transform(&request(Mode::Encrypt, &dir.path().join("missing"), password("pw"), &dest), &mut MemorySink::new()).unwrap_err();
        assert!(matches!(err, OperationError::SourceNotFound(_)));
        assert!(!dest.exists());
    }

    #[test]
    fn test_source_is_directory() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("out");
        let err = processor().transform(&request(Mode::Encrypt, dir.path(), password("pw"), &dest), &mut MemorySink::new()).unwrap_err();
        assert!(matches!(err, OperationError::SourceReadError { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn test_key_file_errors() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("source.txt");
        let dest = dir.path().join("out");
        fs::write(&src, b"payload").unwrap();

        let missing = Credential::KeyFile(dir.path().join("nope"));
        let err = processor().transform(&request(Mode::Encrypt, &src, missing, &dest), &mut MemorySink::new()).unwrap_err();
        assert!(matches!(err, OperationError::KeyFileNotFound(_)));

        let empty = dir.path().join("empty.key");
        fs::write(&empty, b"").unwrap();
        let err = processor().transform(&request(Mode::Encrypt, &src, Credential::KeyFile(empty), &dest), &mut MemorySink::new()).unwrap_err();
        assert!(matches!(err, OperationError::EmptyKeyFile(_)));

        let binary = dir.path().join("binary.key");
        fs::write(&binary, [0xFF, 0x00, 0xFE]).unwrap();
        let err = processor().transform(&request(Mode::Encrypt, &src, Credential::KeyFile(binary), &dest), &mut MemorySink::new()).unwrap_err();
        assert!(matches!(err, OperationError::KeyFileReadError { .. }));

        assert!(!dest.exists());
    }

    #[test]
    fn test_failed_decrypt_leaves_no_destination() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("garbage");
        let dest = dir.path().join("out");
        fs::write(&src, vec![0x42; 256]).unwrap();

        let mut sink = MemorySink::new();
        let err = processor().transform(&request(Mode::Decrypt, &src, password("pw"), &dest), &mut sink).unwrap_err();

        assert!(matches!(err, OperationError::DecryptionFailed));
        assert!(!dest.exists());
        assert_eq!(sink.messages().len(), 0);
    }

    #[test]
    fn test_failed_decrypt_keeps_existing_destination() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("source.txt");
        let enc = dir.path().join("enc");
        let dest = dir.path().join("precious");
        fs::write(&src, b"payload").unwrap();
        fs::write(&dest, b"keep me").unwrap();

        processor().transform(&request(Mode::Encrypt, &src, password("right"), &enc), &mut MemorySink::new()).unwrap();
        let err = processor().transform(&request(Mode::Decrypt, &enc, password("wrong"), &dest), &mut MemorySink::new()).unwrap_err();

        assert!(matches!(err, OperationError::DecryptionFailed));
        assert_eq!(fs::read(&dest).unwrap(), b"keep me");
    }

    #[test]
    fn test_destination_write_error() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("source.txt");
        fs::write(&src, b"payload").unwrap();

        // a regular file where a parent directory is expected
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();
        let dest: PathBuf = blocker.join("out");

        let err = processor().transform(&request(Mode::Encrypt, &src, password("pw"), &dest), &mut MemorySink::new()).unwrap_err();
        assert!(matches!(err, OperationError::DestinationWriteError { .. }));
    }

    #[test]
    fn test_empty_source_roundtrip() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("empty");
        let enc = dir.path().join("enc");
        let dec = dir.path().join("dec");
        fs::write(&src, b"").unwrap();

        processor().transform(&request(Mode::Encrypt, &src, password("pw"), &enc), &mut MemorySink::new()).unwrap();
        processor().transform(&request(Mode::Decrypt, &enc, password("pw"), &dec), &mut MemorySink::new()).unwrap();

        assert!(fs::metadata(&enc).unwrap().len() > 0);
        assert_eq!(fs::read(&dec).unwrap(), b"");
    }
}
