use std::fmt::{Debug, Formatter, Result};

use secrecy::{ExposeSecret, SecretString};

/// A password held in memory that is zeroized on drop.
///
/// `Debug` never prints the contents, so a `Password` can sit inside request
/// types that are logged with `?`.
pub struct Password {
    inner: SecretString,
}

impl Password {
    pub fn new(password: &str) -> Self {
        Self { inner: SecretString::from(password.to_owned()) }
    }

    pub fn from_string(password: String) -> Self {
        Self { inner: SecretString::from(password) }
    }

    #[inline]
    pub fn expose_secret(&self) -> &str {
        self.inner.expose_secret()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.expose_secret().is_empty()
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("Password([REDACTED])")
    }
}
