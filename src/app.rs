use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::{Context, Result};
use filecrypt::cli;
use filecrypt::config::LOG_LEVEL_ENV;
use filecrypt::ui::ConsoleSink;
use tracing::Level;

pub struct App {
    args: Vec<OsString>,
}

impl App {
    /// Installs the tracing subscriber and captures the process arguments.
    pub fn init() -> Result<Self> {
        let level = std::env::var(LOG_LEVEL_ENV).ok().and_then(|value| value.parse::<Level>().ok()).unwrap_or(Level::WARN);
        let subscriber = tracing_subscriber::fmt().with_file(true).with_line_number(true).with_max_level(level).with_writer(std::io::stderr).finish();
        tracing::subscriber::set_global_default(subscriber).context("failed to install the tracing subscriber")?;

        Ok(Self::from_env())
    }

    /// Captures the process arguments without touching global state.
    ///
    /// Arguments are kept as the OS passed them; paths are never re-encoded.
    pub fn from_env() -> Self {
        Self { args: std::env::args_os().collect() }
    }

    pub fn execute(self) -> ExitCode {
        let mut sink = ConsoleSink::new();
        ExitCode::from(cli::run(self.args, &mut sink))
    }
}
