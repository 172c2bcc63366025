use std::io::Write;

use console::{Term, style};

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Destination for every message the tool shows the user.
pub trait Sink {
    fn emit(&mut self, severity: Severity, message: &str);
}

/// Writes info to stdout and errors in red to stderr.
pub struct ConsoleSink {
    out: Term,
    err: Term,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { out: Term::stdout(), err: Term::stderr() }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn emit(&mut self, severity: Severity, message: &str) {
        // console write errors are ignored
        let _ = match severity {
            Severity::Info => writeln!(self.out, "{message}"),
            Severity::Error => writeln!(self.err, "{}", style(message).red()),
        };
    }
}

/// Records messages in order. Used by tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Vec<(Severity, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[(Severity, String)] {
        &self.messages
    }

    /// Messages of one severity, in order.
    pub fn lines(&self, severity: Severity) -> impl Iterator<Item = &str> {
        self.messages.iter().filter(move |(s, _)| *s == severity).map(|(_, m)| m.as_str())
    }

    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.lines(severity).any(|line| line.contains(needle))
    }
}

impl Sink for MemorySink {
    fn emit(&mut self, severity: Severity, message: &str) {
        self.messages.push((severity, message.to_owned()));
    }
}
