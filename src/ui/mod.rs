//! User-facing output.
//!
//! # Modules
//!
//! - [`sink`]: the [`Sink`] trait with console and in-memory implementations
//! - [`display`]: usage text and status messages built on top of a sink

pub mod display;
pub mod sink;

pub use sink::{ConsoleSink, MemorySink, Severity, Sink};
