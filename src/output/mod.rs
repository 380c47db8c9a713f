//! Step output sinks
//!
//! Resolved values are handed to later pipeline stages as `key=value` lines.
//! On GitHub Actions these are appended to the file named by the
//! `GITHUB_OUTPUT` environment variable; elsewhere they go to stdout.
//!
//! - [file::FileSink]: appends to an output file
//! - [StdoutSink]: prints lines to standard output
//! - [memory::MemorySink]: collects pairs in memory for testing

pub mod file;
pub mod memory;

pub use file::FileSink;
pub use memory::MemorySink;

use crate::error::{ReleaseError, Result};
use std::path::Path;

/// Environment variable naming the step output file
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Destination for step outputs
pub trait OutputSink {
    /// Emit already validated `key=value` lines in order
    fn emit(&mut self, lines: &[String]) -> Result<()>;

    /// Write one `key=value` output
    ///
    /// # Returns
    /// * `Ok(())` - The line was written
    /// * `Err` - The key or value is not representable on one line, or the sink failed
    fn write_output(&mut self, key: &str, value: &str) -> Result<()> {
        self.emit(&[format_line(key, value)?])
    }

    /// Write several outputs in order.
    ///
    /// Every pair is validated before anything is emitted, so a bad value
    /// leaves the sink untouched.
    fn write_all(&mut self, outputs: &[(&str, String)]) -> Result<()> {
        let lines = outputs
            .iter()
            .map(|(key, value)| format_line(key, value))
            .collect::<Result<Vec<_>>>()?;
        self.emit(&lines)
    }
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Render a single output line, rejecting values that would break the format
pub fn format_line(key: &str, value: &str) -> Result<String> {
    if key.is_empty() || key.contains('=') || key.contains(is_line_break) {
        return Err(ReleaseError::output(format!("Invalid output key: '{}'", key)));
    }
    if value.contains(is_line_break) {
        return Err(ReleaseError::output(format!(
            "Output '{}' has a multi-line value",
            key
        )));
    }
    Ok(format!("{}={}", key, value))
}

/// Prints outputs to standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            println!("{}", line);
        }
        Ok(())
    }
}

/// Pick the sink for this run.
///
/// An explicit path wins, then `GITHUB_OUTPUT`, then stdout.
pub fn sink_from_env(explicit: Option<&Path>) -> Box<dyn OutputSink> {
    if let Some(path) = explicit {
        return Box::new(FileSink::new(path));
    }

    match std::env::var_os(GITHUB_OUTPUT_ENV) {
        Some(path) if !path.is_empty() => Box::new(FileSink::new(path)),
        _ => Box::new(StdoutSink),
    }
}
