use crate::error::{ReleaseError, Result};
use crate::output::OutputSink;

/// In-memory sink for testing without touching files
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    entries: Vec<(String, String)>,
}

impl MemorySink {
    /// Create a new empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All outputs written so far, in order
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Last value written for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OutputSink for MemorySink {
    fn emit(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| ReleaseError::output(format!("Malformed output line: '{}'", line)))?;
            self.entries.push((key.to_string(), value.to_string()));
        }
        Ok(())
    }
}
