//! Release version resolver
//!
//! Extracts the addon version from source text. Two declaration shapes are
//! recognised by a single combined pattern:
//!
//! - mapping style, as found in a `bl_info` dict: `"version": (1, 0, 4)`
//! - assignment style: `version = (1, 0, 4)`
//!
//! Capture groups 1-3 belong to the mapping shape and 4-6 to the assignment
//! shape. Only one alternative participates in a match, so the non-empty
//! groups are joined with `.` to form the version string. That joined text is
//! what gets emitted, verbatim; the parsed [VersionTuple] is only used for
//! validation, comparison and release naming.
//!
//! The `regex` crate reports the leftmost match, so when a file declares the
//! version more than once the first declaration in file order wins.

use crate::domain::VersionTuple;
use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::Path;

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
const VERSION_PATTERN: &str = concat!(
    r#"\bversion["']\s*:\s*\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*\)"#,
    "|",
    r"\bversion\s*=\s*\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*\)",
);

/// Which textual form the winning declaration used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationShape {
    /// `"version": (X, Y, Z)`
    Mapping,
    /// `version = (X, Y, Z)`
    Assignment,
}

impl fmt::Display for DeclarationShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationShape::Mapping => write!(f, "mapping"),
            DeclarationShape::Assignment => write!(f, "assignment"),
        }
    }
}

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Captured components joined with `.`, exactly as written in the source
    pub version_string: String,
    pub version: VersionTuple,
    pub shape: DeclarationShape,
    /// 1-based line of the winning declaration
    pub line: usize,
    /// Total number of declarations found in the text
    pub declarations: usize,
}

/// Compiled version declaration matcher
#[derive(Debug, Clone)]
pub struct VersionResolver {
    pattern: Regex,
}

impl VersionResolver {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(VERSION_PATTERN).map_err(|e| {
            ReleaseError::resolution(format!("Invalid version pattern: {}", e))
        })?;
        Ok(VersionResolver { pattern })
    }

    /// Resolve the version declared in `text`.
    ///
    /// # Returns
    /// * `Ok(Resolution)` - The first declaration and where it was found
    /// * `Err(ReleaseError::VersionResolution)` - No declaration matched, or the
    ///   matched components did not form a version
    pub fn resolve(&self, text: &str) -> Result<Resolution> {
        let captures = self.pattern.captures(text).ok_or_else(|| {
            ReleaseError::resolution(
                "no version declaration found (expected `\"version\": (X, Y, Z)` or `version = (X, Y, Z)`)",
            )
        })?;

        let joined = captures
            .iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(".");

        if joined.is_empty() {
            return Err(ReleaseError::resolution(
                "version declaration matched but produced an empty version",
            ));
        }

        let version = VersionTuple::parse(&joined)?;

        let shape = if captures.get(1).is_some() {
            DeclarationShape::Mapping
        } else {
            DeclarationShape::Assignment
        };

        let start = captures.get(0).map(|m| m.start()).unwrap_or(0);
        let line = text[..start].matches('\n').count() + 1;

        Ok(Resolution {
            version_string: joined,
            version,
            shape,
            line,
            declarations: self.pattern.find_iter(text).count(),
        })
    }

    /// Resolve the version string (`major.minor.patch`) declared in `text`
    pub fn resolve_version(&self, text: &str) -> Result<String> {
        self.resolve(text).map(|r| r.version_string)
    }

    /// Read a source file and resolve its version.
    ///
    /// The file is read in full and dropped once matching is done.
    pub fn resolve_file(&self, path: &Path) -> Result<Resolution> {
        let text = fs::read_to_string(path).map_err(|e| {
            ReleaseError::resolution(format!("cannot read {}: {}", path.display(), e))
        })?;
        self.resolve(&text)
    }
}

/// Resolve the version string in `text` with a freshly compiled resolver
pub fn resolve_version(text: &str) -> Result<String> {
    VersionResolver::new()?.resolve_version(text)
}
