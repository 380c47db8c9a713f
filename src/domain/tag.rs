use crate::domain::VersionTuple;
use crate::error::{ReleaseError, Result};
use regex::Regex;

/// Release tag naming pattern (e.g., "v{version}", "paint-system-{version}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pattern: String,
}

impl TagPattern {
    /// Create a tag pattern, rejecting patterns without a `{version}` placeholder
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.matches("{version}").count() != 1 {
            return Err(ReleaseError::tag(format!(
                "Pattern '{}' must contain exactly one {{version}} placeholder",
                pattern
            )));
        }
        Ok(TagPattern { pattern })
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="1.2.3-beta" -> "v1.2.3-beta"
    pub fn format(&self, version: &str) -> String {
        self.pattern.replace("{version}", version)
    }

    /// Check whether a tag name was produced by this pattern
    pub fn matches(&self, tag: &str) -> bool {
        self.version_of(tag).is_some()
    }

    /// Numeric version carried by a tag produced by this pattern.
    ///
    /// Pre-release suffixes are accepted and dropped: "v1.2.3-beta" -> 1.2.3.
    pub fn version_of(&self, tag: &str) -> Option<VersionTuple> {
        self.to_regex().and_then(|re| Self::capture_version(&re, tag))
    }

    /// Newest tag produced by this pattern, with its version
    pub fn latest_release(&self, tags: &[String]) -> Option<(String, VersionTuple)> {
        let re = self.to_regex()?;
        tags.iter()
            .filter_map(|tag| Self::capture_version(&re, tag).map(|v| (tag.clone(), v)))
            .max_by(|a, b| a.1.cmp(&b.1))
    }

    fn to_regex(&self) -> Option<Regex> {
        let escaped = regex::escape(&self.pattern);
        let regex_pattern = escaped.replace(
            r"\{version\}",
            r"([0-9]+\.[0-9]+\.[0-9]+)(?:-[0-9A-Za-z.-]+)?",
        );
        Regex::new(&format!("^{}$", regex_pattern)).ok()
    }

    fn capture_version(re: &Regex, tag: &str) -> Option<VersionTuple> {
        let captures = re.captures(tag)?;
        VersionTuple::parse(captures.get(1)?.as_str()).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}
