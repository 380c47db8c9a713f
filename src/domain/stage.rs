//! Release stage labels
//!
//! The stage is chosen by the operator who triggers a release; it is never
//! derived from the version itself.

use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Maturity label of a published build
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ReleaseStage {
    #[default]
    Alpha,
    Beta,
    /// Release candidate
    Rc,
    /// Final release
    Gold,
}

impl ReleaseStage {
    /// All stages in maturity order
    pub const ALL: [ReleaseStage; 4] = [
        ReleaseStage::Alpha,
        ReleaseStage::Beta,
        ReleaseStage::Rc,
        ReleaseStage::Gold,
    ];

    /// Parse a release stage from a string
    ///
    /// Accepts: "alpha", "a", "beta", "b", "rc", "gold", "stable" (case-insensitive)
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseStage::Alpha => "alpha",
            ReleaseStage::Beta => "beta",
            ReleaseStage::Rc => "rc",
            ReleaseStage::Gold => "gold",
        }
    }

    /// Everything except gold is a pre-release
    pub fn is_prerelease(&self) -> bool {
        !matches!(self, ReleaseStage::Gold)
    }
}

impl FromStr for ReleaseStage {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "alpha" | "a" => Ok(ReleaseStage::Alpha),
            "beta" | "b" => Ok(ReleaseStage::Beta),
            "rc" => Ok(ReleaseStage::Rc),
            "gold" | "stable" => Ok(ReleaseStage::Gold),
            _ => Err(ReleaseError::stage(format!(
                "Unknown release stage: '{}' (expected alpha, beta, rc or gold)",
                s
            ))),
        }
    }
}

impl fmt::Display for ReleaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
