use crate::domain::ReleaseStage;
use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Three-component addon version (major, minor, patch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTuple {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionTuple {
    /// Create a new version tuple
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        VersionTuple {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dotted version string (e.g., "1.2.3" or "v1.2.3").
    ///
    /// Exactly three numeric components are required. Any failure is reported
    /// as a version resolution error, since an incomplete tuple must never
    /// partially succeed.
    pub fn parse(s: &str) -> Result<Self> {
        let clean = s.trim().trim_start_matches('v').trim_start_matches('V');

        let parts: Vec<&str> = clean.split('.').collect();
        if parts.len() != 3 {
            return Err(ReleaseError::resolution(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                s
            )));
        }

        let component = |name: &str, raw: &str| {
            raw.parse::<u32>().map_err(|_| {
                ReleaseError::resolution(format!("Invalid {} component: '{}'", name, raw))
            })
        };

        Ok(VersionTuple {
            major: component("major", parts[0])?,
            minor: component("minor", parts[1])?,
            patch: component("patch", parts[2])?,
        })
    }

    /// Parse any semver string and keep only its numeric core.
    ///
    /// Pre-release and build metadata are discarded. Components that do not
    /// fit in `u32` are rejected.
    pub fn from_semver_str(s: &str) -> Result<Self> {
        let clean = s.trim().trim_start_matches('v').trim_start_matches('V');
        let parsed = semver::Version::parse(clean)?;
        VersionTuple::try_from(&parsed)
    }

    /// Strictly greater than `other` in (major, minor, patch) order
    pub fn is_newer_than(&self, other: &VersionTuple) -> bool {
        self > other
    }

    /// Whether every component is zero
    pub fn is_zero(&self) -> bool {
        self.major == 0 && self.minor == 0 && self.patch == 0
    }

    /// Build the semver representation for a release stage.
    ///
    /// Pre-release stages carry the stage name as the pre-release identifier;
    /// gold releases have none.
    pub fn to_semver(&self, stage: ReleaseStage) -> Result<semver::Version> {
        let mut version = semver::Version::new(
            u64::from(self.major),
            u64::from(self.minor),
            u64::from(self.patch),
        );
        if stage.is_prerelease() {
            version.pre = semver::Prerelease::new(stage.as_str())?;
        }
        Ok(version)
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for VersionTuple {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        VersionTuple::parse(s)
    }
}

impl TryFrom<&semver::Version> for VersionTuple {
    type Error = ReleaseError;

    fn try_from(v: &semver::Version) -> Result<Self> {
        let component = |name: &str, n: u64| {
            u32::try_from(n).map_err(|_| {
                ReleaseError::version(format!("{} component {} of '{}' is too large", name, n, v))
            })
        };

        Ok(VersionTuple::new(
            component("major", v.major)?,
            component("minor", v.minor)?,
            component("patch", v.patch)?,
        ))
    }
}
