use thiserror::Error;

/// Unified error type for addon-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// The source text did not yield a usable version tuple
    #[error("Version resolution failed: {0}")]
    VersionResolution(String),

    /// A version from outside the source file (CLI argument, tag) was unusable
    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Release stage error: {0}")]
    Stage(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Semver error: {0}")]
    Semver(#[from] semver::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in addon-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a version resolution error with context
    pub fn resolution(msg: impl Into<String>) -> Self {
        ReleaseError::VersionResolution(msg.into())
    }

    /// Create a version parsing error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a release stage error with context
    pub fn stage(msg: impl Into<String>) -> Self {
        ReleaseError::Stage(msg.into())
    }

    /// Create an output sink error with context
    pub fn output(msg: impl Into<String>) -> Self {
        ReleaseError::Output(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        ReleaseError::Tag(msg.into())
    }

    /// Whether this error is the version resolution failure
    pub fn is_resolution_failure(&self) -> bool {
        matches!(self, ReleaseError::VersionResolution(_))
    }
}
