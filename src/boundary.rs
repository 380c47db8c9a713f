use crate::domain::VersionTuple;
use std::fmt;

/// Warnings about unusual but non-fatal release conditions.
/// These are reported to the operator and never change the exit code.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// More than one version declaration in the source; the first one was used
    MultipleDeclarations { count: usize, chosen: VersionTuple },
    /// The release tag is already present in the repository
    TagAlreadyExists { tag: String },
    /// A release tag newer than the resolved version already exists
    OlderThanLatestRelease {
        version: VersionTuple,
        latest_tag: String,
    },
    /// No git repository found, so the tag check was skipped
    NotAGitRepository { path: String },
    /// The source declares version 0.0.0
    ZeroVersion,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MultipleDeclarations { count, chosen } => {
                write!(
                    f,
                    "Found {} version declarations; using the first one ({})",
                    count, chosen
                )
            }
            BoundaryWarning::TagAlreadyExists { tag } => {
                write!(f, "Tag '{}' already exists in the repository", tag)
            }
            BoundaryWarning::OlderThanLatestRelease {
                version,
                latest_tag,
            } => {
                write!(
                    f,
                    "Version {} is older than the latest release tag '{}'",
                    version, latest_tag
                )
            }
            BoundaryWarning::NotAGitRepository { path } => {
                write!(f, "No git repository at '{}'; skipping tag check", path)
            }
            BoundaryWarning::ZeroVersion => {
                write!(f, "Resolved version is 0.0.0")
            }
        }
    }
}
