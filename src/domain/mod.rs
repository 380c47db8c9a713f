//! Domain logic - pure release rules independent of files, git and the console

pub mod plan;
pub mod stage;
pub mod tag;
pub mod version;

pub use plan::ReleasePlan;
pub use stage::ReleaseStage;
pub use tag::TagPattern;
pub use version::VersionTuple;
