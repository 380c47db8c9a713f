pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod output;
pub mod resolver;
pub mod ui;

pub use error::{ReleaseError, Result};
pub use resolver::{resolve_version, VersionResolver};
