//! Git access for release tag checks
//!
//! The release step only needs to know whether the tag it is about to publish
//! already exists. The [Repository] trait covers that; implementations are:
//!
//! - [repository::Git2Repository]: a real repository opened with `git2`
//! - [mock::MockRepository]: an in-memory tag list for testing
//!
//! ```rust
//! # use addon_release::git::{MockRepository, Repository};
//! let mut repo = MockRepository::new();
//! repo.add_tag("v1.0.3", "a1b2c3d");
//! assert!(repo.tag_exists("v1.0.3").unwrap());
//! assert!(!repo.tag_exists("v1.0.4").unwrap());
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only tag queries against a repository
pub trait Repository {
    /// Find a tag by name
    ///
    /// # Returns
    /// * `Ok(Some(hash))` - Commit hash the tag points at (annotated tags are peeled)
    /// * `Ok(None)` - If the tag doesn't exist
    /// * `Err` - If there's a Git error
    fn find_tag(&self, tag_name: &str) -> Result<Option<String>>;

    /// All tag names, sorted alphabetically
    fn list_tags(&self) -> Result<Vec<String>>;

    fn tag_exists(&self, tag_name: &str) -> Result<bool> {
        Ok(self.find_tag(tag_name)?.is_some())
    }
}
