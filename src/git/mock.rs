use crate::error::Result;
use crate::git::Repository;
use std::collections::BTreeMap;

/// Mock repository for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockRepository {
    tags: BTreeMap<String, String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag pointing to a commit hash
    pub fn add_tag(&mut self, name: impl Into<String>, hash: impl Into<String>) {
        self.tags.insert(name.into(), hash.into());
    }
}

impl Repository for MockRepository {
    fn find_tag(&self, tag_name: &str) -> Result<Option<String>> {
        Ok(self.tags.get(tag_name).cloned())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.keys().cloned().collect())
    }
}
