//! In-memory group directory.

use crate::subscription::{
    domain::{GroupName, PROJECT_SCOPE},
    ports::{GroupDirectory, GroupDirectoryError, GroupDirectoryResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Thread-safe in-memory group directory.
///
/// Records every queried name so tests can assert which lookups were
/// issued.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGroupDirectory {
    state: Arc<RwLock<InMemoryDirectoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryDirectoryState {
    groups: HashMap<String, String>,
    queries: Vec<GroupName>,
    failure: Option<String>,
}

impl InMemoryGroupDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory holding `groups`.
    #[must_use]
    pub fn with_groups<I, T>(groups: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let directory = Self::new();
        for group in groups {
            directory.insert(group);
        }
        directory
    }

    /// Adds a project group.
    pub fn insert(&self, group: impl Into<String>) {
        self.insert_with_scope(group, PROJECT_SCOPE);
    }

    /// Adds a group belonging to `scope`.
    pub fn insert_with_scope(&self, group: impl Into<String>, scope: impl Into<String>) {
        self.write().groups.insert(group.into(), scope.into());
    }

    /// Makes every subsequent query fail with a transport error carrying
    /// `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        self.write().failure = Some(message.into());
    }

    /// Restores normal answers after [`Self::fail_with`].
    pub fn recover(&self) {
        self.write().failure = None;
    }

    /// Returns every queried name, in query order.
    #[must_use]
    pub fn queries(&self) -> Vec<GroupName> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .queries
            .clone()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, InMemoryDirectoryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn lookup(&self, name: &GroupName) -> GroupDirectoryResult<Option<String>> {
        let mut state = self.write();
        state.queries.push(name.clone());
        if let Some(message) = &state.failure {
            return Err(GroupDirectoryError::transport(std::io::Error::other(
                message.clone(),
            )));
        }
        Ok(state.groups.get(name.as_str()).cloned())
    }
}

#[async_trait]
impl GroupDirectory for InMemoryGroupDirectory {
    async fn exists(&self, name: &GroupName) -> GroupDirectoryResult<bool> {
        self.lookup(name).map(|scope| scope.is_some())
    }

    async fn scope(&self, name: &GroupName) -> GroupDirectoryResult<Option<String>> {
        self.lookup(name)
    }
}
