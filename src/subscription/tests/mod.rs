//! Unit tests for the subscription form.

mod domain_tests;

use crate::subscription::{
    domain::{GroupName, PROJECT_SCOPE, ProjectKey},
    ports::{GroupDirectory, GroupDirectoryError, GroupDirectoryResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use tokio::sync::oneshot;

/// Project key used throughout the tests.
pub(super) fn project_key() -> ProjectKey {
    ProjectKey::new("proj1").expect("valid project key")
}

/// Directory whose answers are released by the test, one name at a time.
///
/// Names without a gate are reported absent immediately.
#[derive(Debug, Default)]
pub(super) struct GatedGroupDirectory {
    gates: Mutex<HashMap<String, oneshot::Receiver<bool>>>,
}

impl GatedGroupDirectory {
    /// Holds the answer for `name` until the returned sender fires.
    pub(super) fn gate(&self, name: &str) -> oneshot::Sender<bool> {
        let (sender, receiver) = oneshot::channel();
        self.gates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_owned(), receiver);
        sender
    }

    fn take_gate(&self, name: &GroupName) -> Option<oneshot::Receiver<bool>> {
        self.gates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name.as_str())
    }
}

#[async_trait]
impl GroupDirectory for GatedGroupDirectory {
    async fn exists(&self, name: &GroupName) -> GroupDirectoryResult<bool> {
        match self.take_gate(name) {
            Some(gate) => gate.await.map_err(GroupDirectoryError::transport),
            None => Ok(false),
        }
    }

    async fn scope(&self, name: &GroupName) -> GroupDirectoryResult<Option<String>> {
        Ok(self.exists(name).await?.then(|| PROJECT_SCOPE.to_owned()))
    }
}
