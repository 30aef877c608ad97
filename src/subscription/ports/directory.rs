//! Group directory port answering group existence and scope queries.

use crate::subscription::domain::GroupName;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for group directory operations.
pub type GroupDirectoryResult<T> = Result<T, GroupDirectoryError>;

/// Read access to the groups known to the identity service.
#[async_trait]
pub trait GroupDirectory: Send + Sync {
    /// Returns `true` when a group named `name` already exists.
    ///
    /// # Errors
    ///
    /// Returns [`GroupDirectoryError`] when the directory cannot be reached
    /// or answers with an unusable response.
    async fn exists(&self, name: &GroupName) -> GroupDirectoryResult<bool>;

    /// Returns the scope of the group named `name`, or `None` when there is
    /// no such group.
    ///
    /// # Errors
    ///
    /// Returns [`GroupDirectoryError`] when the directory cannot be reached
    /// or answers with an unusable response.
    async fn scope(&self, name: &GroupName) -> GroupDirectoryResult<Option<String>>;
}

/// Errors returned by group directory implementations.
#[derive(Debug, Clone, Error)]
pub enum GroupDirectoryError {
    /// The request could not be sent or its response could not be read.
    #[error("group directory transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The directory answered with a non-success status.
    #[error("group directory answered HTTP {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response payload could not be decoded.
    #[error("invalid group directory response: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl GroupDirectoryError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a decoding error.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
