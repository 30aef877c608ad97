//! Error types for subscription form domain values.

use thiserror::Error;

/// Errors returned while constructing subscription form domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GroupDomainError {
    /// The project key is empty after trimming.
    #[error("project key must not be empty")]
    EmptyProjectKey,

    /// The group name is empty after trimming.
    #[error("group name must not be empty")]
    EmptyGroupName,

    /// The organisation is empty after trimming.
    #[error("organisation must not be empty")]
    EmptyOrganisation,
}

/// Error returned while parsing a form mode.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown form mode: {0}")]
pub struct ParseFormModeError(pub String);
