//! Submission-time checks of the group backing a subscription.
//!
//! The live validator lets the form proceed as soon as the derived name is
//! in the project namespace, before the directory has answered. A group to
//! create is therefore checked again when the subscription is submitted,
//! against the organisation and parent group it will be created under. A
//! group picked in link mode is checked to exist in the project scope.

use crate::subscription::{
    domain::{FieldId, GroupDomainError, GroupName, PROJECT_SCOPE, ProjectKey, RuleViolation},
    ports::{GroupDirectory, GroupDirectoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// A group the subscription is about to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCreationRequest {
    group: GroupName,
    organisation: String,
    parent: Option<GroupName>,
    project_key: ProjectKey,
}

impl GroupCreationRequest {
    /// Creates a request for a group directly under `organisation`.
    ///
    /// # Errors
    ///
    /// Returns [`GroupDomainError::EmptyGroupName`] or
    /// [`GroupDomainError::EmptyOrganisation`] when either value is blank.
    pub fn new(
        group: impl Into<String>,
        organisation: impl Into<String>,
        project_key: ProjectKey,
    ) -> Result<Self, GroupDomainError> {
        let group = group.into();
        if group.trim().is_empty() {
            return Err(GroupDomainError::EmptyGroupName);
        }
        let organisation = organisation.into();
        if organisation.trim().is_empty() {
            return Err(GroupDomainError::EmptyOrganisation);
        }
        Ok(Self {
            group: GroupName::new(group),
            organisation,
            parent: None,
            project_key,
        })
    }

    /// Nests the group under an existing parent group. A blank parent is
    /// ignored.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        let parent = parent.into();
        self.parent = (!parent.trim().is_empty()).then(|| GroupName::new(parent));
        self
    }

    /// Returns the group to create.
    #[must_use]
    pub const fn group(&self) -> &GroupName {
        &self.group
    }

    /// Returns the parent group, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&GroupName> {
        self.parent.as_ref()
    }
}

/// An existing group a subscription is about to be linked to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLinkRequest {
    group: GroupName,
}

impl GroupLinkRequest {
    /// Creates a request linking to `group`.
    ///
    /// # Errors
    ///
    /// Returns [`GroupDomainError::EmptyGroupName`] when `group` is blank.
    pub fn new(group: impl Into<String>) -> Result<Self, GroupDomainError> {
        let group = group.into();
        if group.trim().is_empty() {
            return Err(GroupDomainError::EmptyGroupName);
        }
        Ok(Self {
            group: GroupName::new(group),
        })
    }

    /// Returns the group to link to.
    #[must_use]
    pub const fn group(&self) -> &GroupName {
        &self.group
    }
}

/// Errors returned by [`GroupCreationPolicy`] checks.
#[derive(Debug, Clone, Error)]
pub enum GroupCreationError {
    /// A rule failed on `field`.
    #[error("{field}: {violation}")]
    Rejected {
        /// Field the violation is reported on.
        field: FieldId,
        /// The failed rule.
        violation: RuleViolation,
    },

    /// The directory could not be queried.
    #[error(transparent)]
    Directory(#[from] GroupDirectoryError),
}

impl GroupCreationError {
    fn on_group(violation: RuleViolation) -> Self {
        Self::Rejected {
            field: FieldId::GROUP,
            violation,
        }
    }

    /// Returns the violation when the request was rejected.
    #[must_use]
    pub const fn violation(&self) -> Option<&RuleViolation> {
        match self {
            Self::Rejected { violation, .. } => Some(violation),
            Self::Directory(_) => None,
        }
    }
}

/// Checks the group of a subscription against the directory and naming
/// rules.
#[derive(Debug, Clone)]
pub struct GroupCreationPolicy<D>
where
    D: GroupDirectory,
{
    directory: Arc<D>,
}

impl<D> GroupCreationPolicy<D>
where
    D: GroupDirectory,
{
    /// Creates a policy querying `directory`.
    #[must_use]
    pub const fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Checks that the group can be created.
    ///
    /// # Errors
    ///
    /// Returns [`GroupCreationError::Rejected`] when the group already
    /// exists, is not named after its organisation, project or parent, or
    /// when the parent does not exist; returns
    /// [`GroupCreationError::Directory`] when the directory fails.
    pub async fn check(&self, request: &GroupCreationRequest) -> Result<(), GroupCreationError> {
        let result = self.evaluate(request).await;
        if let Err(err) = &result {
            warn!(group = %request.group, error = %err, "group creation rejected");
        }
        result
    }

    /// Checks that a subscription can be linked to an existing group.
    ///
    /// # Errors
    ///
    /// Returns [`GroupCreationError::Rejected`] on the group field when the
    /// group does not exist (`unknown-id`) or is not a project group
    /// (`group-type`); returns [`GroupCreationError::Directory`] when the
    /// directory fails.
    pub async fn check_link(&self, request: &GroupLinkRequest) -> Result<(), GroupCreationError> {
        let group = &request.group;
        let result = match self.directory.scope(group).await? {
            None => Err(GroupCreationError::on_group(RuleViolation::unknown_id(group.as_str()))),
            Some(scope) if scope != PROJECT_SCOPE => {
                Err(GroupCreationError::on_group(RuleViolation::group_type(group)))
            }
            Some(_) => Ok(()),
        };
        if let Err(err) = &result {
            warn!(%group, error = %err, "group link rejected");
        }
        result
    }

    async fn evaluate(&self, request: &GroupCreationRequest) -> Result<(), GroupCreationError> {
        let group = &request.group;
        if self.directory.exists(group).await? {
            return Err(GroupCreationError::on_group(RuleViolation::already_exist(
                group,
            )));
        }

        if !group.extends(&request.organisation) {
            return Err(GroupCreationError::on_group(RuleViolation::pattern(
                format!("{}-.+", request.organisation),
            )));
        }

        let key = request.project_key.as_str();
        if group.as_str() != key && !group.extends(key) {
            return Err(GroupCreationError::on_group(RuleViolation::pattern(
                format!("{key}(-.+)?"),
            )));
        }

        if let Some(parent) = &request.parent {
            if !self.directory.exists(parent).await? {
                return Err(GroupCreationError::Rejected {
                    field: FieldId::PARENT_GROUP,
                    violation: RuleViolation::unknown_id(parent.as_str()),
                });
            }
            if !group.as_str().starts_with(&format!("{parent}-")) {
                return Err(GroupCreationError::on_group(RuleViolation::pattern(
                    format!("{parent}-.*"),
                )));
            }
        }

        Ok(())
    }
}
