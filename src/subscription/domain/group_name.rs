//! Derived group names and the project key namespace they live in.

use super::GroupDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the segments of a hierarchical group name.
const SEPARATOR: char = '-';

/// Computes the full group name from its three components.
///
/// The prefix is the parent group when present, otherwise the organisation,
/// otherwise nothing. The simple name is lowercased.
///
/// # Examples
///
/// ```
/// use sqlid_form::subscription::domain::derive_full_name;
///
/// assert_eq!(derive_full_name("proj1-ou1", "proj1", "Web"), "proj1-ou1-web");
/// assert_eq!(derive_full_name("", "proj1", "Web"), "proj1-web");
/// assert_eq!(derive_full_name("", "", "Web"), "web");
/// ```
#[must_use]
pub fn derive_full_name(parent: &str, organisation: &str, simple_name: &str) -> String {
    let prefix = if parent.is_empty() {
        organisation
    } else {
        parent
    };
    let simple = simple_name.to_lowercase();
    if prefix.is_empty() {
        simple
    } else {
        format!("{prefix}{SEPARATOR}{simple}")
    }
}

/// The three user inputs a group name is derived from.
///
/// Components are read fresh from the form on every validation pass. An
/// absent or whitespace-only value counts as empty; other values are kept
/// verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupNameComponents {
    parent: String,
    organisation: String,
    simple_name: String,
}

impl GroupNameComponents {
    /// Creates the components from raw field values.
    #[must_use]
    pub fn new(
        parent: Option<String>,
        organisation: Option<String>,
        simple_name: Option<String>,
    ) -> Self {
        Self {
            parent: normalize(parent),
            organisation: normalize(organisation),
            simple_name: normalize(simple_name),
        }
    }

    /// Returns the parent group, possibly empty.
    #[must_use]
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// Returns the organisation, possibly empty.
    #[must_use]
    pub fn organisation(&self) -> &str {
        &self.organisation
    }

    /// Returns the user-entered simple name, possibly empty.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Derives the full group name.
    #[must_use]
    pub fn full_name(&self) -> GroupName {
        GroupName(derive_full_name(
            &self.parent,
            &self.organisation,
            &self.simple_name,
        ))
    }
}

fn normalize(value: Option<String>) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or_default()
}

/// A full, hierarchical group name.
///
/// Derived names may be empty or violate the project namespace; checking
/// them is the validator's concern, not the constructor's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupName(String);

impl GroupName {
    /// Wraps an already composed group name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the group name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when this name starts with `prefix` followed by a
    /// separator and at least one more character.
    #[must_use]
    pub fn extends(&self, prefix: &str) -> bool {
        self.0
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(SEPARATOR))
            .is_some_and(|rest| !rest.is_empty())
    }
}

impl AsRef<str> for GroupName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scope of the groups a project subscription may be linked to.
pub const PROJECT_SCOPE: &str = "Project";

/// Reserved key of the project being configured (`pkey`).
///
/// Every derived group name must live in this key's namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectKey(String);

impl ProjectKey {
    /// Creates a validated project key.
    ///
    /// # Errors
    ///
    /// Returns [`GroupDomainError::EmptyProjectKey`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, GroupDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GroupDomainError::EmptyProjectKey);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when `name` equals this key or starts with the key
    /// followed by a separator.
    #[must_use]
    pub fn admits(&self, name: &GroupName) -> bool {
        name.as_str() == self.0
            || name
                .as_str()
                .strip_prefix(self.0.as_str())
                .is_some_and(|rest| rest.starts_with(SEPARATOR))
    }
}

impl AsRef<str> for ProjectKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
