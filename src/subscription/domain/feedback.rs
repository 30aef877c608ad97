//! Validation feedback attached to a form field.

use super::{FieldId, GroupName, ProjectKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical error channel the group rules report on.
pub const GROUP_CHANNEL: &str = "group";

/// Structured rule identifiers understood by the form's message catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationRule {
    /// The value must start with a given prefix.
    #[serde(rename = "StartsWith")]
    StartsWith,
    /// The value names an entity that already exists.
    #[serde(rename = "already-exist")]
    AlreadyExist,
    /// The value must match a pattern.
    #[serde(rename = "pattern")]
    Pattern,
    /// The value references an entity that does not exist.
    #[serde(rename = "unknown-id")]
    UnknownId,
    /// The referenced group is not a project group.
    #[serde(rename = "group-type")]
    GroupType,
}

impl ValidationRule {
    /// Returns the rule identifier as exchanged with the message catalogue.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StartsWith => "StartsWith",
            Self::AlreadyExist => "already-exist",
            Self::Pattern => "pattern",
            Self::UnknownId => "unknown-id",
            Self::GroupType => "group-type",
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed rule, its parameters, and how it should be reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleViolation {
    rule: ValidationRule,
    parameters: Vec<String>,
    channel: String,
    blocking: bool,
}

impl RuleViolation {
    /// Creates a blocking violation on the group channel.
    #[must_use]
    pub fn new(rule: ValidationRule, parameters: impl IntoIterator<Item = String>) -> Self {
        Self {
            rule,
            parameters: parameters.into_iter().collect(),
            channel: GROUP_CHANNEL.to_owned(),
            blocking: true,
        }
    }

    /// The derived name is outside the project namespace.
    #[must_use]
    pub fn starts_with(key: &ProjectKey) -> Self {
        Self::new(ValidationRule::StartsWith, [key.as_str().to_owned()])
    }

    /// The group already exists in the directory.
    #[must_use]
    pub fn already_exist(name: &GroupName) -> Self {
        Self::new(
            ValidationRule::AlreadyExist,
            [FieldId::GROUP.as_str().to_owned(), name.as_str().to_owned()],
        )
    }

    /// The value does not match `pattern`.
    #[must_use]
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::new(ValidationRule::Pattern, [pattern.into()])
    }

    /// The referenced identifier is unknown.
    #[must_use]
    pub fn unknown_id(id: impl Into<String>) -> Self {
        Self::new(ValidationRule::UnknownId, [id.into()])
    }

    /// The group exists but outside the project scope.
    #[must_use]
    pub fn group_type(name: &GroupName) -> Self {
        Self::new(ValidationRule::GroupType, [name.as_str().to_owned()])
    }

    /// Returns the violated rule.
    #[must_use]
    pub const fn rule(&self) -> ValidationRule {
        self.rule
    }

    /// Returns the message parameters.
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Returns the logical error channel.
    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Returns `true` when the violation blocks submission.
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        self.blocking
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.rule, self.parameters.join(", "))
    }
}

/// Inline icon shown next to a field while its state is not final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackIcon {
    /// A spinner while the remote check is in flight.
    Pending,
    /// A retry marker after the remote check could not complete.
    Retry,
}

impl FeedbackIcon {
    /// Returns the icon's CSS classes.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "fas fa-sync-alt fa-spin",
            Self::Retry => "fas fa-redo",
        }
    }
}

/// Current validation state of a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FieldFeedback {
    /// No feedback is attached.
    #[default]
    Idle,
    /// A remote check is in flight.
    Pending,
    /// The value is valid.
    Success,
    /// A rule failed.
    Error {
        /// The failed rule.
        violation: RuleViolation,
    },
    /// The remote check could not complete; re-validating retries it.
    Inconclusive {
        /// Diagnostic shown next to the retry icon.
        message: String,
    },
}

impl FieldFeedback {
    /// Returns `true` when the feedback blocks submission.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        match self {
            Self::Error { violation } => violation.is_blocking(),
            Self::Idle | Self::Pending | Self::Success | Self::Inconclusive { .. } => false,
        }
    }

    /// Returns the violation when the field is in error.
    #[must_use]
    pub const fn violation(&self) -> Option<&RuleViolation> {
        match self {
            Self::Error { violation } => Some(violation),
            Self::Idle | Self::Pending | Self::Success | Self::Inconclusive { .. } => None,
        }
    }
}
