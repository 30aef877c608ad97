//! Form rendering mode.

use super::ParseFormModeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mode in which the subscription form is instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    /// A new subscription creates the underlying group.
    Create,
    /// A new subscription links to an existing group.
    Link,
    /// An existing subscription is edited.
    Edit,
}

impl FormMode {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Link => "link",
            Self::Edit => "edit",
        }
    }

    /// Returns `true` for [`FormMode::Create`].
    #[must_use]
    pub const fn is_create(self) -> bool {
        matches!(self, Self::Create)
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for FormMode {
    type Error = ParseFormModeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "create" => Ok(Self::Create),
            "link" => Ok(Self::Link),
            "edit" => Ok(Self::Edit),
            _ => Err(ParseFormModeError(value.to_owned())),
        }
    }
}
