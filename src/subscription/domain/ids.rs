//! Identifier types for the subscription form domain.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Opaque key identifying a logical form field.
///
/// Well-known identifiers of the identity service are exposed as associated
/// constants; other fields can be named with [`FieldId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(Cow<'static, str>);

impl FieldId {
    /// Parent group selected for the new group.
    pub const PARENT_GROUP: Self = Self(Cow::Borrowed("service:id:parent-group"));

    /// Full group name of the subscription.
    pub const GROUP: Self = Self(Cow::Borrowed("service:id:group"));

    /// User-entered last segment of the group name in creation mode.
    pub const GROUP_SIMPLE_NAME: Self = Self(Cow::Borrowed("service:id:group-simple-name"));

    /// Organisation (OU) hosting the group.
    pub const ORGANISATION: Self = Self(Cow::Borrowed("service:id:ou"));

    /// Creates a field identifier from an arbitrary key.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category of field providers, such as the `form-group` renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderCategory(Cow<'static, str>);

impl ProviderCategory {
    /// Providers rendering a field inside a labelled form group.
    pub const FORM_GROUP: Self = Self(Cow::Borrowed("form-group"));

    /// Creates a provider category from an arbitrary key.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    /// Returns the category as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle on the view hosting the form.
///
/// The host answers capability queries, such as node mode, against it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerContext(String);

impl ContainerContext {
    /// Creates a container context from the hosting view's name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the container name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
