//! Field descriptors and the rendered form model.

use super::FieldId;
use serde::{Deserialize, Serialize};

/// Descriptor of a form field, as handed to a field provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldParameter {
    id: FieldId,
    mandatory: bool,
    description: Option<String>,
}

impl FieldParameter {
    /// Creates an optional field without description.
    #[must_use]
    pub const fn new(id: FieldId) -> Self {
        Self {
            id,
            mandatory: false,
            description: None,
        }
    }

    /// Marks the field as mandatory.
    #[must_use]
    pub const fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    /// Sets the descriptive text shown with the field.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns a copy of this descriptor without descriptive text.
    #[must_use]
    pub fn without_description(&self) -> Self {
        Self {
            description: None,
            ..self.clone()
        }
    }

    /// Returns the field identifier.
    #[must_use]
    pub const fn id(&self) -> &FieldId {
        &self.id
    }

    /// Returns `true` when a value is required.
    #[must_use]
    pub const fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    /// Returns the descriptive text, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Search endpoint queried by a remote-search field as the user types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoteSearch {
    endpoint: String,
    query_prefix: Option<String>,
}

impl RemoteSearch {
    /// Creates a search appending the encoded term to the endpoint path.
    #[must_use]
    pub fn path_suffixed(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            query_prefix: None,
        }
    }

    /// Creates a search passing the encoded term after a query prefix.
    #[must_use]
    pub fn with_query(endpoint: impl Into<String>, query_prefix: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            query_prefix: Some(query_prefix.into()),
        }
    }

    /// Returns the endpoint path, relative to the REST base.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the query prefix, if the term is passed as a parameter.
    #[must_use]
    pub fn query_prefix(&self) -> Option<&str> {
        self.query_prefix.as_deref()
    }

    /// Builds the relative URL the widget requests for `term`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlid_form::subscription::domain::RemoteSearch;
    ///
    /// let search = RemoteSearch::with_query("service/id/group", "search[value]=");
    /// assert_eq!(search.query_url("dev ops"), "service/id/group?search[value]=dev%20ops");
    ///
    /// let search = RemoteSearch::path_suffixed("service/id/sql/group/");
    /// assert_eq!(search.query_url("dev"), "service/id/sql/group/dev");
    /// ```
    #[must_use]
    pub fn query_url(&self, term: &str) -> String {
        let encoded = urlencoding::encode(term);
        match &self.query_prefix {
            Some(prefix) => format!("{}?{prefix}{encoded}", self.endpoint),
            None => format!("{}{encoded}", self.endpoint),
        }
    }
}

/// How an input is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputKind {
    /// Plain text entry.
    Text,
    /// Picker fed by a remote search endpoint.
    RemoteSearch {
        /// The endpoint queried as the user types.
        search: RemoteSearch,
    },
}

/// A rendered input element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInput {
    id: FieldId,
    kind: InputKind,
    required: bool,
    read_only: bool,
    autocomplete: bool,
    description: Option<String>,
}

impl FieldInput {
    /// Creates an editable, optional text input.
    #[must_use]
    pub const fn text(id: FieldId) -> Self {
        Self {
            id,
            kind: InputKind::Text,
            required: false,
            read_only: false,
            autocomplete: true,
            description: None,
        }
    }

    /// Turns this input into a remote-search picker.
    #[must_use]
    pub fn with_remote_search(mut self, search: RemoteSearch) -> Self {
        self.kind = InputKind::RemoteSearch { search };
        self
    }

    /// Disables browser autocompletion.
    #[must_use]
    pub const fn without_autocomplete(mut self) -> Self {
        self.autocomplete = false;
        self
    }

    /// Marks the input as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Locks or unlocks manual edition.
    pub const fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Sets the descriptive text shown under the input.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Returns the field identifier.
    #[must_use]
    pub const fn id(&self) -> &FieldId {
        &self.id
    }

    /// Returns how the input is rendered.
    #[must_use]
    pub const fn kind(&self) -> &InputKind {
        &self.kind
    }

    /// Returns the remote search, when the input is a picker.
    #[must_use]
    pub const fn remote_search(&self) -> Option<&RemoteSearch> {
        match &self.kind {
            InputKind::RemoteSearch { search } => Some(search),
            InputKind::Text => None,
        }
    }

    /// Returns `true` when a value is required.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Returns `true` when manual edition is locked.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns `true` when browser autocompletion is allowed.
    #[must_use]
    pub const fn has_autocomplete(&self) -> bool {
        self.autocomplete
    }

    /// Returns the descriptive text, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Container produced by rendering one field: its inputs, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormGroup {
    field: FieldId,
    inputs: Vec<FieldInput>,
}

impl FormGroup {
    /// Creates an empty container for `field`.
    #[must_use]
    pub const fn new(field: FieldId) -> Self {
        Self {
            field,
            inputs: Vec::new(),
        }
    }

    /// Returns the field this container was rendered for.
    #[must_use]
    pub const fn field(&self) -> &FieldId {
        &self.field
    }

    /// Appends an input.
    pub fn push(&mut self, input: FieldInput) {
        self.inputs.push(input);
    }

    /// Returns all inputs, in render order.
    #[must_use]
    pub fn inputs(&self) -> &[FieldInput] {
        &self.inputs
    }

    /// Finds an input by identifier.
    #[must_use]
    pub fn input(&self, id: &FieldId) -> Option<&FieldInput> {
        self.inputs.iter().find(|input| input.id() == id)
    }

    /// Finds an input by identifier for modification.
    pub fn input_mut(&mut self, id: &FieldId) -> Option<&mut FieldInput> {
        self.inputs.iter_mut().find(|input| input.id() == id)
    }
}
