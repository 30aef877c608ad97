//! Typed registry of field validators and field providers.
//!
//! [`FormConfiguration`] is the runtime descriptor of one form instance.
//! Plugins register validators and renderers against field identifiers;
//! the form framework then calls [`FormConfiguration::render`] when a field
//! is drawn and [`FormConfiguration::validate_field`] when it changes.

use super::{
    FieldId, FieldInput, FieldParameter, FormGroup, FormMode, ProviderCategory, RemoteSearch,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Validator invoked when a watched field changes.
///
/// Returns whether the form may proceed right now.
pub type FieldValidator = Arc<dyn Fn() -> bool + Send + Sync>;

/// Renderer turning a field descriptor into form UI.
///
/// The provider receives the input created for the field and appends
/// whatever it renders to the scope's container.
pub type FieldProvider =
    Arc<dyn Fn(&mut RenderScope<'_>, &FieldParameter, FieldInput) + Send + Sync>;

/// Errors returned while rendering a field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormConfigurationError {
    /// Neither a field-specific nor a standard provider is registered.
    #[error("no {category} provider registered for field {field}")]
    MissingProvider {
        /// Provider category.
        category: ProviderCategory,
        /// Field being rendered.
        field: FieldId,
    },
}

/// Mutable view handed to a provider while it renders one field.
pub struct RenderScope<'a> {
    container: &'a mut FormGroup,
    validators: &'a mut HashMap<FieldId, FieldValidator>,
}

impl<'a> RenderScope<'a> {
    fn new(
        container: &'a mut FormGroup,
        validators: &'a mut HashMap<FieldId, FieldValidator>,
    ) -> Self {
        Self {
            container,
            validators,
        }
    }

    /// Returns the container being rendered.
    pub fn container(&mut self) -> &mut FormGroup {
        self.container
    }

    /// Registers a validator from within a provider.
    pub fn register_validator(&mut self, field: FieldId, validator: FieldValidator) {
        self.validators.insert(field, validator);
    }
}

#[derive(Default, Clone)]
struct ProviderTable {
    standard: Option<FieldProvider>,
    by_field: HashMap<FieldId, FieldProvider>,
}

/// Runtime descriptor of a form instance.
#[derive(Clone)]
pub struct FormConfiguration {
    mode: FormMode,
    validators: HashMap<FieldId, FieldValidator>,
    providers: HashMap<ProviderCategory, ProviderTable>,
}

impl FormConfiguration {
    /// Creates a configuration whose `form-group` category renders plain
    /// text fields.
    #[must_use]
    pub fn new(mode: FormMode) -> Self {
        let standard: FieldProvider = Arc::new(standard_text_provider);
        let mut providers = HashMap::new();
        providers.insert(
            ProviderCategory::FORM_GROUP,
            ProviderTable {
                standard: Some(standard),
                by_field: HashMap::new(),
            },
        );
        Self {
            mode,
            validators: HashMap::new(),
            providers,
        }
    }

    /// Returns the form mode.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Registers the validator run when `field` changes, replacing any
    /// previous one.
    pub fn register_validator(&mut self, field: FieldId, validator: FieldValidator) {
        self.validators.insert(field, validator);
    }

    /// Returns the validator registered for `field`.
    #[must_use]
    pub fn validator(&self, field: &FieldId) -> Option<FieldValidator> {
        self.validators.get(field).cloned()
    }

    /// Runs the validator registered for `field`.
    ///
    /// Returns `None` when no validator is registered.
    pub fn validate_field(&self, field: &FieldId) -> Option<bool> {
        self.validators.get(field).map(|validator| validator())
    }

    /// Registers the renderer of `field` in `category`, replacing any
    /// previous one.
    pub fn register_field_provider(
        &mut self,
        category: ProviderCategory,
        field: FieldId,
        provider: FieldProvider,
    ) {
        self.providers
            .entry(category)
            .or_default()
            .by_field
            .insert(field, provider);
    }

    /// Sets the fallback renderer of `category`.
    pub fn register_standard_provider(
        &mut self,
        category: ProviderCategory,
        provider: FieldProvider,
    ) {
        self.providers.entry(category).or_default().standard = Some(provider);
    }

    /// Returns the renderer registered specifically for `field`.
    #[must_use]
    pub fn field_provider(
        &self,
        category: &ProviderCategory,
        field: &FieldId,
    ) -> Option<FieldProvider> {
        self.providers
            .get(category)
            .and_then(|table| table.by_field.get(field))
            .cloned()
    }

    /// Returns the fallback renderer of `category`.
    #[must_use]
    pub fn standard_provider(&self, category: &ProviderCategory) -> Option<FieldProvider> {
        self.providers
            .get(category)
            .and_then(|table| table.standard.clone())
    }

    /// Returns the renderer for `field`, falling back to the category's
    /// standard one.
    #[must_use]
    pub fn provider_or_standard(
        &self,
        category: &ProviderCategory,
        field: &FieldId,
    ) -> Option<FieldProvider> {
        self.field_provider(category, field)
            .or_else(|| self.standard_provider(category))
    }

    /// Renders `field` in the `form-group` category as a remote-search
    /// picker.
    pub fn register_remote_search(&mut self, field: &FieldId, search: RemoteSearch) {
        let provider: FieldProvider = Arc::new(
            move |scope: &mut RenderScope<'_>, parameter: &FieldParameter, input: FieldInput| {
                standard_text_provider(scope, parameter, input.with_remote_search(search.clone()));
            },
        );
        self.register_field_provider(ProviderCategory::FORM_GROUP, field.clone(), provider);
    }

    /// Renders `parameter` with its provider in `category`.
    ///
    /// # Errors
    ///
    /// Returns [`FormConfigurationError::MissingProvider`] when neither a
    /// field-specific nor a standard provider is registered.
    pub fn render(
        &mut self,
        category: &ProviderCategory,
        parameter: &FieldParameter,
    ) -> Result<FormGroup, FormConfigurationError> {
        let provider = self
            .provider_or_standard(category, parameter.id())
            .ok_or_else(|| FormConfigurationError::MissingProvider {
                category: category.clone(),
                field: parameter.id().clone(),
            })?;
        let mut container = FormGroup::new(parameter.id().clone());
        let input = FieldInput::text(parameter.id().clone());
        let mut scope = RenderScope::new(&mut container, &mut self.validators);
        provider(&mut scope, parameter, input);
        Ok(container)
    }
}

impl fmt::Debug for FormConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut validators: Vec<&str> = self.validators.keys().map(FieldId::as_str).collect();
        validators.sort_unstable();
        f.debug_struct("FormConfiguration")
            .field("mode", &self.mode)
            .field("validators", &validators)
            .field("categories", &self.providers.len())
            .finish()
    }
}

/// Renders a field as a plain labelled input.
///
/// The input inherits the parameter's description and mandatory flag and is
/// appended to the scope's container.
pub fn standard_text_provider(
    scope: &mut RenderScope<'_>,
    parameter: &FieldParameter,
    input: FieldInput,
) {
    let mut input = if parameter.is_mandatory() {
        input.required()
    } else {
        input
    };
    input.set_description(parameter.description().map(str::to_owned));
    scope.container().push(input);
}
