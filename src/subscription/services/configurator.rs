//! Registration of the group parameters of a subscription form.
//!
//! In creation mode, outside node mode, the group name is not typed by the
//! user: it is computed from the parent group (or organisation) and a
//! user-entered simple name, and the group field is locked. In every other
//! case the group is picked among existing ones.

use crate::subscription::{
    domain::{
        ContainerContext, FieldId, FieldInput, FieldParameter, FieldProvider, FieldValidator,
        FormConfiguration, ProviderCategory, RemoteSearch, RenderScope, standard_text_provider,
    },
    ports::{FormHost, FormSurface, GroupDirectory},
    services::GroupNameValidator,
};
use std::sync::Arc;
use tracing::info;

/// Group listing endpoint searched by the parent group picker.
pub const GROUP_SEARCH_ENDPOINT: &str = "service/id/group";

/// Query prefix carrying the search term for [`GROUP_SEARCH_ENDPOINT`].
pub const GROUP_SEARCH_QUERY_PREFIX: &str = "search[value]=";

/// Path-suffixed SQL group search used when linking to an existing group.
pub const SQL_GROUP_SEARCH_ENDPOINT: &str = "service/id/sql/group/";

/// Entry point customising the subscription form of the SQL identity
/// service.
pub struct SubscriptionParameterConfigurator<H, D, S>
where
    H: FormHost + 'static,
    D: GroupDirectory + 'static,
    S: FormSurface + 'static,
{
    host: Arc<H>,
    validator: Arc<GroupNameValidator<H, D, S>>,
}

impl<H, D, S> SubscriptionParameterConfigurator<H, D, S>
where
    H: FormHost + 'static,
    D: GroupDirectory + 'static,
    S: FormSurface + 'static,
{
    /// Creates a configurator delegating group validation to `validator`.
    #[must_use]
    pub const fn new(host: Arc<H>, validator: Arc<GroupNameValidator<H, D, S>>) -> Self {
        Self { host, validator }
    }

    /// Registers the parent group and group overrides of a form instance.
    pub fn configure(&self, configuration: &mut FormConfiguration, container: &ContainerContext) {
        self.register_parent_group(configuration, container, &FieldId::PARENT_GROUP);
        self.register_group(configuration, container, &FieldId::GROUP);
    }

    /// Renders the parent group as a group picker and, outside node mode,
    /// revalidates the derived group name when it changes.
    pub fn register_parent_group(
        &self,
        configuration: &mut FormConfiguration,
        container: &ContainerContext,
        field: &FieldId,
    ) {
        if !self.host.is_node_mode(container) {
            configuration.register_validator(field.clone(), self.group_name_validator());
        }
        self.host.register_remote_search_field(
            configuration,
            field,
            RemoteSearch::with_query(GROUP_SEARCH_ENDPOINT, GROUP_SEARCH_QUERY_PREFIX),
        );
    }

    /// Chooses how the group field is rendered.
    ///
    /// Creation mode outside node mode gets the computed, read-only group
    /// name plus a simple name input; everything else gets a picker over
    /// existing SQL groups.
    pub fn register_group(
        &self,
        configuration: &mut FormConfiguration,
        container: &ContainerContext,
        field: &FieldId,
    ) {
        let category = ProviderCategory::FORM_GROUP;
        if configuration.mode().is_create() && !self.host.is_node_mode(container) {
            info!(%field, %container, "group name is computed in creation mode");
            let provider = self.computed_group_provider(configuration, &category, field);
            configuration.register_field_provider(category, field.clone(), provider);
        } else {
            info!(%field, mode = %configuration.mode(), "group is picked among existing groups");
            self.host.register_remote_search_field(
                configuration,
                field,
                RemoteSearch::path_suffixed(SQL_GROUP_SEARCH_ENDPOINT),
            );
        }
    }

    fn group_name_validator(&self) -> FieldValidator {
        let validator = Arc::clone(&self.validator);
        Arc::new(move || validator.validate())
    }

    fn computed_group_provider(
        &self,
        configuration: &FormConfiguration,
        category: &ProviderCategory,
        field: &FieldId,
    ) -> FieldProvider {
        let previous = configuration.provider_or_standard(category, field);
        let standard = configuration.standard_provider(category);
        let simple_name_validator = self.group_name_validator();
        let group = field.clone();

        Arc::new(
            move |scope: &mut RenderScope<'_>, parameter: &FieldParameter, input: FieldInput| {
                scope.register_validator(
                    FieldId::GROUP_SIMPLE_NAME,
                    Arc::clone(&simple_name_validator),
                );

                // The description describes the full name, which is now computed
                let computed = parameter.without_description();
                match &previous {
                    Some(render) => render(scope, &computed, input),
                    None => standard_text_provider(scope, &computed, input),
                }
                if let Some(rendered) = scope.container().input_mut(&group) {
                    rendered.set_read_only(true);
                }

                let simple_name = FieldParameter::new(FieldId::GROUP_SIMPLE_NAME).mandatory();
                let simple_input = FieldInput::text(FieldId::GROUP_SIMPLE_NAME)
                    .required()
                    .without_autocomplete();
                match &standard {
                    Some(render) => render(scope, &simple_name, simple_input),
                    None => standard_text_provider(scope, &simple_name, simple_input),
                }
            },
        )
    }
}
