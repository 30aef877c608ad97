//! Shared world state for group name validation BDD scenarios.

use std::sync::Arc;
use std::time::Duration;

use rstest::fixture;
use sqlid_form::subscription::{
    adapters::memory::{InMemoryFormSurface, InMemoryGroupDirectory, StaticFormHost},
    domain::{
        ContainerContext, FieldFeedback, FieldId, FieldParameter, FormConfiguration, FormMode,
        ProviderCategory,
    },
    services::{GroupNameValidator, SubscriptionParameterConfigurator},
};

/// Scenario world for group name validation behaviour tests.
pub struct GroupFormWorld {
    /// Groups known to the identity service.
    pub directory: Arc<InMemoryGroupDirectory>,
    /// Live form values and feedback.
    pub surface: Arc<InMemoryFormSurface>,
    /// Configured form, once a scenario created it.
    pub configuration: Option<FormConfiguration>,
    /// Verdict of the last validation.
    pub last_accepted: Option<bool>,
}

impl GroupFormWorld {
    /// Creates a world with an empty directory and no form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            directory: Arc::new(InMemoryGroupDirectory::new()),
            surface: Arc::new(InMemoryFormSurface::new()),
            configuration: None,
            last_accepted: None,
        }
    }

    /// Configures and renders a creation form for `host`.
    pub fn open_creation_form(&mut self, host: StaticFormHost) -> Result<(), eyre::Report> {
        let host = Arc::new(host);
        let validator = Arc::new(GroupNameValidator::new(
            Arc::clone(&host),
            Arc::clone(&self.directory),
            Arc::clone(&self.surface),
            tokio::runtime::Handle::current(),
        ));
        let configurator = SubscriptionParameterConfigurator::new(host, validator);
        let mut configuration = FormConfiguration::new(FormMode::Create);
        configurator.configure(&mut configuration, &ContainerContext::new("subscribe-wizard"));
        for field in [FieldId::PARENT_GROUP, FieldId::GROUP] {
            configuration
                .render(&ProviderCategory::FORM_GROUP, &FieldParameter::new(field))
                .map_err(|err| eyre::eyre!("render failed: {err}"))?;
        }
        self.configuration = Some(configuration);
        Ok(())
    }
}

impl Default for GroupFormWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> GroupFormWorld {
    GroupFormWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Waits until the group field leaves the pending state.
pub fn settled_feedback(surface: &InMemoryFormSurface) -> Result<FieldFeedback, eyre::Report> {
    run_async(tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let feedback = surface.feedback(&FieldId::GROUP);
            if feedback != FieldFeedback::Pending {
                return feedback;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }))
    .map_err(|_| eyre::eyre!("group validation did not settle"))
}
