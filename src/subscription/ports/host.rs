//! Host framework capabilities injected into the configurator.

use crate::subscription::domain::{
    ContainerContext, FieldId, FormConfiguration, ProjectKey, RemoteSearch,
};

/// Capabilities the host form framework exposes to this plugin.
#[cfg_attr(test, mockall::automock)]
pub trait FormHost: Send + Sync {
    /// Returns `true` when the entity hosting `container` is itself a node
    /// rather than a project subscription.
    fn is_node_mode(&self, container: &ContainerContext) -> bool;

    /// Returns the reserved key (`pkey`) of the project being configured.
    fn project_key(&self) -> ProjectKey;

    /// Renders `field` as a remote-search picker.
    ///
    /// The default installs the generic picker provider of the
    /// configuration.
    fn register_remote_search_field(
        &self,
        configuration: &mut FormConfiguration,
        field: &FieldId,
        search: RemoteSearch,
    ) {
        configuration.register_remote_search(field, search);
    }
}
