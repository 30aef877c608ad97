//! Fixed host capabilities.

use crate::subscription::{
    domain::{ContainerContext, ProjectKey},
    ports::FormHost,
};

/// Host adapter answering with a fixed project key and node mode flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFormHost {
    project_key: ProjectKey,
    node_mode: bool,
}

impl StaticFormHost {
    /// Creates a host configuring a subscription of `project_key`.
    #[must_use]
    pub const fn new(project_key: ProjectKey) -> Self {
        Self {
            project_key,
            node_mode: false,
        }
    }

    /// Makes every container answer as a node.
    #[must_use]
    pub const fn in_node_mode(mut self) -> Self {
        self.node_mode = true;
        self
    }
}

impl FormHost for StaticFormHost {
    fn is_node_mode(&self, _container: &ContainerContext) -> bool {
        self.node_mode
    }

    fn project_key(&self) -> ProjectKey {
        self.project_key.clone()
    }
}
