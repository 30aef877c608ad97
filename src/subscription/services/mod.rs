//! Application services for the subscription form.

mod configurator;
mod creation;
mod validator;

pub use configurator::{
    GROUP_SEARCH_ENDPOINT, GROUP_SEARCH_QUERY_PREFIX, SQL_GROUP_SEARCH_ENDPOINT,
    SubscriptionParameterConfigurator,
};
pub use creation::{
    GroupCreationError, GroupCreationPolicy, GroupCreationRequest, GroupLinkRequest,
};
pub use validator::{ExistenceOutcome, GroupNameValidator, ValidationRun, ValidationTicket};
