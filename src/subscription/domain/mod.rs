//! Domain model for the subscription form of the SQL identity service.
//!
//! The domain covers form field descriptors, the typed registry of field
//! validators and providers, the rendered field model, the derived group
//! name and the validation feedback attached to a field.
//! Rendering and transport concerns are kept outside the domain boundary.

mod configuration;
mod error;
mod feedback;
mod field;
mod group_name;
mod ids;
mod mode;

pub use configuration::{
    FieldProvider, FieldValidator, FormConfiguration, FormConfigurationError, RenderScope,
    standard_text_provider,
};
pub use error::{GroupDomainError, ParseFormModeError};
pub use feedback::{FeedbackIcon, FieldFeedback, GROUP_CHANNEL, RuleViolation, ValidationRule};
pub use field::{FieldInput, FieldParameter, FormGroup, InputKind, RemoteSearch};
pub use group_name::{
    GroupName, GroupNameComponents, PROJECT_SCOPE, ProjectKey, derive_full_name,
};
pub use ids::{ContainerContext, FieldId, ProviderCategory};
pub use mode::FormMode;
