//! In-memory form surface.

use crate::subscription::{
    domain::{FeedbackIcon, FieldFeedback, FieldId, RuleViolation},
    ports::FormSurface,
};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

/// Snapshot of one field of an [`InMemoryFormSurface`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Current value, `None` until set.
    pub value: Option<String>,
    /// Current validation feedback.
    pub feedback: FieldFeedback,
    /// Inline icon shown next to the field.
    pub icon: Option<FeedbackIcon>,
    /// Whether the field's form group carries feedback.
    pub has_feedback: bool,
}

/// Thread-safe in-memory rendition of the live form.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFormSurface {
    fields: Arc<RwLock<HashMap<FieldId, FieldState>>>,
}

impl InMemoryFormSurface {
    /// Creates a surface without any field value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the user typing `value` into `field`.
    pub fn type_value(&self, field: &FieldId, value: impl Into<String>) {
        self.write().entry(field.clone()).or_default().value = Some(value.into());
    }

    /// Removes the value of `field`, as if the field were not rendered.
    pub fn clear_value(&self, field: &FieldId) {
        if let Some(state) = self.write().get_mut(field) {
            state.value = None;
        }
    }

    /// Returns a snapshot of `field`.
    #[must_use]
    pub fn field(&self, field: &FieldId) -> FieldState {
        self.fields
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(field)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the current feedback of `field`.
    #[must_use]
    pub fn feedback(&self, field: &FieldId) -> FieldFeedback {
        self.field(field).feedback
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<FieldId, FieldState>> {
        self.fields.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, field: &FieldId, apply: impl FnOnce(&mut FieldState)) {
        apply(self.write().entry(field.clone()).or_default());
    }
}

impl FormSurface for InMemoryFormSurface {
    fn value(&self, field: &FieldId) -> Option<String> {
        self.fields
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(field)
            .and_then(|state| state.value.clone())
    }

    fn set_value(&self, field: &FieldId, value: &str) {
        self.update(field, |state| state.value = Some(value.to_owned()));
    }

    fn prepare_feedback(&self, field: &FieldId) {
        self.update(field, |state| {
            state.icon = None;
            state.has_feedback = true;
        });
    }

    fn reset(&self, field: &FieldId) {
        self.update(field, |state| {
            state.feedback = FieldFeedback::Idle;
            state.icon = None;
        });
    }

    fn add_error(&self, field: &FieldId, violation: RuleViolation) {
        self.update(field, |state| {
            state.feedback = FieldFeedback::Error { violation };
            state.icon = None;
        });
    }

    fn add_success(&self, field: &FieldId, _silent: bool) {
        self.update(field, |state| {
            state.feedback = FieldFeedback::Success;
            state.icon = None;
        });
    }

    fn add_message(&self, field: &FieldId, message: Option<String>, icon: FeedbackIcon) {
        self.update(field, |state| {
            state.icon = Some(icon);
            state.feedback = match icon {
                FeedbackIcon::Pending => FieldFeedback::Pending,
                FeedbackIcon::Retry => FieldFeedback::Inconclusive {
                    message: message.unwrap_or_default(),
                },
            };
        });
    }
}
