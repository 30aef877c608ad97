//! Live form state: field values and validation feedback.

use crate::subscription::domain::{FeedbackIcon, FieldId, RuleViolation};

/// Field lookup and validation feedback of the rendered form.
///
/// Calls are UI mutations and cannot fail. Implementations must be safe to
/// call from the task completing a remote check.
///
/// Writes made while a validation pass reports may synchronously fire
/// change handlers that validate again; the validator defers those calls.
/// Writes made by a completing remote check must not validate
/// synchronously.
pub trait FormSurface: Send + Sync {
    /// Returns the current value of `field`, or `None` when the field is
    /// not rendered.
    fn value(&self, field: &FieldId) -> Option<String>;

    /// Replaces the current value of `field`.
    fn set_value(&self, field: &FieldId, value: &str);

    /// Removes any inline icon from the field's form group and marks the
    /// group as carrying feedback.
    fn prepare_feedback(&self, field: &FieldId);

    /// Clears all validation feedback of `field`.
    fn reset(&self, field: &FieldId);

    /// Reports a failed rule on `field`.
    fn add_error(&self, field: &FieldId, violation: RuleViolation);

    /// Marks `field` as valid. A silent success shows no message.
    fn add_success(&self, field: &FieldId, silent: bool);

    /// Shows a transient message and icon next to `field`.
    fn add_message(&self, field: &FieldId, message: Option<String>, icon: FeedbackIcon);
}
