//! Then steps for group name validation BDD scenarios.

use super::world::{GroupFormWorld, settled_feedback};
use rstest_bdd_macros::then;
use sqlid_form::subscription::domain::{FieldFeedback, FieldId};

#[then("the validation is accepted")]
fn validation_is_accepted(world: &GroupFormWorld) -> Result<(), eyre::Report> {
    if world.last_accepted != Some(true) {
        return Err(eyre::eyre!(
            "expected an accepted validation, got {:?}",
            world.last_accepted
        ));
    }
    Ok(())
}

#[then("the validation is refused")]
fn validation_is_refused(world: &GroupFormWorld) -> Result<(), eyre::Report> {
    if world.last_accepted != Some(false) {
        return Err(eyre::eyre!(
            "expected a refused validation, got {:?}",
            world.last_accepted
        ));
    }
    Ok(())
}

#[then(r#"the group field shows "{expected}""#)]
fn group_field_shows(world: &GroupFormWorld, expected: String) -> Result<(), eyre::Report> {
    let value = world.surface.field(&FieldId::GROUP).value;
    if value.as_deref() != Some(expected.as_str()) {
        return Err(eyre::eyre!("expected group '{expected}', got {value:?}"));
    }
    Ok(())
}

#[then("the group field ends in success")]
fn group_field_ends_in_success(world: &GroupFormWorld) -> Result<(), eyre::Report> {
    let feedback = settled_feedback(&world.surface)?;
    if feedback != FieldFeedback::Success {
        return Err(eyre::eyre!("expected success, got {feedback:?}"));
    }
    Ok(())
}

#[then(r#"the group field ends with the "{rule}" rule"#)]
fn group_field_ends_with_rule(world: &GroupFormWorld, rule: String) -> Result<(), eyre::Report> {
    let feedback = settled_feedback(&world.surface)?;
    let Some(violation) = feedback.violation() else {
        return Err(eyre::eyre!("expected rule '{rule}', got {feedback:?}"));
    };
    if violation.rule().as_str() != rule || !violation.is_blocking() {
        return Err(eyre::eyre!("expected blocking rule '{rule}', got {violation:?}"));
    }
    Ok(())
}

#[then("no existence check was issued")]
fn no_existence_check(world: &GroupFormWorld) -> Result<(), eyre::Report> {
    let queries = world.directory.queries();
    if !queries.is_empty() {
        return Err(eyre::eyre!("expected no existence check, got {queries:?}"));
    }
    Ok(())
}
