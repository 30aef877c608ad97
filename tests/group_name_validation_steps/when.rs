//! When steps for group name validation BDD scenarios.

use super::world::GroupFormWorld;
use rstest_bdd_macros::when;
use sqlid_form::subscription::domain::FieldId;

#[when(r#"the user types the simple name "{simple_name}""#)]
fn user_types_simple_name(
    world: &mut GroupFormWorld,
    simple_name: String,
) -> Result<(), eyre::Report> {
    world.surface.type_value(&FieldId::GROUP_SIMPLE_NAME, simple_name);
    let configuration = world
        .configuration
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no form in scenario world"))?;
    world.last_accepted = configuration.validate_field(&FieldId::GROUP_SIMPLE_NAME);
    if world.last_accepted.is_none() {
        return Err(eyre::eyre!("simple name has no validator"));
    }
    Ok(())
}
