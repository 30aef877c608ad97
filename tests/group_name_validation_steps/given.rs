//! Given steps for group name validation BDD scenarios.

use super::world::GroupFormWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use sqlid_form::subscription::{
    adapters::memory::StaticFormHost,
    domain::{FieldId, ProjectKey},
};

#[given(r#"a creation form for project "{pkey}""#)]
fn creation_form_for_project(world: &mut GroupFormWorld, pkey: String) -> Result<(), eyre::Report> {
    let key = ProjectKey::new(pkey).wrap_err("project key for scenario")?;
    world.open_creation_form(StaticFormHost::new(key))
}

#[given(r#"an existing group "{name}""#)]
fn existing_group(world: &mut GroupFormWorld, name: String) {
    world.directory.insert(name);
}

#[given(r#"the organisation "{organisation}""#)]
fn the_organisation(world: &mut GroupFormWorld, organisation: String) {
    world.surface.type_value(&FieldId::ORGANISATION, organisation);
}

#[given(r#"the parent group "{parent}""#)]
fn the_parent_group(world: &mut GroupFormWorld, parent: String) {
    world.surface.type_value(&FieldId::PARENT_GROUP, parent);
}
