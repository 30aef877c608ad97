//! Behaviour tests for live group name validation in creation mode.

mod group_name_validation_steps;

use group_name_validation_steps::world::{GroupFormWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/group_name_validation.feature",
    name = "Free group name is accepted"
)]
#[tokio::test(flavor = "multi_thread")]
async fn free_group_name_is_accepted(world: GroupFormWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/group_name_validation.feature",
    name = "Existing group name is rejected"
)]
#[tokio::test(flavor = "multi_thread")]
async fn existing_group_name_is_rejected(world: GroupFormWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/group_name_validation.feature",
    name = "Parent group takes precedence over the organisation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn parent_group_takes_precedence(world: GroupFormWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/group_name_validation.feature",
    name = "Name outside the project namespace is rejected immediately"
)]
#[tokio::test(flavor = "multi_thread")]
async fn name_outside_namespace_is_rejected(world: GroupFormWorld) {
    let _ = world;
}
