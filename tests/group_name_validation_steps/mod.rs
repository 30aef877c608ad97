//! Step definitions for group name validation BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
