//! Subscription parameter configuration for the SQL identity service.
//!
//! This module customises how the subscription form renders and validates
//! the "parent group" and "group" parameters. In creation mode the group
//! name is computed from the parent group (or organisation) and a
//! user-entered simple name, then checked live against the group
//! directory. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
