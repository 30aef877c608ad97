//! Subscription form configurator for the SQL identity service.
//!
//! When a project subscribes to an SQL identity node, the subscription form
//! asks for the group backing the subscription. This crate customises that
//! form: in creation mode the group name is derived from the parent group
//! (or organisation) and a user-entered simple name, checked against the
//! project namespace, and checked live for existence against the identity
//! service. In every other mode the group is picked among existing ones.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the host form framework and
//!   the group directory
//! - **Adapters**: Concrete implementations of ports (in-memory, HTTP)
//!
//! # Modules
//!
//! - [`subscription`]: Form registry, configurator and live group validation
//! - [`credential`]: Credential hash settings of an SQL identity node

pub mod credential;
pub mod subscription;
