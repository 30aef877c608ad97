//! Port contracts for the subscription form.
//!
//! Ports define the host framework capabilities the configurator consumes
//! and the group directory the validator queries.

mod directory;
mod host;
mod surface;

pub use directory::{GroupDirectory, GroupDirectoryError, GroupDirectoryResult};
pub use host::FormHost;
#[cfg(test)]
pub use host::MockFormHost;
pub use surface::FormSurface;
