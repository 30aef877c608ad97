//! In-memory adapters for tests and deterministic local flows.

mod directory;
mod host;
mod surface;

pub use directory::InMemoryGroupDirectory;
pub use host::StaticFormHost;
pub use surface::{FieldState, InMemoryFormSurface};
