//! Credential hashing parameters of an SQL identity node.
//!
//! Nodes of the SQL identity service store user passwords as salted
//! PBKDF2 hashes. The hash settings are node parameters; this module parses
//! them and provides their localized labels for the node configuration UI.

mod labels;
mod settings;

pub use labels::{Locale, ParseLocaleError, parameter_label};
pub use settings::{
    CredentialSettingsError, HashSettings, PARAMETER_HASH_ITERATION, PARAMETER_KEY_ALGORITHM,
    PARAMETER_KEY_LENGTH, PARAMETER_SALT_LENGTH,
};
