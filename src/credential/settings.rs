//! Hash settings parsed from node parameters.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::BuildHasher;
use thiserror::Error;

/// Salt string length used to build the credential hash.
pub const PARAMETER_SALT_LENGTH: &str = "service:id:sql:salt-length";

/// Hash iteration count.
pub const PARAMETER_HASH_ITERATION: &str = "service:id:sql:hash-iteration";

/// Hash key length, in bits.
pub const PARAMETER_KEY_LENGTH: &str = "service:id:sql:key-length";

/// Secret key factory algorithm.
pub const PARAMETER_KEY_ALGORITHM: &str = "service:id:sql:key-alg";

const DEFAULT_SALT_LENGTH: u32 = 64;
const DEFAULT_HASH_ITERATION: u32 = 10;
const DEFAULT_KEY_LENGTH: u32 = 256;
const DEFAULT_KEY_ALGORITHM: &str = "PBKDF2WithHmacSHA512";

/// Errors returned while reading hash settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialSettingsError {
    /// A numeric parameter is not a positive integer.
    #[error("parameter {parameter} must be a positive integer, got '{value}'")]
    InvalidNumber {
        /// Parameter key.
        parameter: &'static str,
        /// Rejected value.
        value: String,
    },

    /// The key algorithm parameter is blank.
    #[error("parameter service:id:sql:key-alg must not be blank")]
    BlankAlgorithm,
}

/// Credential hash settings of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashSettings {
    salt_length: u32,
    hash_iteration: u32,
    key_length: u32,
    key_algorithm: String,
}

impl Default for HashSettings {
    fn default() -> Self {
        Self {
            salt_length: DEFAULT_SALT_LENGTH,
            hash_iteration: DEFAULT_HASH_ITERATION,
            key_length: DEFAULT_KEY_LENGTH,
            key_algorithm: DEFAULT_KEY_ALGORITHM.to_owned(),
        }
    }
}

impl HashSettings {
    /// Reads the settings from node parameters, defaulting absent ones.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialSettingsError::InvalidNumber`] when a numeric
    /// parameter is not a positive integer, or
    /// [`CredentialSettingsError::BlankAlgorithm`] when the algorithm is
    /// blank.
    pub fn from_parameters<S: BuildHasher>(
        parameters: &HashMap<String, String, S>,
    ) -> Result<Self, CredentialSettingsError> {
        let key_algorithm = match parameters.get(PARAMETER_KEY_ALGORITHM) {
            Some(value) if value.trim().is_empty() => {
                return Err(CredentialSettingsError::BlankAlgorithm);
            }
            Some(value) => value.trim().to_owned(),
            None => DEFAULT_KEY_ALGORITHM.to_owned(),
        };
        Ok(Self {
            salt_length: positive(parameters, PARAMETER_SALT_LENGTH, DEFAULT_SALT_LENGTH)?,
            hash_iteration: positive(parameters, PARAMETER_HASH_ITERATION, DEFAULT_HASH_ITERATION)?,
            key_length: positive(parameters, PARAMETER_KEY_LENGTH, DEFAULT_KEY_LENGTH)?,
            key_algorithm,
        })
    }

    /// Returns the salt string length.
    #[must_use]
    pub const fn salt_length(&self) -> u32 {
        self.salt_length
    }

    /// Returns the hash iteration count.
    #[must_use]
    pub const fn hash_iteration(&self) -> u32 {
        self.hash_iteration
    }

    /// Returns the key length, in bits.
    #[must_use]
    pub const fn key_length(&self) -> u32 {
        self.key_length
    }

    /// Returns the secret key factory algorithm.
    #[must_use]
    pub fn key_algorithm(&self) -> &str {
        &self.key_algorithm
    }
}

fn positive<S: BuildHasher>(
    parameters: &HashMap<String, String, S>,
    parameter: &'static str,
    default: u32,
) -> Result<u32, CredentialSettingsError> {
    let Some(raw) = parameters.get(parameter) else {
        return Ok(default);
    };
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| CredentialSettingsError::InvalidNumber {
            parameter,
            value: raw.clone(),
        })
}
