//! Localized labels of the hash parameters.

use super::{PARAMETER_HASH_ITERATION, PARAMETER_KEY_LENGTH, PARAMETER_SALT_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Languages the labels are translated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// English, the root catalogue.
    En,
    /// French.
    Fr,
}

impl Locale {
    /// Returns the language subtag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a language without translations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported locale: {0}")]
pub struct ParseLocaleError(pub String);

impl TryFrom<&str> for Locale {
    type Error = ParseLocaleError;

    /// Resolves a language tag such as `fr-FR` on its primary subtag.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let primary = value
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            _ => Err(ParseLocaleError(value.to_owned())),
        }
    }
}

/// Returns the label of a hash parameter in `locale`.
///
/// # Examples
///
/// ```
/// use sqlid_form::credential::{Locale, PARAMETER_KEY_LENGTH, parameter_label};
///
/// assert_eq!(parameter_label(PARAMETER_KEY_LENGTH, Locale::En), Some("Hash key length"));
/// assert_eq!(parameter_label("service:id:sql:unknown", Locale::En), None);
/// ```
#[must_use]
pub fn parameter_label(key: &str, locale: Locale) -> Option<&'static str> {
    let label = match (key, locale) {
        (PARAMETER_SALT_LENGTH, Locale::En) => {
            "Salt string length used to build the credential hash"
        }
        (PARAMETER_SALT_LENGTH, Locale::Fr) => {
            "Longueur du sel utilisé pour construire l'empreinte du mot de passe"
        }
        (PARAMETER_HASH_ITERATION, Locale::En) => "Hash iteration count",
        (PARAMETER_HASH_ITERATION, Locale::Fr) => "Nombre d'itérations du hachage",
        (PARAMETER_KEY_LENGTH, Locale::En) => "Hash key length",
        (PARAMETER_KEY_LENGTH, Locale::Fr) => "Longueur de la clé de hachage",
        _ => return None,
    };
    Some(label)
}
