use std::{error::Error as StdError, fmt};

use thiserror::Error;

use super::BoxError;

/// A single problem found while binding one field.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field had no value under any candidate key and no default.
    #[error("`{path}`: required key {key} missing value")]
    MissingRequired { path: &'static str, key: String },
    /// A raw value was found but could not be converted to the field's type.
    #[error("`{path}`: failed to convert {key}=\"{value}\" to {ty}: {source}")]
    Conversion {
        path: &'static str,
        key: String,
        value: String,
        ty: &'static str,
        #[source]
        source: BoxError,
    },
    /// A key carrying the prefix does not belong to any field.
    #[error("unknown environment variable {key}")]
    Unknown { key: String },
}

impl Error {
    /// Dotted path of the offending field, e.g. `Config.port`.
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Self::MissingRequired { path, .. } | Self::Conversion { path, .. } => Some(*path),
            Self::Unknown { .. } => None,
        }
    }

    /// The external key the error refers to.
    pub fn key(&self) -> &str {
        match self {
            Self::MissingRequired { key, .. }
            | Self::Conversion { key, .. }
            | Self::Unknown { key } => key,
        }
    }
}

/// Failures of the built-in conversions.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("invalid boolean {0:?}")]
    Bool(String),
    #[error("invalid duration {value:?}: {reason}")]
    Duration { value: String, reason: &'static str },
    #[error("invalid map item: {0:?}")]
    MapItem(String),
}

/// A collection of configuration errors encountered while binding a schema.
///
/// Binding keeps walking after a failure, so every missing or malformed value
/// is reported at once.
///
/// # Display Format
///
/// ```text
/// 2 configuration errors:
///   1. `Config.database_url`: required key APP_DATABASE_URL missing value
///   2. `Config.port`: failed to convert APP_PORT="invalid" to u16: invalid digit found in string
/// ```
#[derive(Debug, Default)]
pub struct Errors(Vec<Error>);

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: Error) {
        self.0.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.0.iter()
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.len() {
            1 => writeln!(f, "1 configuration error:")?,
            n => writeln!(f, "{n} configuration errors:")?,
        }

        for (i, error) in self.0.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl StdError for Errors {}
