//! String-resolution collaborator and its table-backed implementation.
//!
//! Tables are keyed by table name, then by string key. Callers may load
//! them from JSON (`{"ImageComments": {"KEY": "text"}}`) or start from the
//! bundled English copy.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Table holding the image comments copy.
pub const IMAGE_COMMENTS_TABLE: &str = "ImageComments";

/// Key of the message shown when comments cannot be loaded.
pub const CONNECTION_ERROR_KEY: &str = "IMAGE_COMMENTS_VIEW_CONNECTION_ERROR";

const ENGLISH_CONNECTION_ERROR: &str = "Couldn't connect to server";

/// Looks up localized copy by key and table.
#[cfg_attr(test, mockall::automock)]
pub trait StringResolver: Send + Sync {
    /// Resolved text for `key` in `table`.
    fn resolve(&self, key: &str, table: &str) -> String;
}

/// Validation errors returned by [`LocalizedStringTables::from_json`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalizedStringTablesError {
    /// The document is not a `{table: {key: value}}` object.
    #[error("string tables could not be decoded: {message}")]
    Decode {
        /// Decoder error text.
        message: String,
    },
    /// A table name is blank.
    #[error("string table names must not be empty")]
    EmptyTableName,
    /// A key inside `table` is blank.
    #[error("string keys in table '{table}' must not be empty")]
    EmptyKey {
        /// Table containing the blank key.
        table: String,
    },
    /// The value for `key` is blank.
    #[error("string '{key}' in table '{table}' must not be empty")]
    EmptyValue {
        /// Table containing the key.
        table: String,
        /// Key with the blank value.
        key: String,
    },
}

/// In-memory string tables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct LocalizedStringTables(BTreeMap<String, BTreeMap<String, String>>);

impl LocalizedStringTables {
    /// Bundled English copy.
    pub fn english() -> Self {
        Self::default().with_string(
            IMAGE_COMMENTS_TABLE,
            CONNECTION_ERROR_KEY,
            ENGLISH_CONNECTION_ERROR,
        )
    }

    /// Decode and validate tables from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizedStringTablesError`] when the document does not
    /// decode or contains blank names, keys or values.
    ///
    /// # Examples
    /// ```
    /// use image_comments::presentation::{LocalizedStringTables, StringResolver};
    ///
    /// let tables = LocalizedStringTables::from_json(
    ///     r#"{"ImageComments": {"IMAGE_COMMENTS_VIEW_CONNECTION_ERROR": "Sin conexión"}}"#,
    /// )
    /// .expect("valid tables");
    /// assert_eq!(
    ///     tables.resolve("IMAGE_COMMENTS_VIEW_CONNECTION_ERROR", "ImageComments"),
    ///     "Sin conexión",
    /// );
    /// ```
    pub fn from_json(json: &str) -> Result<Self, LocalizedStringTablesError> {
        let tables: Self =
            serde_json::from_str(json).map_err(|error| LocalizedStringTablesError::Decode {
                message: error.to_string(),
            })?;
        tables.validate()?;
        Ok(tables)
    }

    /// Return a copy with `value` stored under `key` in `table`.
    #[must_use]
    pub fn with_string(
        mut self,
        table: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.0
            .entry(table.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    fn validate(&self) -> Result<(), LocalizedStringTablesError> {
        for (table, strings) in &self.0 {
            if table.trim().is_empty() {
                return Err(LocalizedStringTablesError::EmptyTableName);
            }
            for (key, value) in strings {
                if key.trim().is_empty() {
                    return Err(LocalizedStringTablesError::EmptyKey {
                        table: table.clone(),
                    });
                }
                if value.trim().is_empty() {
                    return Err(LocalizedStringTablesError::EmptyValue {
                        table: table.clone(),
                        key: key.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl StringResolver for LocalizedStringTables {
    fn resolve(&self, key: &str, table: &str) -> String {
        match self.0.get(table).and_then(|strings| strings.get(key)) {
            Some(value) => value.clone(),
            None => {
                warn!(key, table, "missing localized string; falling back to key");
                key.to_owned()
            }
        }
    }
}
