//! Splitter configuration.
//!
//! A [`SplitterConfig`] selects the dialect and, optionally, a delimiter
//! overriding the dialect default. It is read from JSON:
//!
//! ```json
//! { "dialect": "mysql", "delimiter": { "delimiter": "$$", "alone_on_line": false } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::delimiter::Delimiter;
use crate::dialect::DialectKind;
use crate::error::Result;
use crate::splitter::{SqlStatement, StatementSplitter};

/// Configuration for splitting scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitterConfig {
    /// The dialect scripts are written in.
    pub dialect: DialectKind,
    /// Delimiter a script starts with; the dialect default when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<Delimiter>,
}

impl SplitterConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON, unknown fields or dialects.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        debug!(path = %path.display(), dialect = %config.dialect, "Loaded configuration");
        Ok(config)
    }

    /// Sets the dialect.
    #[must_use]
    pub const fn with_dialect(mut self, dialect: DialectKind) -> Self {
        self.dialect = dialect;
        self
    }

    /// Sets the delimiter a script starts with.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Returns the delimiter a script starts with.
    #[must_use]
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
            .clone()
            .unwrap_or_else(|| self.dialect.dialect().default_delimiter())
    }

    /// Splits `sql` with this configuration.
    ///
    /// # Errors
    ///
    /// See [`StatementSplitter::next_statement`].
    pub fn split(&self, sql: &str) -> Result<Vec<SqlStatement>> {
        let dialect = self.dialect.dialect();
        StatementSplitter::with_delimiter(sql, dialect.as_ref(), self.delimiter()).split()
    }
}
