//! Statement delimiters and delimiter-change directives.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ParserError, Result};

/// Keyword introducing a MySQL-style delimiter-change directive.
const DIRECTIVE_KEYWORD: &str = "DELIMITER";

/// The token sequence that terminates a statement.
///
/// A delimiter is either matched inline (`;`, `$$`) or, when
/// `alone_on_line` is set, only when it makes up a whole line of the
/// script (`/` for Oracle SQL*Plus, `GO` for SQL Server batches).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Delimiter {
    delimiter: String,
    #[serde(default)]
    alone_on_line: bool,
}

impl Delimiter {
    /// Creates a new delimiter.
    #[must_use]
    pub fn new(delimiter: impl Into<String>, alone_on_line: bool) -> Self {
        Self {
            delimiter: delimiter.into(),
            alone_on_line,
        }
    }

    /// The standard `;` delimiter.
    #[must_use]
    pub fn semicolon() -> Self {
        Self::new(";", false)
    }

    /// A `/` on its own line, terminating PL/SQL units.
    #[must_use]
    pub fn slash() -> Self {
        Self::new("/", true)
    }

    /// A `GO` on its own line, terminating SQL Server batches.
    #[must_use]
    pub fn go() -> Self {
        Self::new("GO", true)
    }

    /// Returns the delimiter text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.delimiter
    }

    /// Returns whether the delimiter only counts on a line of its own.
    #[must_use]
    pub const fn is_alone_on_line(&self) -> bool {
        self.alone_on_line
    }

    /// Parses a `DELIMITER <text>` directive line.
    ///
    /// Returns `Ok(None)` when `line` is not a directive. The new delimiter
    /// is the rest of the line with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::InvalidDelimiterDirective`] when the keyword is
    /// not followed by any delimiter text.
    pub fn from_directive(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        let (keyword, rest) = match line.find(char::is_whitespace) {
            Some(split) => line.split_at(split),
            None => (line, ""),
        };
        if !keyword.eq_ignore_ascii_case(DIRECTIVE_KEYWORD) {
            return Ok(None);
        }
        let delimiter = rest.trim();
        if delimiter.is_empty() {
            return Err(ParserError::InvalidDelimiterDirective(line.to_string()));
        }
        Ok(Some(Self::new(delimiter, false)))
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::semicolon()
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alone_on_line {
            f.write_str("\n")?;
        }
        f.write_str(&self.delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_delimiters() {
        assert_eq!(Delimiter::semicolon().as_str(), ";");
        assert!(!Delimiter::semicolon().is_alone_on_line());
        assert_eq!(Delimiter::slash().as_str(), "/");
        assert!(Delimiter::slash().is_alone_on_line());
        assert_eq!(Delimiter::go().as_str(), "GO");
        assert!(Delimiter::go().is_alone_on_line());
        assert_eq!(Delimiter::default(), Delimiter::semicolon());
    }

    #[test]
    fn test_equality_uses_both_fields() {
        assert_eq!(Delimiter::new("GO", true), Delimiter::go());
        assert_ne!(Delimiter::new("GO", false), Delimiter::go());
        assert_ne!(Delimiter::new("go", true), Delimiter::go());
    }

    #[test]
    fn test_display() {
        assert_eq!(Delimiter::semicolon().to_string(), ";");
        assert_eq!(Delimiter::go().to_string(), "\nGO");
    }

    #[test]
    fn test_directive() {
        let delimiter = Delimiter::from_directive("DELIMITER $$").unwrap();
        assert_eq!(delimiter, Some(Delimiter::new("$$", false)));

        let delimiter = Delimiter::from_directive("  delimiter   //  ").unwrap();
        assert_eq!(delimiter, Some(Delimiter::new("//", false)));

        let delimiter = Delimiter::from_directive("DELIMITER ;").unwrap();
        assert_eq!(delimiter, Some(Delimiter::semicolon()));
    }

    #[test]
    fn test_not_a_directive() {
        assert_eq!(Delimiter::from_directive("SELECT 1").unwrap(), None);
        assert_eq!(Delimiter::from_directive("DELIMITERS $$").unwrap(), None);
        assert_eq!(Delimiter::from_directive("").unwrap(), None);
    }

    #[test]
    fn test_directive_without_delimiter() {
        let err = Delimiter::from_directive("DELIMITER   ").unwrap_err();
        assert!(matches!(err, ParserError::InvalidDelimiterDirective(_)));
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Delimiter::go()).unwrap();
        assert_eq!(json, r#"{"delimiter":"GO","alone_on_line":true}"#);
        let parsed: Delimiter = serde_json::from_str(r#"{"delimiter":"$$"}"#).unwrap();
        assert_eq!(parsed, Delimiter::new("$$", false));
    }
}
