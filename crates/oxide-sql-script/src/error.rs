//! Error types for script parsing.

/// Errors that can occur while splitting a script into statements.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    /// A block was closed while no block was open.
    #[error("Parsing failed: unable to decrease block depth below 0")]
    BlockDepthUnderflow,

    /// A caller passed an argument the parser cannot accept.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A `DELIMITER` directive without a delimiter.
    #[error("Invalid delimiter directive: '{0}'")]
    InvalidDelimiterDirective(String),

    /// A string, quoted identifier or comment runs to the end of the script.
    #[error("Unterminated {construct} starting at line {line}")]
    Unterminated {
        /// What was left open (e.g. "string literal").
        construct: &'static str,
        /// Line where it started.
        line: usize,
    },

    /// The script ended while a procedural block was still open.
    #[error("Unclosed block opened by '{initiator}' in statement starting at line {line}")]
    UnclosedBlock {
        /// Keyword that opened the innermost block.
        initiator: String,
        /// Line where the statement started.
        line: usize,
    },

    /// A parsing error positioned at a line of the script.
    #[error("Failed to parse statement at line {line}: {source}")]
    Statement {
        /// Line where the error was detected.
        line: usize,
        /// The underlying error.
        #[source]
        source: Box<ParserError>,
    },

    /// IO error (reading scripts or configuration files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ParserError {
    /// Attaches a line number to this error.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        Self::Statement {
            line,
            source: Box::new(self),
        }
    }
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underflow_message() {
        assert_eq!(
            ParserError::BlockDepthUnderflow.to_string(),
            "Parsing failed: unable to decrease block depth below 0"
        );
    }

    #[test]
    fn test_at_line_wraps_source() {
        let err = ParserError::BlockDepthUnderflow.at_line(7);
        assert_eq!(
            err.to_string(),
            "Failed to parse statement at line 7: Parsing failed: unable to decrease block depth below 0"
        );
        match err {
            ParserError::Statement { line, source } => {
                assert_eq!(line, 7);
                assert!(matches!(*source, ParserError::BlockDepthUnderflow));
            }
            other => panic!("Expected Statement, got {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_message() {
        let err = ParserError::Unterminated {
            construct: "string literal",
            line: 3,
        };
        assert_eq!(
            err.to_string(),
            "Unterminated string literal starting at line 3"
        );
    }
}
