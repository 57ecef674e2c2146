//! PostgreSQL dialect.

use super::Dialect;
use crate::statement_type::StatementType;

/// PostgreSQL dialect.
///
/// Function and `DO` bodies are usually dollar-quoted (`$$ ... $$` or
/// `$tag$ ... $tag$`), which makes them opaque to block tracking.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn statement_type(&self) -> StatementType {
        StatementType::PostgreSql
    }

    fn escape_strings(&self) -> bool {
        true
    }

    fn dollar_quotes(&self) -> bool {
        true
    }

    fn standalone_end(&self) -> bool {
        true // END is an alias of COMMIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_dialect() {
        let dialect = PostgresDialect::new();
        assert_eq!(dialect.name(), "postgresql");
        assert_eq!(dialect.statement_type(), StatementType::PostgreSql);
        assert!(dialect.dollar_quotes());
        assert!(dialect.escape_strings());
        assert!(dialect.standalone_end());
        assert!(!dialect.backslash_escapes());
    }
}
