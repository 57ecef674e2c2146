//! Generic SQL dialect.

use super::Dialect;
use crate::statement_type::StatementType;

/// A generic SQL dialect using ANSI SQL conventions.
///
/// Statements end with `;`. `BEGIN ... END` (e.g. SQLite trigger bodies)
/// and `CASE ... END` are blocks, and a bare `END;` ends a transaction.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn statement_type(&self) -> StatementType {
        StatementType::Generic
    }

    fn standalone_end(&self) -> bool {
        true
    }
}
