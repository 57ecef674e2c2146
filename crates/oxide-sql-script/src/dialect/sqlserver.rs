//! SQL Server dialect.

use super::Dialect;
use crate::delimiter::Delimiter;
use crate::statement_type::StatementType;

/// SQL Server (T-SQL) dialect.
///
/// Scripts are split into batches by `GO` lines; `;` inside a batch is
/// part of the batch. `BEGIN ... END`, `BEGIN TRY ... END TRY` and
/// `CASE ... END` are blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlServerDialect;

impl SqlServerDialect {
    /// Creates a new SQL Server dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqlServerDialect {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn statement_type(&self) -> StatementType {
        StatementType::SqlServer
    }

    fn default_delimiter(&self) -> Delimiter {
        Delimiter::go()
    }

    fn identifier_quotes(&self) -> &'static [(char, char)] {
        &[('[', ']'), ('"', '"')]
    }
}
