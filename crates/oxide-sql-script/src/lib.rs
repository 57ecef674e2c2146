//! Dialect-aware splitting of SQL scripts into statements.
//!
//! Migration scripts mix plain statements with procedural code: stored
//! procedures, triggers and anonymous blocks contain semicolons that do not
//! end the enclosing statement, and some dialects change the delimiter in the
//! middle of a script. `oxide-sql-script` tracks just enough structure to cut
//! such scripts at the right places, without parsing SQL itself.
//!
//! # Architecture
//!
//! - **Context** - [`ParserContext`](context::ParserContext) tracks paren
//!   depth, the stack of open blocks, the active delimiter and the statement
//!   type deciding which characters are identifier letters
//! - **Dialect** - Database-specific lexical rules (quotes, comments, block
//!   keywords, delimiters)
//! - **Splitter** - Walks a script and drives the context
//! - **Config** - Dialect and delimiter selection, loadable from JSON
//!
//! # Example
//!
//! ```rust
//! use oxide_sql_script::prelude::*;
//!
//! let sql = "
//! CREATE TRIGGER touch AFTER UPDATE ON users
//! BEGIN
//!     UPDATE users SET updated = 1 WHERE id = NEW.id;
//! END;
//! SELECT 1;
//! ";
//! let statements = split(sql, &GenericDialect::new()).unwrap();
//! assert_eq!(statements.len(), 2);
//! assert!(statements[0].sql.ends_with("END"));
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Split a MySQL script, one statement per block
//! oxide-sql-split --dialect mysql schema.sql
//!
//! # Emit JSON with line numbers and delimiters
//! oxide-sql-split --dialect oracle --json packages.sql
//! ```

pub mod callback;
pub mod config;
pub mod context;
pub mod delimiter;
pub mod dialect;
pub mod error;
pub mod splitter;
pub mod statement_type;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::callback::ExecutionError;
    pub use crate::config::SplitterConfig;
    pub use crate::context::ParserContext;
    pub use crate::delimiter::Delimiter;
    pub use crate::dialect::{
        Dialect, DialectKind, GenericDialect, MySqlDialect, OracleDialect, PostgresDialect,
        SqlServerDialect,
    };
    pub use crate::error::{ParserError, Result};
    pub use crate::splitter::{SqlStatement, StatementSplitter};
    pub use crate::statement_type::StatementType;
    pub use crate::split;
}

use crate::dialect::Dialect;
use crate::error::Result;
use crate::splitter::{SqlStatement, StatementSplitter};

/// Splits `sql` into statements using `dialect` and its default delimiter.
///
/// # Errors
///
/// See [`StatementSplitter::next_statement`].
pub fn split<D: Dialect + ?Sized>(sql: &str, dialect: &D) -> Result<Vec<SqlStatement>> {
    StatementSplitter::new(sql, dialect).split()
}
