//! MySQL dialect.

use super::{Dialect, ScannedWord, next_keyword, opens_common_block};
use crate::context::ParserContext;
use crate::statement_type::StatementType;

/// MySQL / MariaDB dialect.
///
/// Stored programs nest `BEGIN ... END` with `IF ... END IF`,
/// `LOOP ... END LOOP`, `WHILE ... END WHILE` and `REPEAT ... END REPEAT`.
/// Scripts may switch the delimiter with `DELIMITER $$`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn statement_type(&self) -> StatementType {
        StatementType::MySql
    }

    fn string_quotes(&self) -> &'static [char] {
        &['\'', '"']
    }

    fn identifier_quotes(&self) -> &'static [(char, char)] {
        &[('`', '`')]
    }

    fn backslash_escapes(&self) -> bool {
        true
    }

    fn hash_comments(&self) -> bool {
        true
    }

    fn supports_delimiter_directive(&self) -> bool {
        true
    }

    fn opens_block(&self, word: &ScannedWord<'_>, context: &ParserContext) -> bool {
        if opens_common_block(word) {
            return true;
        }
        // Control-flow statements only exist inside stored program bodies.
        if context.block_depth() == 0 || !word.clause_start || word.follows_end() {
            return false;
        }
        match word.word {
            // IF(cond, a, b) is the function, IF cond THEN the statement
            "IF" => next_keyword(word.rest, &["THEN", "WHEN", "ELSE", "END"]) == Some("THEN"),
            "LOOP" | "WHILE" | "REPEAT" => true,
            _ => false,
        }
    }
}
