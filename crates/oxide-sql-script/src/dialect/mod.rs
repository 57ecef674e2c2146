//! SQL dialect support.
//!
//! Databases disagree on how scripts are delimited, which constructs open
//! procedural blocks and which characters may appear in identifiers. This
//! module provides a trait for that dialect-specific behavior, consulted by
//! the [`StatementSplitter`](crate::splitter::StatementSplitter).

mod generic;
mod mysql;
mod oracle;
mod postgres;
mod sqlserver;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use generic::GenericDialect;
pub use mysql::MySqlDialect;
pub use oracle::OracleDialect;
pub use postgres::PostgresDialect;
pub use sqlserver::SqlServerDialect;

use crate::context::ParserContext;
use crate::delimiter::Delimiter;
use crate::error::ParserError;
use crate::statement_type::StatementType;

/// A word scanned by the splitter, with the surroundings needed to decide
/// whether it opens a block.
#[derive(Debug, Clone, Copy)]
pub struct ScannedWord<'a> {
    /// The word, upper-cased.
    pub word: &'a str,
    /// The previous word of the statement, upper-cased.
    pub previous: Option<&'a str>,
    /// The next token: an upper-cased word or a single symbol.
    pub next: Option<&'a str>,
    /// The first words of the statement, upper-cased.
    pub leading: &'a [String],
    /// Whether the word is where a procedural statement may begin.
    pub clause_start: bool,
    /// The script text after the word.
    pub rest: &'a str,
}

impl ScannedWord<'_> {
    /// Returns whether the previous word is `END` (as in `END IF`).
    #[must_use]
    pub fn follows_end(&self) -> bool {
        self.previous == Some("END")
    }
}

/// Trait for dialect-specific script lexing.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the statement type assigned to statements of this dialect.
    fn statement_type(&self) -> StatementType;

    /// Returns the delimiter a script starts with.
    fn default_delimiter(&self) -> Delimiter {
        Delimiter::semicolon()
    }

    /// Returns the characters that open and close string literals.
    fn string_quotes(&self) -> &'static [char] {
        &['\'']
    }

    /// Returns the opening and closing characters of quoted identifiers.
    fn identifier_quotes(&self) -> &'static [(char, char)] {
        &[('"', '"')]
    }

    /// Returns whether a backslash escapes the next character in strings.
    fn backslash_escapes(&self) -> bool {
        false
    }

    /// Returns whether `E'...'` strings take backslash escapes.
    fn escape_strings(&self) -> bool {
        false
    }

    /// Returns whether `#` starts a line comment.
    fn hash_comments(&self) -> bool {
        false
    }

    /// Returns whether `$tag$ ... $tag$` strings are supported.
    fn dollar_quotes(&self) -> bool {
        false
    }

    /// Returns whether `DELIMITER <text>` lines change the delimiter.
    fn supports_delimiter_directive(&self) -> bool {
        false
    }

    /// Returns whether a leading `END` outside any block is a statement of
    /// its own (a transaction terminator) rather than a block closer.
    fn standalone_end(&self) -> bool {
        false
    }

    /// Returns a line delimiter that may appear between ordinary
    /// statements and is skipped there.
    fn standalone_terminator(&self) -> Option<Delimiter> {
        None
    }

    /// Returns the delimiter a statement switches to once its leading
    /// keywords are known, if it differs from the script delimiter.
    fn statement_delimiter(&self, _leading: &[String]) -> Option<Delimiter> {
        None
    }

    /// Returns whether `word` opens a procedural block.
    fn opens_block(&self, word: &ScannedWord<'_>, _context: &ParserContext) -> bool {
        opens_common_block(word)
    }

    /// Returns whether the `END` that just closed a block opened by
    /// `closed` also closes the block now innermost in `context`.
    fn closes_enclosing_block(&self, _closed: &str, _context: &ParserContext) -> bool {
        false
    }
}

/// Block openers shared by every dialect: `BEGIN` (unless it starts a
/// transaction) and `CASE` (unless it is the tail of `END CASE`).
#[must_use]
pub fn opens_common_block(word: &ScannedWord<'_>) -> bool {
    match word.word {
        "BEGIN" => !begins_transaction(word.next),
        "CASE" => !word.follows_end(),
        _ => false,
    }
}

/// Returns whether a `BEGIN` followed by `next` starts a transaction.
fn begins_transaction(next: Option<&str>) -> bool {
    next.is_none_or(|next| {
        matches!(
            next,
            ";" | "TRANSACTION"
                | "TRAN"
                | "WORK"
                | "DEFERRED"
                | "IMMEDIATE"
                | "EXCLUSIVE"
                | "DISTRIBUTED"
                | "ISOLATION"
                | "READ"
        )
    })
}

/// Returns the first of `keywords` found in `rest` outside parentheses,
/// strings and comments, or `None` if the expression ends first (at `;`,
/// `,`, an unmatched `)` or the end of the script).
#[must_use]
pub fn next_keyword<'k>(rest: &str, keywords: &[&'k str]) -> Option<&'k str> {
    let mut depth = 0usize;
    let mut chars = rest.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return None,
            ')' => depth -= 1,
            ';' | ',' if depth == 0 => return None,
            '\'' | '"' | '`' => {
                let mut escaped = false;
                for (_, q) in chars.by_ref() {
                    if escaped {
                        escaped = false;
                    } else if q == '\\' {
                        escaped = true;
                    } else if q == c {
                        break;
                    }
                }
            }
            '-' if rest[i..].starts_with("--") => {
                while chars.next_if(|&(_, q)| q != '\n').is_some() {}
            }
            '/' if rest[i..].starts_with("/*") => {
                let end = rest[i + 2..].find("*/").map_or(rest.len(), |n| i + 2 + n + 2);
                while chars.next_if(|&(j, _)| j < end).is_some() {}
            }
            c if c.is_alphabetic() || c == '_' => {
                let end = rest[i..]
                    .find(|c: char| !(c.is_alphanumeric() || matches!(c, '_' | '$' | '#')))
                    .map_or(rest.len(), |n| i + n);
                if depth == 0 {
                    let word = &rest[i..end];
                    if let Some(keyword) = keywords.iter().copied().find(|k| word.eq_ignore_ascii_case(k)) {
                        return Some(keyword);
                    }
                }
                while chars.next_if(|&(j, _)| j < end).is_some() {}
            }
            _ => {}
        }
    }
    None
}

/// Selects one of the built-in dialects by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// [`GenericDialect`].
    #[default]
    Generic,
    /// [`MySqlDialect`].
    Mysql,
    /// [`PostgresDialect`].
    Postgres,
    /// [`OracleDialect`].
    Oracle,
    /// [`SqlServerDialect`].
    Sqlserver,
}

impl DialectKind {
    /// All built-in dialects.
    pub const ALL: [Self; 5] = [
        Self::Generic,
        Self::Mysql,
        Self::Postgres,
        Self::Oracle,
        Self::Sqlserver,
    ];

    /// Returns the configuration name of the dialect.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
            Self::Oracle => "oracle",
            Self::Sqlserver => "sqlserver",
        }
    }

    /// Creates the dialect.
    #[must_use]
    pub fn dialect(self) -> Box<dyn Dialect> {
        match self {
            Self::Generic => Box::new(GenericDialect::new()),
            Self::Mysql => Box::new(MySqlDialect::new()),
            Self::Postgres => Box::new(PostgresDialect::new()),
            Self::Oracle => Box::new(OracleDialect::new()),
            Self::Sqlserver => Box::new(SqlServerDialect::new()),
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DialectKind {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generic" | "ansi" => Ok(Self::Generic),
            "mysql" | "mariadb" => Ok(Self::Mysql),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "oracle" => Ok(Self::Oracle),
            "sqlserver" | "mssql" => Ok(Self::Sqlserver),
            _ => Err(ParserError::InvalidArgument(format!(
                "unknown dialect '{s}'"
            ))),
        }
    }
}
