//! Oracle dialect.

use super::{Dialect, ScannedWord, next_keyword, opens_common_block};
use crate::context::ParserContext;
use crate::delimiter::Delimiter;
use crate::statement_type::StatementType;

/// Object kinds whose `CREATE` statement is a PL/SQL unit.
const PLSQL_UNITS: &[&str] = &["FUNCTION", "PROCEDURE", "PACKAGE", "TRIGGER", "TYPE", "LIBRARY"];

/// Modifiers that may appear between `CREATE` and the object kind.
const CREATE_MODIFIERS: &[&str] = &["CREATE", "OR", "REPLACE", "EDITIONABLE", "NONEDITIONABLE"];

/// Blocks whose declaration section ends at the `BEGIN` of their body:
/// package and type bodies (`AS`/`IS`) and the subprograms declared in them.
const DECLARATION_BLOCKS: &[&str] = &["AS", "IS", "PROCEDURE", "FUNCTION"];

/// Oracle dialect.
///
/// Plain SQL statements end with `;`. PL/SQL units (anonymous blocks and
/// `CREATE` of procedures, functions, packages, triggers and types) contain
/// `;` and end with a `/` on its own line instead, as in SQL*Plus.
///
/// Package and type bodies open a block at their `AS`/`IS`, and so do the
/// subprograms defined in them. A compound trigger opens one at
/// `COMPOUND TRIGGER`. The `END` of a `BEGIN` directly inside such a unit
/// closes the unit as well.
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleDialect;

impl OracleDialect {
    /// Creates a new Oracle dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns whether a statement starting with `leading` is a PL/SQL unit.
    fn is_plsql(leading: &[String]) -> bool {
        match leading.first().map(String::as_str) {
            Some("DECLARE" | "BEGIN") => true,
            Some("CREATE") => leading
                .iter()
                .map(String::as_str)
                .find(|word| !CREATE_MODIFIERS.contains(word))
                .is_some_and(|kind| PLSQL_UNITS.contains(&kind)),
            _ => false,
        }
    }

    /// Returns whether a statement starting with `leading` creates a package
    /// or a type body, whose `AS`/`IS` opens a block without a `BEGIN`.
    fn declares_members(leading: &[String]) -> bool {
        let has = |keyword: &str| leading.iter().any(|w| w == keyword);
        has("PACKAGE") || (has("TYPE") && has("BODY"))
    }
}

impl Dialect for OracleDialect {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn statement_type(&self) -> StatementType {
        StatementType::Oracle
    }

    fn standalone_terminator(&self) -> Option<Delimiter> {
        Some(Delimiter::slash())
    }

    fn statement_delimiter(&self, leading: &[String]) -> Option<Delimiter> {
        Self::is_plsql(leading).then(Delimiter::slash)
    }

    fn opens_block(&self, word: &ScannedWord<'_>, context: &ParserContext) -> bool {
        if opens_common_block(word) {
            return true;
        }
        match word.word {
            "LOOP" => !word.follows_end(),
            "IF" => context.block_depth() > 0 && word.clause_start && !word.follows_end(),
            // A package specification or body has no BEGIN of its own.
            "AS" | "IS" => context.block_depth() == 0 && Self::declares_members(word.leading),
            // Member subprograms with a body; forward declarations end at `;`
            "PROCEDURE" | "FUNCTION" => {
                DECLARATION_BLOCKS.contains(&context.block_initiator())
                    && next_keyword(word.rest, &["IS", "AS"]).is_some()
            }
            "TRIGGER" => word.previous == Some("COMPOUND"),
            _ => false,
        }
    }

    fn closes_enclosing_block(&self, closed: &str, context: &ParserContext) -> bool {
        // `BEGIN ... END name;` ends the subprogram or package it belongs to
        closed == "BEGIN" && DECLARATION_BLOCKS.contains(&context.block_initiator())
    }
}
