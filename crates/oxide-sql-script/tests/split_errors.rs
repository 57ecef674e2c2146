//! Tests for malformed scripts.

mod common;
use common::*;

use oxide_sql_script::dialect::{
    Dialect, GenericDialect, MySqlDialect, OracleDialect, PostgresDialect, SqlServerDialect,
};
use oxide_sql_script::error::ParserError;
use oxide_sql_script::statement_type::StatementType;

#[test]
fn error_end_without_block() {
    let err = split_err("SELECT 1;\nEND;", &MySqlDialect::new());
    assert_eq!(
        err.to_string(),
        "Failed to parse statement at line 2: Parsing failed: unable to decrease block depth below 0"
    );
    let (line, source) = positioned(err);
    assert_eq!(line, 2);
    assert!(matches!(source, ParserError::BlockDepthUnderflow));
}

#[test]
fn error_extra_end() {
    let err = split_err("SELECT CASE WHEN a THEN 1 END END;", &GenericDialect::new());
    let (line, source) = positioned(err);
    assert_eq!(line, 1);
    assert!(matches!(source, ParserError::BlockDepthUnderflow));
}

#[test]
fn error_extra_end_in_plsql() {
    let sql = "BEGIN\n  NULL;\nEND;\nEND;\n/";
    let (line, source) = positioned(split_err(sql, &OracleDialect::new()));
    assert_eq!(line, 4);
    assert!(matches!(source, ParserError::BlockDepthUnderflow));
}

#[test]
fn error_unclosed_block() {
    let sql = "SELECT 1;\nCREATE TRIGGER trg AFTER INSERT ON t\nBEGIN\n  SELECT 1;\n";
    match split_err(sql, &GenericDialect::new()) {
        ParserError::UnclosedBlock { initiator, line } => {
            assert_eq!(initiator, "BEGIN");
            assert_eq!(line, 2);
        }
        other => panic!("Expected UnclosedBlock, got {other:?}"),
    }
}

#[test]
fn error_go_inside_open_block() {
    let sql = "CREATE PROCEDURE p AS\nBEGIN\n    SELECT 1\nGO\n";
    assert!(matches!(
        split_err(sql, &SqlServerDialect::new()),
        ParserError::UnclosedBlock { .. }
    ));
}

#[test]
fn error_unterminated_string() {
    match split_err("SELECT 1;\nSELECT 'abc;", &GenericDialect::new()) {
        ParserError::Unterminated { construct, line } => {
            assert_eq!(construct, "string literal");
            assert_eq!(line, 2);
        }
        other => panic!("Expected Unterminated, got {other:?}"),
    }
}

#[test]
fn error_unterminated_block_comment() {
    assert!(matches!(
        split_err("SELECT 1; /* never closed", &GenericDialect::new()),
        ParserError::Unterminated {
            construct: "block comment",
            line: 1
        }
    ));
}

#[test]
fn error_unterminated_quoted_identifier() {
    assert!(matches!(
        split_err("SELECT \"abc FROM t;", &GenericDialect::new()),
        ParserError::Unterminated {
            construct: "quoted identifier",
            ..
        }
    ));
}

#[test]
fn error_unterminated_dollar_quote() {
    assert!(matches!(
        split_err("SELECT $$abc;", &PostgresDialect::new()),
        ParserError::Unterminated {
            construct: "dollar-quoted string",
            ..
        }
    ));
}

#[test]
fn error_delimiter_directive_without_delimiter() {
    let (line, source) = positioned(split_err("DELIMITER\nSELECT 1;", &MySqlDialect::new()));
    assert_eq!(line, 1);
    assert!(matches!(source, ParserError::InvalidDelimiterDirective(_)));
}

struct Unclassified;

impl Dialect for Unclassified {
    fn name(&self) -> &'static str {
        "unclassified"
    }

    fn statement_type(&self) -> StatementType {
        StatementType::Unknown
    }
}

#[test]
fn error_dialect_without_statement_type() {
    let (line, source) = positioned(split_err("\nSELECT 1;", &Unclassified));
    assert_eq!(line, 2);
    assert!(matches!(source, ParserError::InvalidArgument(_)));
}
