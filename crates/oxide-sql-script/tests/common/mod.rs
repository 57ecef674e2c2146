#![allow(dead_code)]

use oxide_sql_script::dialect::Dialect;
use oxide_sql_script::error::ParserError;
use oxide_sql_script::split;
use oxide_sql_script::splitter::SqlStatement;

pub fn split_ok<D: Dialect>(sql: &str, dialect: &D) -> Vec<SqlStatement> {
    split(sql, dialect).unwrap_or_else(|e| panic!("Failed to split: {sql}\nError: {e:?}"))
}

pub fn split_err<D: Dialect>(sql: &str, dialect: &D) -> ParserError {
    split(sql, dialect).expect_err(&format!("Expected split error for: {sql}"))
}

pub fn texts<D: Dialect>(sql: &str, dialect: &D) -> Vec<String> {
    split_ok(sql, dialect).into_iter().map(|s| s.sql).collect()
}

/// Unwraps a line-positioned error.
pub fn positioned(err: ParserError) -> (usize, ParserError) {
    match err {
        ParserError::Statement { line, source } => (line, *source),
        other => panic!("Expected positioned error, got {other:?}"),
    }
}
