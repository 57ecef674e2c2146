//! Tests for splitting PostgreSQL scripts.

mod common;
use common::*;

use oxide_sql_script::dialect::PostgresDialect;

fn postgres(sql: &str) -> Vec<String> {
    texts(sql, &PostgresDialect::new())
}

#[test]
fn split_dollar_quoted_function() {
    let sql = "\
CREATE FUNCTION add(a integer, b integer) RETURNS integer AS $$
BEGIN
    RETURN a + b;
END;
$$ LANGUAGE plpgsql;
SELECT add(1, 2);
";
    let statements = postgres(sql);
    assert_eq!(statements.len(), 2);
    assert!(statements[0].ends_with("$$ LANGUAGE plpgsql"));
    assert_eq!(statements[1], "SELECT add(1, 2)");
}

#[test]
fn split_tagged_dollar_quotes() {
    let sql = "\
CREATE FUNCTION f() RETURNS text AS $body$
    SELECT $$nested; text$$;
$body$ LANGUAGE sql;
SELECT f();
";
    let statements = postgres(sql);
    assert_eq!(statements.len(), 2);
    assert!(statements[0].contains("$$nested; text$$;"));
}

#[test]
fn split_do_block() {
    let sql = "DO $$\nBEGIN\n  RAISE NOTICE 'hi';\nEND\n$$;\nSELECT 1;";
    assert_eq!(
        postgres(sql),
        vec!["DO $$\nBEGIN\n  RAISE NOTICE 'hi';\nEND\n$$", "SELECT 1"]
    );
}

#[test]
fn split_positional_parameters() {
    assert_eq!(
        postgres("PREPARE q AS SELECT $1 + $2;\nEXECUTE q(1, 2);"),
        vec!["PREPARE q AS SELECT $1 + $2", "EXECUTE q(1, 2)"]
    );
}

#[test]
fn split_transaction_blocks() {
    assert_eq!(
        postgres("BEGIN;\nUPDATE t SET a = 1;\nEND;\nSTART TRANSACTION;\nCOMMIT;"),
        vec![
            "BEGIN",
            "UPDATE t SET a = 1",
            "END",
            "START TRANSACTION",
            "COMMIT"
        ]
    );
}

#[test]
fn split_begin_atomic() {
    let sql = "\
CREATE FUNCTION one() RETURNS int LANGUAGE SQL
BEGIN ATOMIC
    SELECT 1;
END;
SELECT 2;
";
    let statements = postgres(sql);
    assert_eq!(statements.len(), 2);
    assert!(statements[0].ends_with("SELECT 1;\nEND"));
}

#[test]
fn split_casts() {
    assert_eq!(
        postgres("SELECT '1'::int; SELECT 2::text;"),
        vec!["SELECT '1'::int", "SELECT 2::text"]
    );
}

#[test]
fn split_escape_strings() {
    assert_eq!(
        postgres("SELECT E'it\\'s; fine', e'\\\\';\nSELECT 'plain\\';\nSELECT 2;"),
        vec![
            "SELECT E'it\\'s; fine', e'\\\\'",
            "SELECT 'plain\\'",
            "SELECT 2"
        ]
    );
}
