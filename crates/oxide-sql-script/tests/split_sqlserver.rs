//! Tests for splitting SQL Server scripts.

mod common;
use common::*;

use oxide_sql_script::delimiter::Delimiter;
use oxide_sql_script::dialect::SqlServerDialect;

fn sqlserver(sql: &str) -> Vec<String> {
    texts(sql, &SqlServerDialect::new())
}

#[test]
fn split_go_batches() {
    let sql = "\
CREATE TABLE t (id INT);
GO
CREATE PROCEDURE p AS
BEGIN
  SET NOCOUNT ON;
  SELECT 1;
END
GO
";
    let statements = split_ok(sql, &SqlServerDialect::new());
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0].sql, "CREATE TABLE t (id INT);");
    assert!(statements[1].sql.ends_with("SELECT 1;\nEND"));
    assert_eq!(statements[1].line, 3);
    assert_eq!(statements[1].delimiter, Delimiter::go());
}

#[test]
fn split_go_is_case_insensitive() {
    assert_eq!(
        sqlserver("SELECT 1\ngo  \nSELECT 2\n"),
        vec!["SELECT 1", "SELECT 2"]
    );
}

#[test]
fn split_keeps_semicolons_in_batch() {
    assert_eq!(
        sqlserver("SELECT 1; SELECT 2;\nGO"),
        vec!["SELECT 1; SELECT 2;"]
    );
}

#[test]
fn split_go_must_be_alone_on_line() {
    assert_eq!(
        sqlserver("SELECT GOAL FROM t\nSELECT 1 GO\nGO"),
        vec!["SELECT GOAL FROM t\nSELECT 1 GO"]
    );
}

#[test]
fn split_bracket_identifiers() {
    assert_eq!(
        sqlserver("SELECT [a]]b], [GO] FROM t\nGO\n"),
        vec!["SELECT [a]]b], [GO] FROM t"]
    );
}

#[test]
fn split_try_catch() {
    let sql = "\
BEGIN TRY
    SELECT 1/0;
END TRY
BEGIN CATCH
    SELECT ERROR_MESSAGE();
END CATCH
GO
BEGIN TRAN;
COMMIT;
GO
";
    let statements = sqlserver(sql);
    assert_eq!(statements.len(), 2);
    assert!(statements[0].ends_with("END CATCH"));
    assert_eq!(statements[1], "BEGIN TRAN;\nCOMMIT;");
}

#[test]
fn split_variables_and_temp_tables() {
    assert_eq!(
        sqlserver("DECLARE @x INT = 1;\nSELECT @x INTO #tmp;\nGO"),
        vec!["DECLARE @x INT = 1;\nSELECT @x INTO #tmp;"]
    );
}
