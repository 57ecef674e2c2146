//! oxide-sql-split CLI
//!
//! Command-line tool for splitting SQL scripts into statements.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use oxide_sql_script::prelude::*;

/// Split SQL scripts into executable statements.
#[derive(Parser)]
#[command(name = "oxide-sql-split")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Script to split (`-` reads standard input).
    script: PathBuf,

    /// SQL dialect (generic, mysql, postgres, oracle, sqlserver).
    #[arg(short, long, env = "OXIDE_SQL_DIALECT")]
    dialect: Option<DialectKind>,

    /// Delimiter the script starts with, overriding the dialect default.
    #[arg(long)]
    delimiter: Option<String>,

    /// Only match the delimiter on a line of its own.
    #[arg(long, requires = "delimiter")]
    alone_on_line: bool,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print statements as a JSON array.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn read_script(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut sql = String::new();
        std::io::stdin().read_to_string(&mut sql)?;
        return Ok(sql);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, statements to stdout
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &cli.config {
        Some(path) => SplitterConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => SplitterConfig::default(),
    };
    if let Some(dialect) = cli.dialect {
        config = config.with_dialect(dialect);
    }
    if let Some(delimiter) = cli.delimiter {
        config = config.with_delimiter(Delimiter::new(delimiter, cli.alone_on_line));
    }
    debug!(?config, "Resolved configuration");

    let sql = read_script(&cli.script)?;
    info!(
        dialect = %config.dialect,
        script = %cli.script.display(),
        "Splitting script"
    );
    let statements = config
        .split(&sql)
        .with_context(|| format!("Failed to split {}", cli.script.display()))?;
    info!(count = statements.len(), "Split complete");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&statements)?);
    } else {
        for statement in &statements {
            println!("-- line {}", statement.line);
            println!("{}{}", statement.sql, statement.delimiter);
        }
    }

    Ok(())
}
