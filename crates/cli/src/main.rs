// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # `nl2sql` command-line harness
//!
//! The ambient demonstration/test harness every crate in this corpus
//! ships alongside its library surface: load a semantic catalog and an
//! IR document from disk, compile them to SQL for a target dialect, and
//! print the result. No concurrency, no persistent state — the
//! compiler's single `compile` call is itself synchronous and pure.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nl2sql_catalog::SemanticCatalog;
use nl2sql_compiler::compile;
use nl2sql_ir::{Dialect, Nl2SqlIr};
use nl2sql_lowering::SystemClock;

#[derive(Debug, Parser)]
#[command(name = "nl2sql", about = "Compile an NL2SQL intermediate representation into SQL")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile a catalog + IR document pair into a SQL statement.
    Compile {
        /// Path to the semantic catalog YAML document.
        #[arg(long)]
        catalog: PathBuf,
        /// Path to the IR JSON document.
        #[arg(long)]
        ir: PathBuf,
        /// Target SQL dialect.
        #[arg(long, value_enum, default_value_t = CliDialect::Standard)]
        dialect: CliDialect,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliDialect {
    Standard,
    Postgres,
    Mysql,
    Sqlite,
    Sqlserver,
}

impl From<CliDialect> for Dialect {
    fn from(value: CliDialect) -> Self {
        match value {
            CliDialect::Standard => Dialect::Standard,
            CliDialect::Postgres => Dialect::Postgres,
            CliDialect::Mysql => Dialect::MySql,
            CliDialect::Sqlite => Dialect::Sqlite,
            CliDialect::Sqlserver => Dialect::SqlServer,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Compile { catalog, ir, dialect } => run_compile(&catalog, &ir, dialect.into()),
    }
}

fn run_compile(catalog_path: &PathBuf, ir_path: &PathBuf, dialect: Dialect) -> Result<()> {
    let catalog_source = fs::read_to_string(catalog_path)
        .with_context(|| format!("reading catalog document at {}", catalog_path.display()))?;
    let catalog_doc = nl2sql_catalog::parse(&catalog_source).context("parsing catalog document")?;
    let catalog = SemanticCatalog::try_from(catalog_doc).context("building semantic catalog")?;

    let ir_source = fs::read_to_string(ir_path)
        .with_context(|| format!("reading IR document at {}", ir_path.display()))?;
    let ir: Nl2SqlIr = serde_json::from_str(&ir_source).context("parsing IR document")?;

    let clock = SystemClock;
    let compiled = compile(&ir, &catalog, dialect, &clock).map_err(|e| anyhow::anyhow!("{e}"))?;

    println!("{}", compiled.sql);
    Ok(())
}
