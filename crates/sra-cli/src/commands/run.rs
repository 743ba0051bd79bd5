//! Run command implementation
//!
//! One invocation performs exactly one fetch-normalize-replace cycle: GET
//! the register snapshot, filter to approved organisations, then replace
//! the six destination tables one after another.

use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use sra_api::SraClient;
use sra_core::{approved, tables, Config, Organisation, Table};
use sra_store::{SupabaseStore, TableStore};

use crate::cli::{GlobalArgs, RunArgs};

/// Load result for a single destination table
#[derive(Debug, Clone, Serialize)]
struct TableRunResult {
    table: String,
    rows: usize,
    duration_secs: f64,
}

/// Summary of one pipeline run
#[derive(Debug, Serialize)]
struct RunSummary {
    started_at: DateTime<Utc>,
    organisations: usize,
    tables: Vec<TableRunResult>,
    duration_secs: f64,
}

/// Execute the run command
pub async fn execute(args: &RunArgs, global: &GlobalArgs) -> Result<()> {
    let config = Config::from_env().context("Failed to resolve credentials")?;

    println!("Fetching organisation register");
    let client = SraClient::new(&config);
    let organisations = client
        .fetch_organisations()
        .await
        .context("Failed to fetch organisation register")?;
    let organisations = approved(organisations);
    println!("{} approved organisations", organisations.len());

    if args.dry_run {
        return dry_run(&organisations);
    }

    let store = SupabaseStore::new(&config.store_url, &config.store_key);
    let summary = run_pipeline(&store, &organisations).await?;

    if global.verbose {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    println!(
        "Replaced {} tables in {:.1}s",
        summary.tables.len(),
        summary.duration_secs
    );
    Ok(())
}

/// Build every table and report row counts without touching the store
fn dry_run(organisations: &[Organisation]) -> Result<()> {
    for table in tables::build_all(organisations) {
        println!("{}: {} rows", table.name(), table.len());
    }
    Ok(())
}

/// Replace the six destination tables in fixed order.
///
/// Tables are independent of one another; the order only fixes what the
/// logs look like and which tables are already loaded when a run aborts
/// midway.
async fn run_pipeline(
    store: &dyn TableStore,
    organisations: &[Organisation],
) -> Result<RunSummary> {
    let started_at = Utc::now();
    let run_started = Instant::now();
    let mut results = Vec::new();

    for table in tables::build_all(organisations) {
        results.push(replace_table(store, &table).await?);
    }

    Ok(RunSummary {
        started_at,
        organisations: organisations.len(),
        tables: results,
        duration_secs: run_started.elapsed().as_secs_f64(),
    })
}

/// Clear one destination table, then bulk-insert its fresh rows.
///
/// There is no rollback: when the insert is rejected the table stays
/// empty until the next successful run.
async fn replace_table(store: &dyn TableStore, table: &Table) -> Result<TableRunResult> {
    let started = Instant::now();
    let name = table.name();

    store
        .truncate(name)
        .await
        .with_context(|| format!("Failed to truncate {name}"))?;
    println!("Truncated: {name}");

    let records = table.records();
    store
        .insert_rows(name, &records)
        .await
        .with_context(|| format!("Failed to insert into {name}"))?;
    println!("Inserted: {name} ({} rows)", records.len());

    Ok(TableRunResult {
        table: name.to_string(),
        rows: records.len(),
        duration_secs: started.elapsed().as_secs_f64(),
    })
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
