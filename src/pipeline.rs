use anyhow::Result;
use reqwest::Client;
use tracing::{info, instrument};

use crate::{
    config::EtlConfig,
    extract,
    load::{load_to_db, open_db, write_csv},
    model::BankRecord,
    progress::{Milestone, ProgressLog},
    query::{run_query, QueryResult},
    transform::{transform, ExchangeRates},
};

/// What a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub records: Vec<BankRecord>,
    pub queries: Vec<QueryResult>,
}

/// Extract, transform and load once, then run the fixed queries.
///
/// Stages run strictly in sequence. Any error aborts the run; the progress
/// log then ends at the last milestone reached.
#[instrument(level = "info", skip_all, fields(table = %config.table_name))]
pub async fn run(client: &Client, config: &EtlConfig) -> Result<RunSummary> {
    let log = ProgressLog::new(&config.log_file);
    log.record(Milestone::Preliminaries)?;

    let url = config.page_url()?;
    let banks = extract::extract(client, &url).await?;
    log.record(Milestone::Extracted)?;

    let rates = ExchangeRates::from_path(&config.exchange_rate_csv)?;
    let records = transform(banks, &rates)?;
    log.record(Milestone::Transformed)?;

    write_csv(&records, &config.output_csv)?;
    log.record(Milestone::SavedCsv)?;

    let conn = open_db(&config.db_path)?;
    log.record(Milestone::Connected)?;

    load_to_db(&conn, &config.table_name, &records)?;
    log.record(Milestone::LoadedDb)?;

    let mut queries = Vec::with_capacity(3);
    for sql in config.queries() {
        queries.push(run_query(&conn, &sql)?);
    }
    log.record(Milestone::QueriesDone)?;

    conn.close().map_err(|(_, e)| e)?;
    log.record(Milestone::Closed)?;

    info!(rows = records.len(), "run complete");
    Ok(RunSummary { records, queries })
}
