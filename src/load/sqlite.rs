use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::model::BankRecord;

/// Open the SQLite database at `path`, creating the file if it doesn't exist.
pub fn open_db(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();
    let conn = Connection::open(path)
        .with_context(|| format!("opening database {}", path.display()))?;
    Ok(conn)
}

/// Double-quote an SQL identifier.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Replace `table` with exactly `records`, in order. Any earlier table of the
/// same name is dropped first. Returns the number of rows inserted.
#[instrument(level = "info", skip(conn, records), fields(rows = records.len()))]
pub fn load_to_db(conn: &Connection, table: &str, records: &[BankRecord]) -> Result<usize> {
    let table_q = quote_ident(table);
    let [name, usd, gbp, eur, inr] = BankRecord::columns().map(quote_ident);

    conn.execute(&format!("DROP TABLE IF EXISTS {}", table_q), [])
        .with_context(|| format!("dropping table {}", table))?;
    conn.execute(
        &format!(
            "CREATE TABLE {} ({} TEXT, {} REAL, {} REAL, {} REAL, {} REAL)",
            table_q, name, usd, gbp, eur, inr
        ),
        [],
    )
    .with_context(|| format!("creating table {}", table))?;
    debug!(table, "recreated table");

    let mut stmt = conn
        .prepare(&format!(
            "INSERT INTO {} ({}, {}, {}, {}, {}) VALUES (?1, ?2, ?3, ?4, ?5)",
            table_q, name, usd, gbp, eur, inr
        ))
        .with_context(|| format!("preparing insert into {}", table))?;

    let mut inserted = 0;
    for r in records {
        inserted += stmt
            .execute(params![
                r.name,
                r.mc_usd_billion,
                r.mc_gbp_billion,
                r.mc_eur_billion,
                r.mc_inr_billion
            ])
            .with_context(|| format!("inserting {:?} into {}", r.name, table))?;
    }

    info!(table, rows = inserted, "loaded table");
    Ok(inserted)
}
