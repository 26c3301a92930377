use anyhow::{Context, Result};
use prettytable::{format, Cell, Row, Table};
use rusqlite::{types::Value, Connection};
use tracing::debug;

/// Column names plus every returned row, fully materialized.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl QueryResult {
    /// Render as a table with a leading positional index column.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        let mut titles = vec![Cell::new("")];
        titles.extend(self.columns.iter().map(|c| Cell::new(c).style_spec("b")));
        table.set_titles(Row::new(titles));

        for (idx, row) in self.rows.iter().enumerate() {
            let mut cells = vec![Cell::new(&idx.to_string())];
            for v in row {
                let cell = Cell::new(&render_value(v));
                cells.push(match v {
                    Value::Integer(_) | Value::Real(_) => cell.style_spec("r"),
                    _ => cell,
                });
            }
            table.add_row(Row::new(cells));
        }
        table
    }
}

fn render_value(v: &Value) -> String {
    match v {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => format!("<{} bytes>", b.len()),
    }
}

/// Execute `sql` and collect its result set without printing.
pub fn fetch_query(conn: &Connection, sql: &str) -> Result<QueryResult> {
    let mut stmt = conn
        .prepare(sql)
        .with_context(|| format!("preparing query {:?}", sql))?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let width = columns.len();

    let mut rows = Vec::new();
    let mut cursor = stmt
        .query([])
        .with_context(|| format!("executing query {:?}", sql))?;
    while let Some(row) = cursor.next()? {
        let values = (0..width)
            .map(|i| row.get::<_, Value>(i))
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.push(values);
    }
    debug!(sql, rows = rows.len(), "query finished");

    Ok(QueryResult { columns, rows })
}

/// Print `sql`, run it, then print its result set.
pub fn run_query(conn: &Connection, sql: &str) -> Result<QueryResult> {
    println!("{}", sql);
    let result = fetch_query(conn, sql)?;
    result.to_table().printstd();
    Ok(result)
}
