use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::info;

/// `Year-Monthname-Day-Hour:Minute:Second`, e.g. `2026-Oct-16-09:41:07`
pub const TIMESTAMP_FORMAT: &str = "%Y-%b-%d-%H:%M:%S";

/// The fixed stages a run reports, in the order they are reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Milestone {
    Preliminaries,
    Extracted,
    Transformed,
    SavedCsv,
    Connected,
    LoadedDb,
    QueriesDone,
    Closed,
}

impl Milestone {
    pub const ALL: [Milestone; 8] = [
        Milestone::Preliminaries,
        Milestone::Extracted,
        Milestone::Transformed,
        Milestone::SavedCsv,
        Milestone::Connected,
        Milestone::LoadedDb,
        Milestone::QueriesDone,
        Milestone::Closed,
    ];

    pub fn message(&self) -> &'static str {
        match self {
            Milestone::Preliminaries => "Preliminaries complete. Initiating ETL process",
            Milestone::Extracted => "Data extraction complete. Initiating Transformation process",
            Milestone::Transformed => "Data transformation complete. Initiating Loading process",
            Milestone::SavedCsv => "Data saved to CSV file",
            Milestone::Connected => "SQL Connection initiated.",
            Milestone::LoadedDb => "Data loaded to Database as a table, Executing queries.",
            Milestone::QueriesDone => "Process Complete.",
            Milestone::Closed => "Server Connection closed.",
        }
    }
}

/// Append `<timestamp> : <message>` to `path`. The file is opened and closed
/// on every call.
pub fn log_progress(path: impl AsRef<Path>, message: &str) -> Result<()> {
    let path = path.as_ref();
    let timestamp = Local::now().format(TIMESTAMP_FORMAT);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    writeln!(file, "{} : {}", timestamp, message)
        .with_context(|| format!("appending to log file {}", path.display()))?;
    info!(milestone = message, "progress");
    Ok(())
}

/// Handle on the run's progress log.
#[derive(Clone, Debug)]
pub struct ProgressLog {
    path: PathBuf,
}

impl ProgressLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn record(&self, milestone: Milestone) -> Result<()> {
        log_progress(&self.path, milestone.message())
    }
}
