use std::path::PathBuf;

use anyhow::{Context, Result};
use url::Url;

use crate::model::Currency;

static DEFAULT_PAGE_URL: &str =
    "https://web.archive.org/web/20230908091635/https://en.wikipedia.org/wiki/List_of_largest_banks";

/// Everything the pipeline needs to know about where to read and write.
///
/// `EtlConfig::default()` carries the fixed run constants; tests build their
/// own pointing at a scratch directory and a local page.
#[derive(Clone, Debug)]
pub struct EtlConfig {
    pub page_url: String,
    pub table_name: String,
    pub exchange_rate_csv: PathBuf,
    pub output_csv: PathBuf,
    pub db_path: PathBuf,
    pub log_file: PathBuf,
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            table_name: "Largest_banks".to_string(),
            exchange_rate_csv: PathBuf::from("./exchange_rate.csv"),
            output_csv: PathBuf::from("./Largest_banks_data.csv"),
            db_path: PathBuf::from("Banks.db"),
            log_file: PathBuf::from("./code_log.txt"),
        }
    }
}

impl EtlConfig {
    pub fn page_url(&self) -> Result<Url> {
        Url::parse(&self.page_url).with_context(|| format!("parsing page URL {}", self.page_url))
    }

    /// The three fixed read queries run after loading.
    pub fn queries(&self) -> [String; 3] {
        let table = &self.table_name;
        [
            format!("SELECT * FROM {}", table),
            format!("SELECT AVG({}) FROM {}", Currency::Gbp.column(), table),
            format!("SELECT NAME FROM {} LIMIT 5", table),
        ]
    }
}
