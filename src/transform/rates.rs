use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::{collections::HashMap, fs::File, io::Read, path::Path};
use tracing::{debug, warn};

use crate::{error::EtlError, model::Currency};

#[derive(Debug, Deserialize)]
struct RateRow {
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "Rate")]
    rate: f64,
}

/// Multipliers against USD, keyed by currency code.
#[derive(Clone, Debug, Default)]
pub struct ExchangeRates {
    by_code: HashMap<String, f64>,
}

impl ExchangeRates {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("opening exchange rate table {}", path.display()))?;
        Self::from_reader(file)
            .with_context(|| format!("reading exchange rate table {}", path.display()))
    }

    /// Read a `Currency,Rate` table. A code listed twice keeps its last rate.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut by_code = HashMap::new();
        for (idx, result) in rdr.deserialize::<RateRow>().enumerate() {
            let row = result.with_context(|| format!("rate table parse error at record {}", idx))?;
            if let Some(prev) = by_code.insert(row.currency.clone(), row.rate) {
                warn!(currency = %row.currency, prev, rate = row.rate, "duplicate currency, keeping last");
            }
        }
        debug!(currencies = by_code.len(), "loaded exchange rates");
        Ok(Self { by_code })
    }

    pub fn rate(&self, currency: Currency) -> Result<f64, EtlError> {
        self.by_code
            .get(currency.code())
            .copied()
            .ok_or(EtlError::MissingRate { currency })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_rates_from_file() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        write!(tmp, "Currency,Rate\nEUR,0.93\nGBP,0.8\nINR,82.95\n")?;

        let rates = ExchangeRates::from_path(tmp.path())?;
        assert_eq!(rates.rate(Currency::Gbp)?, 0.8);
        assert_eq!(rates.rate(Currency::Eur)?, 0.93);
        assert_eq!(rates.rate(Currency::Inr)?, 82.95);
        Ok(())
    }

    #[test]
    fn duplicate_code_keeps_last() -> Result<()> {
        let rates =
            ExchangeRates::from_reader("Currency,Rate\nGBP,0.5\nEUR,0.9\nGBP,0.8\n".as_bytes())?;
        assert_eq!(rates.rate(Currency::Gbp)?, 0.8);
        assert_eq!(rates.rate(Currency::Eur)?, 0.9);
        Ok(())
    }

    #[test]
    fn unknown_codes_are_kept_but_unused() -> Result<()> {
        let rates = ExchangeRates::from_reader("Currency,Rate\nJPY,147.2\nGBP,0.8\n".as_bytes())?;
        assert_eq!(rates.rate(Currency::Gbp)?, 0.8);
        assert_eq!(
            rates.rate(Currency::Eur),
            Err(EtlError::MissingRate {
                currency: Currency::Eur
            })
        );
        Ok(())
    }

    #[test]
    fn codes_match_exactly() -> Result<()> {
        let rates = ExchangeRates::from_reader("Currency,Rate\ngbp,0.8\n EUR ,0.93\n".as_bytes())?;
        assert!(rates.rate(Currency::Gbp).is_err());
        // surrounding whitespace is trimmed by the reader, case is not folded
        assert_eq!(rates.rate(Currency::Eur)?, 0.93);
        Ok(())
    }

    #[test]
    fn non_numeric_rate_is_an_error() {
        assert!(ExchangeRates::from_reader("Currency,Rate\nGBP,abc\n".as_bytes()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(ExchangeRates::from_path("/definitely/not/here.csv").is_err());
    }
}
