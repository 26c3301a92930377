use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;
use tracing::info;

use crate::model::BankRecord;

/// Header row: an unnamed positional index column, then the record columns.
fn header() -> Vec<&'static str> {
    let mut cols = vec![""];
    cols.extend(BankRecord::columns());
    cols
}

/// Write `records` to `path`, replacing any existing file. Each row is
/// prefixed with its zero-based position.
pub fn write_csv(records: &[BankRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("creating CSV {}", path.display()))?;

    wtr.write_record(header())?;
    for (idx, r) in records.iter().enumerate() {
        wtr.serialize((
            idx,
            &r.name,
            r.mc_usd_billion,
            r.mc_gbp_billion,
            r.mc_eur_billion,
            r.mc_inr_billion,
        ))
        .with_context(|| format!("writing row {} to {}", idx, path.display()))?;
    }
    wtr.flush()
        .with_context(|| format!("flushing CSV {}", path.display()))?;

    info!(rows = records.len(), path = %path.display(), "wrote CSV");
    Ok(())
}

/// Read back a file produced by [`write_csv`], dropping the index column.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<BankRecord>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let found: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if found != header() {
        bail!("unexpected CSV header in {}: {:?}", path.display(), found);
    }

    let mut out = Vec::new();
    for (idx, result) in rdr
        .deserialize::<(usize, String, f64, f64, f64, f64)>()
        .enumerate()
    {
        let (_, name, usd, gbp, eur, inr) =
            result.with_context(|| format!("CSV parse error in {} at record {}", path.display(), idx))?;
        out.push(BankRecord {
            name,
            mc_usd_billion: usd,
            mc_gbp_billion: gbp,
            mc_eur_billion: eur,
            mc_inr_billion: inr,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> Vec<BankRecord> {
        vec![
            BankRecord {
                name: "JPMorgan Chase".into(),
                mc_usd_billion: 432.92,
                mc_gbp_billion: 346.34,
                mc_eur_billion: 402.62,
                mc_inr_billion: 35910.71,
            },
            BankRecord {
                name: "Bank, with comma".into(),
                mc_usd_billion: 100.0,
                mc_gbp_billion: 80.0,
                mc_eur_billion: 93.0,
                mc_inr_billion: 8295.0,
            },
        ]
    }

    #[test]
    fn writes_index_column_and_header() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("Largest_banks_data.csv");
        write_csv(&sample(), &path)?;

        let text = fs::read_to_string(&path)?;
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some(",Name,MC_USD_Billion,MC_GBP_Billion,MC_EUR_Billion,MC_INR_Billion")
        );
        assert_eq!(
            lines.next(),
            Some("0,JPMorgan Chase,432.92,346.34,402.62,35910.71")
        );
        assert_eq!(
            lines.next(),
            Some("1,\"Bank, with comma\",100.0,80.0,93.0,8295.0")
        );
        assert_eq!(lines.next(), None);
        Ok(())
    }

    #[test]
    fn round_trips_records() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("out.csv");
        let records = sample();

        write_csv(&records, &path)?;
        assert_eq!(read_csv(&path)?, records);
        Ok(())
    }

    #[test]
    fn overwrites_existing_file() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("out.csv");
        fs::write(&path, "stale,content\n1,2\n3,4\n5,6\n")?;

        write_csv(&sample()[..1], &path)?;
        assert_eq!(read_csv(&path)?.len(), 1);
        Ok(())
    }

    #[test]
    fn empty_set_writes_header_only() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("empty.csv");
        write_csv(&[], &path)?;

        assert_eq!(fs::read_to_string(&path)?.lines().count(), 1);
        assert!(read_csv(&path)?.is_empty());
        Ok(())
    }
}
