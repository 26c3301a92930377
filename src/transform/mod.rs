// src/transform/mod.rs

pub mod rates;

use anyhow::Result;
use tracing::{debug, instrument};

pub use rates::ExchangeRates;

use crate::model::{BankRecord, Currency, ExtractedBank};

/// Round to 2 decimal places, ties to even on the scaled value.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Convert every bank's USD market cap into GBP, EUR and INR.
///
/// Rates are resolved before any row is touched, so a missing currency fails
/// even for an empty input.
#[instrument(level = "info", skip_all, fields(rows = banks.len()))]
pub fn transform(banks: Vec<ExtractedBank>, rates: &ExchangeRates) -> Result<Vec<BankRecord>> {
    let gbp = rates.rate(Currency::Gbp)?;
    let eur = rates.rate(Currency::Eur)?;
    let inr = rates.rate(Currency::Inr)?;
    debug!(gbp, eur, inr, "resolved exchange rates");

    Ok(banks
        .into_iter()
        .map(|b| BankRecord {
            mc_gbp_billion: round2(b.mc_usd_billion * gbp),
            mc_eur_billion: round2(b.mc_usd_billion * eur),
            mc_inr_billion: round2(b.mc_usd_billion * inr),
            mc_usd_billion: b.mc_usd_billion,
            name: b.name,
        })
        .collect())
}
