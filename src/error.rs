use thiserror::Error;

use crate::model::Currency;

/// Structural failures of the pipeline's inputs.
///
/// These travel inside `anyhow::Error`; use `downcast_ref::<EtlError>()` to
/// tell them apart from plain I/O or driver errors. The binary treats all of
/// them as fatal.
#[derive(Debug, Error, PartialEq)]
pub enum EtlError {
    #[error("no <tbody> element found in page")]
    MissingTableBody,

    #[error("market cap in table row {row} is not numeric: {text:?}")]
    InvalidMarketCap { row: usize, text: String },

    #[error("exchange rate table has no entry for {}", .currency.code())]
    MissingRate { currency: Currency },
}
