use serde::{Deserialize, Serialize};

pub const NAME_COLUMN: &str = "Name";
pub const USD_COLUMN: &str = "MC_USD_Billion";

/// A row as it comes off the scraped table, before any currency conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractedBank {
    pub name: String,
    pub mc_usd_billion: f64,
}

/// A fully transformed row. Derived columns follow `Currency::ALL` order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BankRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "MC_USD_Billion")]
    pub mc_usd_billion: f64,
    #[serde(rename = "MC_GBP_Billion")]
    pub mc_gbp_billion: f64,
    #[serde(rename = "MC_EUR_Billion")]
    pub mc_eur_billion: f64,
    #[serde(rename = "MC_INR_Billion")]
    pub mc_inr_billion: f64,
}

impl BankRecord {
    /// Column names in persisted order (no index column).
    pub fn columns() -> [&'static str; 5] {
        [
            NAME_COLUMN,
            USD_COLUMN,
            Currency::Gbp.column(),
            Currency::Eur.column(),
            Currency::Inr.column(),
        ]
    }

    pub fn converted(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Gbp => self.mc_gbp_billion,
            Currency::Eur => self.mc_eur_billion,
            Currency::Inr => self.mc_inr_billion,
        }
    }
}

/// Target currencies for market-cap conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Currency {
    Gbp,
    Eur,
    Inr,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Gbp, Currency::Eur, Currency::Inr];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Inr => "INR",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Currency::Gbp => "MC_GBP_Billion",
            Currency::Eur => "MC_EUR_Billion",
            Currency::Inr => "MC_INR_Billion",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_currency_order() {
        let cols = BankRecord::columns();
        assert_eq!(cols[0], "Name");
        assert_eq!(cols[1], "MC_USD_Billion");
        for (i, c) in Currency::ALL.iter().enumerate() {
            assert_eq!(cols[i + 2], c.column());
        }
    }
}
