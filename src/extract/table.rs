use anyhow::Result;
use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use crate::{error::EtlError, model::ExtractedBank};

/// Glyph the source page uses in place of a missing market cap.
pub const MISSING_PLACEHOLDER: &str = "—";

/// Bank name from the name cell of a row.
///
/// On the archived page the name cell holds a flag link first and the bank
/// link second, so the name is the first text node of the *second* `<a>`.
/// This is tied to that page's markup; cells with fewer than two links have
/// no name and the row is skipped.
pub fn bank_name_link(cell: ElementRef<'_>) -> Option<String> {
    let a_sel = Selector::parse("a").expect("CSS selector for links should be valid");
    let link = cell.select(&a_sel).nth(1)?;
    link.text().next().map(|t| t.trim().to_string())
}

/// True when any direct text child of the cell, or its whole text, is the
/// placeholder. Footnote markup (`—<sup>[1]</sup>`) still counts as missing.
fn is_missing_cap(cell: ElementRef<'_>) -> bool {
    let direct = cell
        .children()
        .filter_map(|n| n.value().as_text())
        .any(|t| t.trim() == MISSING_PLACEHOLDER);
    direct || cell.text().collect::<String>().trim() == MISSING_PLACEHOLDER
}

/// Parse the first `<tbody>` of `html` into bank rows, in document order.
///
/// A row is kept when it has at least three `<td>` cells, its second cell
/// yields a name via [`bank_name_link`], and its third cell is not the
/// [`MISSING_PLACEHOLDER`]. Other rows are dropped silently. A kept row whose
/// market cap does not parse as a number fails the whole parse.
pub fn parse_bank_table(html: &str) -> Result<Vec<ExtractedBank>> {
    let doc = Html::parse_document(html);
    let tbody_sel = Selector::parse("tbody").expect("CSS selector for tbody should be valid");
    let td_sel = Selector::parse("td").expect("CSS selector for td should be valid");

    let tbody = doc
        .select(&tbody_sel)
        .next()
        .ok_or(EtlError::MissingTableBody)?;

    let rows = tbody
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "tr");

    let mut banks = Vec::new();
    for (idx, row) in rows.enumerate() {
        let cells: Vec<ElementRef<'_>> = row.select(&td_sel).collect();
        if cells.len() < 3 {
            trace!(row = idx, cells = cells.len(), "skipping row: too few cells");
            continue;
        }

        if is_missing_cap(cells[2]) {
            trace!(row = idx, "skipping row: market cap missing");
            continue;
        }

        let Some(name) = bank_name_link(cells[1]) else {
            trace!(row = idx, "skipping row: no bank link");
            continue;
        };

        let raw = cells[2].text().next().unwrap_or_default().trim();
        let mc_usd_billion = raw.parse::<f64>().map_err(|_| EtlError::InvalidMarketCap {
            row: idx,
            text: raw.to_string(),
        })?;

        banks.push(ExtractedBank {
            name,
            mc_usd_billion,
        });
    }

    Ok(banks)
}
