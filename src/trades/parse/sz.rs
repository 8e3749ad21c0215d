//! Shenzhen report table.
//!
//! Each data row carries exactly [`SZ_COLUMNS`] cells, in this order:
//! code, short name, person, change date, shares changed, average price,
//! reason, holding ratio, shares held afterwards, relation to the insider,
//! title. Header rows use `<th>` and the "no data" row spans all columns in a
//! single cell, so neither matches.

use crate::core::InsiderError;
use crate::core::conversions::{
    FallbackPolicy, parse_optional_number, parse_optional_shares, parse_source_date,
    strip_whitespace,
};
use crate::core::net::debug_enabled;
use crate::trades::model::TradingRecord;
use scraper::{ElementRef, Html, Selector};

/// Cells per data row.
pub const SZ_COLUMNS: usize = 11;

/// Parses a decoded Shenzhen report page. A page with no data rows yields an empty list.
pub fn parse_sz_html(html: &str) -> Result<Vec<TradingRecord>, InsiderError> {
    let document = Html::parse_document(html);
    let tr_selector =
        Selector::parse("tr").map_err(|e| InsiderError::Data(format!("tr selector: {e}")))?;

    let mut records = Vec::new();
    for tr in document.select(&tr_selector) {
        let cells = row_cells(tr);
        if cells.len() != SZ_COLUMNS {
            #[cfg(feature = "tracing")]
            {
                if cells.len() > 1 {
                    tracing::debug!(cells = cells.len(), "skipping malformed report row");
                }
            }
            continue;
        }
        records.push(record_from_cells(&cells)?);
    }

    if debug_enabled() {
        eprintln!(
            "IR_DEBUG [parse_sz_html]: html.len()={}, records={}",
            html.len(),
            records.len()
        );
    }
    Ok(records)
}

// Direct <td> children only, so a layout row wrapping the data table is not mistaken for data.
fn row_cells(tr: ElementRef<'_>) -> Vec<String> {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "td")
        .map(|td| td.text().collect::<String>().trim().to_string())
        .collect()
}

fn record_from_cells(cells: &[String]) -> Result<TradingRecord, InsiderError> {
    let cell = |i: usize| cells[i].as_str();
    let change_date = parse_source_date(cell(3)).ok_or_else(|| {
        InsiderError::Data(format!("unparsable change date {:?} for {}", cell(3), cell(0)))
    })?;
    let relation = cell(9);

    Ok(TradingRecord {
        company_code: cell(0).to_string(),
        company_abbr: strip_whitespace(cell(1)),
        person_name: cell(2).to_string(),
        change_date,
        form_date: None,
        change_shares: parse_optional_shares(Some(cell(4)), FallbackPolicy::Unknown),
        avg_price: parse_optional_number(Some(cell(5)), FallbackPolicy::Unknown),
        change_reason: cell(6).to_string(),
        holding_ratio: parse_optional_number(Some(cell(7)), FallbackPolicy::Unknown),
        holding_shares: parse_optional_shares(Some(cell(8)), FallbackPolicy::Unknown),
        insider_relation: (!relation.is_empty()).then(|| relation.to_string()),
        duty: cell(10).to_string(),
    })
}
