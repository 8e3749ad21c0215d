//! Shanghai JSONP feed.

use crate::core::InsiderError;
use crate::core::conversions::{
    FallbackPolicy, parse_optional_number, parse_optional_shares, parse_source_date,
    strip_whitespace,
};
use crate::trades::model::TradingRecord;
use crate::trades::wire::{ShPayload, ShTradeNode, text};

/// Recovers the JSON body from `callback(<json>)` or `callback(<json>);`.
///
/// The callback name is not checked; everything between the first `(` and the
/// last `)` is returned.
pub fn strip_jsonp(payload: &str) -> Result<&str, InsiderError> {
    let open = payload
        .find('(')
        .ok_or_else(|| InsiderError::Data("jsonp: missing '('".into()))?;
    let close = payload
        .rfind(')')
        .filter(|&c| c > open)
        .ok_or_else(|| InsiderError::Data("jsonp: missing ')'".into()))?;
    Ok(payload[open + 1..close].trim())
}

/// Parses a Shanghai JSONP payload.
///
/// A missing average price becomes zero, unlike the Shenzhen table where
/// unparsable numbers stay unknown.
pub fn parse_sh_jsonp(payload: &str) -> Result<Vec<TradingRecord>, InsiderError> {
    let body = strip_jsonp(payload)?;
    let parsed: ShPayload = serde_json::from_str(body)
        .map_err(|e| InsiderError::Data(format!("jsonp body parse: {e}")))?;

    parsed.into_rows().into_iter().map(record_from_node).collect()
}

fn record_from_node(n: ShTradeNode) -> Result<TradingRecord, InsiderError> {
    let company_code = text(n.company_code.as_ref()).unwrap_or_default();
    let raw_date = n.change_date.unwrap_or_default();
    let change_date = parse_source_date(&raw_date).ok_or_else(|| {
        InsiderError::Data(format!(
            "unparsable CHANGE_DATE {raw_date:?} for {company_code}"
        ))
    })?;

    Ok(TradingRecord {
        company_abbr: strip_whitespace(n.company_abbr.as_deref().unwrap_or_default()),
        person_name: n.name.unwrap_or_default().trim().to_string(),
        change_date,
        form_date: n.form_date.as_deref().and_then(parse_source_date),
        change_shares: parse_optional_shares(
            text(n.change_num.as_ref()).as_deref(),
            FallbackPolicy::Unknown,
        ),
        avg_price: parse_optional_number(
            text(n.current_avg_price.as_ref()).as_deref(),
            FallbackPolicy::ZeroDefault,
        ),
        change_reason: n.change_reason.unwrap_or_default().trim().to_string(),
        holding_ratio: None,
        holding_shares: parse_optional_shares(
            text(n.holdstock_num.as_ref()).as_deref(),
            FallbackPolicy::Unknown,
        ),
        insider_relation: None,
        duty: n.duty.unwrap_or_default().trim().to_string(),
        company_code,
    })
}
