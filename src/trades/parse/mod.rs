//! Payload parsers, one per market, all producing [`TradingRecord`]s.

mod sh;
mod sz;

pub use sh::{parse_sh_jsonp, strip_jsonp};
pub use sz::{SZ_COLUMNS, parse_sz_html};

use super::model::TradingRecord;
use crate::core::InsiderError;
use crate::market::MarketId;

/// Signature shared by every market's parser.
pub type ParseFn = fn(&str) -> Result<Vec<TradingRecord>, InsiderError>;

/// The parser for payloads served by `market`.
pub fn parser_for(market: MarketId) -> ParseFn {
    match market {
        MarketId::Sz => parse_sz_html,
        MarketId::Sh => parse_sh_jsonp,
    }
}

/// Parses `payload` with the parser registered for `market`.
pub fn parse_payload(market: MarketId, payload: &str) -> Result<Vec<TradingRecord>, InsiderError> {
    parser_for(market)(payload)
}
