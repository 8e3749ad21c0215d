//! Market resolution: which exchange serves a security code, and how that
//! exchange expects to be queried.

use crate::core::InsiderError;
use serde::Serialize;
use std::fmt;

/// The two disclosure sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketId {
    /// Shenzhen; serves an HTML report table.
    Sz,
    /// Shanghai; serves a JSONP feed.
    Sh,
}

impl MarketId {
    pub fn as_str(self) -> &'static str {
        match self {
            MarketId::Sz => "sz",
            MarketId::Sh => "sh",
        }
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing board, as implied by the code prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Board {
    /// Shenzhen main board (`000`, `001`).
    SzMain,
    /// Shenzhen SME board (`002`, `003`).
    SzSme,
    /// Shenzhen growth-enterprise board (`300`, `301`).
    SzGrowth,
    /// Shanghai main board (`600`, `601`, `603`, `605`).
    ShMain,
}

impl Board {
    pub fn market(self) -> MarketId {
        match self {
            Board::SzMain | Board::SzSme | Board::SzGrowth => MarketId::Sz,
            Board::ShMain => MarketId::Sh,
        }
    }

    /// Report catalog the Shenzhen front controller expects for this board.
    pub(crate) fn catalog_id(self) -> Option<&'static str> {
        match self {
            Board::SzMain => Some("1801_cxda"),
            Board::SzSme => Some("1801_zxbcxda"),
            Board::SzGrowth => Some("1801_cybcxda"),
            Board::ShMain => None,
        }
    }
}

const PREFIXES: &[(&str, Board)] = &[
    ("000", Board::SzMain),
    ("001", Board::SzMain),
    ("002", Board::SzSme),
    ("003", Board::SzSme),
    ("300", Board::SzGrowth),
    ("301", Board::SzGrowth),
    ("600", Board::ShMain),
    ("601", Board::ShMain),
    ("603", Board::ShMain),
    ("605", Board::ShMain),
];

/// How a market's endpoint names its query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketTemplate {
    pub market: MarketId,
    pub board: Board,
    /// Window length used when the caller gives no span and no bounds.
    pub default_span_months: u32,
    pub code_key: &'static str,
    pub begin_key: &'static str,
    pub end_key: &'static str,
    pub page_key: &'static str,
    /// Parameters every request to this market carries verbatim.
    pub fixed_params: &'static [(&'static str, &'static str)],
}

const SZ_FIXED: &[(&str, &str)] = &[("ACTIONID", "7"), ("AJAX", "AJAX-TRUE"), ("TABKEY", "tab1")];

const SH_FIXED: &[(&str, &str)] = &[
    ("isPagination", "true"),
    ("sqlId", "COMMON_SSE_XXPL_CXJL_SSGSGFBDQK_S"),
    ("NAME", ""),
];

/// Checks that `code` is a six-digit security code.
pub fn validate_code(code: &str) -> Result<&str, InsiderError> {
    let trimmed = code.trim();
    if trimmed.len() == 6 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        Ok(trimmed)
    } else {
        Err(InsiderError::InvalidCode {
            code: code.to_string(),
        })
    }
}

/// Resolves the board for `code` by its three-digit prefix.
pub fn resolve_board(code: &str) -> Result<Board, InsiderError> {
    let code = validate_code(code)?;
    let prefix = &code[..3];
    PREFIXES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, board)| *board)
        .ok_or_else(|| InsiderError::UnknownMarket {
            code: code.to_string(),
        })
}

/// Resolves the market that discloses trades for `code`.
pub fn resolve_market(code: &str) -> Result<MarketId, InsiderError> {
    resolve_board(code).map(Board::market)
}

/// The query template for `code`.
pub fn template_for(code: &str) -> Result<MarketTemplate, InsiderError> {
    let board = resolve_board(code)?;
    Ok(match board.market() {
        MarketId::Sz => MarketTemplate {
            market: MarketId::Sz,
            board,
            default_span_months: 12,
            code_key: "txtDMorJC",
            begin_key: "txtKsrq",
            end_key: "txtZzrq",
            page_key: "tab1PAGENUM",
            fixed_params: SZ_FIXED,
        },
        MarketId::Sh => MarketTemplate {
            market: MarketId::Sh,
            board,
            default_span_months: 12,
            code_key: "COMPANY_CODE",
            begin_key: "BEGIN_DATE",
            end_key: "END_DATE",
            page_key: "pageHelp.pageNo",
            fixed_params: SH_FIXED,
        },
    })
}
