use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One disclosed director/officer share transaction, in the shape shared by both exchanges.
///
/// Numeric fields are `None` when the exchange published something that is not a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradingRecord {
    /// Six-digit security code.
    pub company_code: String,
    /// Short company name with all whitespace removed.
    pub company_abbr: String,
    /// The person whose shares changed.
    pub person_name: String,
    /// Transaction date.
    pub change_date: NaiveDate,
    /// Filing date. Only the Shanghai feed publishes it.
    pub form_date: Option<NaiveDate>,
    /// Shares acquired (positive) or disposed of (negative).
    pub change_shares: Option<i64>,
    /// Average price per share. The Shanghai feed reports a missing price as zero.
    pub avg_price: Option<Decimal>,
    /// Free-text reason given in the disclosure.
    pub change_reason: String,
    /// Ownership percentage after the transaction. Shenzhen only.
    pub holding_ratio: Option<Decimal>,
    /// Share balance after the transaction.
    pub holding_shares: Option<i64>,
    /// How the trading person relates to the named insider. Shenzhen only.
    pub insider_relation: Option<String>,
    /// The insider's title.
    pub duty: String,
}

impl TradingRecord {
    /// `true` for acquisitions.
    pub fn is_buy(&self) -> bool {
        self.change_shares.is_some_and(|s| s > 0)
    }

    /// `true` for disposals.
    pub fn is_sell(&self) -> bool {
        self.change_shares.is_some_and(|s| s < 0)
    }
}
