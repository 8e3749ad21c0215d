//! Plain-text rendering of a query's records and summary.

use crate::core::conversions::{format_display_date, group_decimal, group_int};
use crate::market::MarketId;
use crate::query::DateWindow;
use crate::summary::Summary;
use crate::trades::TradingRecord;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Write as _;

/// Shown for numbers the exchange published as non-numeric.
pub const UNKNOWN_PLACEHOLDER: &str = "--";
/// Shown for an average price on a side with no shares.
pub const NOT_APPLICABLE: &str = "N/A";
/// Body of a report with no records.
pub const NO_TRANSACTIONS: &str = "no transactions in this window";

/// Everything one query produced: the window it covered, its records and their summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsiderReport {
    pub code: String,
    pub market: MarketId,
    pub window: DateWindow,
    pub records: Vec<TradingRecord>,
    /// `None` when there were no records.
    pub summary: Option<Summary>,
}

impl InsiderReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Renders `report` as text: a header, one line per record, then the summary.
pub fn render(report: &InsiderReport) -> String {
    let mut out = String::new();
    let name = report
        .records
        .first()
        .map(|r| r.company_abbr.as_str())
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "{} {} [{}]  {}",
        report.code,
        name,
        report.market,
        report.window.display()
    );

    if report.records.is_empty() {
        let _ = writeln!(out, "{NO_TRANSACTIONS}");
        return out;
    }

    for r in &report.records {
        let _ = writeln!(out, "{}", render_record(r));
    }

    if let Some(s) = &report.summary {
        out.push('\n');
        out.push_str(&render_summary(s));
    }
    out
}

/// One record as a single line.
pub fn render_record(r: &TradingRecord) -> String {
    let mut line = format!(
        "{}  {}  {}  {:>14} @ {:>9}  {}",
        format_display_date(r.change_date),
        r.person_name,
        r.duty,
        shares(r.change_shares),
        price(r.avg_price),
        r.change_reason,
    );
    if let Some(held) = r.holding_shares {
        let _ = write!(line, "  held {}", group_int(held));
    }
    if let Some(ratio) = r.holding_ratio {
        let _ = write!(line, " ({}%)", ratio.normalize());
    }
    if let Some(rel) = &r.insider_relation {
        let _ = write!(line, "  [{rel}]");
    }
    if let Some(filed) = r.form_date {
        let _ = write!(line, "  filed {}", format_display_date(filed));
    }
    line
}

/// The summary block.
pub fn render_summary(s: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "bought {:>14} shares  avg {:>9}  cost     {:>18}",
        group_int(s.buy_shares),
        avg(s.buy_avg_price),
        group_decimal(s.buy_cost, 2)
    );
    let _ = writeln!(
        out,
        "sold   {:>14} shares  avg {:>9}  proceeds {:>18}",
        group_int(s.sell_shares),
        avg(s.sell_avg_price),
        group_decimal(s.sell_proceeds, 2)
    );
    let _ = writeln!(
        out,
        "net    {:>14} shares                 net      {:>18}",
        group_int(s.net_shares),
        group_decimal(s.net_cost, 2)
    );
    if s.excluded_count > 0 {
        let _ = writeln!(
            out,
            "{} record(s) with unknown or out-of-range amounts not counted",
            s.excluded_count
        );
    }
    out
}

fn shares(v: Option<i64>) -> String {
    v.map(group_int)
        .unwrap_or_else(|| UNKNOWN_PLACEHOLDER.to_string())
}

fn price(v: Option<Decimal>) -> String {
    v.map(|p| group_decimal(p, 2))
        .unwrap_or_else(|| UNKNOWN_PLACEHOLDER.to_string())
}

fn avg(v: Option<Decimal>) -> String {
    v.map(|p| group_decimal(p, 2))
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}
