//! Buy/sell aggregation over canonical trading records.

use crate::trades::TradingRecord;
use rust_decimal::Decimal;
use serde::Serialize;

/// Aggregate buy/sell statistics for one query's records.
///
/// Averages are `None` when their side has no shares; a zero there would read
/// as a free transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub buy_shares: i64,
    pub sell_shares: i64,
    /// `buy_shares - sell_shares`.
    pub net_shares: i64,
    pub buy_cost: Decimal,
    pub sell_proceeds: Decimal,
    /// `buy_cost - sell_proceeds`.
    pub net_cost: Decimal,
    pub buy_avg_price: Option<Decimal>,
    pub sell_avg_price: Option<Decimal>,
    /// Records that contributed to the buy side.
    pub buy_count: usize,
    /// Records that contributed to the sell side.
    pub sell_count: usize,
    /// Records left out because their share count or price is unknown or out of range.
    pub excluded_count: usize,
}

/// Summarizes `records`, or returns `None` when there are none.
///
/// Zero-share records land in neither side. Records whose share count or
/// average price is unknown, or whose amounts would overflow the running
/// totals, are skipped and counted in `excluded_count`. The result does not
/// depend on record order as long as no record overflows.
pub fn summarize(records: &[TradingRecord]) -> Option<Summary> {
    if records.is_empty() {
        return None;
    }

    let mut s = Summary::default();
    for r in records {
        let (Some(shares), Some(price)) = (r.change_shares, r.avg_price) else {
            exclude(&mut s, r, "unknown shares or price");
            continue;
        };
        if shares != 0 && !s.tally(shares, price) {
            exclude(&mut s, r, "amount out of range");
        }
    }

    s.buy_avg_price = average(s.buy_cost, s.buy_shares);
    s.sell_avg_price = average(s.sell_proceeds, s.sell_shares);
    Some(s)
}

impl Summary {
    // Applies one non-zero record; leaves the totals untouched and returns
    // false when any of them would overflow.
    fn tally(&mut self, shares: i64, price: Decimal) -> bool {
        let Some(amount) = Decimal::from(shares).checked_mul(price) else {
            return false;
        };

        if shares > 0 {
            let (Some(total), Some(cost), Some(net_shares), Some(net_cost)) = (
                self.buy_shares.checked_add(shares),
                self.buy_cost.checked_add(amount),
                self.net_shares.checked_add(shares),
                self.net_cost.checked_add(amount),
            ) else {
                return false;
            };
            self.buy_shares = total;
            self.buy_cost = cost;
            self.buy_count += 1;
            self.net_shares = net_shares;
            self.net_cost = net_cost;
        } else {
            let Some(sold) = shares.checked_abs() else {
                return false;
            };
            let proceeds = amount.abs();
            let (Some(total), Some(sum), Some(net_shares), Some(net_cost)) = (
                self.sell_shares.checked_add(sold),
                self.sell_proceeds.checked_add(proceeds),
                self.net_shares.checked_sub(sold),
                self.net_cost.checked_sub(proceeds),
            ) else {
                return false;
            };
            self.sell_shares = total;
            self.sell_proceeds = sum;
            self.sell_count += 1;
            self.net_shares = net_shares;
            self.net_cost = net_cost;
        }
        true
    }
}

fn exclude(s: &mut Summary, _record: &TradingRecord, _reason: &str) {
    s.excluded_count += 1;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        code = %_record.company_code,
        person = %_record.person_name,
        date = %_record.change_date,
        reason = _reason,
        "record left out of summary"
    );
}

fn average(total: Decimal, shares: i64) -> Option<Decimal> {
    if shares == 0 {
        return None;
    }
    total.checked_div(Decimal::from(shares)).map(|d| d.normalize())
}
