//! Coercions between the exchanges' loosely typed fields and the canonical model,
//! plus the date and number formats used at the crate's boundaries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

/// Accepted format for user-supplied date bounds (`DD-MM-YYYY`).
pub const INPUT_DATE_FORMAT: &str = "%d-%m-%Y";
/// Format of dates sent to the exchanges (`YYYY-MM-DD`).
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";
/// Format of dates in rendered reports (`YYYY/MM/DD`).
pub const DISPLAY_DATE_FORMAT: &str = "%Y/%m/%d";

/// What a missing or malformed numeric field becomes.
///
/// The two exchanges disagree: the Shenzhen table leaves bad cells unknown,
/// while the Shanghai feed omits the average price on some disclosures and
/// those are read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Missing or malformed input yields `None`.
    Unknown,
    /// Missing or malformed input yields zero.
    ZeroDefault,
}

impl FallbackPolicy {
    fn fallback(self) -> Option<Decimal> {
        match self {
            FallbackPolicy::Unknown => None,
            FallbackPolicy::ZeroDefault => Some(Decimal::ZERO),
        }
    }
}

/// Parses a loosely formatted number (`"1,000"`, `" -3.5 "`, `"0.12%"`).
///
/// Blank input, placeholder dashes and anything unparsable fall back according to `policy`.
#[must_use]
pub fn parse_optional_number(raw: Option<&str>, policy: FallbackPolicy) -> Option<Decimal> {
    let Some(raw) = raw else {
        return policy.fallback();
    };
    let cleaned: String = raw
        .trim()
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '-') {
        return policy.fallback();
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
        .or_else(|| policy.fallback())
}

/// Like [`parse_optional_number`] but for whole share counts.
///
/// A value with a fractional part is treated as malformed.
#[must_use]
pub fn parse_optional_shares(raw: Option<&str>, policy: FallbackPolicy) -> Option<i64> {
    let whole = |d: Decimal| {
        if d.fract().is_zero() {
            d.to_i64()
        } else {
            None
        }
    };
    parse_optional_number(raw, policy)
        .and_then(whole)
        .or_else(|| policy.fallback().and_then(whole))
}

/// Removes every whitespace character, including the full-width and
/// non-breaking spaces the exchanges pad short names with.
#[must_use]
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parses a user-supplied date in [`INPUT_DATE_FORMAT`].
///
/// The input must round-trip exactly, so `1-2-2024` or `01-02-24` are rejected
/// instead of being interpreted.
pub fn parse_input_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let date = NaiveDate::parse_from_str(s, INPUT_DATE_FORMAT).ok()?;
    (date.format(INPUT_DATE_FORMAT).to_string() == s).then_some(date)
}

/// Parses a date as the exchanges emit it (`YYYY-MM-DD`, optionally followed by a time).
pub fn parse_source_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let head = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(head, QUERY_DATE_FORMAT).ok()
}

#[must_use]
pub fn format_query_date(d: NaiveDate) -> String {
    d.format(QUERY_DATE_FORMAT).to_string()
}

#[must_use]
pub fn format_display_date(d: NaiveDate) -> String {
    d.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Formats an integer with `,` thousands separators.
#[must_use]
pub fn group_int(v: i64) -> String {
    group_digits(&v.to_string())
}

/// Formats a decimal rounded to `dp` places with `,` thousands separators.
#[must_use]
pub fn group_decimal(v: Decimal, dp: u32) -> String {
    group_digits(&format!("{:.*}", dp as usize, v.round_dp(dp)))
}

fn group_digits(s: &str) -> String {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", s),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut out = String::with_capacity(s.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}
