//! Query building: turns a market template, a code and caller options into
//! the request parameters plus the effective date window.

use crate::core::InsiderError;
use crate::core::conversions::{
    INPUT_DATE_FORMAT, format_display_date, format_query_date, parse_input_date,
};
use crate::market::{Board, MarketId, MarketTemplate, resolve_board, template_for, validate_code};
use chrono::{Months, NaiveDate, Utc};
use serde::Serialize;

/// Bounds applied to relative spans, in months.
pub const MIN_SPAN_MONTHS: u32 = 1;
pub const MAX_SPAN_MONTHS: u32 = 24;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_SH_PAGE_SIZE: u32 = 100;

/// Caller-supplied query options. Everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    from: Option<String>,
    to: Option<String>,
    span_months: Option<i64>,
    page: Option<u32>,
    page_size: Option<u32>,
    today: Option<NaiveDate>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit begin date, `DD-MM-YYYY`. Overrides any span.
    #[must_use]
    pub fn from(mut self, date: impl Into<String>) -> Self {
        self.from = Some(date.into());
        self
    }

    /// Explicit end date, `DD-MM-YYYY`. Overrides any span.
    #[must_use]
    pub fn to(mut self, date: impl Into<String>) -> Self {
        self.to = Some(date.into());
        self
    }

    /// Window of `months` ending today. Clamped to `1..=24`.
    #[must_use]
    pub fn span_months(mut self, months: i64) -> Self {
        self.span_months = Some(months);
        self
    }

    /// Span as typed by a user. Non-numeric text clamps to the minimum span.
    #[must_use]
    pub fn span_months_raw(mut self, raw: &str) -> Self {
        let raw = raw.trim();
        let months = raw
            .parse::<i64>()
            .ok()
            .or_else(|| {
                raw.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f as i64)
            })
            .unwrap_or(i64::from(MIN_SPAN_MONTHS));
        self.span_months = Some(months);
        self
    }

    /// Result page to request. Default: 1.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Rows per page on the Shanghai feed. Default: 100.
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Pins "today" instead of reading the exchange-local clock.
    #[must_use]
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub(crate) fn resolved_today(&self) -> NaiveDate {
        self.today.unwrap_or_else(exchange_today)
    }
}

/// The current calendar date in Beijing time, which both exchanges use.
pub fn exchange_today() -> NaiveDate {
    Utc::now().with_timezone(&chrono_tz::Asia::Shanghai).date_naive()
}

/// Clamps a raw span to `MIN_SPAN_MONTHS..=MAX_SPAN_MONTHS`.
#[must_use]
pub fn clamp_span(raw: i64) -> u32 {
    raw.clamp(i64::from(MIN_SPAN_MONTHS), i64::from(MAX_SPAN_MONTHS)) as u32
}

/// Inclusive date window a query covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub begin: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// `YYYY/MM/DD - YYYY/MM/DD`, as printed in report headers.
    pub fn display(&self) -> String {
        format!(
            "{} - {}",
            format_display_date(self.begin),
            format_display_date(self.end)
        )
    }
}

/// A fully resolved query for one security code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuerySpec {
    pub market: MarketId,
    pub board: Board,
    pub code: String,
    pub window: DateWindow,
    /// Query string pairs in the order they are sent.
    pub params: Vec<(String, String)>,
}

impl QuerySpec {
    /// Looks up a parameter by key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Builds the request for `code` against `template`.
///
/// Window resolution, later steps overriding earlier ones:
/// the template's default span, then `span_months` (clamped), then the
/// explicit `from` and `to` bounds. A bound that does not parse as
/// `DD-MM-YYYY` fails; so does a window whose begin is after its end.
///
/// `code` must be a six-digit code listed on `template`'s board; a code from
/// another board is rejected as [`InsiderError::InvalidCode`].
pub fn build_query(
    template: &MarketTemplate,
    code: &str,
    options: &QueryOptions,
) -> Result<QuerySpec, InsiderError> {
    let code = validate_code(code)?;
    if resolve_board(code)? != template.board {
        return Err(InsiderError::InvalidCode {
            code: code.to_string(),
        });
    }

    let window = resolve_window(template, options)?;
    let page = options.page.unwrap_or(DEFAULT_PAGE);

    let mut params: Vec<(String, String)> = template
        .fixed_params
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();

    match template.market {
        MarketId::Sz => {
            if let Some(catalog) = template.board.catalog_id() {
                params.push(("CATALOGID".into(), catalog.into()));
            }
        }
        MarketId::Sh => {
            params.push(("jsonCallBack".into(), format!("jsonpCallback{code}")));
            params.push((
                "pageHelp.pageSize".into(),
                options
                    .page_size
                    .unwrap_or(DEFAULT_SH_PAGE_SIZE)
                    .to_string(),
            ));
        }
    }

    params.push((template.code_key.into(), code.to_string()));
    params.push((template.begin_key.into(), format_query_date(window.begin)));
    params.push((template.end_key.into(), format_query_date(window.end)));
    params.push((template.page_key.into(), page.to_string()));

    Ok(QuerySpec {
        market: template.market,
        board: template.board,
        code: code.to_string(),
        window,
        params,
    })
}

/// Resolves the market template for `code` and builds its query.
pub fn build_query_for(code: &str, options: &QueryOptions) -> Result<QuerySpec, InsiderError> {
    let template = template_for(code)?;
    build_query(&template, code, options)
}

fn resolve_window(
    template: &MarketTemplate,
    options: &QueryOptions,
) -> Result<DateWindow, InsiderError> {
    let today = options.resolved_today();
    let span = options
        .span_months
        .map(clamp_span)
        .unwrap_or(template.default_span_months);

    let mut begin = today
        .checked_sub_months(Months::new(span))
        .ok_or_else(|| InsiderError::InvalidDateRange {
            input: format!("{span} months before {today}"),
            expected: "a representable date".into(),
        })?;
    let mut end = today;

    if let Some(raw) = options.from.as_deref() {
        begin = parse_bound(raw)?;
    }
    if let Some(raw) = options.to.as_deref() {
        end = parse_bound(raw)?;
    }

    if begin > end {
        return Err(InsiderError::InvalidDateRange {
            input: format!("{begin} > {end}"),
            expected: "begin on or before end".into(),
        });
    }
    Ok(DateWindow { begin, end })
}

fn parse_bound(raw: &str) -> Result<NaiveDate, InsiderError> {
    parse_input_date(raw).ok_or_else(|| InsiderError::InvalidDateRange {
        input: raw.to_string(),
        expected: format!("a date formatted as {INPUT_DATE_FORMAT}"),
    })
}
