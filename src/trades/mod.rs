mod api;
mod model;
mod parse;
mod wire;

pub use model::TradingRecord;
pub use parse::{
    ParseFn, SZ_COLUMNS, parse_payload, parse_sh_jsonp, parse_sz_html, parser_for, strip_jsonp,
};

use crate::core::{InsiderClient, InsiderError};
use crate::query::{QueryOptions, QuerySpec, build_query_for};
use crate::report::InsiderReport;
use crate::summary::summarize;
use chrono::NaiveDate;

/// A builder for fetching director/officer share transactions for one security.
///
/// Each call to [`fetch`](Self::fetch) or [`report`](Self::report) resolves the
/// market and the date window afresh; nothing is shared between calls.
///
/// # Example
///
/// ```no_run
/// # use insider_rs::{InsiderClient, TradesBuilder};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = InsiderClient::default();
/// let report = TradesBuilder::new(&client, "600000").span_months(6).report().await?;
/// println!("{}", insider_rs::report::render(&report));
/// # Ok(())
/// # }
/// ```
pub struct TradesBuilder {
    client: InsiderClient,
    code: String,
    options: QueryOptions,
}

impl TradesBuilder {
    /// Creates a new `TradesBuilder` for a given security code.
    pub fn new(client: &InsiderClient, code: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            code: code.into(),
            options: QueryOptions::default(),
        }
    }

    /// Replaces all query options at once.
    #[must_use]
    pub fn options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    /// Window of `months` ending today, clamped to `1..=24`.
    #[must_use]
    pub fn span_months(mut self, months: i64) -> Self {
        self.options = self.options.span_months(months);
        self
    }

    /// Explicit begin date (`DD-MM-YYYY`).
    #[must_use]
    pub fn from(mut self, date: impl Into<String>) -> Self {
        self.options = self.options.from(date);
        self
    }

    /// Explicit end date (`DD-MM-YYYY`).
    #[must_use]
    pub fn to(mut self, date: impl Into<String>) -> Self {
        self.options = self.options.to(date);
        self
    }

    /// Result page to request.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.options = self.options.page(page);
        self
    }

    /// Rows per page for the Shanghai feed. Shenzhen pages are fixed-size.
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.options = self.options.page_size(size);
        self
    }

    /// Pins "today" for window resolution.
    #[must_use]
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.options = self.options.today(today);
        self
    }

    /// Resolves the market and builds the request without sending it.
    pub fn query(&self) -> Result<QuerySpec, InsiderError> {
        build_query_for(&self.code, &self.options)
    }

    /// Fetches and parses the records. An empty list means no transactions in the window.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn fetch(&self) -> Result<Vec<TradingRecord>, InsiderError> {
        let spec = self.query()?;
        api::fetch_records(&self.client, &spec).await
    }

    /// Fetches the records and bundles them with their summary and resolved window.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn report(&self) -> Result<InsiderReport, InsiderError> {
        let spec = self.query()?;
        let records = api::fetch_records(&self.client, &spec).await?;
        let summary = summarize(&records);

        #[cfg(feature = "tracing")]
        {
            if summary.is_none() {
                tracing::info!(code = %spec.code, window = %spec.window.display(), "no transactions in window");
            }
        }

        Ok(InsiderReport {
            code: spec.code,
            market: spec.market,
            window: spec.window,
            records,
            summary,
        })
    }
}

/// Runs the pipeline for each code in turn.
///
/// Results come back in input order, one per code; a failing code does not
/// stop the ones after it.
pub async fn fetch_batch<I, S>(
    client: &InsiderClient,
    codes: I,
    options: &QueryOptions,
) -> Vec<(String, Result<InsiderReport, InsiderError>)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out = Vec::new();
    for code in codes {
        let code = code.into();
        let result = TradesBuilder::new(client, code.clone())
            .options(options.clone())
            .report()
            .await;
        if crate::core::net::debug_enabled()
            && let Err(e) = &result
        {
            eprintln!("IR_DEBUG [fetch_batch]: {code} failed: {e}");
        }
        out.push((code, result));
    }
    out
}
