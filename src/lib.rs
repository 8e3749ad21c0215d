//! insider-rs: director/officer share transactions from the Shenzhen and
//! Shanghai stock exchanges.
//!
//! The pipeline for one security code is: resolve the market from the code
//! prefix ([`market`]), build the request and its date window ([`query`]),
//! fetch and parse the exchange's payload into [`TradingRecord`]s
//! ([`trades`]), aggregate buys and sells ([`summary`]) and optionally render
//! a text report ([`report`]).

pub mod core;
pub mod market;
pub mod query;
pub mod report;
pub mod summary;
pub mod trades;

pub use crate::core::{FallbackPolicy, InsiderClient, InsiderClientBuilder, InsiderError};
pub use market::{Board, MarketId, MarketTemplate, resolve_market, template_for};
pub use query::{DateWindow, QueryOptions, QuerySpec, build_query, build_query_for};
pub use report::InsiderReport;
pub use summary::{Summary, summarize};
pub use trades::{TradesBuilder, TradingRecord, fetch_batch};
