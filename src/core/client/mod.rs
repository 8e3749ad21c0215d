//! Public client surface + builder.
//! Default endpoints and UA live in `constants`.

mod constants;

use crate::core::InsiderError;
use crate::market::MarketId;
use constants::{
    DEFAULT_BASE_SH, DEFAULT_BASE_SZ, DEFAULT_BUSY_STATUS, DEFAULT_REFERER_SH, USER_AGENT,
};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, REFERER, USER_AGENT as UA_HEADER};
use std::time::Duration;
use url::Url;

/// HTTP client for both exchanges.
///
/// Cheap to clone; clones share the underlying connection pool. The client
/// holds no per-query state, so one instance can drive any number of
/// independent queries.
#[derive(Debug, Clone)]
pub struct InsiderClient {
    http: Client,
    base_sz: Url,
    base_sh: Url,
    referer_sh: String,
    user_agent: String,
    busy_status: u16,
}

impl Default for InsiderClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl InsiderClient {
    /// Create a new builder.
    pub fn builder() -> InsiderClientBuilder {
        InsiderClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_for(&self, market: MarketId) -> &Url {
        match market {
            MarketId::Sz => &self.base_sz,
            MarketId::Sh => &self.base_sh,
        }
    }

    pub(crate) fn busy_status(&self) -> u16 {
        self.busy_status
    }

    /// Headers sent with every request to `market`.
    pub(crate) fn request_headers(&self, market: MarketId) -> Result<HeaderMap, InsiderError> {
        let mut headers = HeaderMap::new();
        headers.insert(UA_HEADER, header_value(&self.user_agent)?);
        match market {
            MarketId::Sz => {
                headers.insert(ACCEPT, HeaderValue::from_static("text/html,*/*"));
            }
            MarketId::Sh => {
                headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
                headers.insert(REFERER, header_value(&self.referer_sh)?);
            }
        }
        Ok(headers)
    }
}

fn header_value(s: &str) -> Result<HeaderValue, InsiderError> {
    HeaderValue::from_str(s).map_err(|e| InsiderError::Data(format!("invalid header value {s:?}: {e}")))
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct InsiderClientBuilder {
    user_agent: Option<String>,
    base_sz: Option<Url>,
    base_sh: Option<Url>,
    referer_sh: Option<String>,
    busy_status: Option<u16>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl InsiderClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the Shenzhen report endpoint (e.g., `http://www.szse.cn/szseWeb/FrontController.szse`).
    pub fn base_sz(mut self, url: Url) -> Self {
        self.base_sz = Some(url);
        self
    }

    /// Override the Shanghai query endpoint (e.g., `http://query.sse.com.cn/commonQuery.do`).
    pub fn base_sh(mut self, url: Url) -> Self {
        self.base_sh = Some(url);
        self
    }

    /// Override the `Referer` sent to the Shanghai endpoint.
    pub fn referer_sh(mut self, referer: impl Into<String>) -> Self {
        self.referer_sh = Some(referer.into());
        self
    }

    /// Status code treated as "system busy" rather than a generic failure. Default: 503.
    pub fn busy_status(mut self, status: u16) -> Self {
        self.busy_status = Some(status);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<InsiderClient, InsiderError> {
        let base_sz = match self.base_sz {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_SZ)?,
        };
        let base_sh = match self.base_sh {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_SH)?,
        };
        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_string());

        let mut httpb = reqwest::Client::builder().cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(InsiderClient {
            http,
            base_sz,
            base_sh,
            referer_sh: self
                .referer_sh
                .unwrap_or_else(|| DEFAULT_REFERER_SH.to_string()),
            user_agent,
            busy_status: self.busy_status.unwrap_or(DEFAULT_BUSY_STATUS),
        })
    }
}
