//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Shenzhen report front controller (query string is appended).
pub(crate) const DEFAULT_BASE_SZ: &str = "http://www.szse.cn/szseWeb/FrontController.szse";

/// Shanghai common query endpoint (query string is appended).
pub(crate) const DEFAULT_BASE_SH: &str = "http://query.sse.com.cn/commonQuery.do";

/// The Shanghai endpoint refuses requests without a same-site referer.
pub(crate) const DEFAULT_REFERER_SH: &str = "http://www.sse.com.cn/";

/// Status the exchanges answer with when they shed load.
pub(crate) const DEFAULT_BUSY_STATUS: u16 = 503;
