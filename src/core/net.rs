#[cfg(feature = "test-mode")]
use std::env;

/// Charset the Shenzhen report pages are served in when the response does not say otherwise.
pub(crate) const SZ_LEGACY_CHARSET: &str = "gbk";

/// Read the response body as text, decoding with `default_charset` unless
/// the `Content-Type` header names one.
/// In `test-mode`, if `IR_RECORD=1`, the decoded body is saved as a fixture.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    default_charset: &str,
    _endpoint: &str,
    _code: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text_with_charset(default_charset).await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("IR_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _code, _ext, &text)
        {
            eprintln!("IR_RECORD: failed to write fixture for {_code}: {e}");
        }
    }

    Ok(text)
}

pub(crate) fn debug_enabled() -> bool {
    std::env::var("IR_DEBUG").ok().as_deref() == Some("1")
}
