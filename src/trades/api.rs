use crate::core::{InsiderClient, InsiderError, net};
use crate::market::MarketId;
use crate::query::QuerySpec;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

use super::model::TradingRecord;
use super::parse::parser_for;

/// Performs the single GET for `spec` and parses the payload.
pub(super) async fn fetch_records(
    client: &InsiderClient,
    spec: &QuerySpec,
) -> Result<Vec<TradingRecord>, InsiderError> {
    let body = fetch_body(client, spec).await?;
    let records = parser_for(spec.market)(&body)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(code = %spec.code, market = %spec.market, records = records.len(), "parsed disclosures");

    Ok(records)
}

async fn fetch_body(client: &InsiderClient, spec: &QuerySpec) -> Result<String, InsiderError> {
    let mut url = client.base_for(spec.market).clone();
    {
        let mut qp = url.query_pairs_mut();
        for (k, v) in &spec.params {
            qp.append_pair(k, v);
        }
    }

    let headers = client.request_headers(spec.market)?;
    let resp = client
        .http()
        .get(url.clone())
        .headers(headers.clone())
        .send()
        .await?;

    let status = resp.status();
    if status.as_u16() == client.busy_status() {
        #[cfg(feature = "tracing")]
        tracing::warn!(code = %spec.code, status = status.as_u16(), "exchange reports system busy");

        return Err(InsiderError::TransportBusy {
            status: status.as_u16(),
            url: url.to_string(),
            headers: header_pairs(&headers),
        });
    }
    let (charset, endpoint, ext) = match spec.market {
        MarketId::Sz => (net::SZ_LEGACY_CHARSET, "sz_report", "html"),
        MarketId::Sh => ("utf-8", "sh_query", "jsonp"),
    };

    if status != StatusCode::OK {
        let body = match resp.text_with_charset(charset).await {
            Ok(text) => text,
            Err(e) => format!("<unreadable body: {e}>"),
        };
        return Err(InsiderError::TransportFailure {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        });
    }

    Ok(net::get_text(resp, charset, endpoint, &spec.code, ext).await?)
}

fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(k, v)| {
            (
                k.as_str().to_string(),
                String::from_utf8_lossy(v.as_bytes()).into_owned(),
            )
        })
        .collect()
}
