use crate::common::{self, SH_PATH, SZ_PATH};
use httpmock::Method::GET;
use insider_rs::{InsiderClient, InsiderError, TradesBuilder};
use url::Url;

#[tokio::test]
async fn busy_status_maps_to_transport_busy_with_request_headers() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(SH_PATH);
        then.status(503).body("system busy");
    });

    let client = common::client_for(&server);
    let err = TradesBuilder::new(&client, "600000").fetch().await.unwrap_err();
    mock.assert();

    match err {
        InsiderError::TransportBusy { status, url, headers } => {
            assert_eq!(status, 503);
            assert!(url.contains(SH_PATH));
            assert!(headers.iter().any(|(k, v)| k == "referer" && v == "http://www.sse.com.cn/"));
            assert!(headers.iter().any(|(k, _)| k == "user-agent"));
        }
        other => panic!("expected TransportBusy, got {other:?}"),
    }
}

#[tokio::test]
async fn busy_status_is_configurable() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(SZ_PATH);
        then.status(504).body("gateway timeout");
    });

    let client = InsiderClient::builder()
        .base_sz(Url::parse(&format!("{}{}", server.base_url(), SZ_PATH)).unwrap())
        .busy_status(504)
        .build()
        .unwrap();
    let err = TradesBuilder::new(&client, "000002").fetch().await.unwrap_err();
    mock.assert();

    assert!(matches!(err, InsiderError::TransportBusy { status: 504, .. }));
}

#[tokio::test]
async fn other_statuses_map_to_transport_failure_with_body() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(SZ_PATH);
        then.status(500).body("oops");
    });

    let client = common::client_for(&server);
    let err = TradesBuilder::new(&client, "002415").fetch().await.unwrap_err();
    mock.assert();

    match err {
        InsiderError::TransportFailure { status, url, body } => {
            assert_eq!(status, 500);
            assert!(url.contains("txtDMorJC=002415"));
            assert_eq!(body, "oops");
        }
        other => panic!("expected TransportFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn sz_failure_body_uses_the_legacy_charset() {
    let server = common::setup_server();
    // "查询失败" in GBK
    let body: Vec<u8> = vec![178, 233, 209, 175, 202, 167, 176, 220];
    let mock = server.mock(|when, then| {
        when.method(GET).path(SZ_PATH);
        then.status(500).header("content-type", "text/html").body(body);
    });

    let client = common::client_for(&server);
    let err = TradesBuilder::new(&client, "000002").fetch().await.unwrap_err();
    mock.assert();

    match err {
        InsiderError::TransportFailure { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, "查询失败");
        }
        other => panic!("expected TransportFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn non_200_success_is_still_a_failure() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(SH_PATH);
        then.status(204);
    });

    let client = common::client_for(&server);
    let err = TradesBuilder::new(&client, "601318").fetch().await.unwrap_err();
    mock.assert();

    assert!(matches!(err, InsiderError::TransportFailure { status: 204, .. }));
}

#[tokio::test]
async fn failures_are_not_retried() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(SZ_PATH);
        then.status(503);
    });

    let client = common::client_for(&server);
    let _ = TradesBuilder::new(&client, "000002").fetch().await;
    mock.assert_hits(1);
}
