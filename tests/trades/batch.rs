use crate::common::{self, SH_PATH, SZ_PATH, date};
use httpmock::Method::GET;
use insider_rs::{InsiderError, QueryOptions, fetch_batch};

#[tokio::test]
async fn batch_keeps_input_order_and_isolates_failures() {
    let server = common::setup_server();
    let sz_ok = server.mock(|when, then| {
        when.method(GET).path(SZ_PATH).query_param("txtDMorJC", "000002");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(common::fixture("sz_report", "000002", "html"));
    });
    let sz_fail = server.mock(|when, then| {
        when.method(GET).path(SZ_PATH).query_param("txtDMorJC", "300750");
        then.status(500).body("down");
    });
    let sh_ok = server.mock(|when, then| {
        when.method(GET).path(SH_PATH).query_param("COMPANY_CODE", "600000");
        then.status(200)
            .header("content-type", "text/javascript;charset=UTF-8")
            .body(common::fixture("sh_query", "600000", "jsonp"));
    });

    let client = common::client_for(&server);
    let options = QueryOptions::new().today(date(2024, 6, 30)).span_months(6);
    let codes = ["000002", "999999", "300750", "abc", "600000"];
    let results = fetch_batch(&client, codes, &options).await;

    sz_ok.assert();
    sz_fail.assert();
    sh_ok.assert();

    let order: Vec<&str> = results.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(order, codes);

    assert_eq!(results[0].1.as_ref().unwrap().records.len(), 3);
    assert!(matches!(results[1].1, Err(InsiderError::UnknownMarket { .. })));
    assert!(matches!(results[2].1, Err(InsiderError::TransportFailure { status: 500, .. })));
    assert!(matches!(results[3].1, Err(InsiderError::InvalidCode { .. })));
    assert_eq!(results[4].1.as_ref().unwrap().records.len(), 3);

    // windows are resolved per run, not shared
    let sz_window = results[0].1.as_ref().unwrap().window;
    let sh_window = results[4].1.as_ref().unwrap().window;
    assert_eq!(sz_window, sh_window);
    assert_eq!(sz_window.begin, date(2023, 12, 30));
}
