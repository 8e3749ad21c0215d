use crate::common::{self, SH_PATH, SZ_PATH, date};
use httpmock::Method::GET;
use insider_rs::{MarketId, TradesBuilder, report};
use rust_decimal::Decimal;

#[tokio::test]
async fn sz_report_end_to_end() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(SZ_PATH)
            .query_param("CATALOGID", "1801_cxda")
            .query_param("txtDMorJC", "000002")
            .query_param("txtKsrq", "2024-01-01")
            .query_param("txtZzrq", "2024-06-30")
            .query_param("tab1PAGENUM", "1")
            .header("accept", "text/html,*/*");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(common::fixture("sz_report", "000002", "html"));
    });

    let client = common::client_for(&server);
    let report = TradesBuilder::new(&client, "000002")
        .today(date(2024, 6, 30))
        .span_months(3)
        .from("01-01-2024")
        .report()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(report.market, MarketId::Sz);
    assert_eq!(report.window.begin, date(2024, 1, 1));
    assert_eq!(report.records.len(), 3);

    let s = report.summary.as_ref().unwrap();
    assert_eq!(s.buy_shares, 1000);
    assert_eq!(s.buy_cost, Decimal::from(10_000));
    assert_eq!(s.sell_shares, 400);
    assert_eq!(s.sell_proceeds, Decimal::from(4_800));
    assert_eq!(s.net_shares, 600);
    assert_eq!(s.net_cost, Decimal::from(5_200));
    assert_eq!(s.excluded_count, 1);

    let text = report::render(&report);
    assert!(text.contains("2024/01/01 - 2024/06/30"));
}

#[tokio::test]
async fn sz_legacy_charset_is_decoded() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(SZ_PATH).query_param("txtDMorJC", "000002");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::fixture_bytes("sz_report_000002_gbk.html"));
    });

    let client = common::client_for(&server);
    let records = TradesBuilder::new(&client, "000002")
        .today(date(2024, 6, 30))
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].company_abbr, "万科Ａ");
    assert_eq!(records[0].person_name, "王文金");
    assert_eq!(records[0].duty, "董事");
}

#[tokio::test]
async fn sh_feed_end_to_end_sends_referer() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(SH_PATH)
            .query_param("COMPANY_CODE", "600000")
            .query_param("BEGIN_DATE", "2023-12-30")
            .query_param("END_DATE", "2024-06-30")
            .query_param("sqlId", "COMMON_SSE_XXPL_CXJL_SSGSGFBDQK_S")
            .query_param("jsonCallBack", "jsonpCallback600000")
            .query_param("pageHelp.pageNo", "2")
            .query_param("pageHelp.pageSize", "25")
            .header("referer", "http://www.sse.com.cn/");
        then.status(200)
            .header("content-type", "text/javascript;charset=UTF-8")
            .body(common::fixture("sh_query", "600000", "jsonp"));
    });

    let client = common::client_for(&server);
    let report = TradesBuilder::new(&client, "600000")
        .today(date(2024, 6, 30))
        .span_months(6)
        .page(2)
        .page_size(25)
        .report()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(report.market, MarketId::Sh);
    assert_eq!(report.records.len(), 3);
    let s = report.summary.unwrap();
    assert_eq!(s.buy_shares, 60_000);
    assert_eq!(s.sell_shares, 20_000);
    assert_eq!(s.sell_avg_price, Some(Decimal::new(710, 2)));
    assert_eq!(s.buy_avg_price.map(|p| p.round_dp(4)), Some(Decimal::new(56_667, 4)));
    assert_eq!(s.net_cost, Decimal::from(198_000));
}

#[tokio::test]
async fn empty_window_yields_no_summary() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(SZ_PATH);
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(common::fixture("sz_report", "empty", "html"));
    });

    let client = common::client_for(&server);
    let report = TradesBuilder::new(&client, "300750")
        .today(date(2024, 6, 30))
        .report()
        .await
        .unwrap();
    mock.assert();

    assert!(report.is_empty());
    assert!(report.summary.is_none());
    assert!(report::render(&report).contains(report::NO_TRANSACTIONS));
}

#[tokio::test]
async fn invalid_input_never_reaches_the_network() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let client = common::client_for(&server);
    assert!(matches!(
        TradesBuilder::new(&client, "12ab56").fetch().await,
        Err(insider_rs::InsiderError::InvalidCode { .. })
    ));
    assert!(matches!(
        TradesBuilder::new(&client, "999999").fetch().await,
        Err(insider_rs::InsiderError::UnknownMarket { .. })
    ));
    assert!(matches!(
        TradesBuilder::new(&client, "600000").from("2024/01/01").fetch().await,
        Err(insider_rs::InsiderError::InvalidDateRange { .. })
    ));
    mock.assert_hits(0);
}
