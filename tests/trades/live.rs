use insider_rs::{InsiderClient, MarketId, TradesBuilder, summarize};

#[tokio::test]
#[ignore]
async fn live_sz_report_smoke_and_or_record() {
    if !crate::common::live_or_record_enabled() {
        return;
    }

    let client = InsiderClient::default();
    let records = TradesBuilder::new(&client, "000002")
        .span_months(24)
        .fetch()
        .await
        .unwrap();

    // If just running live (not recording), do some basic sanity checks.
    if !crate::common::is_recording() {
        for r in &records {
            assert_eq!(r.company_code, "000002");
            assert!(!r.company_abbr.contains(' '));
        }
        assert_eq!(summarize(&records).is_some(), !records.is_empty());
    }
}

#[tokio::test]
#[ignore]
async fn live_sh_feed_smoke_and_or_record() {
    if !crate::common::live_or_record_enabled() {
        return;
    }

    let client = InsiderClient::default();
    let report = TradesBuilder::new(&client, "600000")
        .span_months(24)
        .report()
        .await
        .unwrap();

    if !crate::common::is_recording() {
        assert_eq!(report.market, MarketId::Sh);
        assert!(report.records.iter().all(|r| r.avg_price.is_some()));
    }
}
