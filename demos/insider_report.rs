use insider_rs::{InsiderClient, TradesBuilder, report};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let code = std::env::args().nth(1).unwrap_or_else(|| "000002".to_string());
    let client = InsiderClient::default();

    println!("--- Director/officer trades for {code}, last 12 months ---\n");
    let report = TradesBuilder::new(&client, &code).span_months(12).report().await?;
    print!("{}", report::render(&report));

    // Explicit bounds win over the span.
    let q1 = TradesBuilder::new(&client, &code)
        .span_months(3)
        .from("01-01-2024")
        .to("31-03-2024")
        .query()?;
    println!("\nQ1 2024 window: {}", q1.window.display());

    Ok(())
}
