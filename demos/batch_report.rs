use insider_rs::{InsiderClient, QueryOptions, fetch_batch, report};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = InsiderClient::default();
    let codes = ["000002", "002415", "300750", "600000", "999999"];
    let options = QueryOptions::new().span_months(6);

    for (code, result) in fetch_batch(&client, codes, &options).await {
        match result {
            Ok(r) => println!("{}", report::render(&r)),
            Err(e) => eprintln!("{code}: {e}\n"),
        }
    }

    Ok(())
}
