/*
[INPUT]:  Currency pair (e.g., "BTC-USD")
[OUTPUT]: Market data (spot price, exchange rates, currencies)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use coinbase_v2_adapter::{CoinbaseClient, Credentials};

/// Example: Query market data (no API credentials required)
///
/// These endpoints are public; placeholder credentials are enough.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Coinbase Market Data Example ===\n");

    let credentials =
        Credentials::from_env().unwrap_or_else(|_| Credentials::new("demo", "demo"));
    let client = match CoinbaseClient::new(credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no auth required for public endpoints)\n");

    let pair = "BTC-USD";

    println!("Querying spot price for {}...", pair);
    match client.spot_price(pair).await {
        Ok(price) => println!("✓ Spot price: {} {}", price.amount, price.currency),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying buy price for {}...", pair);
    match client.buy_price(pair).await {
        Ok(price) => println!("✓ Buy price: {} {}", price.amount, price.currency),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying USD exchange rates...");
    match client.exchange_rates("USD").await {
        Ok(rates) => {
            println!("✓ {} rates quoted in {}", rates.rates.len(), rates.currency);
            if let Some(btc) = rates.rates.get("BTC") {
                println!("  1 USD = {} BTC", btc);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
