/*
[INPUT]:  COINBASE_API_KEY / COINBASE_API_SECRET environment variables
[OUTPUT]: Authenticated account listing with balances
[POS]:    Examples - signed account queries
[UPDATE]: When adding new account endpoints
*/

use coinbase_v2_adapter::{CoinbaseClient, Credentials};

/// Example: List accounts (requires real API credentials)
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Coinbase Accounts Example ===\n");

    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Missing credentials: {}", e);
            eprintln!("Set COINBASE_API_KEY and COINBASE_API_SECRET and retry.");
            return;
        }
    };

    let client = match CoinbaseClient::new(credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    println!("Listing accounts...");
    match client.list_accounts().await {
        Ok((accounts, pagination)) => {
            println!("✓ {} account(s)", accounts.len());
            for account in &accounts {
                let balance = account
                    .balance
                    .as_ref()
                    .map(|b| format!("{} {}", b.amount, b.currency))
                    .unwrap_or_else(|| "-".to_string());
                println!("  {} {} ({})", account.id, account.name, balance);
            }
            if let Some(pagination) = pagination {
                if let Some(next) = pagination.next_uri {
                    println!("  more results at {}", next);
                }
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Accounts example complete");
}
