//! Demo 2: Order Book
//!
//! Showcases: authenticated market data, decimal arithmetic on book levels
//!
//! Run: NOCKS_API_TOKEN=... cargo run --bin order_book -- NLG-EUR

use colored::*;
use nocks_rest::{Credential, NocksRestClient};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

const LEVELS: usize = 10;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let market = std::env::args().nth(1).unwrap_or_else(|| "NLG-EUR".to_string());
    let token = Credential::new(std::env::var("NOCKS_API_TOKEN")?)?;
    let client = NocksRestClient::with_credential(token)?;

    let book = client.get_order_book(&market).await?;

    println!("{}", format!("  ORDER BOOK  {market}").cyan().bold());
    println!("  {:>18}  {:>18}", "AMOUNT".dimmed(), "RATE".dimmed());

    for entry in book.sell.iter().take(LEVELS).rev() {
        println!("  {:>18}  {:>18}", entry.amount.amount, entry.rate.amount.to_string().red());
    }
    match book.spread() {
        Some(spread) => println!("  {:─^38}", format!(" spread {spread} ")),
        None => println!("  {:─^38}", " one-sided "),
    }
    for entry in book.buy.iter().take(LEVELS) {
        println!("  {:>18}  {:>18}", entry.amount.amount, entry.rate.amount.to_string().green());
    }

    let depth: Decimal = book.buy.iter().map(|e| e.amount.amount * e.rate.amount).sum();
    println!("\n  {} {}", "Buy side depth:".yellow(), depth.round_dp(2));

    Ok(())
}
