//! Demo 1: Market Rate
//!
//! Showcases: public endpoint access without a token
//!
//! Run: cargo run --bin market_rate -- NLG-EUR

use colored::*;
use nocks_rest::NocksRestClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let market = std::env::args().nth(1).unwrap_or_else(|| "NLG-EUR".to_string());

    println!("{}", "═".repeat(50).cyan());
    println!("{}", format!("  MARKET RATE  {market}").cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    let client = NocksRestClient::new()?;
    let rate = client.get_rate(&market).await?;

    let show = |label: &str, value: Option<String>| {
        println!("  {:<8} {}", label.yellow(), value.unwrap_or_else(|| "-".dimmed().to_string()));
    };

    show("Last", rate.last.as_ref().map(ToString::to_string));
    show("Buy", rate.buy.as_ref().map(ToString::to_string));
    show("Sell", rate.sell.as_ref().map(ToString::to_string));
    show("Low", rate.low.as_ref().map(ToString::to_string));
    show("High", rate.high.as_ref().map(ToString::to_string));
    show("Volume", rate.volume.as_ref().map(ToString::to_string));

    if let Some(bps) = rate.spread_bps() {
        println!("  {:<8} {:.1} bps", "Spread".green(), bps);
    }
    if !rate.is_active {
        println!("{} market is not active", "!".red());
    }

    Ok(())
}
