//! Demo 3: Open Orders
//!
//! Showcases: paging through a list endpoint with pagination metadata
//!
//! Run: NOCKS_API_TOKEN=... cargo run --bin open_orders

use colored::*;
use nocks_rest::{Credential, ListQuery, NocksRestClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let token = Credential::new(std::env::var("NOCKS_API_TOKEN")?)?;
    let client = NocksRestClient::with_credential(token)?;

    let meta = client.get_orders(ListQuery::new().pagination()).await?;
    let total_pages = meta.pagination().map_or(1, |p| p.total_pages.max(1));

    println!("{} {} page(s) of orders", "✓".green(), total_pages);

    let mut open = 0usize;
    for page in 1..=total_pages {
        let orders = client
            .get_orders(ListQuery::page(page))
            .await?
            .into_items()
            .unwrap_or_default();

        for order in orders.iter().filter(|o| o.is_open()) {
            open += 1;
            let side = order.side.map(|s| s.to_string()).unwrap_or_default();
            let market = order.trade_market.as_deref().unwrap_or("?");
            let rate = order
                .rate
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "market".to_string());
            println!("  {} {:<4} {:<8} @ {}", order.uuid.dimmed(), side.yellow(), market, rate);
        }
    }

    println!("\n{} {} open order(s)", "✓".green(), open);
    Ok(())
}
