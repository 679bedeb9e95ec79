//! Market data endpoints

use tracing::instrument;

use crate::client::NocksRestClient;
use crate::endpoints::Operation;
use crate::error::RestResult;
use crate::types::{OrderBook, TradeMarket};

impl NocksRestClient {
    /// Get rate information for a trade market
    ///
    /// Public endpoint, no credential needed.
    ///
    /// # Arguments
    /// * `code` - Trade market code (e.g., "NLG-EUR")
    #[instrument(skip(self))]
    pub async fn get_rate(&self, code: &str) -> RestResult<TradeMarket> {
        self.call(Operation::GetRate { code }).await
    }

    /// Get the order book, up to 50 entries per side
    ///
    /// # Arguments
    /// * `code` - Trade market code (e.g., "NLG-EUR")
    #[instrument(skip(self))]
    pub async fn get_order_book(&self, code: &str) -> RestResult<OrderBook> {
        self.call(Operation::GetOrderBook { code }).await
    }
}
