//! Trade order endpoints
//!
//! These endpoints require a credential.

use tracing::{debug, instrument};

use crate::client::NocksRestClient;
use crate::endpoints::Operation;
use crate::error::RestResult;
use crate::types::{ListQuery, Listing, OrderRequest, TradeOrder};

impl NocksRestClient {
    /// Place a trade order
    ///
    /// A zero rate places a market order, filled from the order book.
    #[instrument(skip(self, order), fields(market = %order.market, side = %order.side))]
    pub async fn create_order(&self, order: &OrderRequest) -> RestResult<TradeOrder> {
        debug!(
            "Placing {} order for {} on {}",
            order.side, order.amount, order.market
        );
        self.call(Operation::CreateOrder(order)).await
    }

    /// Cancel a trade order
    ///
    /// Returns the order as it stands after cancellation.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, uuid: &str) -> RestResult<TradeOrder> {
        self.call(Operation::CancelOrder { uuid }).await
    }

    /// Get a single trade order
    #[instrument(skip(self))]
    pub async fn get_order(&self, uuid: &str) -> RestResult<TradeOrder> {
        self.call(Operation::GetOrder { uuid }).await
    }

    /// List trade orders, or their pagination metadata
    #[instrument(skip(self))]
    pub async fn get_orders(&self, query: ListQuery) -> RestResult<Listing<TradeOrder>> {
        self.list(Operation::GetOrders(query)).await
    }
}
