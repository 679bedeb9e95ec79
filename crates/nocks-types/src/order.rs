//! Trade order payload

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amount::{deserialize_rate, Amount, Timestamp};
use crate::enums::{OrderType, Side, Status};

/// A trade order as returned by the trade-order endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeOrder {
    /// Order UUID
    pub uuid: String,
    /// Order status
    pub status: Status,
    /// Order side
    pub side: Option<Side>,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: Option<OrderType>,
    /// Requested amount
    pub amount: Option<Amount>,
    /// Amount filled so far
    pub amount_filled: Option<Amount>,
    /// Cost of the filled amount
    pub amount_cost: Option<Amount>,
    /// Fee charged
    pub amount_fee: Option<Amount>,
    /// Amount still fillable
    pub amount_fillable: Option<Amount>,
    /// Requested rate
    #[serde(default, deserialize_with = "deserialize_rate")]
    pub rate: Option<Decimal>,
    /// Average rate actually obtained
    #[serde(default, deserialize_with = "deserialize_rate")]
    pub rate_actual: Option<Decimal>,
    /// Trade market code
    pub trade_market: Option<String>,
    /// Creation time
    pub created_at: Option<Timestamp>,
    /// Last update time
    pub updated_at: Option<Timestamp>,
    /// Cancellation time
    pub cancelled_at: Option<Timestamp>,
    /// Fill time
    pub filled_at: Option<Timestamp>,
    /// Resource name of the call
    pub resource: Option<String>,
}

impl TradeOrder {
    /// Check if the order is still open
    pub fn is_open(&self) -> bool {
        self.status == Status::Open
    }

    /// Check if the order was cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancelled_at.is_some() || self.status == Status::Cancelled
    }
}
