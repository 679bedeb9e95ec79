//! Market data payloads

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// Rate information for a trade market (e.g. "NLG-EUR")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeMarket {
    /// Market code
    pub code: String,
    /// Price of the last transaction
    pub last: Option<Amount>,
    /// 24h volume
    pub volume: Option<Amount>,
    /// 24h low
    pub low: Option<Amount>,
    /// 24h high
    pub high: Option<Amount>,
    /// Highest buy order
    pub buy: Option<Amount>,
    /// Lowest sell order
    pub sell: Option<Amount>,
    /// Whether the market is open for trading
    #[serde(default)]
    pub is_active: bool,
    /// Resource name of the call
    pub resource: Option<String>,
}

impl TradeMarket {
    /// Get the mid price (average of best buy and best sell)
    pub fn mid_price(&self) -> Option<Decimal> {
        let buy = self.buy.as_ref()?.amount;
        let sell = self.sell.as_ref()?.amount;
        Some((buy + sell) / Decimal::TWO)
    }

    /// Get spread in basis points
    pub fn spread_bps(&self) -> Option<Decimal> {
        let buy = self.buy.as_ref()?.amount;
        let sell = self.sell.as_ref()?.amount;
        let mid = self.mid_price()?;
        if mid.is_zero() {
            return None;
        }
        Some((sell - buy) / mid * Decimal::from(10000))
    }
}

/// A single resting order in the book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    /// Quantity offered
    pub amount: Amount,
    /// Price per unit
    pub rate: Amount,
}

/// Order book snapshot, at most 50 entries per side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Buy side, best first
    pub buy: Vec<BookEntry>,
    /// Sell side, best first
    pub sell: Vec<BookEntry>,
}

impl OrderBook {
    /// Get the best buy rate
    pub fn best_buy(&self) -> Option<Decimal> {
        self.buy.first().map(|e| e.rate.amount)
    }

    /// Get the best sell rate
    pub fn best_sell(&self) -> Option<Decimal> {
        self.sell.first().map(|e| e.rate.amount)
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_sell()? - self.best_buy()?)
    }
}
