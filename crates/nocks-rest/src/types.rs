//! Request types for the Nocks REST API
//!
//! Response payloads live in `nocks-types` and are re-exported here.

pub use nocks_types::*;

/// Request to place a trade order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Trade market code (e.g. "NLG-EUR")
    pub market: String,
    /// Order side
    pub side: Side,
    /// Amount to trade
    pub amount: Decimal,
    /// Price per unit; zero fills against the order book
    pub rate: Decimal,
}

impl OrderRequest {
    /// Create a market order, filled from the order book
    pub fn market(market: impl Into<String>, side: Side, amount: Decimal) -> Self {
        Self {
            market: market.into(),
            side,
            amount,
            rate: Decimal::ZERO,
        }
    }

    /// Create a limit order at `rate`
    pub fn limit(market: impl Into<String>, side: Side, amount: Decimal, rate: Decimal) -> Self {
        Self {
            market: market.into(),
            side,
            amount,
            rate,
        }
    }

    /// Set the rate
    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate = rate;
        self
    }

    /// Check if this order carries a limit rate
    pub fn is_limit(&self) -> bool {
        self.rate > Decimal::ZERO
    }
}

/// Options for the list endpoints (orders, deposits, withdrawals)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    /// Return pagination metadata instead of items
    pub pagination: bool,
    /// Page to fetch, starting at 1
    pub page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            pagination: false,
            page: 1,
        }
    }
}

impl ListQuery {
    /// Items of the first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Items of the given page
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Pagination metadata instead of items
    pub fn pagination(mut self) -> Self {
        self.pagination = true;
        self
    }
}
