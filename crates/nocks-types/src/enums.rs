//! Side, Status, OrderType and TransferType enums

use serde::{Deserialize, Serialize};

/// Trade side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    /// Returns the side name as used in API requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a trade order, deposit or withdrawal
///
/// Statuses this crate does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    /// Order waiting in the book
    Open,
    /// Transfer awaiting processing
    Pending,
    /// Order fully filled
    Filled,
    /// Transfer completed
    Completed,
    /// Cancelled by the user or the exchange
    Cancelled,
    /// Any other status
    Other(String),
}

impl Status {
    /// Returns the status as sent by the API
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Pending => "pending",
            Self::Filled => "filled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Other(s) => s,
        }
    }

    /// Returns true if no further change is expected
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Filled | Self::Completed | Self::Cancelled)
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "open" => Self::Open,
            "pending" => Self::Pending,
            "filled" => Self::Filled,
            "completed" => Self::Completed,
            "cancelled" | "canceled" => Self::Cancelled,
            _ => Self::Other(s),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trade order type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderType {
    /// Filled from the order book at the best available rate
    Market,
    /// Placed at a fixed rate
    Limit,
    /// Any other order type
    Other(String),
}

impl OrderType {
    /// Returns the order type as sent by the API
    pub fn as_str(&self) -> &str {
        match self {
            Self::Market => "market",
            Self::Limit => "limit",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for OrderType {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "market" => Self::Market,
            "limit" => Self::Limit,
            _ => Self::Other(s),
        }
    }
}

impl From<OrderType> for String {
    fn from(order_type: OrderType) -> Self {
        match order_type {
            OrderType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// Direction of a funds transfer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransferType {
    /// Funds coming in
    Deposit,
    /// Funds going out
    Withdrawal,
    /// Any other transfer type
    Other(String),
}

impl TransferType {
    /// Returns the transfer type as sent by the API
    pub fn as_str(&self) -> &str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for TransferType {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "deposit" => Self::Deposit,
            "withdrawal" => Self::Withdrawal,
            _ => Self::Other(s),
        }
    }
}

impl From<TransferType> for String {
    fn from(transfer_type: TransferType) -> Self {
        match transfer_type {
            TransferType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_serde() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), r#""buy""#);
        let side: Side = serde_json::from_str(r#""sell""#).unwrap();
        assert_eq!(side, Side::Sell);
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.to_string(), "sell");
    }

    #[test]
    fn test_status_keeps_unknown_values() {
        let status: Status = serde_json::from_str(r#""Cancelled""#).unwrap();
        assert_eq!(status, Status::Cancelled);
        assert!(status.is_final());

        let status: Status = serde_json::from_str(r#""processing""#).unwrap();
        assert_eq!(status, Status::Other("processing".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""processing""#);
        assert!(!status.is_final());
    }

    #[test]
    fn test_order_and_transfer_types() {
        let order_type: OrderType = serde_json::from_str(r#""limit""#).unwrap();
        assert_eq!(order_type, OrderType::Limit);
        assert_eq!(serde_json::to_string(&OrderType::Market).unwrap(), r#""market""#);

        let transfer_type: TransferType = serde_json::from_str(r#""withdrawal""#).unwrap();
        assert_eq!(transfer_type, TransferType::Withdrawal);
        assert_eq!(TransferType::from("ideal".to_string()).as_str(), "ideal");
    }
}
