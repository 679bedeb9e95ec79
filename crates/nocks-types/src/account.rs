//! Balance, deposit and withdrawal payloads

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::amount::{Amount, Timestamp};
use crate::enums::{Status, TransferType};

/// Account balance for a single currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Balance UUID
    pub uuid: String,
    /// Available for trading and withdrawal
    pub available: Amount,
    /// Reserved by open orders and pending withdrawals
    pub reserved: Amount,
    /// Available plus reserved
    pub total: Amount,
    /// Resource name of the call
    pub resource: Option<String>,
}

/// Method specific metadata attached to deposits and withdrawals
///
/// Only `address` is common to all payment methods; everything else is kept
/// as raw JSON in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMetadata {
    /// Gulden address or IBAN
    pub address: Option<String>,
    /// Remaining method specific fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Address to deposit funds to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositAddress {
    /// Payment method type (e.g. "sepa", "gulden")
    pub method_type: String,
    /// Method specific metadata
    #[serde(default)]
    pub metadata: PaymentMetadata,
}

impl DepositAddress {
    /// Get the deposit address, if the method provides one
    pub fn address(&self) -> Option<&str> {
        self.metadata.address.as_deref()
    }
}

/// A deposit or withdrawal of funds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// Transfer UUID
    pub uuid: String,
    /// Transfer status
    pub status: Status,
    /// Transfer type
    #[serde(rename = "type")]
    pub transfer_type: Option<TransferType>,
    /// Payment method type
    pub method_type: Option<String>,
    /// Free text description
    pub description: Option<String>,
    /// Creation time
    pub created_at: Option<Timestamp>,
    /// Last update time
    pub updated_at: Option<Timestamp>,
    /// Transferred amount
    pub amount: Option<Amount>,
    /// Method specific metadata
    pub metadata: Option<PaymentMetadata>,
    /// Resource name of the call
    pub resource: Option<String>,
}

/// A deposit, as listed by the deposit endpoint
pub type Deposit = Transfer;

/// A withdrawal, as created or listed by the withdrawal endpoint
pub type Withdrawal = Transfer;
