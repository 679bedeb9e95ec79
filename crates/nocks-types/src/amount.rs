//! Amount and timestamp value objects

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// A decimal quantity tagged with its currency
///
/// Nocks uses this shape for prices, volumes, balances and fees alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Quantity
    #[serde(deserialize_with = "deserialize_decimal")]
    pub amount: Decimal,
    /// Currency code (e.g. "EUR", "NLG")
    pub currency: String,
}

impl Amount {
    /// Create a new amount
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Check if the quantity is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Point in time as reported by Nocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    /// Human readable date and time
    pub datetime: String,
    /// Unix timestamp in seconds
    pub timestamp: i64,
}

impl Timestamp {
    /// Convert to a UTC datetime
    ///
    /// Returns `None` if the timestamp is outside chrono's supported range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// Nocks sends amounts as strings, but some fields arrive as bare numbers.
/// Accept both without going through f64 where possible.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    use rust_decimal::prelude::FromPrimitive;
    use serde::de::Error;
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => Decimal::from_str(s.trim()).map_err(D::Error::custom),
        StringOrNumber::Number(n) => {
            let s = n.to_string();
            if s.contains('e') || s.contains('E') {
                let f = n.as_f64().ok_or_else(|| D::Error::custom("invalid number"))?;
                Decimal::from_f64(f).ok_or_else(|| D::Error::custom("cannot convert to decimal"))
            } else {
                Decimal::from_str(&s).map_err(D::Error::custom)
            }
        }
    }
}

/// Rates arrive either as a bare decimal or as an [`Amount`] object.
/// Both decode to the decimal value.
pub(crate) fn deserialize_rate<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RateShape {
        Amount(Amount),
        Scalar(#[serde(deserialize_with = "deserialize_decimal")] Decimal),
    }

    Ok(Option::<RateShape>::deserialize(deserializer)?.map(|rate| match rate {
        RateShape::Amount(amount) => amount.amount,
        RateShape::Scalar(value) => value,
    }))
}
