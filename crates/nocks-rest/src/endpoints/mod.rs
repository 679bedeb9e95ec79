//! Endpoint catalog
//!
//! Each API operation is a fixed combination of path, verb, parameter shape,
//! auth requirement and pagination capability. [`Operation::descriptor`]
//! validates the caller's arguments and turns an operation into a
//! [`RequestDescriptor`] for the dispatcher. The typed client methods live in
//! the submodules, grouped by area.

pub mod funding;
pub mod market;
pub mod trading;

use rust_decimal::Decimal;
use serde_json::{json, Map, Value};

use crate::dispatch::{RequestDescriptor, ResponseMode};
use crate::error::{RestError, RestResult};
use crate::transport::Method;
use crate::types::{ListQuery, OrderRequest};

/// A single API operation with its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Operation<'a> {
    /// Rate information for a trade market
    GetRate { code: &'a str },
    /// Balance for a currency
    GetBalance { code: &'a str },
    /// Deposit address for a currency and payment method
    GetDepositAddress { currency: &'a str, method: &'a str },
    /// Withdraw funds to an address or IBAN
    CreateWithdrawal {
        currency: &'a str,
        amount: Decimal,
        address: &'a str,
    },
    /// Place a trade order
    CreateOrder(&'a OrderRequest),
    /// Cancel a trade order
    CancelOrder { uuid: &'a str },
    /// Read a single trade order
    GetOrder { uuid: &'a str },
    /// Order book snapshot for a trade market
    GetOrderBook { code: &'a str },
    /// List trade orders
    GetOrders(ListQuery),
    /// List deposits
    GetDeposits(ListQuery),
    /// List withdrawals
    GetWithdrawals(ListQuery),
}

impl Operation<'_> {
    /// Operation name, for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetRate { .. } => "GetRate",
            Self::GetBalance { .. } => "GetBalance",
            Self::GetDepositAddress { .. } => "GetDepositAddress",
            Self::CreateWithdrawal { .. } => "CreateWithdrawal",
            Self::CreateOrder(_) => "CreateOrder",
            Self::CancelOrder { .. } => "CancelOrder",
            Self::GetOrder { .. } => "GetOrder",
            Self::GetOrderBook { .. } => "GetOrderBook",
            Self::GetOrders(_) => "GetOrders",
            Self::GetDeposits(_) => "GetDeposits",
            Self::GetWithdrawals(_) => "GetWithdrawals",
        }
    }

    /// Validate arguments and build the request descriptor
    pub fn descriptor(&self) -> RestResult<RequestDescriptor> {
        let descriptor = match self {
            Self::GetRate { code } => RequestDescriptor::new(
                Method::Get,
                format!("trade-market/{}", segment("code", code)?),
            ),
            Self::GetBalance { code } => RequestDescriptor::new(
                Method::Get,
                format!("balance/{}", segment("code", code)?),
            )
            .authenticated(),
            Self::GetDepositAddress { currency, method } => {
                let params = object(json!({
                    "currency": non_empty("currency", currency)?,
                    "payment_method": { "method": non_empty("method", method)? },
                }));
                RequestDescriptor::new(Method::Post, "deposit")
                    .authenticated()
                    .with_params(params)
            }
            Self::CreateWithdrawal {
                currency,
                amount,
                address,
            } => {
                let params = object(json!({
                    "currency": non_empty("currency", currency)?,
                    "amount": positive("amount", *amount)?,
                    "address": non_empty("address", address)?,
                }));
                RequestDescriptor::new(Method::Post, "withdrawal")
                    .authenticated()
                    .with_params(params)
            }
            Self::CreateOrder(order) => {
                if order.rate < Decimal::ZERO {
                    return Err(RestError::invalid("rate must not be negative"));
                }
                let mut params = object(json!({
                    "trade-market": non_empty("market", &order.market)?,
                    "amount": positive("amount", order.amount)?,
                    "side": order.side.as_str(),
                }));
                if order.is_limit() {
                    params.insert("rate".to_string(), Value::String(order.rate.to_string()));
                }
                RequestDescriptor::new(Method::Post, "trade-order")
                    .authenticated()
                    .with_params(params)
            }
            Self::CancelOrder { uuid } => RequestDescriptor::new(
                Method::Delete,
                format!("trade-order/{}", segment("uuid", uuid)?),
            )
            .authenticated(),
            Self::GetOrder { uuid } => RequestDescriptor::new(
                Method::Get,
                format!("trade-order/{}", segment("uuid", uuid)?),
            )
            .authenticated(),
            Self::GetOrderBook { code } => RequestDescriptor::new(
                Method::Get,
                format!("trade-market/{}/book", segment("code", code)?),
            )
            .authenticated(),
            Self::GetOrders(query) => listing("trade-order", query),
            Self::GetDeposits(query) => listing("deposit", query),
            Self::GetWithdrawals(query) => listing("withdrawal", query),
        };

        Ok(descriptor)
    }
}

fn listing(path: &str, query: &ListQuery) -> RequestDescriptor {
    RequestDescriptor::new(Method::Get, path)
        .authenticated()
        .with_page(query.page)
        .with_mode(ResponseMode::from_flag(query.pagination))
}

fn non_empty<'a>(name: &str, value: &'a str) -> RestResult<&'a str> {
    if value.trim().is_empty() {
        Err(RestError::invalid(format!("{name} must not be empty")))
    } else {
        Ok(value)
    }
}

/// Validate and percent-encode an identifier interpolated into a path
fn segment(name: &str, value: &str) -> RestResult<String> {
    Ok(urlencoding::encode(non_empty(name, value)?).into_owned())
}

fn positive(name: &str, value: Decimal) -> RestResult<String> {
    if value > Decimal::ZERO {
        Ok(value.to_string())
    } else {
        Err(RestError::invalid(format!("{name} must be positive, got {value}")))
    }
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
pub(crate) fn mock_client(
    mock: &std::sync::Arc<crate::transport::MockTransport>,
) -> crate::client::NocksRestClient {
    let config = crate::client::ClientConfig::new()
        .with_credential(crate::auth::Credential::new("tok_test").expect("valid token"));
    crate::client::NocksRestClient::with_transport(config, mock.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;
    use rust_decimal_macros::dec;

    fn body(descriptor: &RequestDescriptor) -> Value {
        Value::Object(descriptor.params.clone())
    }

    #[test]
    fn test_catalog_table() {
        let order = OrderRequest::market("NLG-EUR", Side::Buy, dec!(10));
        let rows: Vec<(Operation, Method, &str, bool)> = vec![
            (Operation::GetRate { code: "NLG-EUR" }, Method::Get, "trade-market/NLG-EUR", false),
            (Operation::GetBalance { code: "EUR" }, Method::Get, "balance/EUR", true),
            (
                Operation::GetDepositAddress { currency: "EUR", method: "sepa" },
                Method::Post,
                "deposit",
                true,
            ),
            (
                Operation::CreateWithdrawal { currency: "NLG", amount: dec!(5), address: "G123" },
                Method::Post,
                "withdrawal",
                true,
            ),
            (Operation::CreateOrder(&order), Method::Post, "trade-order", true),
            (Operation::CancelOrder { uuid: "abc-123" }, Method::Delete, "trade-order/abc-123", true),
            (Operation::GetOrder { uuid: "abc-123" }, Method::Get, "trade-order/abc-123", true),
            (Operation::GetOrderBook { code: "NLG-EUR" }, Method::Get, "trade-market/NLG-EUR/book", true),
            (Operation::GetOrders(ListQuery::new()), Method::Get, "trade-order", true),
            (Operation::GetDeposits(ListQuery::new()), Method::Get, "deposit", true),
            (Operation::GetWithdrawals(ListQuery::new()), Method::Get, "withdrawal", true),
        ];

        for (op, method, path, auth) in rows {
            let d = op.descriptor().unwrap();
            assert_eq!(d.method, method, "{}", op.name());
            assert_eq!(d.path, path, "{}", op.name());
            assert_eq!(d.requires_auth, auth, "{}", op.name());
            assert_eq!(d.page, 1, "{}", op.name());
            assert_eq!(d.mode, ResponseMode::Data, "{}", op.name());
        }
    }

    #[test]
    fn test_deposit_address_body() {
        let d = Operation::GetDepositAddress { currency: "EUR", method: "sepa" }
            .descriptor()
            .unwrap();
        let keys: Vec<&String> = d.params.keys().collect();
        assert_eq!(keys, ["currency", "payment_method"]);
        assert_eq!(body(&d), json!({"currency": "EUR", "payment_method": {"method": "sepa"}}));
    }

    #[test]
    fn test_withdrawal_body() {
        let d = Operation::CreateWithdrawal {
            currency: "NLG",
            amount: dec!(12.5),
            address: "GLzLpqLXgKSjUwQMzKAUvrMYxKvEq6Dxxh",
        }
        .descriptor()
        .unwrap();
        assert_eq!(
            body(&d),
            json!({"currency": "NLG", "amount": "12.5", "address": "GLzLpqLXgKSjUwQMzKAUvrMYxKvEq6Dxxh"})
        );
    }

    #[test]
    fn test_market_order_omits_rate() {
        let order = OrderRequest::market("NLG-EUR", Side::Sell, dec!(100));
        let d = Operation::CreateOrder(&order).descriptor().unwrap();
        assert_eq!(
            body(&d),
            json!({"trade-market": "NLG-EUR", "amount": "100", "side": "sell"})
        );
        assert!(!d.params.contains_key("rate"));
    }

    #[test]
    fn test_limit_order_includes_rate() {
        let order = OrderRequest::limit("NLG-EUR", Side::Buy, dec!(100), dec!(100));
        let d = Operation::CreateOrder(&order).descriptor().unwrap();
        assert_eq!(d.params["rate"], json!("100"));
        let keys: Vec<&String> = d.params.keys().collect();
        assert_eq!(keys, ["trade-market", "amount", "side", "rate"]);
    }

    #[test]
    fn test_negative_rate_rejected() {
        let order = OrderRequest::limit("NLG-EUR", Side::Buy, dec!(1), dec!(-1));
        assert!(Operation::CreateOrder(&order).descriptor().unwrap_err().is_local());
    }

    #[test]
    fn test_listing_flags() {
        let d = Operation::GetOrders(ListQuery::page(3).pagination()).descriptor().unwrap();
        assert_eq!(d.page, 3);
        assert_eq!(d.mode, ResponseMode::Pagination);
        assert!(d.params.is_empty());
    }

    #[test]
    fn test_invalid_arguments() {
        let bad = [
            Operation::GetRate { code: "" },
            Operation::GetBalance { code: "  " },
            Operation::GetDepositAddress { currency: "EUR", method: "" },
            Operation::CreateWithdrawal { currency: "EUR", amount: dec!(0), address: "NL91" },
            Operation::CreateWithdrawal { currency: "EUR", amount: dec!(1), address: "" },
            Operation::CancelOrder { uuid: "" },
            Operation::GetOrder { uuid: "" },
            Operation::GetOrderBook { code: "" },
        ];
        for op in bad {
            let err = op.descriptor().unwrap_err();
            assert!(matches!(err, RestError::InvalidArgument(_)), "{}", op.name());
        }

        let order = OrderRequest::market("NLG-EUR", Side::Buy, dec!(-3));
        assert!(Operation::CreateOrder(&order).descriptor().is_err());
    }

    #[test]
    fn test_path_segments_are_encoded() {
        let d = Operation::GetOrder { uuid: "../balance/EUR" }.descriptor().unwrap();
        assert_eq!(d.path, "trade-order/..%2Fbalance%2FEUR");
    }
}
