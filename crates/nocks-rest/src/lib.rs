//! REST API client for the Nocks exchange
//!
//! This crate wraps the Nocks REST API v2: market rates, balances, deposits,
//! withdrawals and trade orders.
//!
//! # Features
//!
//! - **Market Data**: Trade market rates, order book
//! - **Funding**: Balances, deposit addresses, withdrawals, transfer history
//! - **Trading**: Place, cancel and look up trade orders
//!
//! # Authentication
//!
//! Private endpoints need an OAuth bearer token, sent as
//! `Authorization: Bearer <token>`. A client built without a token can still
//! call the public rate endpoint.
//!
//! # Example
//!
//! ```no_run
//! use nocks_rest::{Credential, ListQuery, NocksRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NocksRestClient::new()?;
//!     let rate = client.get_rate("NLG-EUR").await?;
//!     println!("NLG/EUR: {:?}", rate.last);
//!
//!     let token = Credential::new(std::env::var("NOCKS_API_TOKEN")?)?;
//!     let auth_client = NocksRestClient::with_credential(token)?;
//!     let orders = auth_client.get_orders(ListQuery::new()).await?;
//!     println!("Orders: {:?}", orders);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Responses
//!
//! Every response is a JSON envelope. Calls return the `data` member decoded
//! into its typed shape. List calls can ask for `meta.pagination` instead,
//! see [`ListQuery::pagination`].

pub mod auth;
pub mod client;
mod codec;
pub mod dispatch;
pub mod endpoints;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types
pub use auth::Credential;
pub use client::{ClientConfig, NocksRestClient, DEFAULT_API_VERSION, DEFAULT_BASE_URL, SANDBOX_BASE_URL};
pub use dispatch::{RequestDescriptor, RequestDispatcher, ResponseMode};
pub use endpoints::Operation;
pub use error::{RestError, RestResult};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport, TransportError};

#[cfg(any(test, feature = "test-utils"))]
pub use transport::MockTransport;

// Re-export request and payload types
pub use types::{
    // Requests
    ListQuery, OrderRequest,
    // Market data
    BookEntry, OrderBook, TradeMarket,
    // Funding
    Balance, Deposit, DepositAddress, PaymentMetadata, Transfer, Withdrawal,
    // Trading
    OrderType, Side, Status, TradeOrder, TransferType,
    // Shared
    Amount, Decimal, Listing, Pagination, PaginationLinks, Timestamp,
};
