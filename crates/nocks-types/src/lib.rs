//! Shared types for the Nocks REST API v2
//!
//! Every Nocks response is wrapped in an envelope of the form
//! `{"data": ..., "meta": {"pagination": ...}}`. This crate holds the typed
//! shapes found under `data` for each endpoint, plus the pagination block.
//! It has minimal dependencies and can be used independently of the client.
//!
//! # Key Types
//!
//! - [`Amount`], [`Timestamp`] - Value objects used by every payload
//! - [`TradeMarket`], [`OrderBook`] - Market data
//! - [`Balance`], [`DepositAddress`], [`Deposit`], [`Withdrawal`] - Funding
//! - [`TradeOrder`], [`Side`] - Trading
//! - [`Pagination`], [`Listing`] - List results

pub mod account;
pub mod amount;
pub mod enums;
pub mod market;
pub mod order;
pub mod pagination;

pub use account::*;
pub use amount::*;
pub use enums::*;
pub use market::*;
pub use order::*;
pub use pagination::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
