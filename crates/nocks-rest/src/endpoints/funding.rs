//! Balance, deposit and withdrawal endpoints
//!
//! These endpoints require a credential.

use rust_decimal::Decimal;
use tracing::instrument;

use crate::client::NocksRestClient;
use crate::endpoints::Operation;
use crate::error::RestResult;
use crate::types::{Balance, Deposit, DepositAddress, ListQuery, Listing, Withdrawal};

impl NocksRestClient {
    /// Get the balance for a currency
    ///
    /// # Arguments
    /// * `code` - Currency code (e.g., "EUR", "NLG")
    #[instrument(skip(self))]
    pub async fn get_balance(&self, code: &str) -> RestResult<Balance> {
        self.call(Operation::GetBalance { code }).await
    }

    /// Get an address to deposit funds to
    ///
    /// # Arguments
    /// * `currency` - Currency code (e.g., "EUR", "NLG")
    /// * `method` - Payment method matching the currency (e.g., "sepa", "gulden")
    #[instrument(skip(self))]
    pub async fn get_deposit_address(
        &self,
        currency: &str,
        method: &str,
    ) -> RestResult<DepositAddress> {
        self.call(Operation::GetDepositAddress { currency, method })
            .await
    }

    /// Withdraw funds
    ///
    /// # Arguments
    /// * `currency` - Currency code
    /// * `amount` - Amount to withdraw, may not exceed the available balance
    /// * `address` - Gulden address or verified IBAN
    #[instrument(skip(self, address))]
    pub async fn create_withdrawal(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> RestResult<Withdrawal> {
        self.call(Operation::CreateWithdrawal {
            currency,
            amount,
            address,
        })
        .await
    }

    /// List deposits, or their pagination metadata
    #[instrument(skip(self))]
    pub async fn get_deposits(&self, query: ListQuery) -> RestResult<Listing<Deposit>> {
        self.list(Operation::GetDeposits(query)).await
    }

    /// List withdrawals, or their pagination metadata
    #[instrument(skip(self))]
    pub async fn get_withdrawals(&self, query: ListQuery) -> RestResult<Listing<Withdrawal>> {
        self.list(Operation::GetWithdrawals(query)).await
    }
}
