/*
[INPUT]:  Account/address identifiers and address creation payloads
[OUTPUT]: Receive addresses and the transactions sent to them
[POS]:    HTTP layer - address endpoints (require signed auth)
[UPDATE]: When adding new address endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{CoinbaseClient, Result};
use crate::types::{Address, CreateAddress, Pagination, Transaction};

impl CoinbaseClient {
    /// List receive addresses for an account
    ///
    /// GET /accounts/{account_id}/addresses
    pub async fn list_addresses(
        &self,
        account_id: &str,
    ) -> Result<(Vec<Address>, Option<Pagination>)> {
        let endpoint = format!("accounts/{}/addresses", account_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_paged_with_auth(builder).await
    }

    /// Show one receive address
    ///
    /// GET /accounts/{account_id}/addresses/{address_id}
    pub async fn show_address(&self, account_id: &str, address_id: &str) -> Result<Address> {
        let endpoint = format!("accounts/{}/addresses/{}", account_id, address_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_with_auth(builder).await
    }

    /// List transactions that were sent to a specific address
    ///
    /// GET /accounts/{account_id}/addresses/{address_id}/transactions
    pub async fn list_address_transactions(
        &self,
        account_id: &str,
        address_id: &str,
    ) -> Result<(Vec<Transaction>, Option<Pagination>)> {
        let endpoint = format!(
            "accounts/{}/addresses/{}/transactions",
            account_id, address_id
        );
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_paged_with_auth(builder).await
    }

    /// Create a new receive address for an account
    ///
    /// POST /accounts/{account_id}/addresses
    pub async fn create_address(
        &self,
        account_id: &str,
        address: CreateAddress,
    ) -> Result<Address> {
        let endpoint = format!("accounts/{}/addresses", account_id);
        let builder = self.request_with_body(Method::POST, &endpoint, &address)?;
        self.send_with_auth(builder).await
    }
}
