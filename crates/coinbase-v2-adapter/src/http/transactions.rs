/*
[INPUT]:  Account identifiers and money movement payloads
[OUTPUT]: Transaction records for sends, transfers and money requests
[POS]:    HTTP layer - transaction endpoints (require signed auth)
[UPDATE]: When adding new transaction endpoints or changing money request flow
*/

use reqwest::Method;

use crate::http::{CoinbaseClient, Result};
use crate::types::{Pagination, RequestMoney, SendMoney, Transaction, TransferMoney};

impl CoinbaseClient {
    /// List an account's transactions
    ///
    /// GET /accounts/{account_id}/transactions
    pub async fn list_transactions(
        &self,
        account_id: &str,
    ) -> Result<(Vec<Transaction>, Option<Pagination>)> {
        let endpoint = format!("accounts/{}/transactions", account_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_paged_with_auth(builder).await
    }

    /// Show one transaction
    ///
    /// GET /accounts/{account_id}/transactions/{transaction_id}
    pub async fn show_transaction(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> Result<Transaction> {
        let endpoint = format!("accounts/{}/transactions/{}", account_id, transaction_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_with_auth(builder).await
    }

    /// Send funds to a crypto address or email address
    ///
    /// POST /accounts/{account_id}/transactions
    pub async fn send_money(&self, account_id: &str, send: SendMoney) -> Result<Transaction> {
        let endpoint = format!("accounts/{}/transactions", account_id);
        let builder = self.request_with_body(Method::POST, &endpoint, &send)?;
        self.send_with_auth(builder).await
    }

    /// Move funds between two of the user's own accounts
    ///
    /// POST /accounts/{account_id}/transactions
    pub async fn transfer_money(
        &self,
        account_id: &str,
        transfer: TransferMoney,
    ) -> Result<Transaction> {
        let endpoint = format!("accounts/{}/transactions", account_id);
        let builder = self.request_with_body(Method::POST, &endpoint, &transfer)?;
        self.send_with_auth(builder).await
    }

    /// Request money from an email address
    ///
    /// POST /accounts/{account_id}/transactions
    pub async fn request_money(
        &self,
        account_id: &str,
        request: RequestMoney,
    ) -> Result<Transaction> {
        let endpoint = format!("accounts/{}/transactions", account_id);
        let builder = self.request_with_body(Method::POST, &endpoint, &request)?;
        self.send_with_auth(builder).await
    }

    /// Complete a money request as its recipient
    ///
    /// POST /accounts/{account_id}/transactions/{transaction_id}/complete
    pub async fn complete_money_request(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> Result<Transaction> {
        let endpoint = format!(
            "accounts/{}/transactions/{}/complete",
            account_id, transaction_id
        );
        let builder = self.request(Method::POST, &endpoint)?;
        self.send_with_auth(builder).await
    }

    /// Resend the notification email for a money request
    ///
    /// POST /accounts/{account_id}/transactions/{transaction_id}/resend
    pub async fn resend_money_request(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> Result<Transaction> {
        let endpoint = format!(
            "accounts/{}/transactions/{}/resend",
            account_id, transaction_id
        );
        let builder = self.request(Method::POST, &endpoint)?;
        self.send_with_auth(builder).await
    }

    /// Cancel a money request
    ///
    /// DELETE /accounts/{account_id}/transactions/{transaction_id}
    pub async fn cancel_money_request(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> Result<Transaction> {
        let endpoint = format!("accounts/{}/transactions/{}", account_id, transaction_id);
        let builder = self.request(Method::DELETE, &endpoint)?;
        self.send_with_auth(builder).await
    }
}
