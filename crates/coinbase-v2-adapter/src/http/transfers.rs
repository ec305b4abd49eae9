/*
[INPUT]:  Account identifiers and deposit/withdrawal payloads
[OUTPUT]: Transfer records and commit confirmations
[POS]:    HTTP layer - fiat deposit and withdrawal endpoints (require signed auth)
[UPDATE]: When adding new transfer endpoints or changing funds flow
*/

use reqwest::Method;

use crate::http::{CoinbaseClient, Result};
use crate::types::{DepositFunds, Pagination, Transfer, WithdrawFunds};

impl CoinbaseClient {
    /// List deposits for an account
    ///
    /// GET /accounts/{account_id}/deposits
    pub async fn list_deposits(
        &self,
        account_id: &str,
    ) -> Result<(Vec<Transfer>, Option<Pagination>)> {
        let endpoint = format!("accounts/{}/deposits", account_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_paged_with_auth(builder).await
    }

    /// Show one deposit
    ///
    /// GET /accounts/{account_id}/deposits/{deposit_id}
    pub async fn show_deposit(&self, account_id: &str, deposit_id: &str) -> Result<Transfer> {
        let endpoint = format!("accounts/{}/deposits/{}", account_id, deposit_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_with_auth(builder).await
    }

    /// Deposit funds into a fiat account
    ///
    /// POST /accounts/{account_id}/deposits
    pub async fn deposit_funds(&self, account_id: &str, deposit: DepositFunds) -> Result<Transfer> {
        let endpoint = format!("accounts/{}/deposits", account_id);
        let builder = self.request_with_body(Method::POST, &endpoint, &deposit)?;
        self.send_with_auth(builder).await
    }

    /// Complete a deposit that was created with `commit: false`
    ///
    /// POST /accounts/{account_id}/deposits/{deposit_id}/commit
    pub async fn commit_deposit(&self, account_id: &str, deposit_id: &str) -> Result<Transfer> {
        let endpoint = format!("accounts/{}/deposits/{}/commit", account_id, deposit_id);
        let builder = self.request(Method::POST, &endpoint)?;
        self.send_with_auth(builder).await
    }

    /// List withdrawals for an account
    ///
    /// GET /accounts/{account_id}/withdrawals
    pub async fn list_withdrawals(
        &self,
        account_id: &str,
    ) -> Result<(Vec<Transfer>, Option<Pagination>)> {
        let endpoint = format!("accounts/{}/withdrawals", account_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_paged_with_auth(builder).await
    }

    /// Show one withdrawal
    ///
    /// GET /accounts/{account_id}/withdrawals/{withdrawal_id}
    pub async fn show_withdrawal(
        &self,
        account_id: &str,
        withdrawal_id: &str,
    ) -> Result<Transfer> {
        let endpoint = format!("accounts/{}/withdrawals/{}", account_id, withdrawal_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_with_auth(builder).await
    }

    /// Withdraw funds from a fiat account
    ///
    /// POST /accounts/{account_id}/withdrawals
    pub async fn withdraw_funds(
        &self,
        account_id: &str,
        withdrawal: WithdrawFunds,
    ) -> Result<Transfer> {
        let endpoint = format!("accounts/{}/withdrawals", account_id);
        let builder = self.request_with_body(Method::POST, &endpoint, &withdrawal)?;
        self.send_with_auth(builder).await
    }

    /// Complete a withdrawal that was created with `commit: false`
    ///
    /// POST /accounts/{account_id}/withdrawals/{withdrawal_id}/commit
    pub async fn commit_withdrawal(
        &self,
        account_id: &str,
        withdrawal_id: &str,
    ) -> Result<Transfer> {
        let endpoint = format!("accounts/{}/withdrawals/{}/commit", account_id, withdrawal_id);
        let builder = self.request(Method::POST, &endpoint)?;
        self.send_with_auth(builder).await
    }
}
