/*
[INPUT]:  Account identifiers and update payloads
[OUTPUT]: Account data with pagination cursors
[POS]:    HTTP layer - account endpoints (require signed auth)
[UPDATE]: When adding new account endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{CoinbaseClient, Result};
use crate::types::{Account, Pagination, UpdateAccount};

impl CoinbaseClient {
    /// List accounts the authentication method has access to
    ///
    /// GET /accounts
    pub async fn list_accounts(&self) -> Result<(Vec<Account>, Option<Pagination>)> {
        let builder = self.request(Method::GET, "accounts")?;
        self.send_paged_with_auth(builder).await
    }

    /// Show one account
    ///
    /// GET /accounts/{account_id}
    pub async fn show_account(&self, account_id: &str) -> Result<Account> {
        let endpoint = format!("accounts/{}", account_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_with_auth(builder).await
    }

    /// Modify an account
    ///
    /// PUT /accounts/{account_id}
    pub async fn update_account(
        &self,
        account_id: &str,
        update: UpdateAccount,
    ) -> Result<Account> {
        let endpoint = format!("accounts/{}", account_id);
        let builder = self.request_with_body(Method::PUT, &endpoint, &update)?;
        self.send_with_auth(builder).await
    }

    /// Remove an account
    ///
    /// DELETE /accounts/{account_id}
    pub async fn delete_account(&self, account_id: &str) -> Result<()> {
        let endpoint = format!("accounts/{}", account_id);
        let builder = self.request(Method::DELETE, &endpoint)?;
        let _: serde_json::Value = self.send_with_auth(builder).await?;
        Ok(())
    }
}
