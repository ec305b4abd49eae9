/*
[INPUT]:  Account identifiers and buy/sell order payloads
[OUTPUT]: Trade records and commit confirmations
[POS]:    HTTP layer - buy and sell endpoints (require signed auth)
[UPDATE]: When adding new trade endpoints or changing order flow
*/

use reqwest::Method;

use crate::http::{CoinbaseClient, Result};
use crate::types::{Pagination, PlaceBuy, PlaceSell, Trade};

impl CoinbaseClient {
    /// List buys for an account
    ///
    /// GET /accounts/{account_id}/buys
    pub async fn list_buys(&self, account_id: &str) -> Result<(Vec<Trade>, Option<Pagination>)> {
        let endpoint = format!("accounts/{}/buys", account_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_paged_with_auth(builder).await
    }

    /// Show one buy
    ///
    /// GET /accounts/{account_id}/buys/{buy_id}
    pub async fn show_buy(&self, account_id: &str, buy_id: &str) -> Result<Trade> {
        let endpoint = format!("accounts/{}/buys/{}", account_id, buy_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_with_auth(builder).await
    }

    /// Place a buy order; with `commit: false` it stays uncommitted until
    /// [`commit_buy`](Self::commit_buy)
    ///
    /// POST /accounts/{account_id}/buys
    pub async fn place_buy(&self, account_id: &str, buy: PlaceBuy) -> Result<Trade> {
        let endpoint = format!("accounts/{}/buys", account_id);
        let builder = self.request_with_body(Method::POST, &endpoint, &buy)?;
        self.send_with_auth(builder).await
    }

    /// Complete a buy that was placed with `commit: false`
    ///
    /// POST /accounts/{account_id}/buys/{buy_id}/commit
    pub async fn commit_buy(&self, account_id: &str, buy_id: &str) -> Result<Trade> {
        let endpoint = format!("accounts/{}/buys/{}/commit", account_id, buy_id);
        let builder = self.request(Method::POST, &endpoint)?;
        self.send_with_auth(builder).await
    }

    /// List sells for an account
    ///
    /// GET /accounts/{account_id}/sells
    pub async fn list_sells(&self, account_id: &str) -> Result<(Vec<Trade>, Option<Pagination>)> {
        let endpoint = format!("accounts/{}/sells", account_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_paged_with_auth(builder).await
    }

    /// Show one sell
    ///
    /// GET /accounts/{account_id}/sells/{sell_id}
    pub async fn show_sell(&self, account_id: &str, sell_id: &str) -> Result<Trade> {
        let endpoint = format!("accounts/{}/sells/{}", account_id, sell_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_with_auth(builder).await
    }

    /// Place a sell order; with `commit: false` it stays uncommitted until
    /// [`commit_sell`](Self::commit_sell)
    ///
    /// POST /accounts/{account_id}/sells
    pub async fn place_sell(&self, account_id: &str, sell: PlaceSell) -> Result<Trade> {
        let endpoint = format!("accounts/{}/sells", account_id);
        let builder = self.request_with_body(Method::POST, &endpoint, &sell)?;
        self.send_with_auth(builder).await
    }

    /// Complete a sell that was placed with `commit: false`
    ///
    /// POST /accounts/{account_id}/sells/{sell_id}/commit
    pub async fn commit_sell(&self, account_id: &str, sell_id: &str) -> Result<Trade> {
        let endpoint = format!("accounts/{}/sells/{}/commit", account_id, sell_id);
        let builder = self.request(Method::POST, &endpoint)?;
        self.send_with_auth(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, CoinbaseClient, Credentials};
    use crate::types::{PlaceBuy, TradeStatus};
    use wiremock::matchers::{body_json, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> CoinbaseClient {
        CoinbaseClient::with_config_and_base_url(
            Credentials::new("test-key", "s3cret"),
            ClientConfig::default(),
            &server.uri(),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_place_buy() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "data": {
                "id": "67e0eaec-07d7-54c4-a72c-2e92826897df",
                "status": "created",
                "payment_method": {
                    "id": "83562370-3e5c-51db-87da-752af5ab9559",
                    "resource": "payment_method",
                    "resource_path": "/v2/payment-methods/83562370-3e5c-51db-87da-752af5ab9559"
                },
                "transaction": {
                    "id": "441b9494-b3f0-5b98-b9b0-4d82c21c252a",
                    "resource": "transaction",
                    "resource_path": "/v2/accounts/2bbf394c/transactions/441b9494"
                },
                "amount": {"amount": "1.00000000", "currency": "BTC"},
                "total": {"amount": "10.25", "currency": "USD"},
                "subtotal": {"amount": "10.10", "currency": "USD"},
                "fee": {"amount": "0.15", "currency": "USD"},
                "created_at": "2015-01-31T20:49:02Z",
                "updated_at": "2015-02-11T16:54:02-08:00",
                "payout_at": "2015-02-18T16:54:00-08:00",
                "resource": "buy",
                "resource_path": "/v2/accounts/2bbf394c/buys/67e0eaec",
                "committed": true,
                "instant": false
            }
        }"#;

        let _mock = Mock::given(method("POST"))
            .and(path("/accounts/2bbf394c/buys"))
            .and(body_json(serde_json::json!({
                "amount": "1",
                "currency": "BTC",
                "agree_btc_amount_varies": false,
                "commit": true,
                "quote": false
            })))
            .and(header_exists("CB-ACCESS-SIGN"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let buy = client(&server)
            .place_buy(
                "2bbf394c",
                PlaceBuy {
                    amount: Some("1".parse().expect("amount")),
                    currency: "BTC".to_string(),
                    commit: true,
                    ..PlaceBuy::default()
                },
            )
            .await
            .expect("place_buy failed");

        assert_eq!(buy.id, "67e0eaec-07d7-54c4-a72c-2e92826897df");
        assert_eq!(buy.status, Some(TradeStatus::Created));
        assert!(buy.committed);
        let fee = buy.fee.expect("fee");
        assert_eq!(fee.amount, "0.15".parse().expect("fee amount"));
        let payment_method = buy.payment_method.expect("payment method ref");
        assert_eq!(payment_method.resource, "payment_method");
    }

    #[tokio::test]
    async fn test_commit_sell_posts_to_commit_path() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/accounts/2bbf394c/sells/8250fe29/commit"))
            .and(header_exists("CB-ACCESS-SIGN"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(
                        r#"{"data": {"id": "8250fe29", "status": "completed", "resource": "sell", "committed": true}}"#,
                        "application/json",
                    ),
            )
            .expect(1)
            .mount(&server)
            .await;

        let sell = client(&server)
            .commit_sell("2bbf394c", "8250fe29")
            .await
            .expect("commit_sell failed");

        assert_eq!(sell.status, Some(TradeStatus::Completed));
        assert!(sell.committed);
    }

    #[tokio::test]
    async fn test_list_buys_returns_pagination() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/accounts/2bbf394c/buys"))
            .and(header_exists("CB-ACCESS-SIGN"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(
                        r#"{"pagination": {"limit": 25}, "data": [{"id": "buy-1", "resource": "buy"}]}"#,
                        "application/json",
                    ),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (buys, pagination) = client(&server)
            .list_buys("2bbf394c")
            .await
            .expect("list_buys failed");

        assert_eq!(buys.len(), 1);
        assert_eq!(pagination.expect("pagination").limit, 25);
    }
}
