/*
[INPUT]:  Currency pairs and fiat currency codes
[OUTPUT]: Market data (currencies, exchange rates, prices, server time)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{CoinbaseClient, Result};
use crate::types::{Currency, ExchangeRates, MoneyAmount, ServerTime};

impl CoinbaseClient {
    /// List known currencies
    ///
    /// GET /currencies
    pub async fn list_currencies(&self) -> Result<Vec<Currency>> {
        let builder = self.request(Method::GET, "currencies")?;
        self.send(builder).await
    }

    /// Get current exchange rates, expressed in the given fiat currency
    ///
    /// GET /exchange-rates?currency={currency}
    pub async fn exchange_rates(&self, currency: &str) -> Result<ExchangeRates> {
        let endpoint = format!("exchange-rates?currency={}", currency);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send(builder).await
    }

    /// Total price to buy one unit of the pair's base currency, fees included
    ///
    /// GET /prices/{currency_pair}/buy
    pub async fn buy_price(&self, currency_pair: &str) -> Result<MoneyAmount> {
        let endpoint = format!("prices/{}/buy", currency_pair);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send(builder).await
    }

    /// Total price to sell one unit of the pair's base currency, fees included
    ///
    /// GET /prices/{currency_pair}/sell
    pub async fn sell_price(&self, currency_pair: &str) -> Result<MoneyAmount> {
        let endpoint = format!("prices/{}/sell", currency_pair);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send(builder).await
    }

    /// Current market price of the pair's base currency
    ///
    /// GET /prices/{currency_pair}/spot
    pub async fn spot_price(&self, currency_pair: &str) -> Result<MoneyAmount> {
        let endpoint = format!("prices/{}/spot", currency_pair);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send(builder).await
    }

    /// Get the API server time
    ///
    /// GET /time
    pub async fn server_time(&self) -> Result<ServerTime> {
        let builder = self.request(Method::GET, "time")?;
        self.send_with_auth(builder).await
    }
}
