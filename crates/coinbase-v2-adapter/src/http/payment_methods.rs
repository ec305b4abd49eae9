/*
[INPUT]:  Payment method identifiers
[OUTPUT]: Payment method records with buy/sell capabilities
[POS]:    HTTP layer - payment method endpoints (require signed auth)
[UPDATE]: When adding new payment method endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{CoinbaseClient, Result};
use crate::types::{Pagination, PaymentMethod};

impl CoinbaseClient {
    /// List the current user's payment methods
    ///
    /// GET /payment-methods
    pub async fn list_payment_methods(
        &self,
    ) -> Result<(Vec<PaymentMethod>, Option<Pagination>)> {
        let builder = self.request(Method::GET, "payment-methods")?;
        self.send_paged_with_auth(builder).await
    }

    /// Show one payment method
    ///
    /// GET /payment-methods/{payment_method_id}/
    pub async fn show_payment_method(&self, payment_method_id: &str) -> Result<PaymentMethod> {
        let endpoint = format!("payment-methods/{}/", payment_method_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_with_auth(builder).await
    }
}
