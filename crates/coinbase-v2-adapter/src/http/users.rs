/*
[INPUT]:  User identifiers and profile update payloads
[OUTPUT]: Public and authenticated user profiles
[POS]:    HTTP layer - user endpoints
[UPDATE]: When adding new user endpoints or changing profile fields
*/

use reqwest::Method;

use crate::http::{CoinbaseClient, Result};
use crate::types::{UpdateCurrentUser, User};

impl CoinbaseClient {
    /// Get any user's public profile by id; no authentication required
    ///
    /// GET /users/{user_id}
    pub async fn show_user(&self, user_id: &str) -> Result<User> {
        let endpoint = format!("users/{}", user_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send(builder).await
    }

    /// Get the authenticated user's profile
    ///
    /// GET /user
    pub async fn current_user(&self) -> Result<User> {
        let builder = self.request(Method::GET, "user")?;
        self.send_with_auth(builder).await
    }

    /// Modify the authenticated user's profile and preferences
    ///
    /// PUT /user
    pub async fn update_current_user(&self, update: UpdateCurrentUser) -> Result<User> {
        let builder = self.request_with_body(Method::PUT, "user", &update)?;
        self.send_with_auth(builder).await
    }
}
