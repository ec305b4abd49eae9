/*
[INPUT]:  Request method, path, body bytes, Unix timestamp, API secret
[OUTPUT]: Signed request headers (CB-ACCESS-SIGN)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs HTTP requests for authenticated endpoints
///
/// The secret is held in a [`SecretString`] so it is zeroized on drop and
/// redacted from debug output.
#[derive(Debug)]
pub struct RequestSigner {
    api_secret: SecretString,
}

impl RequestSigner {
    /// Create a new request signer keyed by the API secret
    pub fn new(api_secret: impl Into<String>) -> Self {
        Self {
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Sign one request.
    ///
    /// Canonical message: `"{timestamp}{METHOD}{path}{body}"`. The path must
    /// match exactly what the server sees, and `body` must be the exact bytes
    /// that will be transmitted (empty for bodyless requests). Returns the
    /// lowercase hex HMAC-SHA256 digest.
    pub fn sign(&self, timestamp: u64, method: &str, path: &str, body: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(self.api_secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(timestamp.to_string().as_bytes());
        mac.update(method.as_bytes());
        mac.update(path.as_bytes());
        mac.update(body);
        hex::encode(mac.finalize().into_bytes())
    }
}
