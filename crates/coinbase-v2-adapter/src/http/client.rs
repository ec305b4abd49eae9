/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client plus the core send/sign/decode path
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::io::Write;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Body, Client, Method, Request, RequestBuilder, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::error::{CoinbaseError, Result};
use crate::http::signature::RequestSigner;
use crate::types::responses::{Envelope, ErrorEnvelope};

/// Default base URL for the Coinbase v2 API
const API_BASE_URL: &str = "https://api.coinbase.com/v2";

const CB_ACCESS_KEY: HeaderName = HeaderName::from_static("cb-access-key");
const CB_ACCESS_SIGN: HeaderName = HeaderName::from_static("cb-access-sign");
const CB_ACCESS_TIMESTAMP: HeaderName = HeaderName::from_static("cb-access-timestamp");

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// API key pair for authenticated requests
///
/// The secret never leaves this struct except through the request signer;
/// it is zeroized on drop.
#[derive(Debug)]
pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Read `COINBASE_API_KEY` and `COINBASE_API_SECRET` from the environment
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("COINBASE_API_KEY")
            .map_err(|_| CoinbaseError::EnvVarNotSet("COINBASE_API_KEY"))?;
        let api_secret = std::env::var("COINBASE_API_SECRET")
            .map_err(|_| CoinbaseError::EnvVarNotSet("COINBASE_API_SECRET"))?;
        Ok(Self::new(api_key, api_secret))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &SecretString {
        &self.api_secret
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_string()),
        }
    }
}

/// Main HTTP client for the Coinbase v2 API
///
/// Holds no per-call mutable state; one instance can serve any number of
/// concurrent calls without external locking.
pub struct CoinbaseClient {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
    signer: RequestSigner,
    log: Mutex<Option<Box<dyn Write + Send>>>,
}

impl fmt::Debug for CoinbaseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoinbaseClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.credentials.api_key())
            .finish_non_exhaustive()
    }
}

impl CoinbaseClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(credentials, config, API_BASE_URL)
    }

    /// Create a new client against a non-default base URL (test servers,
    /// sandbox deployments)
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        // Normalize to a trailing slash so Url::join keeps the /v2 prefix
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let signer = RequestSigner::new(credentials.api_secret().expose_secret());

        Ok(Self {
            http_client,
            base_url,
            credentials,
            signer,
            log: Mutex::new(None),
        })
    }

    /// Attach a diagnostic sink; every exchange is dumped to it from then on
    pub fn set_log(&self, sink: Box<dyn Write + Send>) {
        *self.log.lock() = Some(sink);
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Build a request for an endpoint path relative to the base URL
    /// (no leading slash)
    pub fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build a request whose payload is serialized to JSON up front, so the
    /// signer later observes the exact transmitted bytes
    pub fn request_with_body<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        payload: &B,
    ) -> Result<RequestBuilder> {
        let body = serde_json::to_vec(payload)?;
        Ok(self.request(method, endpoint)?.body(body))
    }

    /// Perform the exchange and decode the envelope's `data` field into `T`
    pub async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request = self.prepare(builder)?;
        let body = self.dispatch(request).await?;
        let envelope = decode_envelope(&body)?;
        decode_data(envelope)
    }

    /// Like [`send`](Self::send), but also decodes the envelope's
    /// `pagination` field into its own destination
    pub async fn send_paged<T, P>(&self, builder: RequestBuilder) -> Result<(T, Option<P>)>
    where
        T: DeserializeOwned,
        P: DeserializeOwned,
    {
        let request = self.prepare(builder)?;
        let body = self.dispatch(request).await?;
        decode_paged(&body)
    }

    /// Perform the exchange and copy the raw response body verbatim into
    /// `sink`, bypassing JSON decoding entirely
    pub async fn send_raw<W>(&self, builder: RequestBuilder, sink: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        let request = self.prepare(builder)?;
        let body = self.dispatch(request).await?;
        sink.write_all(&body)?;
        Ok(())
    }

    /// [`send`](Self::send) with `CB-ACCESS-*` authentication headers attached
    pub async fn send_with_auth<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let mut request = self.prepare(builder)?;
        self.authenticate(&mut request)?;
        let body = self.dispatch(request).await?;
        let envelope = decode_envelope(&body)?;
        decode_data(envelope)
    }

    /// [`send_paged`](Self::send_paged) with authentication headers attached
    pub async fn send_paged_with_auth<T, P>(
        &self,
        builder: RequestBuilder,
    ) -> Result<(T, Option<P>)>
    where
        T: DeserializeOwned,
        P: DeserializeOwned,
    {
        let mut request = self.prepare(builder)?;
        self.authenticate(&mut request)?;
        let body = self.dispatch(request).await?;
        decode_paged(&body)
    }

    /// [`send_raw`](Self::send_raw) with authentication headers attached
    pub async fn send_raw_with_auth<W>(&self, builder: RequestBuilder, sink: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        let mut request = self.prepare(builder)?;
        self.authenticate(&mut request)?;
        let body = self.dispatch(request).await?;
        sink.write_all(&body)?;
        Ok(())
    }

    /// Build the request and set default headers
    fn prepare(&self, builder: RequestBuilder) -> Result<Request> {
        let mut request = builder.build()?;
        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en_US"));
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        Ok(request)
    }

    /// Sign the request and attach the three authentication headers.
    ///
    /// The body is already buffered (see
    /// [`request_with_body`](Self::request_with_body)), so the signed bytes
    /// and the transmitted bytes are the same buffer.
    fn authenticate(&self, request: &mut Request) -> Result<()> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| CoinbaseError::SystemClock)?
            .as_secs();

        let signature = {
            let body = request
                .body()
                .and_then(Body::as_bytes)
                .unwrap_or_default();
            self.signer.sign(
                timestamp,
                request.method().as_str(),
                request.url().path(),
                body,
            )
        };

        let headers = request.headers_mut();
        headers.insert(
            CB_ACCESS_KEY,
            HeaderValue::from_str(self.credentials.api_key())?,
        );
        headers.insert(CB_ACCESS_SIGN, HeaderValue::from_str(&signature)?);
        headers.insert(
            CB_ACCESS_TIMESTAMP,
            HeaderValue::from_str(&timestamp.to_string())?,
        );
        Ok(())
    }

    /// One round trip: execute, dump to the diagnostic sink, map non-2xx
    /// statuses to [`CoinbaseError::Api`], return the raw body
    async fn dispatch(&self, request: Request) -> Result<Vec<u8>> {
        let method = request.method().clone();
        let url = request.url().clone();
        let request_body = request
            .body()
            .and_then(Body::as_bytes)
            .map(|bytes| bytes.to_vec());

        debug!(method = %method, url = %url, "dispatching request");

        let response = match self.http_client.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                self.log_exchange(&method, &url, request_body.as_deref(), None);
                return Err(err.into());
            }
        };

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        debug!(method = %method, url = %url, status = status.as_u16(), "response received");
        self.log_exchange(
            &method,
            &url,
            request_body.as_deref(),
            Some((status, &headers, &body)),
        );

        if !status.is_success() {
            // Best effort: a malformed error body yields an empty error list
            let errors = serde_json::from_slice::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.errors)
                .unwrap_or_default();
            return Err(CoinbaseError::Api {
                status: status.as_u16(),
                method: method.to_string(),
                url: url.to_string(),
                errors,
            });
        }

        Ok(body)
    }

    /// Dump one exchange to the diagnostic sink. Write failures are swallowed;
    /// logging must never fail the call.
    fn log_exchange(
        &self,
        method: &Method,
        url: &Url,
        request_body: Option<&[u8]>,
        response: Option<(StatusCode, &HeaderMap, &[u8])>,
    ) {
        let mut guard = self.log.lock();
        let Some(sink) = guard.as_mut() else {
            return;
        };

        let request_body = request_body
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default();
        let _ = match response {
            Some((status, headers, body)) => writeln!(
                sink,
                "Request: {method} {url}. Data: {request_body}\nResponse: {status}\n{headers:?}\n{}",
                String::from_utf8_lossy(body)
            ),
            None => writeln!(
                sink,
                "Request: {method} {url}. Data: {request_body}\nResponse: <no response>"
            ),
        };
    }
}

/// Stage one of the double decode: the outer envelope with `data` and
/// `pagination` kept as untyped trees. An empty 2xx body decodes as an empty
/// envelope so bodyless endpoints (DELETE) can discard it.
fn decode_envelope(body: &[u8]) -> Result<Envelope> {
    if body.is_empty() {
        return Ok(Envelope::default());
    }
    serde_json::from_slice(body).map_err(|source| CoinbaseError::Decode {
        context: "response envelope",
        source,
    })
}

/// Stage two: re-decode `data` into the caller's destination type
fn decode_data<T: DeserializeOwned>(envelope: Envelope) -> Result<T> {
    serde_json::from_value(envelope.data).map_err(|source| CoinbaseError::Decode {
        context: "envelope data",
        source,
    })
}

fn decode_paged<T, P>(body: &[u8]) -> Result<(T, Option<P>)>
where
    T: DeserializeOwned,
    P: DeserializeOwned,
{
    let mut envelope = decode_envelope(body)?;
    let pagination = match envelope.pagination.take() {
        Some(value) if !value.is_null() => {
            Some(
                serde_json::from_value(value).map_err(|source| CoinbaseError::Decode {
                    context: "envelope pagination",
                    source,
                })?,
            )
        }
        _ => None,
    };
    Ok((decode_data(envelope)?, pagination))
}
