/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for coinbase-v2-adapter tests

use coinbase_v2_adapter::{ClientConfig, CoinbaseClient, Credentials};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Credentials with a fixed secret so signatures are reproducible
pub fn test_credentials() -> Credentials {
    Credentials::new("test-key", "s3cret")
}

/// Client pointed at the mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> CoinbaseClient {
    CoinbaseClient::with_config_and_base_url(
        test_credentials(),
        ClientConfig::default(),
        &server.uri(),
    )
    .expect("client init")
}
