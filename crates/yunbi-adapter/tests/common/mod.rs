/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for yunbi-adapter tests

use wiremock::MockServer;
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};
use yunbi_adapter::{ClientConfig, Credentials, YunbiClient};

pub const TEST_ACCESS_KEY: &str = "test-access-key";
pub const TEST_SECRET_KEY: &str = "test-secret-key";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Config pointing the client at the mock server's `/api/v2/` root
pub fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: format!("{}/api/v2/", server.uri()),
        ..ClientConfig::default()
    }
}

pub fn public_client(server: &MockServer) -> YunbiClient {
    YunbiClient::with_config(mock_config(server), None).expect("client init")
}

#[allow(dead_code)]
pub fn authed_client(server: &MockServer) -> YunbiClient {
    YunbiClient::with_config(
        mock_config(server),
        Some(Credentials::new(TEST_ACCESS_KEY, TEST_SECRET_KEY)),
    )
    .expect("client init")
}

/// Fail the test on drop if the server sees any request at all
#[allow(dead_code)]
pub async fn expect_no_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// Decode a form-encoded body or query string into ordered pairs
#[allow(dead_code)]
pub fn form_pairs(encoded: &[u8]) -> Vec<(String, String)> {
    url::form_urlencoded::parse(encoded)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
