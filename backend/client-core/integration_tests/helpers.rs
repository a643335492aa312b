//! Test helpers for handler integration tests.
//!
//! - Mock news server setup
//! - Pages pre-populated with the forms each handler expects
//! - An address that refuses connections, for transport failures

use client_core::NewsClient;
use client_core::page::MemoryPage;

use std::net::TcpListener;

use wiremock::MockServer;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub async fn mock_server() -> MockServer {
    MockServer::start().await
}

pub fn client_for(server: &MockServer) -> NewsClient {
    NewsClient::new(&server.uri()).expect("mock server URI should parse")
}

/// A base URL nothing is listening on.
pub fn unreachable_client() -> NewsClient {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind ephemeral port");
    let port = listener
        .local_addr()
        .expect("Failed to read local address")
        .port();
    drop(listener);

    NewsClient::new(&format!("http://127.0.0.1:{port}")).expect("URL should parse")
}

pub fn login_page(username: &str, password: &str) -> MemoryPage {
    MemoryPage::new().with_form(
        "login-form",
        [("username", username), ("password", password)],
    )
}

pub fn register_page(username: &str, email: &str, password: &str) -> MemoryPage {
    MemoryPage::new().with_form(
        "register-form",
        [("username", username), ("email", email), ("password", password)],
    )
}

pub fn settings_page(category: &str) -> MemoryPage {
    MemoryPage::new().with_form("settings-form", [("preferredCategory", category)])
}
