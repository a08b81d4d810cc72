// Shared helpers for the mock-server tests

use lms_client::prelude::*;
use mockito::{Matcher, ServerGuard};

pub const TOKEN: &str = "test-token";
pub const PATH: &str = "/api.php";

/// Client pointed at the mock server, with an in-memory session
pub fn client_for(server: &ServerGuard) -> Client {
    let config = Config::with_base_url(format!("{}{}", server.url(), PATH));
    Client::with_session_store(config, Arc::new(MemorySessionStore::new()))
        .expect("client builds")
}

/// Same as `client_for` with `TOKEN` already cached
pub async fn logged_in_client(server: &ServerGuard) -> Client {
    let client = client_for(server);
    client.auth().set_token(TOKEN).await.expect("token cached");
    client
}

/// Matches a query string containing every pair
pub fn query(pairs: &[(&str, &str)]) -> Matcher {
    Matcher::AllOf(
        pairs
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded((*k).to_string(), (*v).to_string()))
            .collect(),
    )
}

/// Matches a query string containing every pair plus the test token
pub fn authed_query(pairs: &[(&str, &str)]) -> Matcher {
    let mut all: Vec<(&str, &str)> = pairs.to_vec();
    all.push(("token", TOKEN));
    query(&all)
}

pub const OK: &str = r#"{"success":true,"message":"ok"}"#;
