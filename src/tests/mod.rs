mod client;

use wiremock::MockServer;

use crate::api::models::Credentials;
use crate::api::CloudflareClient;
use crate::ip::HttpIpResolver;

pub(crate) fn credentials() -> Credentials {
    Credentials {
        api_key: "test_token".to_string(),
        email: "admin@example.com".to_string(),
        zone: "example.com".to_string(),
    }
}

pub(crate) fn cloudflare(server: &MockServer) -> CloudflareClient {
    CloudflareClient::new(
        reqwest::Client::new(),
        format!("{}/api_json.html", server.uri()),
        credentials(),
    )
}

pub(crate) fn ip_resolver(server: &MockServer) -> HttpIpResolver {
    HttpIpResolver::new(reqwest::Client::new(), format!("{}/ip", server.uri()))
}
