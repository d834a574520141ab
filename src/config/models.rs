use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate(length(min = 1, message = "Cron rule cannot be empty"))]
    pub cron_rule: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "IP discovery URL cannot be empty"))]
    pub ip_url: Option<String>,

    #[validate(nested)]
    pub cloudflare: CloudflareConfig,
}

#[derive(Serialize, Deserialize, Validate)]
pub struct CloudflareConfig {
    #[validate(length(min = 1, message = "API key cannot be empty"))]
    pub api_key: String,

    #[validate(length(min = 1, message = "Account email cannot be empty"))]
    pub email: String,

    #[validate(length(min = 1, message = "Zone cannot be empty"))]
    pub zone: String,

    #[validate(length(min = 1, message = "At least one subdomain is required"))]
    pub subdomains: Vec<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "API URL cannot be empty"))]
    pub api_url: Option<String>,
}

// Keeps the API key out of logs.
impl std::fmt::Debug for CloudflareConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareConfig")
            .field("api_key", &"<REDACTED>")
            .field("email", &self.email)
            .field("zone", &self.zone)
            .field("subdomains", &self.subdomains)
            .field("api_url", &self.api_url)
            .finish()
    }
}
