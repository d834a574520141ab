use async_trait::async_trait;
use log::debug;

use crate::error::{Error, Result};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IpResolver: Send + Sync {
    /// Current public address, exactly as the discovery endpoint reports it.
    async fn resolve(&self) -> Result<String>;
}

/// Asks a plain-text echo service (ifconfig.me and friends) for our address.
pub struct HttpIpResolver {
    client: reqwest::Client,
    url: String,
}

impl HttpIpResolver {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl IpResolver for HttpIpResolver {
    async fn resolve(&self) -> Result<String> {
        let response = self.client.get(&self.url).send().await?;
        let body = Error::check(response)?.text().await?;

        // No syntax check: whatever the endpoint returns is trusted.
        let addr = body.trim_end().to_string();
        debug!("resolved ip {}", addr);
        Ok(addr)
    }
}
