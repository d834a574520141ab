use super::{client::DnsApiClient, models::*};
use crate::error::{Error, Result};
use async_trait::async_trait;
use log::debug;
use serde_json::Value;

/// Client for Cloudflare's legacy `api_json.html` client interface.
pub struct CloudflareClient {
    client: reqwest::Client,
    api_url: String,
    credentials: Credentials,
}

#[async_trait]
impl DnsApiClient for CloudflareClient {
    async fn load_all_records(&self) -> Result<Value> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("a", "rec_load_all"),
                ("tkn", self.credentials.api_key.as_str()),
                ("email", self.credentials.email.as_str()),
                ("z", self.credentials.zone.as_str()),
            ])
            .send()
            .await?;

        Ok(Error::check(response)?.json().await?)
    }

    async fn edit_record(&self, edit: &RecordEdit) -> Result<EditResponse> {
        debug!("rec_edit {} (id {}) -> {}", edit.name, edit.id, edit.content);

        let response = self
            .client
            .post(&self.api_url)
            .form(&[
                ("a", "rec_edit"),
                ("tkn", self.credentials.api_key.as_str()),
                ("email", self.credentials.email.as_str()),
                ("z", self.credentials.zone.as_str()),
                ("type", "A"),
                ("name", edit.name.as_str()),
                ("id", edit.id.as_str()),
                ("content", edit.content.as_str()),
                ("service_mode", "0"),
                ("ttl", "1"),
            ])
            .send()
            .await?;

        Ok(Error::check(response)?.json().await?)
    }
}

impl CloudflareClient {
    pub fn new(client: reqwest::Client, api_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            credentials,
        }
    }
}
