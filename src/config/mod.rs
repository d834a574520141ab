mod models;

pub use models::{CloudflareConfig, Config};

use std::{fs, path::Path, str::FromStr};

use anyhow::{Context, Result};
use cron::Schedule;
use validator::Validate;

use crate::api::models::Credentials;

pub const DEFAULT_IP_URL: &str = "http://ifconfig.me/ip";
pub const DEFAULT_API_URL: &str = "https://www.cloudflare.com/api_json.html";

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents).context("Invalid YAML")?;
        config.validate().context("Invalid configuration")?;
        // Surface a bad cron rule at startup rather than on the first tick.
        config.schedule()?;
        Ok(config)
    }

    pub fn schedule(&self) -> Result<Schedule> {
        let rule = normalize_cron(&self.cron_rule);
        Schedule::from_str(&rule)
            .with_context(|| format!("Invalid cron rule: {}", self.cron_rule))
    }

    pub fn ip_url(&self) -> &str {
        self.ip_url.as_deref().unwrap_or(DEFAULT_IP_URL)
    }
}

impl CloudflareConfig {
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            api_key: self.api_key.clone(),
            email: self.email.clone(),
            zone: self.zone.clone(),
        }
    }
}

/// The `cron` crate wants a seconds field; classic five-field rules get one.
fn normalize_cron(rule: &str) -> String {
    let rule = rule.trim();
    if rule.split_whitespace().count() == 5 {
        format!("0 {rule}")
    } else {
        rule.to_string()
    }
}
