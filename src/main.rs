mod api;
mod config;
mod ddns;
mod error;
mod filter;
mod ip;
#[cfg(test)]
mod tests;

use std::path::PathBuf;

use anyhow::Result;
use api::CloudflareClient;
use clap::Parser;
use config::Config;
use ddns::Ddclient;
use ip::HttpIpResolver;
use log::info;

#[derive(Parser)]
#[command(version, about = "Keep Cloudflare A records pointed at this host's public IP")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "DDCLIENT_CONFIG", default_value = "config.yaml")]
    config: PathBuf,

    /// Reconcile once and exit instead of following the cron rule
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    let schedule = config.schedule()?;

    let http = reqwest::Client::new();
    let ddclient = Ddclient::new(
        CloudflareClient::new(
            http.clone(),
            config.cloudflare.api_url(),
            config.cloudflare.credentials(),
        ),
        HttpIpResolver::new(http, config.ip_url()),
        config.cloudflare.subdomains.iter().cloned(),
    );

    if cli.once {
        ddclient.run_once().await;
        return Ok(());
    }

    info!(
        "Managing {:?} in zone {} on schedule '{}'",
        config.cloudflare.subdomains, config.cloudflare.zone, config.cron_rule
    );
    tokio::select! {
        _ = ddclient.run(&schedule) => {}
        _ = tokio::signal::ctrl_c() => info!("Interrupted, shutting down"),
    }
    Ok(())
}
