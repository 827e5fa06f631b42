//! Demonstration client for the coffee service.
//!
//! Fetches one record, creates another, then fetches the collection as raw
//! text. The first failure ends the run with a non-zero exit.

mod config;

use anyhow::Context;
use clap::Parser;
use coffee_core::{CoffeeClient, NewCoffee, UreqTransport};
use tracing::info;

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    setup_tracing();
    let config = Config::parse();

    let http = UreqTransport::new(config.timeout());
    let client = CoffeeClient::new(&config.base_url);

    let fetched = client
        .fetch_by_id(&http, config.id)
        .with_context(|| format!("fetching coffee {}", config.id))?;
    info!(status = fetched.status, headers = ?fetched.headers, "response received");
    info!(coffee = ?fetched.body, "coffee");

    let request = NewCoffee::builder()
        .name(config.name.as_str())
        .price(config.price)
        .build()?;
    let created = client.create(&http, &request).context("creating coffee")?;
    info!(coffee = ?created, "new coffee");

    let raw = client.fetch_raw(&http).context("fetching coffee list")?;
    info!(body = %raw, "string");

    Ok(())
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).compact().init();
}
