use std::time::Duration;

use clap::Parser;
use rust_decimal::Decimal;

/// Calls the coffee service once per operation and logs what came back.
#[derive(Debug, Clone, Parser)]
#[command(name = "customer", version)]
pub struct Config {
    /// Root URL of the coffee resource.
    #[arg(long, env = "COFFEE_BASE_URL", default_value = "http://localhost:8080/coffee")]
    pub base_url: String,

    /// Id of the record to fetch.
    #[arg(long, env = "COFFEE_ID", default_value_t = 1)]
    pub id: i64,

    /// Name of the coffee to create.
    #[arg(long, env = "COFFEE_NAME", default_value = "Americano")]
    pub name: String,

    /// Price of the coffee to create.
    #[arg(long, env = "COFFEE_PRICE", default_value = "125.00")]
    pub price: Decimal,

    /// Per-request timeout; the transport default applies when unset.
    #[arg(long, env = "COFFEE_TIMEOUT_SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
