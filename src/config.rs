//! Command-line and environment configuration.

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "product-api")]
#[command(about = "Serve the product catalogue over HTTP", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "PRODUCT_API_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "PRODUCT_API_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Capacity of the store actor's mailbox
    #[arg(long, env = "PRODUCT_API_MAILBOX", default_value_t = 32, value_parser = parse_capacity)]
    pub mailbox_capacity: usize,

    /// Start with an empty store instead of the fixture product
    #[arg(long, env = "PRODUCT_API_NO_SEED")]
    pub no_seed: bool,

    /// Default log filter, used when RUST_LOG is unset
    #[arg(long, env = "PRODUCT_API_LOG", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn seed(&self) -> bool {
        !self.no_seed
    }
}

fn parse_capacity(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
