use std::env;
use std::time::Duration;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub create_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let create_delay_ms = env::var("CREATE_DELAY_MS")
            .unwrap_or_else(|_| "1000".to_string())
            .parse::<u64>()
            .context("CREATE_DELAY_MS must be a non-negative number of milliseconds")?;

        Ok(Config {
            service_port,
            service_host,
            create_delay: Duration::from_millis(create_delay_ms),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!(
            host = %self.service_host,
            port = self.service_port,
            create_delay_ms = self.create_delay.as_millis() as u64,
            "Configuration loaded"
        );
    }
}
