use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    server: Server,
    ssc: Ssc,
    defaults: Defaults,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("ORBITVIEW").prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn ssc(&self) -> &Ssc {
        &self.ssc
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    host: String,
    port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize)]
pub struct Ssc {
    url: String,
    timeout_ms: u64,
}

impl Ssc {
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Deserialize)]
pub struct Defaults {
    observatories: String,
    resolution_factor: String,
}

impl Defaults {
    pub fn observatories(&self) -> &str {
        &self.observatories
    }

    pub fn resolution_factor(&self) -> &str {
        &self.resolution_factor
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                server: Server {
                    host: "127.0.0.1".to_string(),
                    port: 0,
                },
                ssc: Ssc {
                    url: "https://sscweb.gsfc.nasa.gov/WS/sscr/2".to_string(),
                    timeout_ms: 5_000,
                },
                defaults: Defaults {
                    observatories: "ace,wind,goes17,goes16".to_string(),
                    resolution_factor: "5".to_string(),
                },
            },
        }
    }

    pub fn ssc_url(mut self, url: String) -> Self {
        self.config.ssc.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
