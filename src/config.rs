use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub sidecar: SidecarConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SidecarConfig {
    pub host: String,
    pub http_port: u16,
    // Loaded from env
    #[serde(skip)]
    pub api_token: Option<String>,
}

impl Default for SidecarConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            http_port: 3500,
            api_token: None,
        }
    }
}

impl SidecarConfig {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.http_port)
    }
}

/// Names of the downstream targets the ingest pipeline talks to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub sentiment_app: String,
    pub sentiment_method: String,
    pub state_store: String,
    pub pubsub: String,
    pub topic: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sentiment_app: "sentiment_processor".to_string(),
            sentiment_method: "sentiment".to_string(),
            state_store: "statestore".to_string(),
            pubsub: "messagebus".to_string(),
            topic: "tweets".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = std::env::var("TWEET_PROVIDER_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = if Path::new(&path).exists() {
            let config_text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path))?;
            Self::from_toml(&config_text).with_context(|| format!("Failed to parse {}", path))?
        } else {
            tracing::info!("{} not found, using defaults", path);
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Applies the sidecar's environment contract on top of the file values.
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(port) = var("DAPR_HTTP_PORT") {
            self.sidecar.http_port = port
                .parse()
                .context("DAPR_HTTP_PORT must be a port number")?;
        }
        if let Some(port) = var("PORT") {
            self.server.port = port.parse().context("PORT must be a port number")?;
        }
        self.sidecar.api_token = var("DAPR_API_TOKEN").filter(|t| !t.is_empty());
        Ok(())
    }
}
