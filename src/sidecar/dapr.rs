use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::SidecarClient;
use crate::config::SidecarConfig;

const API_TOKEN_HEADER: &str = "dapr-api-token";

/// Client for the Dapr sidecar HTTP API.
pub struct DaprClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

#[derive(Serialize)]
struct StateItem<'a> {
    key: &'a str,
    value: &'a Value,
}

impl DaprClient {
    pub fn new(config: &SidecarConfig) -> Self {
        Self::with_base_url(config.base_url(), config.api_token.clone())
    }

    pub fn with_base_url(base_url: impl Into<String>, api_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token,
        }
    }

    fn post(&self, path: &str) -> RequestBuilder {
        let url = format!("{}/v1.0/{}", self.base_url, path);
        debug!("POST {}", url);
        let request = self.client.post(url);
        match &self.api_token {
            Some(token) => request.header(API_TOKEN_HEADER, token),
            None => request,
        }
    }
}

async fn check_status(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("{} returned {}: {}", what, status, body);
    }
    Ok(response)
}

fn segment(s: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(s)
}

#[async_trait]
impl SidecarClient for DaprClient {
    async fn invoke_method(&self, app_id: &str, method: &str, payload: &Value) -> Result<Value> {
        let path = format!("invoke/{}/method/{}", segment(app_id), segment(method));
        let response = self
            .post(&path)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Invoke of {}/{} failed", app_id, method))?;

        let response = check_status(response, "Service invocation").await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse reply from {}/{}", app_id, method))
    }

    async fn save_state(&self, store: &str, key: &str, value: &Value) -> Result<()> {
        let path = format!("state/{}", segment(store));
        let response = self
            .post(&path)
            .json(&[StateItem { key, value }])
            .send()
            .await
            .with_context(|| format!("Save to state store {} failed", store))?;

        check_status(response, "State store").await?;
        Ok(())
    }

    async fn publish_event(&self, pubsub: &str, topic: &str, data: &Value) -> Result<()> {
        let path = format!("publish/{}/{}", segment(pubsub), segment(topic));
        let response = self
            .post(&path)
            .json(data)
            .send()
            .await
            .with_context(|| format!("Publish to {}/{} failed", pubsub, topic))?;

        check_status(response, "Publish").await?;
        Ok(())
    }
}
