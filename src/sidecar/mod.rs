pub mod dapr;
#[cfg(test)]
pub mod fake;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

pub use dapr::DaprClient;

/// Building blocks provided by the sidecar runtime.
#[async_trait]
pub trait SidecarClient: Send + Sync {
    /// Calls `method` on the application registered as `app_id` and returns its JSON reply.
    async fn invoke_method(&self, app_id: &str, method: &str, payload: &Value) -> Result<Value>;

    async fn save_state(&self, store: &str, key: &str, value: &Value) -> Result<()>;

    async fn publish_event(&self, pubsub: &str, topic: &str, data: &Value) -> Result<()>;
}
