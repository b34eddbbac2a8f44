//! In-memory sidecar that records every call, for pipeline and router tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;

use super::SidecarClient;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Invoke { app_id: String, method: String, payload: Value },
    Save { store: String, key: String, value: Value },
    Publish { pubsub: String, topic: String, data: Value },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Invoke,
    Save,
    Publish,
}

pub struct RecordingSidecar {
    reply: Value,
    fail_on: Option<Step>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingSidecar {
    pub fn replying(reply: Value) -> Self {
        Self {
            reply,
            fail_on: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn positive() -> Self {
        Self::replying(json!({"sentiment": "positive"}))
    }

    pub fn failing_on(step: Step) -> Self {
        Self {
            fail_on: Some(step),
            ..Self::positive()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn attempt(&self, step: Step, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail_on == Some(step) {
            return Err(anyhow!("{:?} unavailable", step));
        }
        Ok(())
    }
}

#[async_trait]
impl SidecarClient for RecordingSidecar {
    async fn invoke_method(&self, app_id: &str, method: &str, payload: &Value) -> Result<Value> {
        self.attempt(
            Step::Invoke,
            Call::Invoke {
                app_id: app_id.to_string(),
                method: method.to_string(),
                payload: payload.clone(),
            },
        )?;
        Ok(self.reply.clone())
    }

    async fn save_state(&self, store: &str, key: &str, value: &Value) -> Result<()> {
        self.attempt(
            Step::Save,
            Call::Save {
                store: store.to_string(),
                key: key.to_string(),
                value: value.clone(),
            },
        )
    }

    async fn publish_event(&self, pubsub: &str, topic: &str, data: &Value) -> Result<()> {
        self.attempt(
            Step::Publish,
            Call::Publish {
                pubsub: pubsub.to_string(),
                topic: topic.to_string(),
                data: data.clone(),
            },
        )
    }
}
