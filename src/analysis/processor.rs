use std::sync::Arc;
use tracing::{error, info};

use super::types::{AnalyzedTweet, Sentiment, Tweet};
use crate::config::PipelineConfig;
use crate::error::ProcessError;
use crate::sidecar::SidecarClient;

/// Scores incoming tweets and hands the result to the state store and the message bus.
pub struct TweetProcessor {
    sidecar: Arc<dyn SidecarClient>,
    targets: PipelineConfig,
}

impl TweetProcessor {
    pub fn new(sidecar: Arc<dyn SidecarClient>, targets: PipelineConfig) -> Self {
        Self { sidecar, targets }
    }

    pub async fn process(&self, tweet: Tweet) -> Result<AnalyzedTweet, ProcessError> {
        info!("Tweet received {} in {}: {}", tweet.id, tweet.language, tweet.text);

        let id = tweet.id.clone();
        let text = tweet.text.clone();

        match self.run(tweet).await {
            Ok(analyzed) => {
                info!("Tweet saved {}: {}", analyzed.id(), analyzed.sentiment().sentiment);
                Ok(analyzed)
            }
            Err(e) => {
                error!("Tweet not saved {}: {}: {}", id, text, e);
                Err(e)
            }
        }
    }

    async fn run(&self, tweet: Tweet) -> Result<AnalyzedTweet, ProcessError> {
        let sentiment = self.classify(&tweet).await?;
        let analyzed = AnalyzedTweet::new(tweet, sentiment);
        let value = serde_json::to_value(&analyzed)?;

        self.sidecar
            .save_state(&self.targets.state_store, analyzed.id(), &value)
            .await
            .map_err(ProcessError::StateSave)?;

        self.sidecar
            .publish_event(&self.targets.pubsub, &self.targets.topic, &value)
            .await
            .map_err(ProcessError::Publish)?;

        Ok(analyzed)
    }

    async fn classify(&self, tweet: &Tweet) -> Result<Sentiment, ProcessError> {
        let payload = serde_json::to_value(tweet)?;
        let reply = self
            .sidecar
            .invoke_method(
                &self.targets.sentiment_app,
                &self.targets.sentiment_method,
                &payload,
            )
            .await
            .map_err(ProcessError::Classification)?;

        serde_json::from_value(reply).map_err(|e| {
            ProcessError::Classification(
                anyhow::Error::new(e).context("Unexpected sentiment reply"),
            )
        })
    }
}
