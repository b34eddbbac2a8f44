use std::sync::Arc;

use crate::analysis::TweetProcessor;

#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<TweetProcessor>,
}

impl AppState {
    pub fn new(processor: TweetProcessor) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }
}
