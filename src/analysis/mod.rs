pub mod processor;
pub mod types;

pub use processor::TweetProcessor;
pub use types::Tweet;
