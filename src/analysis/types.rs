use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    #[serde(alias = "id_str")]
    pub id: String,
    #[serde(alias = "lang")]
    pub language: String,
    #[serde(alias = "full_text")]
    pub text: String,
}

/// Result returned by the sentiment service for a single tweet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Label such as "positive", "neutral" or "negative"
    #[serde(alias = "label")]
    pub sentiment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Tweet enriched with its sentiment. Fields are read-only so `id` always matches `tweet.id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedTweet {
    id: String,
    tweet: Tweet,
    sentiment: Sentiment,
}

impl AnalyzedTweet {
    pub fn new(tweet: Tweet, sentiment: Sentiment) -> Self {
        Self {
            id: tweet.id.clone(),
            tweet,
            sentiment,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sentiment(&self) -> &Sentiment {
        &self.sentiment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tweet_accepts_twitter_field_names() {
        let tweet: Tweet = serde_json::from_value(json!({
            "id_str": "1389",
            "lang": "en",
            "full_text": "what a day",
            "retweet_count": 4
        }))
        .unwrap();
        assert_eq!(tweet.id, "1389");
        assert_eq!(tweet.language, "en");
        assert_eq!(tweet.text, "what a day");
    }

    #[test]
    fn tweet_missing_text_is_rejected() {
        let result = serde_json::from_value::<Tweet>(json!({"id": "1", "language": "en"}));
        assert!(result.is_err());
    }

    #[test]
    fn sentiment_confidence_is_optional() {
        let bare: Sentiment = serde_json::from_value(json!({"sentiment": "negative"})).unwrap();
        assert_eq!(bare.confidence, None);
        assert_eq!(serde_json::to_value(&bare).unwrap(), json!({"sentiment": "negative"}));

        let scored: Sentiment =
            serde_json::from_value(json!({"label": "positive", "confidence": 0.93})).unwrap();
        assert_eq!(scored.sentiment, "positive");
        assert_eq!(scored.confidence, Some(0.93));
    }

    #[test]
    fn analyzed_tweet_copies_id_and_nests_both_parts() {
        let tweet = Tweet {
            id: "1".to_string(),
            language: "en".to_string(),
            text: "hello".to_string(),
        };
        let sentiment = Sentiment {
            sentiment: "positive".to_string(),
            confidence: None,
        };
        let analyzed = AnalyzedTweet::new(tweet, sentiment);

        assert_eq!(analyzed.id(), "1");
        assert_eq!(analyzed.id, analyzed.tweet.id);
        assert_eq!(analyzed.sentiment().sentiment, "positive");
        assert_eq!(
            serde_json::to_value(&analyzed).unwrap(),
            json!({
                "id": "1",
                "tweet": {"id": "1", "language": "en", "text": "hello"},
                "sentiment": {"sentiment": "positive"}
            })
        );
    }
}
