// news.rs — NewsAgent: related-article lookup via NewsAPI.
//
// The search query is derived from the accumulated context: when an
// earlier step found a launch, the query targets that mission by name.
// Without a NEWS_API_KEY the agent serves mock articles.

use chrono::{Duration, Utc};
use serde_json::{json, Map, Value};

use liftoff_core::{idents, Context, ResultRecord, TaskHandler};

use crate::error::AgentError;

const NEWS_API_URL: &str = "https://newsapi.org/v2";
const PAGE_SIZE: u32 = 5;

/// Task handler for the news domain.
pub struct NewsAgent {
    client: reqwest::blocking::Client,
    api_url: String,
    api_key: Option<String>,
}

impl NewsAgent {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_url: NEWS_API_URL.to_string(),
            api_key,
        }
    }

    /// Build from the conventional `NEWS_API_KEY` variable.
    pub fn from_env() -> Self {
        Self::new(std::env::var("NEWS_API_KEY").ok())
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Derive the search query from what earlier steps found.
    fn search_query(context: &Context) -> String {
        match context.get("launch_name").and_then(Value::as_str) {
            Some(name) => format!("SpaceX {name}"),
            None => "SpaceX launch".to_string(),
        }
    }

    fn fetch(&self, query: &str, api_key: &str) -> Result<Vec<Value>, AgentError> {
        let page_size = PAGE_SIZE.to_string();
        let body: Value = self
            .client
            .get(format!("{}/everything", self.api_url))
            .query(&[
                ("q", query),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
                ("apiKey", api_key),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        match body.get("articles").and_then(Value::as_array) {
            Some(articles) => Ok(articles.clone()),
            None => Err(AgentError::Malformed("missing 'articles' array".to_string())),
        }
    }

    /// Deterministic stand-in when no API key is configured.
    fn mock_articles() -> Vec<Value> {
        let now = Utc::now();
        vec![
            json!({
                "title": "SpaceX Prepares for Next Falcon 9 Launch",
                "description": "SpaceX is preparing for its next Falcon 9 mission with careful weather monitoring.",
                "url": "https://example.com/spacex-news-1",
                "publishedAt": now.to_rfc3339(),
            }),
            json!({
                "title": "Weather Conditions Favorable for Upcoming Launch",
                "description": "Meteorologists report favorable conditions for the scheduled launch.",
                "url": "https://example.com/weather-news-1",
                "publishedAt": (now - Duration::hours(2)).to_rfc3339(),
            }),
        ]
    }

    fn gather(&self, context: &Context) -> Result<Vec<Value>, AgentError> {
        match &self.api_key {
            None => Ok(Self::mock_articles()),
            Some(key) => {
                let query = Self::search_query(context);
                tracing::debug!(query = %query, "searching news");
                self.fetch(&query, key)
            }
        }
    }
}

impl TaskHandler for NewsAgent {
    fn name(&self) -> &str {
        idents::NEWS
    }

    fn execute(&self, context: &Context) -> ResultRecord {
        match self.gather(context) {
            Ok(articles) => {
                let count = articles.len();
                let mut payload = Map::new();
                payload.insert("news_articles".to_string(), Value::Array(articles));
                tracing::info!(count, "retrieved news articles");
                ResultRecord::ok(
                    idents::NEWS,
                    payload,
                    format!("Retrieved {count} relevant news articles"),
                )
                .with_suggested_next(idents::SUMMARIZE)
            }
            Err(err) => {
                tracing::warn!(error = %err, "news lookup failed");
                ResultRecord::failure(idents::NEWS, format!("Failed to fetch news data: {err}"))
            }
        }
    }
}
