// launch.rs — LaunchAgent: next-launch lookup against the SpaceX v4 API.
//
// Fetches /launches/next, then enriches it with the launchpad document so
// downstream handlers (weather, summarizer) know where the launch happens.
// A launchpad lookup failure is tolerated — the payload just carries
// "Unknown" location fields, matching the upstream's own optionality.

use serde_json::{json, Map, Value};

use liftoff_core::{idents, Context, ResultRecord, TaskHandler};

use crate::error::AgentError;

const SPACEX_API_URL: &str = "https://api.spacexdata.com/v4";

/// Task handler for the launch domain.
pub struct LaunchAgent {
    client: reqwest::blocking::Client,
    api_url: String,
}

impl Default for LaunchAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchAgent {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_url: SPACEX_API_URL.to_string(),
        }
    }

    /// Point the agent at a different base URL (tests, mirrors).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    fn fetch(&self) -> Result<Map<String, Value>, AgentError> {
        let launch: Value = self
            .client
            .get(format!("{}/launches/next", self.api_url))
            .send()?
            .error_for_status()?
            .json()?;

        // Launchpad enrichment is best-effort.
        let launchpad = launch
            .get("launchpad")
            .and_then(Value::as_str)
            .and_then(|id| self.fetch_launchpad(id));

        Ok(Self::payload(&launch, launchpad.as_ref()))
    }

    fn fetch_launchpad(&self, id: &str) -> Option<Value> {
        let response = self
            .client
            .get(format!("{}/launchpads/{}", self.api_url, id))
            .send()
            .ok()?;
        if !response.status().is_success() {
            return None;
        }
        response.json().ok()
    }

    /// Build the enriched payload from the raw API documents.
    fn payload(launch: &Value, launchpad: Option<&Value>) -> Map<String, Value> {
        let field = |doc: Option<&Value>, key: &str| -> Value {
            doc.and_then(|d| d.get(key)).cloned().unwrap_or(json!("Unknown"))
        };

        let mut payload = Map::new();
        payload.insert("launch_name".to_string(), launch.get("name").cloned().unwrap_or(Value::Null));
        payload.insert(
            "launch_date".to_string(),
            launch.get("date_utc").cloned().unwrap_or(Value::Null),
        );
        payload.insert(
            "details".to_string(),
            launch
                .get("details")
                .filter(|v| !v.is_null())
                .cloned()
                .unwrap_or(json!("No details available")),
        );
        payload.insert(
            "launchpad".to_string(),
            json!({
                "name": field(launchpad, "full_name"),
                "location": field(launchpad, "locality"),
                "region": field(launchpad, "region"),
                "latitude": launchpad.and_then(|p| p.get("latitude")).cloned().unwrap_or(Value::Null),
                "longitude": launchpad.and_then(|p| p.get("longitude")).cloned().unwrap_or(Value::Null),
            }),
        );
        payload.insert("rocket".to_string(), launch.get("rocket").cloned().unwrap_or(Value::Null));
        payload
    }
}

impl TaskHandler for LaunchAgent {
    fn name(&self) -> &str {
        idents::LAUNCH
    }

    fn execute(&self, _context: &Context) -> ResultRecord {
        match self.fetch() {
            Ok(payload) => {
                let launch_name = payload
                    .get("launch_name")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string();
                tracing::info!(launch = %launch_name, "retrieved next launch");
                ResultRecord::ok(
                    idents::LAUNCH,
                    payload,
                    format!("Retrieved next launch: {launch_name}"),
                )
                .with_suggested_next(idents::WEATHER)
            }
            Err(err) => {
                tracing::warn!(error = %err, "launch lookup failed");
                ResultRecord::failure(idents::LAUNCH, format!("Failed to fetch launch data: {err}"))
            }
        }
    }
}
