// weather.rs — WeatherAgent: conditions + launch-suitability analysis.
//
// Looks up current weather for the launch location found in the shared
// context (falling back to Cape Canaveral), then grades the conditions
// for launch:
//
//   issues counted: precipitation, wind above 15 m/s, visibility under
//   5000 m
//   0 issues → FAVORABLE / LOW, 1 → CAUTION / MEDIUM, 2+ → UNFAVORABLE / HIGH
//
// Without an OPENWEATHER_API_KEY the agent serves deterministic mock data
// so the rest of the pipeline stays exercisable offline.

use serde_json::{json, Map, Value};

use liftoff_core::{idents, Context, ResultRecord, TaskHandler};

use crate::error::AgentError;

const OPENWEATHER_API_URL: &str = "http://api.openweathermap.org/data/2.5";
const DEFAULT_LOCATION: &str = "Cape Canaveral";

/// Wind speed above this many m/s counts as a launch issue.
const WIND_LIMIT_MPS: f64 = 15.0;
/// Visibility below this many meters counts as a launch issue.
const VISIBILITY_FLOOR_M: i64 = 5000;

/// Task handler for the weather domain.
pub struct WeatherAgent {
    client: reqwest::blocking::Client,
    api_url: String,
    api_key: Option<String>,
}

impl WeatherAgent {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_url: OPENWEATHER_API_URL.to_string(),
            api_key,
        }
    }

    /// Build from the conventional `OPENWEATHER_API_KEY` variable.
    pub fn from_env() -> Self {
        Self::new(std::env::var("OPENWEATHER_API_KEY").ok())
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Pull the launch location out of the accumulated context.
    fn extract_location(context: &Context) -> &str {
        context
            .get("launchpad")
            .and_then(|pad| pad.get("location"))
            .and_then(Value::as_str)
            .filter(|loc| !loc.is_empty() && *loc != "Unknown")
            .unwrap_or(DEFAULT_LOCATION)
    }

    fn fetch(&self, location: &str, api_key: &str) -> Result<Value, AgentError> {
        let weather: Value = self
            .client
            .get(format!("{}/weather", self.api_url))
            .query(&[("q", location), ("appid", api_key), ("units", "metric")])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(weather)
    }

    /// Deterministic stand-in when no API key is configured.
    fn mock_weather() -> Value {
        json!({
            "weather": [{"main": "Clear", "description": "clear sky"}],
            "main": {"temp": 25, "humidity": 60, "pressure": 1013},
            "wind": {"speed": 5.2, "deg": 180},
            "visibility": 10000,
            "name": DEFAULT_LOCATION,
        })
    }

    /// Grade raw conditions for launch suitability.
    fn analyze_for_launch(weather: &Value) -> Value {
        let main_weather = weather
            .get("weather")
            .and_then(|w| w.get(0))
            .and_then(|w| w.get("main"))
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_lowercase();
        let wind_speed = weather
            .get("wind")
            .and_then(|w| w.get("speed"))
            .and_then(Value::as_f64)
            .unwrap_or(0.0);
        let visibility = weather
            .get("visibility")
            .and_then(Value::as_i64)
            .unwrap_or(10_000);

        let mut issues: Vec<String> = Vec::new();
        if main_weather.contains("rain") || main_weather.contains("storm") {
            issues.push("Precipitation detected".to_string());
        }
        if wind_speed > WIND_LIMIT_MPS {
            issues.push(format!("High wind speeds: {wind_speed} m/s"));
        }
        if visibility < VISIBILITY_FLOOR_M {
            issues.push(format!("Poor visibility: {visibility}m"));
        }

        let (recommendation, risk_level) = match issues.len() {
            0 => ("FAVORABLE", "LOW"),
            1 => ("CAUTION", "MEDIUM"),
            _ => ("UNFAVORABLE", "HIGH"),
        };

        json!({
            "recommendation": recommendation,
            "risk_level": risk_level,
            "issues": issues,
            "analysis": format!(
                "Weather conditions are {} for launch",
                recommendation.to_lowercase()
            ),
        })
    }

    fn observe(&self, context: &Context) -> Result<Value, AgentError> {
        match &self.api_key {
            None => Ok(Self::mock_weather()),
            Some(key) => {
                let location = Self::extract_location(context);
                self.fetch(location, key)
            }
        }
    }
}

impl TaskHandler for WeatherAgent {
    fn name(&self) -> &str {
        idents::WEATHER
    }

    fn execute(&self, context: &Context) -> ResultRecord {
        match self.observe(context) {
            Ok(weather) => {
                let suitability = Self::analyze_for_launch(&weather);
                let recommendation = suitability["recommendation"]
                    .as_str()
                    .unwrap_or("UNKNOWN")
                    .to_string();
                let mut payload = Map::new();
                payload.insert("weather".to_string(), weather);
                payload.insert("launch_suitability".to_string(), suitability);
                tracing::info!(recommendation = %recommendation, "weather analysis complete");
                ResultRecord::ok(
                    idents::WEATHER,
                    payload,
                    format!("Weather analysis complete. Launch suitability: {recommendation}"),
                )
                .with_suggested_next(idents::SUMMARIZE)
            }
            Err(err) => {
                tracing::warn!(error = %err, "weather lookup failed");
                ResultRecord::failure(
                    idents::WEATHER,
                    format!("Failed to fetch weather data: {err}"),
                )
            }
        }
    }
}
