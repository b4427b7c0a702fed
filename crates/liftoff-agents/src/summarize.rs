// summarize.rs — SummarizeAgent: terminal digest over the shared context.
//
// Pure: no I/O, no credentials. Walks the context keys the other agents
// contribute (launch_name, weather, news_articles, crypto_prices) and
// composes a sectioned plain-text report, ending with a conclusion keyed
// off the launch-suitability grade.

use serde_json::{json, Map, Value};

use liftoff_core::{idents, Context, ResultRecord, TaskHandler};

/// How many news articles make it into the digest.
const MAX_ARTICLES: usize = 3;

/// Terminal task handler composing the run's summary.
#[derive(Default)]
pub struct SummarizeAgent;

impl SummarizeAgent {
    pub fn new() -> Self {
        Self
    }

    fn launch_section(context: &Context) -> Option<String> {
        let name = context.get("launch_name")?.as_str()?;
        let date = context
            .get("launch_date")
            .and_then(Value::as_str)
            .unwrap_or("Unknown");
        let location = context
            .get("launchpad")
            .and_then(|pad| pad.get("name"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown");
        let details = context
            .get("details")
            .and_then(Value::as_str)
            .unwrap_or("No additional details available");
        Some(format!(
            "LAUNCH INFORMATION:\nMission: {name}\nDate: {date}\nLocation: {location}\nDetails: {details}"
        ))
    }

    fn weather_section(context: &Context) -> Option<String> {
        let weather = context.get("weather")?;
        let suitability = context.get("launch_suitability").cloned().unwrap_or(json!({}));
        let conditions = weather
            .get("weather")
            .and_then(|w| w.get(0))
            .and_then(|w| w.get("description"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown");
        let temp = weather
            .get("main")
            .and_then(|m| m.get("temp"))
            .map(|t| t.to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        let wind = weather
            .get("wind")
            .and_then(|w| w.get("speed"))
            .map(|s| s.to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        let recommendation = suitability
            .get("recommendation")
            .and_then(Value::as_str)
            .unwrap_or("Unknown");
        let risk = suitability
            .get("risk_level")
            .and_then(Value::as_str)
            .unwrap_or("Unknown");
        Some(format!(
            "WEATHER ANALYSIS:\nCurrent Conditions: {conditions}\nTemperature: {temp}°C\nWind Speed: {wind} m/s\nLaunch Suitability: {recommendation}\nRisk Level: {risk}"
        ))
    }

    fn news_section(context: &Context) -> Option<String> {
        let articles = context.get("news_articles")?.as_array()?;
        if articles.is_empty() {
            return None;
        }
        let mut lines = vec!["RELATED NEWS:".to_string()];
        for (i, article) in articles.iter().take(MAX_ARTICLES).enumerate() {
            let title = article
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or("No title");
            lines.push(format!("{}. {title}", i + 1));
        }
        Some(lines.join("\n"))
    }

    fn market_section(context: &Context) -> Option<String> {
        let prices = context.get("crypto_prices")?;
        let usd = |coin: &str| -> String {
            prices
                .get(coin)
                .and_then(|c| c.get("usd"))
                .map(|p| p.to_string())
                .unwrap_or_else(|| "Unknown".to_string())
        };
        Some(format!(
            "CRYPTOCURRENCY PRICES:\nBitcoin: ${}\nEthereum: ${}",
            usd("bitcoin"),
            usd("ethereum")
        ))
    }

    fn conclusion(context: &Context) -> Option<String> {
        let recommendation = context
            .get("launch_suitability")?
            .get("recommendation")?
            .as_str()?;
        let line = match recommendation {
            "UNFAVORABLE" => "CONCLUSION: Launch may face delays due to weather conditions.",
            "CAUTION" => "CONCLUSION: Launch conditions require monitoring.",
            _ => "CONCLUSION: Conditions appear favorable for launch.",
        };
        Some(line.to_string())
    }

    /// Compose the digest from whatever the context holds.
    fn create_summary(context: &Context) -> String {
        let sections: Vec<String> = [
            Self::launch_section(context),
            Self::weather_section(context),
            Self::news_section(context),
            Self::market_section(context),
            Self::conclusion(context),
        ]
        .into_iter()
        .flatten()
        .collect();

        if sections.is_empty() {
            "No data available for summary.".to_string()
        } else {
            sections.join("\n\n")
        }
    }
}

impl TaskHandler for SummarizeAgent {
    fn name(&self) -> &str {
        idents::SUMMARIZE
    }

    fn execute(&self, context: &Context) -> ResultRecord {
        let summary = Self::create_summary(context);
        let mut payload = Map::new();
        payload.insert("summary".to_string(), Value::String(summary));
        tracing::info!("summary composed");
        ResultRecord::ok(
            idents::SUMMARIZE,
            payload,
            "Successfully created comprehensive summary",
        )
    }
}
