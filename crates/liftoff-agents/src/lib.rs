//! # liftoff-agents
//!
//! The data-fetching task handlers ("agents") consumed by the Liftoff
//! engine. Each implements the [`liftoff_core::TaskHandler`] contract:
//! read the shared context, do one step, return a
//! [`liftoff_core::ResultRecord`]. Internal failures (network, missing
//! credential, malformed response) become explicit failure records —
//! errors never cross the handler boundary.
//!
//! ## Handlers
//!
//! - [`LaunchAgent`] — next launch from the SpaceX v4 API
//! - [`WeatherAgent`] — conditions + launch-suitability grade
//!   (OpenWeatherMap; deterministic mock data without an API key)
//! - [`NewsAgent`] — related articles (NewsAPI; mock data without a key)
//! - [`MarketAgent`] — crypto spot prices from CoinGecko
//! - [`SummarizeAgent`] — pure terminal digest over the context

pub mod error;
pub mod launch;
pub mod market;
pub mod news;
pub mod summarize;
pub mod weather;

pub use error::AgentError;
pub use launch::LaunchAgent;
pub use market::MarketAgent;
pub use news::NewsAgent;
pub use summarize::SummarizeAgent;
pub use weather::WeatherAgent;

use liftoff_core::HandlerRegistry;

/// Wire the full handler set under the identifiers the planner emits.
///
/// API keys are read from the environment (`OPENWEATHER_API_KEY`,
/// `NEWS_API_KEY`); agents without a key fall back to mock data where the
/// upstream requires one.
pub fn default_registry() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    registry.register(Box::new(LaunchAgent::new()));
    registry.register(Box::new(WeatherAgent::from_env()));
    registry.register(Box::new(NewsAgent::from_env()));
    registry.register(Box::new(MarketAgent::new()));
    registry.register(Box::new(SummarizeAgent::new()));
    registry
}
