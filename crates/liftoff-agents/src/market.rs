// market.rs — MarketAgent: crypto spot prices from CoinGecko.
//
// The only collaborator that needs no credential: CoinGecko's simple
// price endpoint is public. Fetches bitcoin and ethereum in USD with the
// 24h change.

use serde_json::{Map, Value};

use liftoff_core::{idents, Context, ResultRecord, TaskHandler};

use crate::error::AgentError;

const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Task handler for the market domain.
pub struct MarketAgent {
    client: reqwest::blocking::Client,
    api_url: String,
}

impl Default for MarketAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketAgent {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_url: COINGECKO_API_URL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    fn fetch(&self) -> Result<Value, AgentError> {
        let prices: Value = self
            .client
            .get(format!("{}/simple/price", self.api_url))
            .query(&[
                ("ids", "bitcoin,ethereum"),
                ("vs_currencies", "usd"),
                ("include_24hr_change", "true"),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        if !prices.is_object() {
            return Err(AgentError::Malformed("expected a price object".to_string()));
        }
        Ok(prices)
    }
}

impl TaskHandler for MarketAgent {
    fn name(&self) -> &str {
        idents::MARKET
    }

    fn execute(&self, _context: &Context) -> ResultRecord {
        match self.fetch() {
            Ok(prices) => {
                let mut payload = Map::new();
                payload.insert("crypto_prices".to_string(), prices);
                tracing::info!("retrieved crypto prices");
                ResultRecord::ok(
                    idents::MARKET,
                    payload,
                    "Retrieved current cryptocurrency prices",
                )
                .with_suggested_next(idents::SUMMARIZE)
            }
            Err(err) => {
                tracing::warn!(error = %err, "price lookup failed");
                ResultRecord::failure(idents::MARKET, format!("Failed to fetch crypto data: {err}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_name_matches_registry_identifier() {
        assert_eq!(MarketAgent::new().name(), "market");
    }
}
