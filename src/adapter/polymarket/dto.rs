//! Gamma API response types.

use serde::Deserialize;
use tracing::debug;

/// Market record returned by `GET /markets/slug/{slug}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GammaMarket {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub closed: bool,
    /// JSON-encoded outcome names (e.g., `["Up", "Down"]`).
    #[serde(default)]
    pub outcomes: Option<String>,
    /// JSON-encoded CLOB token IDs, in outcome order.
    #[serde(default)]
    pub clob_token_ids: Option<String>,
}

impl GammaMarket {
    /// Parse the JSON-encoded CLOB token IDs.
    pub fn token_ids(&self) -> Vec<String> {
        self.clob_token_ids
            .as_deref()
            .and_then(|s| {
                serde_json::from_str::<Vec<String>>(s)
                    .map_err(|e| {
                        debug!(
                            error = %e,
                            raw = %s,
                            slug = %self.slug,
                            "Failed to parse clob_token_ids"
                        );
                    })
                    .ok()
            })
            .unwrap_or_default()
    }

    /// Parse the JSON-encoded outcome names.
    pub fn outcome_names(&self) -> Vec<String> {
        self.outcomes
            .as_deref()
            .and_then(|s| serde_json::from_str::<Vec<String>>(s).ok())
            .unwrap_or_default()
    }
}
