//! Yahoo Finance chart API response types.

use serde::Deserialize;

/// Response of `GET /v8/finance/chart/{ticker}`.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    #[serde(default)]
    pub regular_market_price: Option<f64>,
    #[serde(default)]
    pub previous_close: Option<f64>,
    #[serde(default)]
    pub chart_previous_close: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ChartMeta {
    /// Percent change of the last price against the previous close.
    ///
    /// `None` when either price is missing or the close is not positive.
    #[must_use]
    pub fn change_percent(&self) -> Option<f64> {
        let price = self.regular_market_price?;
        let close = self.previous_close.or(self.chart_previous_close)?;
        if close <= 0.0 {
            return None;
        }
        Some((price / close - 1.0) * 100.0)
    }
}
